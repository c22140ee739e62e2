//! Eco-label detection
//!
//! By default the whole raw markup is scanned, so labels that only appear in
//! scripts, attributes or structured data are reported too.

use scraper::node::Node;
use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::signals::KNOWN_ECO_LABELS;

/// Which part of the page is searched for label names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelScope {
    /// The entire raw document, markup included
    #[default]
    RawDocument,
    /// Text nodes outside `script`, `style`, `noscript` and `template`
    VisibleText,
}

/// Known labels found in `html`, in table order
pub fn detect_eco_labels(html: &str, scope: LabelScope) -> Vec<String> {
    let haystack = match scope {
        LabelScope::RawDocument => html.to_lowercase(),
        LabelScope::VisibleText => visible_text(&Html::parse_document(html)).to_lowercase(),
    };

    KNOWN_ECO_LABELS
        .iter()
        .filter(|label| haystack.contains(&label.to_lowercase()))
        .map(|label| label.to_string())
        .collect()
}

fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.nodes() {
        let Node::Text(chunk) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map(|el| matches!(el.name(), "script" | "style" | "noscript" | "template"))
            .unwrap_or(false);
        if !hidden {
            text.push_str(chunk);
            text.push(' ');
        }
    }

    text
}

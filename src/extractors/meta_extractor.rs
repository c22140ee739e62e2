//! `<meta>` tag lookups
//!
//! OpenGraph tags carry their key in `property`, Twitter Card and generic
//! tags in `name`.

use scraper::{Html, Selector};

/// Which attribute names the meta tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey<'a> {
    Property(&'a str),
    Name(&'a str),
}

impl MetaKey<'_> {
    fn selector(&self) -> String {
        match self {
            MetaKey::Property(key) => format!(r#"meta[property="{}"]"#, key),
            MetaKey::Name(key) => format!(r#"meta[name="{}"]"#, key),
        }
    }
}

/// `content` of the first meta tag with the given key
///
/// Only the first matching tag is consulted. Blank content counts as absent.
pub fn meta_content(document: &Html, key: MetaKey<'_>) -> Option<String> {
    let selector = Selector::parse(&key.selector()).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(String::from)
}

/// `og:<key>` content
pub fn opengraph(document: &Html, key: &str) -> Option<String> {
    meta_content(document, MetaKey::Property(&format!("og:{}", key)))
}

//! CSS selector-based extraction
//!
//! Uses the scraper crate to look up the first element matching a selector.

use scraper::{Html, Selector};

/// Extract first matching element's text, whitespace-trimmed
pub fn first_text(document: &Html, selector_str: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;

    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Extract first matching element's attribute
pub fn first_attr(document: &Html, selector_str: &str, attr_name: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr_name))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

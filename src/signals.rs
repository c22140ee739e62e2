//! Sustainability signal tables
//!
//! Hand-curated keyword and eco-label lists. The label names are matched as
//! plain text and are not verified against any certifying authority.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Keyword -> points, in match order
pub static KEYWORD_POINTS: &[(&str, u32)] = &[
    ("organic", 15),
    ("recycled", 15),
    ("biodegradable", 15),
    ("compostable", 15),
    ("carbon neutral", 15),
    ("sustainable", 10),
    ("eco-friendly", 10),
    ("plant-based", 10),
    ("renewable", 10),
    ("recyclable", 10),
    ("reusable", 10),
    ("fair trade", 10),
    ("plastic-free", 10),
    ("zero waste", 10),
    ("energy efficient", 10),
    ("bamboo", 5),
    ("non-toxic", 5),
    ("natural", 5),
    ("vegan", 5),
    ("green", 5),
];

/// Eco-label -> points, in match order
pub static ECO_LABEL_WEIGHTS: &[(&str, u32)] = &[
    ("USDA Organic", 20),
    ("Cradle to Cradle", 20),
    ("Fair Trade Certified", 15),
    ("Energy Star", 15),
    ("FSC Certified", 15),
    ("Rainforest Alliance", 15),
    ("EU Ecolabel", 15),
    ("Green Seal", 15),
    ("Global Organic Textile Standard", 15),
    ("Climate Neutral Certified", 15),
    ("B Corp", 10),
    ("Leaping Bunny", 10),
    ("OEKO-TEX", 10),
    ("bluesign", 10),
];

/// Labels the extractor looks for, in table order
pub static KNOWN_ECO_LABELS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| ECO_LABEL_WEIGHTS.iter().map(|(label, _)| *label).collect());

static LABEL_LOOKUP: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| ECO_LABEL_WEIGHTS.iter().copied().collect());

/// Points for an exact label name, if it is in the weight table
pub fn label_weight(label: &str) -> Option<u32> {
    LABEL_LOOKUP.get(label).copied()
}

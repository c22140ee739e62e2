//! Sustainability scoring
//!
//! Scores a product from the keywords found in its name and description and
//! from the eco-labels detected on its page. Matching is presence-only: each
//! table entry contributes its points at most once, and the total is capped
//! at [`MAX_SCORE`].

use std::collections::HashSet;

use serde::Serialize;

use crate::signals::{label_weight, KEYWORD_POINTS};

/// Upper bound of the sustainability score
pub const MAX_SCORE: u32 = 100;

/// A keyword found in the product text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub points: u32,
}

/// A recognized eco-label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelHit {
    pub label: String,
    pub points: u32,
}

/// Which signals contributed to the score
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "keywords")]
    pub keyword_hits: Vec<KeywordHit>,
    #[serde(rename = "ecoLabels")]
    pub label_hits: Vec<LabelHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Capped score in `0..=MAX_SCORE`
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    /// Sum of all hit points before capping
    pub fn total_points(&self) -> u32 {
        let keywords: u32 = self.breakdown.keyword_hits.iter().map(|h| h.points).sum();
        let labels: u32 = self.breakdown.label_hits.iter().map(|h| h.points).sum();
        keywords + labels
    }
}

/// Score a product's name, description and detected eco-labels
pub fn score<S: AsRef<str>>(name: &str, description: &str, eco_labels: &[S]) -> ScoreResult {
    let text = format!("{} {}", name, description).to_lowercase();
    let mut breakdown = ScoreBreakdown::default();

    for (keyword, points) in KEYWORD_POINTS {
        if text.contains(&keyword.to_lowercase()) {
            breakdown.keyword_hits.push(KeywordHit {
                keyword: keyword.to_string(),
                points: *points,
            });
        }
    }

    let mut seen = HashSet::new();
    for label in eco_labels {
        let label = label.as_ref();
        let Some(points) = label_weight(label) else {
            continue;
        };
        if seen.insert(label) {
            breakdown.label_hits.push(LabelHit {
                label: label.to_string(),
                points,
            });
        }
    }

    let mut result = ScoreResult {
        score: 0,
        breakdown,
    };
    result.score = result.total_points().min(MAX_SCORE);
    result
}

//! Request/response layer
//!
//! Validates the incoming `{ "url": ... }` body, fetches the page, and runs
//! extraction and scoring. Any fetch failure short-circuits to a uniform
//! failure envelope; the extractor never sees partial or absent HTML.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ServiceError;
use crate::extractors::{extract_with, ExtractOptions, ProductRecord};
use crate::fetch::PageFetcher;
use crate::scorer::{score, ScoreBreakdown, ScoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Success body: product summary plus score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReport {
    pub product_name: String,
    pub product_image: Option<String>,
    pub product_description: String,
    pub eco_labels: Vec<String>,
    pub sustainability_score: u32,
    pub score_breakdown: ScoreBreakdown,
}

impl ProductReport {
    pub fn new(record: ProductRecord, result: ScoreResult) -> Self {
        Self {
            product_name: record.name,
            product_image: record.image,
            product_description: record.description,
            eco_labels: record.eco_labels,
            sustainability_score: result.score,
            score_breakdown: result.breakdown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Product(ProductReport),
    Failure { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl From<ServiceError> for ServiceResponse {
    fn from(err: ServiceError) -> Self {
        Self {
            status: err.status(),
            body: ResponseBody::Failure {
                error: err.public_message().to_string(),
            },
        }
    }
}

/// Extract and score already-fetched HTML
pub fn analyze_html(html: &str, source_url: &str, options: &ExtractOptions) -> ProductReport {
    let record = extract_with(html, source_url, options);
    let result = score(&record.name, &record.description, &record.eco_labels);
    ProductReport::new(record, result)
}

pub struct ProductAnalyzer<F> {
    fetcher: F,
    options: ExtractOptions,
}

impl<F: PageFetcher> ProductAnalyzer<F> {
    pub fn new(fetcher: F, options: ExtractOptions) -> Self {
        Self { fetcher, options }
    }

    /// Fetch `url` and build its report
    pub fn analyze(&self, url: &str) -> Result<ProductReport, ServiceError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ServiceError::MissingUrl);
        }

        info!(url, "analyzing product page");
        let html = self.fetcher.fetch(url).map_err(|err| {
            error!(%err, "scraping error");
            ServiceError::from(err)
        })?;

        let report = analyze_html(&html, url, &self.options);
        info!(
            url,
            score = report.sustainability_score,
            labels = report.eco_labels.len(),
            "product analyzed"
        );
        Ok(report)
    }

    /// Answer a raw JSON request body
    pub fn handle(&self, body: &str) -> ServiceResponse {
        let outcome = serde_json::from_str::<ScrapeRequest>(body)
            .map_err(ServiceError::from)
            .and_then(|request| {
                let url = request.url.ok_or(ServiceError::MissingUrl)?;
                self.analyze(&url)
            });

        match outcome {
            Ok(report) => ServiceResponse {
                status: 200,
                body: ResponseBody::Product(report),
            },
            Err(err) => err.into(),
        }
    }
}

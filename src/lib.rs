//! Product sustainability scanner
//!
//! Turns a product page into a summary plus a bounded sustainability score:
//! - Extraction of name, image, description and eco-labels from raw HTML
//! - Keyword and eco-label scoring, capped at 100
//! - A blocking page fetcher and a JSON request/response layer around both

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod scorer;
pub mod service;
pub mod signals;

pub use config::{Config, FetchConfig};
pub use error::{ConfigError, FetchError, InputError, ServiceError};
pub use extractors::{extract, extract_with, ExtractOptions, ImageFallback, LabelScope, ProductRecord};
pub use fetch::{HttpFetcher, PageFetcher};
pub use scorer::{score, ScoreBreakdown, ScoreResult, MAX_SCORE};
pub use service::{analyze_html, ProductAnalyzer, ProductReport, ServiceResponse};

//! Error types

use thiserror::Error;

/// Raised when the source URL cannot be used to resolve a relative image path
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid source url `{url}`: {source}")]
    InvalidSourceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("source url `{url}` has no host to resolve against")]
    OpaqueOrigin { url: String },
}

/// Page fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },
    #[error("failed to read {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },
}

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of the request/response layer wrapping the extractor and scorer
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No URL provided")]
    MissingUrl,
    #[error("invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ServiceError {
    /// HTTP status the surrounding layer answers with
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::MissingUrl => 404,
            ServiceError::InvalidRequest(_) => 400,
            ServiceError::Fetch(_) => 500,
        }
    }

    /// Message placed in the failure envelope
    pub fn public_message(&self) -> &'static str {
        match self {
            ServiceError::MissingUrl => "No URL provided",
            ServiceError::InvalidRequest(_) => "Invalid request body",
            ServiceError::Fetch(_) => "Failed to fetch product data.",
        }
    }
}

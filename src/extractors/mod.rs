//! Product extraction
//!
//! Each record field is resolved from an ordered list of candidate sources;
//! the first source yielding a non-blank value wins and later sources are
//! never consulted. Missing data resolves to sentinels, never to an error.

mod css_extractor;
mod image_resolver;
mod label_extractor;
mod meta_extractor;

pub use css_extractor::*;
pub use image_resolver::*;
pub use label_extractor::*;
pub use meta_extractor::*;

use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
pub const NO_DESCRIPTION: &str = "No Description Available";

/// Amazon product image container
const PRIMARY_IMAGE: &str = "#imgTagWrapperId img";

/// Normalized product data scraped from one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub eco_labels: Vec<String>,
}

/// What `image` holds when the page has no usable image
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFallback {
    #[default]
    Absent,
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub image_fallback: ImageFallback,
    pub label_scope: LabelScope,
}

/// A named source for one field
pub type Candidate<I, T> = (&'static str, fn(&I) -> Option<T>);

/// Value of the first candidate that yields one
pub fn first_present<I, T>(field: &str, input: &I, candidates: &[Candidate<I, T>]) -> Option<T> {
    candidates.iter().find_map(|(source, get)| {
        let value = get(input)?;
        debug!(field, source, "resolved field");
        Some(value)
    })
}

const NAME_SOURCES: &[Candidate<Html, String>] = &[
    ("og:title", |doc| opengraph(doc, "title")),
    ("meta title", |doc| meta_content(doc, MetaKey::Name("title"))),
    ("h1", |doc| first_text(doc, "h1")),
];

const IMAGE_SOURCES: &[Candidate<Html, String>] = &[
    ("og:image", |doc| opengraph(doc, "image")),
    ("twitter:image", |doc| meta_content(doc, MetaKey::Name("twitter:image"))),
    ("hi-res product image", |doc| first_attr(doc, PRIMARY_IMAGE, "data-old-hires")),
    ("product image", |doc| first_attr(doc, PRIMARY_IMAGE, "src")),
    ("first img", |doc| first_attr(doc, "img", "src")),
];

const LAZY_IMAGE_SOURCES: &[Candidate<Html, String>] = &[
    ("lazy product image", |doc| first_attr(doc, PRIMARY_IMAGE, "data-src")),
    ("product image", |doc| first_attr(doc, PRIMARY_IMAGE, "src")),
];

const DESCRIPTION_SOURCES: &[Candidate<Html, String>] = &[
    ("og:description", |doc| opengraph(doc, "description")),
    ("meta description", |doc| meta_content(doc, MetaKey::Name("description"))),
];

/// Extract a product record with default options
pub fn extract(html: &str, source_url: &str) -> ProductRecord {
    extract_with(html, source_url, &ExtractOptions::default())
}

/// Extract a product record from raw page HTML
///
/// Total over any input: absent fields fall back to [`UNKNOWN_PRODUCT`],
/// [`NO_DESCRIPTION`], the configured [`ImageFallback`] and an empty label list.
pub fn extract_with(html: &str, source_url: &str, options: &ExtractOptions) -> ProductRecord {
    let document = Html::parse_document(html);

    let name = first_present("name", &document, NAME_SOURCES)
        .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());

    let description = first_present("description", &document, DESCRIPTION_SOURCES)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let image = extract_image(&document, source_url).or_else(|| match &options.image_fallback {
        ImageFallback::Absent => None,
        ImageFallback::Placeholder(url) => Some(url.clone()),
    });

    let eco_labels = detect_eco_labels(html, options.label_scope);

    ProductRecord {
        name,
        image,
        description,
        eco_labels,
    }
}

fn extract_image(document: &Html, source_url: &str) -> Option<String> {
    let image = first_present("image", document, IMAGE_SOURCES).or_else(|| {
        debug!("no product image found");
        first_present("image", document, LAZY_IMAGE_SOURCES)
    })?;

    match resolve_image_url(&image, source_url) {
        Ok(resolved) => Some(resolved),
        Err(err) => {
            warn!(%err, image, "leaving image path unresolved");
            Some(image)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_sentinels() {
        let record = extract("", "https://example.com");

        assert_eq!(
            record,
            ProductRecord {
                name: UNKNOWN_PRODUCT.to_string(),
                image: None,
                description: NO_DESCRIPTION.to_string(),
                eco_labels: vec![],
            }
        );
    }

    #[test]
    fn test_opengraph_preferred() {
        let html = r#"
        <html>
        <head>
            <meta property="og:title" content="Bamboo Toothbrush 4-Pack">
            <meta name="title" content="Generic title">
            <meta property="og:description" content="Biodegradable handles">
            <meta name="description" content="Generic description">
            <meta property="og:image" content="https://cdn.example/brush.jpg">
            <meta name="twitter:image" content="https://cdn.example/card.jpg">
        </head>
        <body><h1>Heading</h1><img src="/first.jpg"></body>
        </html>
        "#;

        let record = extract(html, "https://shop.example/p/1");

        assert_eq!(record.name, "Bamboo Toothbrush 4-Pack");
        assert_eq!(record.description, "Biodegradable handles");
        assert_eq!(record.image.as_deref(), Some("https://cdn.example/brush.jpg"));
    }

    #[test]
    fn test_generic_fallbacks() {
        let html = r#"
        <html>
        <head>
            <meta property="og:title" content="   ">
            <meta name="title" content="Generic title">
            <meta name="description" content="Generic description">
            <meta name="twitter:image" content="https://cdn.example/card.jpg">
        </head>
        </html>
        "#;

        let record = extract(html, "https://shop.example/p/1");

        assert_eq!(record.name, "Generic title");
        assert_eq!(record.description, "Generic description");
        assert_eq!(record.image.as_deref(), Some("https://cdn.example/card.jpg"));
    }

    #[test]
    fn test_heading_fallback_is_trimmed() {
        let html = "<body><h1>\n   Reusable Bottle  \n</h1></body>";

        let record = extract(html, "https://shop.example/p/1");

        assert_eq!(record.name, "Reusable Bottle");
    }

    #[test]
    fn test_relative_image_resolution() {
        let html = r#"<meta property="og:image" content="/img/p.jpg">"#;

        let record = extract(html, "https://shop.example/p/1");

        assert_eq!(record.image.as_deref(), Some("https://shop.example/img/p.jpg"));
    }

    #[test]
    fn test_relative_image_with_bad_source_url() {
        let html = r#"<meta property="og:image" content="/img/p.jpg">"#;

        let record = extract(html, "::not a url::");

        assert_eq!(record.image.as_deref(), Some("/img/p.jpg"));
    }

    #[test]
    fn test_product_image_chain() {
        let html = r#"
        <body>
            <img src="/logo.png">
            <div id="imgTagWrapperId">
                <img src="/small.jpg" data-old-hires="https://m.media.example/large.jpg">
            </div>
        </body>
        "#;
        let record = extract(html, "https://www.amazon.example/dp/B000");
        assert_eq!(
            record.image.as_deref(),
            Some("https://m.media.example/large.jpg")
        );

        let html = r#"
        <body>
            <img src="/logo.png">
            <div id="imgTagWrapperId"><img src="/small.jpg"></div>
        </body>
        "#;
        let record = extract(html, "https://www.amazon.example/dp/B000");
        assert_eq!(
            record.image.as_deref(),
            Some("https://www.amazon.example/small.jpg")
        );
    }

    #[test]
    fn test_lazy_image_fallback() {
        let html = r#"
        <div id="imgTagWrapperId">
            <img data-src="//m.media.example/lazy.jpg">
        </div>
        "#;

        let record = extract(html, "https://www.amazon.example/dp/B000");

        assert_eq!(record.image.as_deref(), Some("//m.media.example/lazy.jpg"));
    }

    #[test]
    fn test_placeholder_image_fallback() {
        let options = ExtractOptions {
            image_fallback: ImageFallback::Placeholder(
                "https://via.placeholder.example/150".to_string(),
            ),
            ..ExtractOptions::default()
        };

        let record = extract_with("<p>nothing</p>", "https://shop.example", &options);

        assert_eq!(
            record.image.as_deref(),
            Some("https://via.placeholder.example/150")
        );
    }

    #[test]
    fn test_labels_detected_in_script() {
        let html = r#"
        <html>
        <head><title>Shirt</title></head>
        <body>
            <p>Soft cotton shirt.</p>
            <script>var badges = ["OEKO-TEX", "Global Organic Textile Standard"];</script>
        </body>
        </html>
        "#;

        let record = extract(html, "https://shop.example/shirt");
        assert_eq!(
            record.eco_labels,
            vec!["Global Organic Textile Standard", "OEKO-TEX"]
        );

        let strict = ExtractOptions {
            label_scope: LabelScope::VisibleText,
            ..ExtractOptions::default()
        };
        let record = extract_with(html, "https://shop.example/shirt", &strict);
        assert!(record.eco_labels.is_empty());
    }

    #[test]
    fn test_malformed_fragment_is_total() {
        let record = extract("<div><meta property=og:title content=", "https://shop.example");

        assert_eq!(record.description, NO_DESCRIPTION);
        assert_eq!(record.image, None);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let html = r#"<meta property="og:title" content="Cork Yoga Mat"><h1>x</h1>"#;

        assert_eq!(
            extract(html, "https://shop.example/mat"),
            extract(html, "https://shop.example/mat")
        );
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = extract("", "https://example.com");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], UNKNOWN_PRODUCT);
        assert!(json["image"].is_null());
        assert_eq!(json["ecoLabels"], serde_json::json!([]));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ExtractOptions = serde_json::from_str(
            r#"{"image_fallback": {"placeholder": "https://img.example/none.png"}}"#,
        )
        .unwrap();

        assert_eq!(
            options.image_fallback,
            ImageFallback::Placeholder("https://img.example/none.png".to_string())
        );
        assert_eq!(options.label_scope, LabelScope::RawDocument);
    }
}

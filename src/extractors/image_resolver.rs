//! Image URL resolution against the page the image was found on

use url::Url;

use crate::error::InputError;

/// Rewrite a path-absolute image (`/img/p.jpg`) to `<origin>/img/p.jpg`
///
/// Protocol-relative, absolute and data URLs are returned unchanged, as are
/// relative paths without a leading slash.
pub fn resolve_image_url(image: &str, source_url: &str) -> Result<String, InputError> {
    if !image.starts_with('/') || image.starts_with("//") {
        return Ok(image.to_string());
    }

    let base = Url::parse(source_url).map_err(|source| InputError::InvalidSourceUrl {
        url: source_url.to_string(),
        source,
    })?;

    let origin = base.origin();
    if !origin.is_tuple() {
        return Err(InputError::OpaqueOrigin {
            url: source_url.to_string(),
        });
    }

    Ok(format!("{}{}", origin.ascii_serialization(), image))
}

//! Download metadata derived from a target URL.
//!
//! Filename hints (query parameters, signed-URL Content-Disposition, path)
//! and a content-type guess for responses that carry none.

mod content_disposition;
mod sanitize;

use url::Url;

pub use content_disposition::parse_content_disposition_filename;
pub use sanitize::sanitize_filename;

/// Filename used when nothing in the URL yields a usable one.
const DEFAULT_FILENAME: &str = "download.bin";

/// Best filename hint carried by `url`.
///
/// Order: the `filename` query parameter, then the filename inside a
/// `response-content-disposition` parameter, then the last non-empty path
/// segment (percent-decoded).
pub fn download_filename(url: &Url) -> Option<String> {
    let mut from_disposition = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "filename" if !value.is_empty() => return Some(value.into_owned()),
            "response-content-disposition" if from_disposition.is_none() => {
                from_disposition = parse_content_disposition_filename(&value);
            }
            _ => {}
        }
    }

    from_disposition.or_else(|| {
        url.path_segments()?
            .filter(|s| !s.is_empty())
            .last()
            .map(content_disposition::percent_decode)
    })
}

/// [`download_filename`], sanitized, with a fixed fallback.
pub fn safe_filename(url: &Url) -> String {
    let name = download_filename(url)
        .map(|n| sanitize_filename(&n))
        .unwrap_or_default();
    if name.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        name
    }
}

/// Content type to advertise for `file_name` when upstream sent none.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("zip") => "application/zip",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

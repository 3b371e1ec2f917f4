//! Proxy link construction.
//!
//! Turns a user-entered target URL into the pair of links the proxy route
//! serves: a root-relative download path (`/<target>`) and an absolute
//! display URL on the caller's origin. The target is embedded verbatim,
//! not percent-encoded; the proxy side recovers it with
//! [`crate::proxy_path::target_from_path`].

use std::borrow::Cow;
use thiserror::Error;
use url::Url;

/// Scheme prefixes that lost one slash, paired with their repaired form.
const SCHEME_REPAIRS: [(&str, &str); 2] = [("http:/", "http://"), ("https:/", "https://")];

/// Why a raw input could not be turned into a [`ProxyLink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input was blank after trimming.
    #[error("no URL entered")]
    Empty,
    /// Input (after scheme repair) is not an absolute URL.
    #[error("not a valid URL, include http:// or https:// ({input}: {source})")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// Links generated for one target URL. Built only by [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyLink {
    target: Url,
    display_url: String,
    download_path: String,
    suggested_file_name: String,
}

impl ProxyLink {
    /// Absolute URL on the caller's origin, suitable for copying.
    pub fn display_url(&self) -> &str {
        &self.display_url
    }

    /// Root-relative path (`/` + repaired target) for direct navigation.
    pub fn download_path(&self) -> &str {
        &self.download_path
    }

    /// Last segment of the target's path; empty when the path ends in `/`
    /// or has no `/` at all (`mailto:a@b`).
    pub fn suggested_file_name(&self) -> &str {
        &self.suggested_file_name
    }

    /// Parsed target URL.
    pub fn target(&self) -> &Url {
        &self.target
    }
}

/// Repairs `http:/host` and `https:/host` into `http://host` / `https://host`.
///
/// Inputs that already carry `//` (or any other scheme) are returned borrowed
/// and unchanged.
pub fn repair_scheme_prefix(input: &str) -> Cow<'_, str> {
    for (broken, fixed) in SCHEME_REPAIRS {
        if input.starts_with(broken) && !input.starts_with(fixed) {
            return Cow::Owned(format!("{fixed}{}", &input[broken.len()..]));
        }
    }
    Cow::Borrowed(input)
}

/// Builds the proxy links for `raw` on `origin` (scheme + host of the page,
/// e.g. `https://proxy.example`).
///
/// A trailing `/` on `origin` is ignored so that `display_url` never carries
/// a doubled slash before the embedded target.
///
/// # Examples
///
/// - `build("https://example.com/path/file.zip", "https://host")` gives
///   `download_path = "/https://example.com/path/file.zip"` and
///   `display_url = "https://host/https://example.com/path/file.zip"`.
pub fn build(raw: &str, origin: &str) -> Result<ProxyLink, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let repaired = repair_scheme_prefix(trimmed);
    if let Cow::Owned(fixed) = &repaired {
        tracing::debug!("repaired scheme prefix: {} -> {}", trimmed, fixed);
    }

    let target = Url::parse(&repaired).map_err(|source| {
        tracing::warn!("rejected link input {:?}: {}", trimmed, source);
        InputError::InvalidUrl {
            input: repaired.to_string(),
            source,
        }
    })?;

    let suggested_file_name = last_path_segment(target.path()).to_string();
    let download_path = format!("/{repaired}");
    let display_url = format!("{}{}", origin.trim_end_matches('/'), download_path);

    tracing::debug!("built proxy link {}", display_url);

    Ok(ProxyLink {
        target,
        display_url,
        download_path,
        suggested_file_name,
    })
}

fn last_path_segment(path: &str) -> &str {
    path.rfind('/').map(|i| &path[i + 1..]).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://host";

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(build("", ORIGIN), Err(InputError::Empty));
        assert_eq!(build("   ", ORIGIN), Err(InputError::Empty));
        assert_eq!(build("\t\n", ORIGIN), Err(InputError::Empty));
    }

    #[test]
    fn missing_scheme_is_invalid() {
        match build("example.com", ORIGIN) {
            Err(InputError::InvalidUrl { input, .. }) => assert_eq!(input, "example.com"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn single_slash_prefix_is_repaired() {
        let link = build("http:/example.com/a.txt", ORIGIN).unwrap();
        assert_eq!(link.download_path(), "/http://example.com/a.txt");
        assert_eq!(link.suggested_file_name(), "a.txt");
        assert_eq!(link.target().host_str(), Some("example.com"));

        let link = build("https:/example.com/b.iso", ORIGIN).unwrap();
        assert_eq!(link.download_path(), "/https://example.com/b.iso");
    }

    #[test]
    fn full_link_fields() {
        let link = build("https://example.com/path/file.zip", ORIGIN).unwrap();
        assert_eq!(link.download_path(), "/https://example.com/path/file.zip");
        assert_eq!(
            link.display_url(),
            "https://host/https://example.com/path/file.zip"
        );
        assert_eq!(link.suggested_file_name(), "file.zip");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let link = build("  https://example.com/x.bin \n", ORIGIN).unwrap();
        assert_eq!(link.download_path(), "/https://example.com/x.bin");
    }

    #[test]
    fn trailing_slash_has_no_file_name() {
        let link = build("https://example.com/", ORIGIN).unwrap();
        assert_eq!(link.suggested_file_name(), "");
        let link = build("https://example.com/dir/", ORIGIN).unwrap();
        assert_eq!(link.suggested_file_name(), "");
    }

    #[test]
    fn path_without_slash_has_no_file_name() {
        let link = build("mailto:a@b", ORIGIN).unwrap();
        assert_eq!(link.download_path(), "/mailto:a@b");
        assert_eq!(link.display_url(), "https://host/mailto:a@b");
        assert_eq!(link.suggested_file_name(), "");
    }

    #[test]
    fn query_is_kept_in_path_but_not_in_file_name() {
        let link = build("https://example.com/f.tar.gz?token=abc", ORIGIN).unwrap();
        assert_eq!(link.download_path(), "/https://example.com/f.tar.gz?token=abc");
        assert_eq!(link.suggested_file_name(), "f.tar.gz");
    }

    #[test]
    fn origin_trailing_slash_is_not_doubled() {
        let link = build("https://example.com/a", "https://host/").unwrap();
        assert_eq!(link.display_url(), "https://host/https://example.com/a");
    }

    #[test]
    fn repair_is_idempotent() {
        assert!(matches!(
            repair_scheme_prefix("http://example.com/"),
            Cow::Borrowed("http://example.com/")
        ));
        assert!(matches!(
            repair_scheme_prefix("https://example.com/"),
            Cow::Borrowed("https://example.com/")
        ));
        let once = repair_scheme_prefix("http:/example.com").into_owned();
        assert_eq!(repair_scheme_prefix(&once), once);
    }

    #[test]
    fn other_schemes_untouched() {
        assert_eq!(repair_scheme_prefix("ftp:/x"), "ftp:/x");
        assert_eq!(repair_scheme_prefix("httpx:/y"), "httpx:/y");
    }
}

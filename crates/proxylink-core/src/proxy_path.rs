//! Recovering the target URL from a proxy request path.
//!
//! The proxy route is `/<target-url>`, with the target embedded verbatim.
//! Intermediaries tend to collapse `//` to `/`, so the scheme separator is
//! accepted with zero, one or two slashes and normalised back to `://`.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Url;

/// Default upper bound on the request path length, in bytes.
pub const DEFAULT_MAX_PATH_LEN: usize = 8 * 1024;

static PROXY_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^/(https?):/?/?([-a-zA-Z0-9@:%._\+~#=]{1,256}(?:\.[-a-zA-Z0-9()]{1,6})+(?:[-a-zA-Z0-9()@:%_\+.~#?&/=]*))$",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyPathError {
    #[error("path too long ({len} bytes, max {max})")]
    TooLong { len: usize, max: usize },
    #[error("cannot extract a target URL from path: {0}")]
    NotAProxyPath(String),
    #[error("invalid target URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// True when `path` looks like a proxied download (`/http:/…` or `/https:/…`).
pub fn is_proxy_path(path: &str) -> bool {
    path.starts_with("/http:/") || path.starts_with("/https:/")
}

/// Extracts the target URL embedded in `path`, re-attaching `query` when
/// the request carried one.
pub fn target_from_path(
    path: &str,
    query: Option<&str>,
    max_len: usize,
) -> Result<Url, ProxyPathError> {
    if path.len() > max_len {
        return Err(ProxyPathError::TooLong {
            len: path.len(),
            max: max_len,
        });
    }

    let caps = PROXY_PATH_RE
        .captures(path)
        .ok_or_else(|| ProxyPathError::NotAProxyPath(path.to_string()))?;

    let mut target = format!("{}://{}", &caps[1], &caps[2]);
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(q);
    }

    Url::parse(&target).map_err(|source| ProxyPathError::InvalidUrl {
        url: target.clone(),
        source,
    })
}

//! Download target validation.
//!
//! Checks a recovered target before it is handed to whatever fetches it:
//! http(s) only, non-empty host, and a conservative structural shape.
//! Trusted hosts skip the structural checks entirely.

mod error;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

pub use error::{ValidationError, ValidationErrorKind};

static TARGET_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_\+.~#?&/=]*)$",
    )
    .unwrap()
});

/// Hosts whose targets are always accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPolicy {
    /// Domain suffixes; `github.com` matches `github.com` and `api.github.com`.
    pub trusted_hosts: Vec<String>,
}

impl Default for TargetPolicy {
    fn default() -> Self {
        Self {
            trusted_hosts: vec!["github.com".to_string(), "githubusercontent.com".to_string()],
        }
    }
}

impl TargetPolicy {
    pub fn is_trusted(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        self.trusted_hosts.iter().any(|suffix| {
            let suffix = suffix.trim_start_matches('.').to_ascii_lowercase();
            if suffix.is_empty() {
                return false;
            }
            host == suffix
                || host
                    .strip_suffix(suffix.as_str())
                    .map_or(false, |rest| rest.ends_with('.'))
        })
    }
}

/// Returns Ok(()) if `target` may be proxied under `policy`.
pub fn validate_target(target: &Url, policy: &TargetPolicy) -> Result<(), ValidationError> {
    if let Some(host) = target.host_str() {
        if policy.is_trusted(host) {
            return Ok(());
        }
    }

    let scheme = target.scheme();
    if scheme != "http" && scheme != "https" {
        tracing::warn!("refusing target with scheme {}", scheme);
        return Err(ValidationError::new(ValidationErrorKind::UnsupportedScheme(
            scheme.to_string(),
        )));
    }

    if target.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::new(ValidationErrorKind::MissingHost));
    }

    if !TARGET_SHAPE_RE.is_match(target.as_str()) {
        tracing::warn!("refusing malformed target {}", target);
        return Err(ValidationError::new(ValidationErrorKind::Malformed(
            target.to_string(),
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(url: &str) -> Result<(), ValidationError> {
        validate_target(&Url::parse(url).unwrap(), &TargetPolicy::default())
    }

    #[test]
    fn accepts_plain_download_urls() {
        assert!(check("https://example.com/file.zip").is_ok());
        assert!(check("http://cdn.example.org/a/b/c.tar.gz?sig=1&x=2").is_ok());
        assert!(check("https://example.com").is_ok());
    }

    #[test]
    fn trusted_hosts_bypass_shape_checks() {
        assert!(check("https://github.com/o/r/releases/download/v1/x.zip").is_ok());
        assert!(check("https://objects.githubusercontent.com/a%20b").is_ok());
    }

    #[test]
    fn trusted_suffix_needs_label_boundary() {
        let policy = TargetPolicy::default();
        assert!(policy.is_trusted("github.com"));
        assert!(policy.is_trusted("API.GitHub.com"));
        assert!(!policy.is_trusted("evilgithub.com"));
    }

    #[test]
    fn blank_trusted_entries_trust_nothing() {
        let policy = TargetPolicy {
            trusted_hosts: vec![String::new(), ".".to_string()],
        };
        assert!(!policy.is_trusted("example.com."));
        assert!(!policy.is_trusted("example.com"));
        let err = validate_target(&Url::parse("http://localhost./x").unwrap(), &policy).unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::Malformed(_)));
    }

    #[test]
    fn rejects_other_schemes() {
        let err = check("ftp://example.com/file").unwrap_err();
        assert_eq!(
            err.kind,
            ValidationErrorKind::UnsupportedScheme("ftp".to_string())
        );
    }

    #[test]
    fn rejects_hosts_without_tld() {
        let err = check("http://localhost:8080/x").unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::Malformed(_)));
    }

    #[test]
    fn error_display() {
        let err = ValidationError::new(ValidationErrorKind::MissingHost);
        assert_eq!(err.to_string(), "host must not be empty");
    }
}

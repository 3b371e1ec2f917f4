//! Error types for download target validation.

use std::fmt;

/// Why a recovered target URL was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Only `http` and `https` targets are proxied.
    UnsupportedScheme(String),
    /// URL has no host component.
    MissingHost,
    /// URL does not look like `scheme://name.tld/...`.
    Malformed(String),
}

impl ValidationError {
    pub(super) fn new(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::UnsupportedScheme(scheme) => {
                write!(f, "unsupported scheme: {}", scheme)
            }
            ValidationErrorKind::MissingHost => write!(f, "host must not be empty"),
            ValidationErrorKind::Malformed(url) => write!(f, "malformed URL: {}", url),
        }
    }
}

impl std::error::Error for ValidationError {}

//! Error types for Folio
//!
//! The controllers themselves never fail: absent elements are skipped.
//! Errors only surface while loading pages, configs and replay scripts.

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a page, config or script file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Selector string could not be parsed
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Selector matched nothing in the document
    #[error("No element matches `{0}`")]
    TargetNotFound(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

impl FolioError {
    pub(crate) fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::TargetNotFound("#missing".to_string());
        assert_eq!(format!("{}", err), "No element matches `#missing`");
    }

    #[test]
    fn test_invalid_selector_display() {
        let err = FolioError::invalid_selector("a[", "unterminated attribute");
        assert_eq!(
            err.to_string(),
            "Invalid selector `a[`: unterminated attribute"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }
}

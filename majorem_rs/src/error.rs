//! Error type for the fallible edges of the core crate.
//!
//! The demo and contact controllers never fail: an empty submission is a
//! guarded no-op. Errors only come from parsing identifiers and preview
//! snapshots that arrive as text.

use thiserror::Error;

/// Errors raised while parsing external input into core types.
#[derive(Debug, Error)]
pub enum MajoremError {
    /// A demo slug that matches no [`crate::demo::DemoId`].
    #[error("unknown demo '{0}' (expected one of: address-cleaning, sentiment-analysis)")]
    UnknownDemo(String),

    /// A form id that matches no [`crate::contact::ContactField`].
    #[error("unknown contact field '{0}' (expected one of: name, company, email, message)")]
    UnknownField(String),

    /// A preview snapshot that is not valid JSON for [`crate::snapshot::PageSnapshot`].
    #[error("invalid preview state")]
    InvalidSnapshot(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, MajoremError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_demo_lists_valid_slugs() {
        let err = MajoremError::UnknownDemo("fuzzy-matching".into());
        let msg = err.to_string();
        assert!(msg.contains("fuzzy-matching"));
        assert!(msg.contains("address-cleaning"));
        assert!(msg.contains("sentiment-analysis"));
    }

    #[test]
    fn snapshot_error_wraps_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MajoremError = json_err.into();
        assert_eq!(err.to_string(), "invalid preview state");
    }

    #[test]
    fn snapshot_error_detail_lives_in_source() {
        use std::error::Error as _;

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let detail = json_err.to_string();
        let err: MajoremError = json_err.into();

        assert!(!err.to_string().contains(&detail));
        assert_eq!(err.source().map(|s| s.to_string()), Some(detail));
    }
}

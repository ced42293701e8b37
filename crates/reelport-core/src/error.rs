//! Error types for the reelport core
//!
//! Provides the error taxonomy shared by the repository layer and the
//! portal API, with human-readable messages and JSON-friendly serialization.
//!
//! Note that an unresolvable video URL is *not* an error: the resolver
//! signals "could not resolve" by returning the input unchanged (or `None`
//! for id extraction), so views can render an inline invalid-source state
//! without crashing.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all reelport core operations
///
/// Implements Display for human-readable messages and Serialize
/// for JSON transport across the route layer.
#[derive(Error, Debug)]
pub enum ReelportError {
    /// The backend request itself failed (network, timeout, TLS)
    #[error("Backend unavailable: {0}")]
    Backend(#[from] reqwest::Error),

    /// Backend responded but the payload could not be decoded
    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the backend (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Admin payload rejected before any repository call
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Subject is not authorized for the requested admin action
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl Serialize for ReelportError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for reelport core operations
pub type Result<T> = std::result::Result<T, ReelportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_decode() {
        let error = ReelportError::Decode("unexpected field".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to decode backend response: unexpected field"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let error = ReelportError::NotFound("entry abc123".to_string());
        assert_eq!(error.to_string(), "Not found: entry abc123");
    }

    #[test]
    fn test_error_display_rate_limited() {
        let error = ReelportError::RateLimited;
        assert_eq!(error.to_string(), "Rate limited - too many requests");
    }

    #[test]
    fn test_error_display_validation() {
        let error = ReelportError::Validation("title cannot be empty".to_string());
        assert_eq!(error.to_string(), "Validation failed: title cannot be empty");
    }

    #[test]
    fn test_error_display_forbidden() {
        let error = ReelportError::Forbidden("delete entry".to_string());
        assert_eq!(error.to_string(), "Forbidden: delete entry");
    }

    #[test]
    fn test_error_serialize() {
        let error = ReelportError::RateLimited;
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Rate limited - too many requests\"");
    }

    #[test]
    fn test_error_serialize_with_message() {
        let error = ReelportError::NotFound("entry video123".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Not found: entry video123\"");
    }
}

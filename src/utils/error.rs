//! Error handling for the filter
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the filter
pub type Result<T> = std::result::Result<T, FilterError>;

/// Main error type for the filter
#[derive(Error, Debug)]
pub enum FilterError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Completion service errors
    #[error("Completion service error: {0}")]
    Completion(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Moderation state machine violations
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV import errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FilterError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a completion service error
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::InvalidTransition(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the error is the caller's to fix (a wrong entry id, a bad
    /// configuration value) rather than a failure of the system underneath.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::NotFound(_) | Self::InvalidTransition(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_constructors_pick_the_right_variant() {
        assert!(matches!(FilterError::config("x"), FilterError::Config(_)));
        assert!(matches!(
            FilterError::not_found("x"),
            FilterError::NotFound(_)
        ));
        assert!(matches!(
            FilterError::invalid_transition("x"),
            FilterError::InvalidTransition(_)
        ));
        assert!(matches!(FilterError::timeout("x"), FilterError::Timeout(_)));
    }

    #[test]
    fn user_errors_are_classified() {
        assert!(FilterError::config("bad threshold").is_user_error());
        assert!(FilterError::not_found("no such word").is_user_error());
        assert!(!FilterError::timeout("slow upstream").is_user_error());
        assert!(!FilterError::Database(sea_orm::DbErr::Custom("down".into())).is_user_error());
    }
}

//! Error types for RepoScout
//!
//! Covers the GitHub API, persistent bookmark storage, and the terminal UI.

use thiserror::Error;

/// Main error type for RepoScout operations
#[derive(Error, Debug)]
pub enum RepoScoutError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("GitHub API error: {0}")]
    ApiStatus(String),

    #[error("Failed to fetch repositories: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid data under storage key '{key}': {reason}")]
    StorageFormat { key: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for RepoScout operations
pub type Result<T> = std::result::Result<T, RepoScoutError>;

impl RepoScoutError {
    /// The message shown in the UI when a search fails.
    ///
    /// Rate limiting keeps its dedicated wording; other API failures carry
    /// the status text, and transport failures collapse to a generic line.
    pub fn user_message(&self) -> String {
        match self {
            RepoScoutError::RateLimited => self.to_string(),
            RepoScoutError::ApiStatus(_) => self.to_string(),
            RepoScoutError::Http(_) => "Failed to fetch repositories".to_string(),
            other => other.to_string(),
        }
    }

    /// Check if this error is recoverable by simply retrying the search
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RepoScoutError::RateLimited
                | RepoScoutError::ApiStatus(_)
                | RepoScoutError::Http(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_message_is_dedicated() {
        let msg = RepoScoutError::RateLimited.user_message();
        assert_eq!(msg, "Rate limit exceeded. Please try again later.");
    }

    #[test]
    fn api_status_message_carries_status_text() {
        let err = RepoScoutError::ApiStatus("500 Internal Server Error".to_string());
        assert_eq!(
            err.user_message(),
            "GitHub API error: 500 Internal Server Error"
        );
    }

    #[test]
    fn search_errors_are_recoverable() {
        assert!(RepoScoutError::RateLimited.is_recoverable());
        assert!(RepoScoutError::ApiStatus("503".into()).is_recoverable());
        assert!(!RepoScoutError::NoConfigDir.is_recoverable());
    }
}

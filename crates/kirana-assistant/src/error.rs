//! # Error Module: Assistant Failure Modes
//!
//! Everything that can go wrong between "the shopkeeper asked" and "the
//! model answered". [`crate::AssistantClient::chat`] absorbs all of these
//! into the fallback reply; [`crate::AssistantClient::generate`] hands
//! them to the caller.

use thiserror::Error;

use crate::config::ConfigError;

/// Convenient Result alias used throughout the crate.
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Errors from configuration, transport, or the API itself.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The environment was missing or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request never completed (connect, timeout, TLS, body decode).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim, for the operator log.
        body: String,
    },

    /// A well-formed response carried no generated text.
    #[error("API response contained no text")]
    EmptyResponse,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_failure() {
        let e = AssistantError::Api { status: 429, body: "quota exceeded".to_string() };
        assert_eq!(e.to_string(), "API returned status 429: quota exceeded");

        assert_eq!(
            AssistantError::EmptyResponse.to_string(),
            "API response contained no text"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let e: AssistantError = ConfigError::MissingRequired("GEMINI_API_KEY".to_string()).into();
        assert_eq!(
            e.to_string(),
            "Configuration error: Missing required configuration: GEMINI_API_KEY"
        );
    }
}

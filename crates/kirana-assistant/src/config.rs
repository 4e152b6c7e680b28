//! Assistant configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Only the API key is required, and its absence surfaces as a
//! typed error when the assistant is actually constructed, never before.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Model used when `KIRANA_AI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Production endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Request timeout when `KIRANA_AI_TIMEOUT_SECS` is unset.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Assistant configuration.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Generative Language API key.
    pub api_key: String,

    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,

    /// Whole-request timeout.
    pub timeout: Duration,

    /// API host; overridable for tests and proxies.
    pub base_url: String,
}

impl AssistantConfig {
    /// Creates a config with the given key and all defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        AssistantConfig {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequired`] when `GEMINI_API_KEY` is unset
    /// - [`ConfigError::InvalidValue`] when `KIRANA_AI_TIMEOUT_SECS` is
    ///   not a whole number of seconds
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingRequired("GEMINI_API_KEY".to_string()))?;

        let mut config = AssistantConfig::new(api_key);
        if let Ok(model) = env::var("KIRANA_AI_MODEL") {
            config.model = model;
        }
        if let Ok(secs) = env::var("KIRANA_AI_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|_| ConfigError::InvalidValue("KIRANA_AI_TIMEOUT_SECS".to_string()))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Points the client at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable was unset.
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    /// A variable was set but unparseable.
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Tests
// =============================================================================

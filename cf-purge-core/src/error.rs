//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use cf_purge_provider::ProviderError;

pub use crate::validation::ValidationError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Local input validation failed; nothing was sent
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, rejected token, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Config(_) => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message_only() {
        let err = CoreError::from(ValidationError::NoValidUrls);
        assert_eq!(err.to_string(), "Please enter at least one valid URL");
        assert!(err.is_expected());
    }

    #[test]
    fn provider_error_expectation_is_forwarded() {
        let expected = CoreError::from(ProviderError::InvalidCredentials {
            provider: "cloudflare".into(),
            raw_message: None,
        });
        assert!(expected.is_expected());

        let unexpected = CoreError::from(ProviderError::Timeout {
            provider: "cloudflare".into(),
            detail: "30s".into(),
        });
        assert!(!unexpected.is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::Config("API token is missing".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "Config");
        assert_eq!(json["details"], "API token is missing");
    }
}

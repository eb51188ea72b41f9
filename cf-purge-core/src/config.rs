//! Runtime configuration passed into the service at startup.

use crate::error::{CoreError, CoreResult};

/// Purge configuration
///
/// Built once by the front end (config file + environment) and handed to
/// [`PurgeService`](crate::PurgeService); never read from global state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeConfig {
    /// Cloudflare API token with the `Zone.Cache Purge` and `Zone.Zone:Read` permissions.
    pub api_token: String,
    /// Zone preselected by Quick Purge.
    pub default_zone_id: Option<String>,
    /// Override of `https://api.cloudflare.com/client/v4`.
    pub api_base: Option<String>,
}

impl PurgeConfig {
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            default_zone_id: None,
            api_base: None,
        }
    }

    /// Set the default zone; blank values are treated as unset.
    #[must_use]
    pub fn with_default_zone_id(mut self, zone_id: Option<String>) -> Self {
        self.default_zone_id = non_blank(zone_id);
        self
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: Option<String>) -> Self {
        self.api_base = non_blank(api_base);
        self
    }

    /// 检查必填项
    pub fn validate(&self) -> CoreResult<()> {
        if self.api_token.trim().is_empty() {
            return Err(CoreError::Config("API token is missing".to_string()));
        }
        if let Some(base) = &self.api_base {
            let parsed = url::Url::parse(base)
                .map_err(|e| CoreError::Config(format!("Invalid API base '{base}': {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(CoreError::Config(format!(
                    "Invalid API base '{base}': scheme must be http or https"
                )));
            }
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_default_zone_is_none() {
        let config = PurgeConfig::new("token").with_default_zone_id(Some("  ".into()));
        assert_eq!(config.default_zone_id, None);

        let config = PurgeConfig::new("token").with_default_zone_id(Some(" z1 ".into()));
        assert_eq!(config.default_zone_id.as_deref(), Some("z1"));
    }

    #[test]
    fn missing_token_is_config_error() {
        let result = PurgeConfig::new("   ").validate();
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn api_base_must_be_http() {
        let ok = PurgeConfig::new("t").with_api_base(Some("http://127.0.0.1:8080/v4".into()));
        assert!(ok.validate().is_ok());

        let bad = PurgeConfig::new("t").with_api_base(Some("ftp://example.com".into()));
        assert!(matches!(bad.validate(), Err(CoreError::Config(_))));

        let garbage = PurgeConfig::new("t").with_api_base(Some("not a url".into()));
        assert!(garbage.validate().is_err());
    }
}

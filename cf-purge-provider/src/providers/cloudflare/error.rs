//! Cloudflare error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::CloudflarePurger;

/// Cloudflare error code mapping
/// Reference: <https://developers.cloudflare.com/fundamentals/api/reference/errors/>
impl ProviderErrorMapper for CloudflarePurger {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Authentication error
            // 6003: Invalid request headers
            // 6103: Invalid format for X-Auth-Key header
            // 6111: Invalid format for Authorization header
            // 9106: Missing X-Auth-Key, X-Auth-Email or Authorization headers
            // 9109: Invalid access token
            // 10000: Authentication error
            Some("6003" | "6103" | "6111" | "9106" | "9109" | "10000") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // Purge request rejected
            // 1012: Request must contain one of "purge_everything", "files", "tags" or "prefixes"
            // 1015: Too many files in a single request
            // 1016: Invalid URL in files list
            Some(code @ ("1012" | "1015" | "1016")) => {
                let param = match code {
                    "1012" => "body",
                    _ => "files",
                };
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: param.to_string(),
                    detail: raw.message,
                }
            }

            // Purge throttled
            // 971: Please wait and consider throttling your request speed
            // 10013: Rate limit for purge requests reached
            Some("971" | "10013") => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // Zone does not exist
            // 1001: Invalid zone identifier
            // 7000: No route for that URI
            // 7003: Could not route to /path. perhaps your object identifier is invalid?
            Some("1001" | "7000" | "7003") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // Other error fallback
            _ => self.unknown_error(raw),
        }
    }
}

//! Shared HTTP plumbing
//!
//! Every purge backend builds its own `RequestBuilder` (URL, auth header, body) and hands it
//! to [`HttpUtils`], which sends it once, logs the exchange and turns transport-level
//! failures into [`ProviderError`] values.
//!
//! Requests are never retried here: a failed call is reported to the caller as-is.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Send a request and return `(status_code, response_text)`.
    ///
    /// # Arguments
    /// * `request_builder` - fully configured request (URL, headers, body)
    /// * `provider_name` - provider name, used as log prefix and in errors
    /// * `method_name` - HTTP method, for logging only
    /// * `path` - request path, for logging only (never includes credentials)
    ///
    /// # Errors
    /// * `ProviderError::Timeout` - the request timed out
    /// * `ProviderError::NetworkError` - transport failure, unreadable body or HTTP 502/503/504
    /// * `ProviderError::RateLimited` - HTTP 429
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        path: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Retry-After 必须在读取 body 之前取出
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(truncate_for_log(&body)),
            });
        }

        // Gateway errors carry an HTML body, not the JSON envelope
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Gateway error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body into `T`.
    ///
    /// # Errors
    /// `ProviderError::ParseError` when the body is not valid JSON for `T`.
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Envelope {
            success: bool,
        }
        let result: Result<Envelope, ProviderError> =
            HttpUtils::parse_json(r#"{"success":true,"errors":[]}"#, "test");
        assert!(
            matches!(&result, Ok(Envelope { success: true })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid_is_parse_error() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Envelope {
            success: bool,
        }
        let result: Result<Envelope, ProviderError> =
            HttpUtils::parse_json("<html>Bad Gateway</html>", "cloudflare");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { provider, .. }) if provider == "cloudflare"),
            "unexpected parse result: {result:?}"
        );
    }
}

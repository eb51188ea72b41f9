//! Cloudflare HTTP 请求方法

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CloudflarePurger, CloudflareResponse};

impl CloudflarePurger {
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {}", self.api_token))
    }

    /// 执行 GET 请求，返回完整响应信封（调用方需要 `result_info`）
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{}{path}", self.api_base);
        let builder = self.authorized(self.client.get(&url));
        let (status, text) =
            HttpUtils::execute_request(builder, self.provider_name(), "GET", path).await?;
        self.unwrap_envelope(status, &text, context)
    }

    /// 执行 POST 请求（JSON body）
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{}{path}", self.api_base);
        let body_json =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;
        log::debug!("Request Body: {body_json}");

        let builder = self
            .authorized(self.client.post(&url))
            .header("Content-Type", "application/json")
            .body(body_json);
        let (status, text) =
            HttpUtils::execute_request(builder, self.provider_name(), "POST", path).await?;
        self.unwrap_envelope(status, &text, context)
    }

    /// 解析 Cloudflare 响应信封，`success=false` 时映射第一个错误
    pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        status: u16,
        text: &str,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let cf_response: CloudflareResponse<T> = HttpUtils::parse_json(text, self.provider_name())?;

        if cf_response.success {
            return Ok(cf_response);
        }

        let Some((code, message)) = cf_response.first_error() else {
            // 没有 errors 数组时只能依据 HTTP 状态码判断
            let raw_message = Some(format!("HTTP {status}"));
            return Err(match status {
                401 => ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message,
                },
                403 => ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message,
                },
                _ => self.unknown_error(RawApiError::new(format!(
                    "Request failed with HTTP {status}"
                ))),
            });
        };

        log::error!(
            "[{}] API 错误 (HTTP {status}): {}",
            self.provider_name(),
            cf_response.joined_messages()
        );
        let mut error = self.map_error(RawApiError::with_code(code, message), context);
        if status == 403 {
            if let ProviderError::Unknown { raw_message, .. } = error {
                error = ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw_message),
                };
            }
        }
        Err(error)
    }
}

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{PurgeRequest, PurgeResult, Zone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone ID（用于 `ZoneNotFound` 等错误）
    pub zone: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone_id: &str) -> Self {
        Self {
            zone: Some(zone_id.to_string()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 缓存清除服务 Trait
///
/// Each method maps to exactly one API call; implementations never retry.
#[async_trait]
pub trait CachePurger: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取 Zone 列表（仅第一页）
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// 对指定 Zone 执行缓存清除
    ///
    /// Implementations must call [`PurgeRequest::validate`] before sending anything.
    async fn purge(&self, zone_id: &str, request: &PurgeRequest) -> Result<PurgeResult>;
}

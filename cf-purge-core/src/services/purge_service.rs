//! 缓存清除服务

use std::sync::Arc;

use cf_purge_provider::{
    create_purger, CachePurger, PurgeRequest, PurgeResult, Zone, MAX_PURGE_FILES,
};

use crate::config::PurgeConfig;
use crate::error::{CoreError, CoreResult};
use crate::resolver::ZoneResolver;
use crate::validation::ValidationError;

/// 缓存清除服务
///
/// Thin wrappers over the purge API. Each operation performs its local checks
/// first and issues at most one API call; nothing is retried.
pub struct PurgeService {
    purger: Arc<dyn CachePurger>,
    default_zone_id: Option<String>,
}

impl PurgeService {
    /// 创建服务实例
    #[must_use]
    pub fn new(purger: Arc<dyn CachePurger>, default_zone_id: Option<String>) -> Self {
        Self {
            purger,
            default_zone_id,
        }
    }

    /// 根据配置创建服务（构造 Cloudflare 客户端）
    pub fn from_config(config: &PurgeConfig) -> CoreResult<Self> {
        config.validate()?;
        let purger = create_purger(config.api_token.clone(), config.api_base.as_deref())?;
        Ok(Self::new(purger, config.default_zone_id.clone()))
    }

    /// 配置的默认 Zone
    #[must_use]
    pub fn default_zone_id(&self) -> Option<&str> {
        self.default_zone_id.as_deref()
    }

    /// 获取 Zone 列表（第一页，最多 50 个）
    pub async fn list_zones(&self) -> CoreResult<Vec<Zone>> {
        self.purger
            .list_zones()
            .await
            .map_err(|e| log_failure("list_zones", e.into()))
    }

    /// 清除 Zone 的全部缓存
    ///
    /// Confirmation is the caller's responsibility.
    pub async fn purge_everything(&self, zone_id: &str) -> CoreResult<PurgeResult> {
        self.send(zone_id, PurgeRequest::Everything).await
    }

    /// 按 URL 清除（1..=30 个，原样转发）
    pub async fn purge_urls(&self, zone_id: &str, urls: Vec<String>) -> CoreResult<PurgeResult> {
        if urls.is_empty() {
            return Err(ValidationError::NoUrls.into());
        }
        if urls.len() > MAX_PURGE_FILES {
            return Err(ValidationError::BatchTooLarge.into());
        }
        self.send(zone_id, PurgeRequest::Files(urls)).await
    }

    /// 按 Cache-Tag 清除
    pub async fn purge_tags(&self, zone_id: &str, tags: Vec<String>) -> CoreResult<PurgeResult> {
        if tags.is_empty() {
            return Err(ValidationError::NoTags.into());
        }
        self.send(zone_id, PurgeRequest::Tags(tags)).await
    }

    /// 按 URL 前缀清除
    pub async fn purge_prefixes(
        &self,
        zone_id: &str,
        prefixes: Vec<String>,
    ) -> CoreResult<PurgeResult> {
        if prefixes.is_empty() {
            return Err(ValidationError::NoPrefixes.into());
        }
        self.send(zone_id, PurgeRequest::Prefixes(prefixes)).await
    }

    /// 拉取 Zone 列表并按域名解析（精确匹配，然后父域名回退）
    pub async fn find_zone_by_domain(&self, domain: &str) -> CoreResult<Option<Zone>> {
        let zones = self.list_zones().await?;
        Ok(ZoneResolver::new(&zones).resolve(domain).cloned())
    }

    async fn send(&self, zone_id: &str, request: PurgeRequest) -> CoreResult<PurgeResult> {
        let kind = request.kind();
        match self.purger.purge(zone_id, &request).await {
            Ok(result) => {
                log::info!("Purge {kind} accepted for zone {zone_id}");
                Ok(result)
            }
            Err(e) => Err(log_failure(kind, e.into())),
        }
    }
}

fn log_failure(operation: &str, err: CoreError) -> CoreError {
    if err.is_expected() {
        log::warn!("{operation} failed: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
    err
}

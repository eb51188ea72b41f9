//! Cloudflare CachePurger trait 实现

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;
use crate::traits::{CachePurger, ErrorContext, ProviderErrorMapper};
use crate::types::{PurgeRequest, PurgeResult, Zone};

use super::{CloudflarePurger, CloudflareZone, MAX_PAGE_SIZE_ZONES};

#[derive(Deserialize)]
struct PurgeResponse {
    id: String,
}

#[async_trait]
impl CachePurger for CloudflarePurger {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let path = format!("/zones?per_page={MAX_PAGE_SIZE_ZONES}");
        let response = self
            .get::<Vec<CloudflareZone>>(&path, ErrorContext::default())
            .await?;

        let zones: Vec<Zone> = response
            .result
            .unwrap_or_default()
            .into_iter()
            .map(Zone::from)
            .collect();

        // 只请求第一页，超出部分不可见
        if let Some(info) = response.result_info {
            if info.total_count as usize > zones.len() {
                log::warn!(
                    "[{}] Account has {} zones, only the first {} are listed",
                    self.provider_name(),
                    info.total_count,
                    zones.len()
                );
            }
        }

        log::info!("[{}] Loaded {} zones", self.provider_name(), zones.len());
        Ok(zones)
    }

    async fn purge(&self, zone_id: &str, request: &PurgeRequest) -> Result<PurgeResult> {
        request.validate(self.provider_name())?;

        let path = format!("/zones/{zone_id}/purge_cache");
        log::info!(
            "[{}] Purging {} ({} entries) on zone {zone_id}",
            self.provider_name(),
            request.kind(),
            request.len()
        );

        let response = self
            .post::<PurgeResponse, _>(&path, request, ErrorContext::zone(zone_id))
            .await?;

        // 部分响应不带 result，此时以 zone id 作为结果标识
        let id = response
            .result
            .map_or_else(|| zone_id.to_string(), |r| r.id);
        Ok(PurgeResult { id })
    }
}

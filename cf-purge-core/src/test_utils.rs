//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use cf_purge_provider::{
    CachePurger, ProviderError, PurgeRequest, PurgeResult, Zone, ZoneStatus,
};
use tokio::sync::RwLock;

use crate::services::PurgeService;

/// 构造一个 active 状态的 Zone
pub fn zone(id: &str, name: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        status: ZoneStatus::Active,
        paused: false,
    }
}

// ===== MockPurger =====

/// 记录所有调用的 Purger，不做任何请求形状校验
pub struct MockPurger {
    zones: RwLock<Vec<Zone>>,
    purges: RwLock<Vec<(String, PurgeRequest)>>,
    list_calls: RwLock<usize>,
    /// 如果 Some，所有调用返回此错误
    fail_with: RwLock<Option<ProviderError>>,
}

impl MockPurger {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones: RwLock::new(zones),
            purges: RwLock::new(Vec::new()),
            list_calls: RwLock::new(0),
            fail_with: RwLock::new(None),
        }
    }

    pub async fn set_error(&self, err: Option<ProviderError>) {
        *self.fail_with.write().await = err;
    }

    pub async fn purges(&self) -> Vec<(String, PurgeRequest)> {
        self.purges.read().await.clone()
    }

    pub async fn list_calls(&self) -> usize {
        *self.list_calls.read().await
    }
}

#[async_trait]
impl CachePurger for MockPurger {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_zones(&self) -> cf_purge_provider::Result<Vec<Zone>> {
        *self.list_calls.write().await += 1;
        if let Some(err) = self.fail_with.read().await.clone() {
            return Err(err);
        }
        Ok(self.zones.read().await.clone())
    }

    async fn purge(
        &self,
        zone_id: &str,
        request: &PurgeRequest,
    ) -> cf_purge_provider::Result<PurgeResult> {
        self.purges
            .write()
            .await
            .push((zone_id.to_string(), request.clone()));
        if let Some(err) = self.fail_with.read().await.clone() {
            return Err(err);
        }
        Ok(PurgeResult {
            id: zone_id.to_string(),
        })
    }
}

// ===== 工厂方法 =====

/// 创建 PurgeService 及其 mock（返回 mock 以便断言调用记录）
pub fn create_service(
    zones: Vec<Zone>,
    default_zone_id: Option<&str>,
) -> (PurgeService, Arc<MockPurger>) {
    let purger = Arc::new(MockPurger::new(zones));
    let service = PurgeService::new(purger.clone(), default_zone_id.map(str::to_string));
    (service, purger)
}

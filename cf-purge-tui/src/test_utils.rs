//! 测试辅助模块
//!
//! 内存剪贴板、记录调用的 Purger 与 Zone 构造函数。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cf_purge_core::{
    CachePurger, ProviderError, PurgeRequest, PurgeResult, PurgeService, Zone, ZoneStatus,
};

use crate::backend::{ClipboardError, ClipboardProvider};

/// 构造一个 active 状态的 Zone
pub fn zone(id: &str, name: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        status: ZoneStatus::Active,
        paused: false,
    }
}

// ===== MemoryClipboard =====

/// 内存剪贴板
#[derive(Default)]
pub struct MemoryClipboard {
    content: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            content: Mutex::new(Some(text.to_string())),
        }
    }

    pub fn text(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        self.text().ok_or(ClipboardError::NotText)
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.content.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

// ===== FakePurger =====

/// 记录所有清除请求的 Purger
pub struct FakePurger {
    zones: Vec<Zone>,
    fail_with: Option<ProviderError>,
    purges: Mutex<Vec<(String, PurgeRequest)>>,
}

impl FakePurger {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones,
            fail_with: None,
            purges: Mutex::new(Vec::new()),
        }
    }

    /// 所有调用都返回此错误
    pub fn failing(err: ProviderError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::new(Vec::new())
        }
    }

    pub fn purges(&self) -> Vec<(String, PurgeRequest)> {
        self.purges.lock().unwrap().clone()
    }
}

#[async_trait]
impl CachePurger for FakePurger {
    fn id(&self) -> &'static str {
        "fake"
    }

    async fn list_zones(&self) -> Result<Vec<Zone>, ProviderError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(self.zones.clone()),
        }
    }

    async fn purge(
        &self,
        zone_id: &str,
        request: &PurgeRequest,
    ) -> Result<PurgeResult, ProviderError> {
        self.purges
            .lock()
            .unwrap()
            .push((zone_id.to_string(), request.clone()));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(PurgeResult {
                id: zone_id.to_string(),
            }),
        }
    }
}

/// 创建带 FakePurger 的服务
pub fn fake_service(purger: FakePurger) -> (Arc<PurgeService>, Arc<FakePurger>) {
    let purger = Arc::new(purger);
    let service = PurgeService::new(purger.clone(), None);
    (Arc::new(service), purger)
}

//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use cf_purge_provider::{CachePurger, Zone, create_purger};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装 Purger 和测试 Zone
pub struct TestContext {
    pub purger: Arc<dyn CachePurger>,
    pub zone_id: String,
    /// 可选：用于按 URL 清除的测试地址（必须属于测试 Zone）
    pub purge_url: Option<String>,
}

impl TestContext {
    /// 创建 Cloudflare 测试上下文
    pub fn cloudflare() -> Option<Self> {
        let api_token = env::var("CLOUDFLARE_API_TOKEN").ok()?;
        let zone_id = env::var("TEST_ZONE_ID").ok()?;
        let purge_url = env::var("TEST_PURGE_URL").ok();

        let purger = create_purger(api_token, None).ok()?;

        Some(Self {
            purger,
            zone_id,
            purge_url,
        })
    }

    /// 在 Zone 列表中查找测试 Zone
    pub async fn find_zone(&self) -> Option<Zone> {
        let zones = self.purger.list_zones().await.ok()?;
        zones.into_iter().find(|z| z.id == self.zone_id)
    }
}

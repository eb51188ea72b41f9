//! Cloudflare 集成测试
//!
//! 运行方式:
//! ```bash
//! CLOUDFLARE_API_TOKEN=xxx TEST_ZONE_ID=xxx TEST_PURGE_URL=https://example.com/robots.txt \
//!     cargo test -p cf-purge-provider --test cloudflare_test -- --ignored --nocapture --test-threads=1
//! ```
//!
//! 注意: `purge_everything` 会真正清空测试 Zone 的缓存，默认不运行。

mod common;

use cf_purge_provider::{ProviderError, PurgeRequest, create_purger};
use common::TestContext;

// ============ 基础测试 ============

#[tokio::test]
#[ignore]
async fn test_cloudflare_list_zones() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE_ID");

    let ctx = TestContext::cloudflare().expect("创建测试上下文失败");
    let zones = require_ok!(ctx.purger.list_zones().await, "list_zones 调用失败");

    assert!(!zones.is_empty(), "Zone 列表不应为空");
    assert!(zones.len() <= 50, "只应返回第一页");

    println!("✓ list_zones 测试通过，共 {} 个 Zone", zones.len());
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_test_zone_is_listed() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE_ID");

    let ctx = TestContext::cloudflare().expect("创建测试上下文失败");
    let zone = ctx.find_zone().await.expect("找不到测试 Zone");

    println!("✓ 测试 Zone: {} ({})", zone.name, zone.status);
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_invalid_token() {
    let purger = create_purger("invalid-token-for-test".to_string(), None).expect("创建失败");
    let result = purger.list_zones().await;

    assert!(
        matches!(
            result,
            Err(ProviderError::InvalidCredentials { .. } | ProviderError::PermissionDenied { .. })
        ),
        "无效 token 应返回凭证错误: {result:?}"
    );

    println!("✓ 无效 token 测试通过");
}

// ============ 清除测试 ============

#[tokio::test]
#[ignore]
async fn test_cloudflare_purge_single_url() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_ZONE_ID", "TEST_PURGE_URL");

    let ctx = TestContext::cloudflare().expect("创建测试上下文失败");
    let url = ctx.purge_url.clone().expect("缺少 TEST_PURGE_URL");

    let result = require_ok!(
        ctx.purger
            .purge(&ctx.zone_id, &PurgeRequest::Files(vec![url]))
            .await,
        "purge files 调用失败"
    );
    assert_eq!(result.id, ctx.zone_id);

    println!("✓ purge files 测试通过");
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_purge_unknown_zone() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN");

    let ctx = TestContext::cloudflare();
    let Some(ctx) = ctx else {
        return;
    };
    let result = ctx
        .purger
        .purge(
            "00000000000000000000000000000000",
            &PurgeRequest::Files(vec!["https://example.com/".to_string()]),
        )
        .await;

    assert!(result.is_err(), "不存在的 Zone 应返回错误");
    println!("✓ 未知 Zone 测试通过: {:?}", result.err());
}

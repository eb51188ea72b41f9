//! Cloudflare Cache Purge backend

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::utils::log_sanitizer::mask_secret;

pub(crate) use types::{CloudflareResponse, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数（只请求第一页）
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;

/// Cloudflare Cache Purge client
///
/// Authenticates every call with `Authorization: Bearer <token>`.
pub struct CloudflarePurger {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) api_base: String,
}

impl CloudflarePurger {
    /// Create a client against the public Cloudflare API.
    pub fn new(api_token: String) -> Result<Self> {
        Self::with_base_url(api_token, CF_API_BASE)
    }

    /// Create a client against a custom API base (proxy or test server).
    pub fn with_base_url(api_token: String, api_base: impl Into<String>) -> Result<Self> {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        log::debug!(
            "Creating Cloudflare purger (base={api_base}, token={})",
            mask_secret(&api_token)
        );
        Ok(Self {
            client: create_http_client("cloudflare")?,
            api_token,
            api_base,
        })
    }

    /// API base URL in use, without trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

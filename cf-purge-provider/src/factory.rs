//! Purger factory.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::CloudflarePurger;
use crate::traits::CachePurger;

/// Creates a [`CachePurger`] for the given API token.
///
/// `api_base` overrides the Cloudflare API root (for a proxy or a local test server);
/// `None` uses the public endpoint. The purger is wrapped in `Arc<dyn CachePurger>`
/// so it can be shared across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use cf_purge_provider::create_purger;
///
/// let purger = create_purger("your-token".to_string(), None).unwrap();
/// assert_eq!(purger.id(), "cloudflare");
/// ```
pub fn create_purger(api_token: String, api_base: Option<&str>) -> Result<Arc<dyn CachePurger>> {
    let purger = match api_base {
        Some(base) => CloudflarePurger::with_base_url(api_token, base)?,
        None => CloudflarePurger::new(api_token)?,
    };
    Ok(Arc::new(purger))
}

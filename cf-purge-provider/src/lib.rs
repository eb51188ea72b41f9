//! # cf-purge-provider
//!
//! Typed bindings for the Cloudflare Cache Purge API.
//!
//! Two calls are covered:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | List zones (first page, up to 50) | `GET /zones?per_page=50` |
//! | Purge cache | `POST /zones/{zone_id}/purge_cache` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static builds and cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cf_purge_provider::{create_purger, CachePurger, PurgeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let purger = create_purger("your-token".to_string(), None)?;
//!
//!     let zones = purger.list_zones().await?;
//!     for zone in &zones {
//!         println!("{} ({})", zone.name, zone.status);
//!     }
//!
//!     let request = PurgeRequest::Files(vec!["https://example.com/app.js".to_string()]);
//!     purger.purge(&zones[0].id, &request).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: the token was rejected
//! - [`ProviderError::PermissionDenied`]: the token lacks the Cache Purge permission
//! - [`ProviderError::InvalidParameter`]: the request failed local or remote validation
//! - [`ProviderError::RateLimited`]: purge throttled by the API
//!
//! Nothing is retried automatically.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_purger;

// Re-export core trait only (internal traits are not exported)
pub use traits::CachePurger;

// Re-export types
pub use types::{MAX_PURGE_FILES, PurgeRequest, PurgeResult, Zone, ZoneStatus};

// Re-export helpers
pub use providers::common::normalize_domain_name;
pub use utils::log_sanitizer;

// Re-export concrete backend
pub use providers::CloudflarePurger;

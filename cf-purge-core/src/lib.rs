//! cf-purge Core Library
//!
//! Platform-independent business logic for purging the Cloudflare edge cache:
//! - Zone resolution (URL hostname to zone, with parent-domain fallback)
//! - Input validation for URL lists, single URLs and tag/prefix lists
//! - Purge Service (the five API operations, gated by local checks)
//!
//! The front end owns configuration loading and passes a [`PurgeConfig`] in.

pub mod config;
pub mod error;
pub mod resolver;
pub mod services;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cf_purge_provider::{
    CachePurger, ProviderError, PurgeRequest, PurgeResult, Zone, ZoneStatus, MAX_PURGE_FILES,
};
pub use config::PurgeConfig;
pub use error::{CoreError, CoreResult};
pub use resolver::{belongs_to_zone, ZoneResolver};
pub use services::PurgeService;
pub use validation::ValidationError;

//! Cache purge backend implementations

/// Shared utilities used by backend implementations.
pub mod common;

mod cloudflare;

pub use cloudflare::CloudflarePurger;

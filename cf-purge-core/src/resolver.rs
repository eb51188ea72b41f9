//! Zone resolution
//!
//! Maps a hostname to the zone that serves it: an exact name match wins,
//! otherwise leading labels are dropped one at a time and the shortened
//! candidate is looked up again. A candidate is never shorter than two labels,
//! so a bare TLD never matches.

use cf_purge_provider::{normalize_domain_name, Zone};

use crate::validation::extract_hostname;

/// Resolves hostnames against a fetched zone list.
///
/// Borrows the zone list; build a new resolver after the list is refreshed.
#[derive(Debug, Clone, Copy)]
pub struct ZoneResolver<'a> {
    zones: &'a [Zone],
}

impl<'a> ZoneResolver<'a> {
    #[must_use]
    pub fn new(zones: &'a [Zone]) -> Self {
        Self { zones }
    }

    /// Best-matching zone for `hostname`, or `None`.
    ///
    /// Comparison ignores ASCII case and a trailing dot. When several zones
    /// share a name the first one in the list wins.
    #[must_use]
    pub fn resolve(&self, hostname: &str) -> Option<&'a Zone> {
        let hostname = normalize_domain_name(hostname);
        if hostname.is_empty() {
            return None;
        }

        if let Some(zone) = self.find_exact(&hostname) {
            return Some(zone);
        }

        let mut candidate = hostname.as_str();
        while let Some((_, parent)) = candidate.split_once('.') {
            // 少于两个标签时停止
            if !parent.contains('.') {
                break;
            }
            if let Some(zone) = self.find_exact(parent) {
                log::debug!("Resolved {hostname} to parent zone {}", zone.name);
                return Some(zone);
            }
            candidate = parent;
        }

        None
    }

    /// Parse `url`, extract its hostname and resolve it.
    #[must_use]
    pub fn resolve_url(&self, url: &str) -> Option<&'a Zone> {
        extract_hostname(url).and_then(|host| self.resolve(&host))
    }

    fn find_exact(&self, name: &str) -> Option<&'a Zone> {
        self.zones
            .iter()
            .find(|z| normalize_domain_name(&z.name) == name)
    }
}

/// Whether `hostname` is `zone_name` itself or a subdomain of it.
///
/// Matches on label boundaries only: `evilexample.com` does not belong to
/// `example.com`.
#[must_use]
pub fn belongs_to_zone(hostname: &str, zone_name: &str) -> bool {
    let host = normalize_domain_name(hostname);
    let zone = normalize_domain_name(zone_name);
    if host.is_empty() || zone.is_empty() {
        return false;
    }
    host == zone
        || host
            .strip_suffix(zone.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
}

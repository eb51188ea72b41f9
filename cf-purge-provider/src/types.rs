//! Public data types shared by every purge backend.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ProviderError, Result};

/// Maximum number of URLs accepted by a single purge-by-URL request.
pub const MAX_PURGE_FILES: usize = 30;

// ============ Zone Types ============

/// Zone status as reported by the API.
///
/// Serialized as the raw lowercase status string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZoneStatus {
    /// Zone is active and serving traffic through the edge.
    Active,
    /// Zone is waiting for nameserver changes or still initializing.
    Pending,
    /// Any other status (`moved`, `deleted`, ...); the raw value is kept for display.
    Other(String),
    /// Status missing from the response.
    #[default]
    Unknown,
}

impl ZoneStatus {
    /// Parse a raw API status string.
    ///
    /// `pending` and `initializing` both map to [`ZoneStatus::Pending`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "pending" | "initializing" => Self::Pending,
            "" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    /// Raw status string, suitable for a status tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Other(raw) => raw,
            Self::Unknown => "unknown",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ZoneStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ZoneStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A zone (a domain managed by the CDN), the unit of cache-purge scoping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Opaque zone identifier.
    pub id: String,
    /// Domain name of the zone (e.g., `"example.com"`).
    pub name: String,
    /// Current zone status.
    #[serde(default)]
    pub status: ZoneStatus,
    /// Whether the zone is paused (traffic bypasses the edge).
    #[serde(default)]
    pub paused: bool,
}

// ============ Purge Types ============

/// A cache purge request.
///
/// Constructed per user action and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeRequest {
    /// Invalidate every cached object of the zone.
    Everything,
    /// Invalidate the given absolute URLs (`1..=30` entries).
    Files(Vec<String>),
    /// Invalidate objects carrying any of the given cache tags.
    Tags(Vec<String>),
    /// Invalidate objects whose URL starts with any of the given prefixes.
    Prefixes(Vec<String>),
}

impl PurgeRequest {
    /// Short name of the purge kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Everything => "everything",
            Self::Files(_) => "files",
            Self::Tags(_) => "tags",
            Self::Prefixes(_) => "prefixes",
        }
    }

    /// Number of entries carried by the request (`0` for [`PurgeRequest::Everything`]).
    pub fn len(&self) -> usize {
        match self {
            Self::Everything => 0,
            Self::Files(items) | Self::Tags(items) | Self::Prefixes(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the request shape before it is sent.
    ///
    /// - `Files` must contain between 1 and [`MAX_PURGE_FILES`] entries
    /// - `Tags` / `Prefixes` must contain at least one entry
    /// - no entry may be blank
    pub fn validate(&self, provider: &str) -> Result<()> {
        let invalid = |detail: &str| ProviderError::InvalidParameter {
            provider: provider.to_string(),
            param: self.kind().to_string(),
            detail: detail.to_string(),
        };

        match self {
            Self::Everything => Ok(()),
            Self::Files(urls) if urls.is_empty() => Err(invalid("No URLs provided")),
            Self::Files(urls) if urls.len() > MAX_PURGE_FILES => Err(invalid(
                "Maximum 30 URLs per request. Split into multiple batches.",
            )),
            Self::Tags(tags) if tags.is_empty() => Err(invalid("No cache tags provided")),
            Self::Prefixes(prefixes) if prefixes.is_empty() => {
                Err(invalid("No prefixes provided"))
            }
            Self::Files(items) | Self::Tags(items) | Self::Prefixes(items) => {
                if items.iter().any(|item| item.trim().is_empty()) {
                    Err(invalid("Entries must not be blank"))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Wire body of `POST /zones/{id}/purge_cache`.
#[derive(Serialize)]
struct PurgeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    purge_everything: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefixes: Option<&'a [String]>,
}

impl Serialize for PurgeRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut body = PurgeBody {
            purge_everything: None,
            files: None,
            tags: None,
            prefixes: None,
        };
        match self {
            Self::Everything => body.purge_everything = Some(true),
            Self::Files(urls) => body.files = Some(urls),
            Self::Tags(tags) => body.tags = Some(tags),
            Self::Prefixes(prefixes) => body.prefixes = Some(prefixes),
        }
        body.serialize(serializer)
    }
}

/// Result of an accepted purge request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeResult {
    /// Identifier echoed by the API (the zone id for Cloudflare).
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_status_parses_known_values() {
        assert_eq!(ZoneStatus::parse("active"), ZoneStatus::Active);
        assert_eq!(ZoneStatus::parse("pending"), ZoneStatus::Pending);
        assert_eq!(ZoneStatus::parse("initializing"), ZoneStatus::Pending);
        assert_eq!(
            ZoneStatus::parse("moved"),
            ZoneStatus::Other("moved".to_string())
        );
        assert_eq!(ZoneStatus::parse("moved").as_str(), "moved");
    }

    #[test]
    fn zone_deserializes_from_api_shape() {
        let json = r#"{
            "id": "023e105f4ecef8ad9ca31a8372d0c353",
            "name": "example.com",
            "status": "active",
            "paused": false,
            "type": "full"
        }"#;
        let zone: Zone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.name, "example.com");
        assert!(zone.status.is_active());
        assert!(!zone.paused);
    }

    #[test]
    fn zone_without_status_or_paused_uses_defaults() {
        let zone: Zone = serde_json::from_str(r#"{"id":"z1","name":"example.org"}"#).unwrap();
        assert_eq!(zone.status, ZoneStatus::Unknown);
        assert!(!zone.paused);
    }

    #[test]
    fn purge_everything_body() {
        let json = serde_json::to_value(PurgeRequest::Everything).unwrap();
        assert_eq!(json, serde_json::json!({ "purge_everything": true }));
    }

    #[test]
    fn purge_files_body_keeps_urls_unchanged() {
        let urls = vec![
            "https://example.com/a?v=1".to_string(),
            "https://example.com/b".to_string(),
        ];
        let json = serde_json::to_value(PurgeRequest::Files(urls.clone())).unwrap();
        assert_eq!(json, serde_json::json!({ "files": urls }));
    }

    #[test]
    fn purge_tags_and_prefixes_bodies() {
        let tags = serde_json::to_value(PurgeRequest::Tags(vec!["blog".into()])).unwrap();
        assert_eq!(tags, serde_json::json!({ "tags": ["blog"] }));

        let prefixes =
            serde_json::to_value(PurgeRequest::Prefixes(vec!["example.com/img".into()])).unwrap();
        assert_eq!(prefixes, serde_json::json!({ "prefixes": ["example.com/img"] }));
    }

    #[test]
    fn validate_rejects_empty_files() {
        let result = PurgeRequest::Files(vec![]).validate("test");
        assert!(matches!(
            result,
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "files"
        ));
    }

    #[test]
    fn validate_file_count_boundaries() {
        let urls = |n: usize| {
            (0..n)
                .map(|i| format!("https://example.com/{i}"))
                .collect::<Vec<_>>()
        };
        assert!(PurgeRequest::Files(urls(1)).validate("test").is_ok());
        assert!(PurgeRequest::Files(urls(30)).validate("test").is_ok());
        assert!(PurgeRequest::Files(urls(31)).validate("test").is_err());
    }

    #[test]
    fn validate_rejects_empty_tags_and_blank_entries() {
        assert!(PurgeRequest::Tags(vec![]).validate("test").is_err());
        assert!(PurgeRequest::Prefixes(vec![]).validate("test").is_err());
        assert!(
            PurgeRequest::Tags(vec!["ok".into(), "  ".into()])
                .validate("test")
                .is_err()
        );
        assert!(PurgeRequest::Everything.validate("test").is_ok());
    }
}

//! User input validation
//!
//! Everything here runs before a request is built; a failure is shown inline
//! and nothing is sent.

use serde::Serialize;
use thiserror::Error;
use url::Url;

use cf_purge_provider::{Zone, MAX_PURGE_FILES};

use crate::resolver::belongs_to_zone;

/// Number of malformed lines quoted in [`ValidationError::InvalidUrls`].
const INVALID_URL_PREVIEW: usize = 3;

/// Input validation error, displayed to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "details")]
pub enum ValidationError {
    #[error("URL is required")]
    UrlRequired,

    #[error("Please enter a valid URL starting with http:// or https://")]
    InvalidUrl,

    /// Malformed lines in a URL list (first few, `...` when more exist)
    #[error("Invalid URLs: {0}")]
    InvalidUrls(String),

    #[error("Please enter at least one valid URL")]
    NoValidUrls,

    #[error("Maximum 30 URLs per request. Please reduce the number of URLs.")]
    TooManyUrls,

    /// A URL list entry whose host is outside the zone
    #[error("Some URLs don't belong to {zone}: {url}")]
    UrlOutsideZone { zone: String, url: String },

    /// The single Quick Purge URL does not match the selected zone
    #[error("URL domain ({domain}) doesn't match zone ({zone})")]
    DomainMismatch { domain: String, zone: String },

    #[error("Please select a zone")]
    NoZoneSelected,

    #[error("Invalid zone selected")]
    InvalidZone,

    #[error("No URLs provided")]
    NoUrls,

    #[error("Maximum 30 URLs per request. Split into multiple batches.")]
    BatchTooLarge,

    #[error("No cache tags provided")]
    NoTags,

    #[error("No prefixes provided")]
    NoPrefixes,
}

/// Parse `text` as an absolute `http`/`https` URL.
pub fn parse_http_url(text: &str) -> Result<Url, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::UrlRequired);
    }
    let url = Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl)?;
    if matches!(url.scheme(), "http" | "https") {
        Ok(url)
    } else {
        Err(ValidationError::InvalidUrl)
    }
}

/// Whether `text` is an absolute `http`/`https` URL.
pub fn is_http_url(text: &str) -> bool {
    parse_http_url(text).is_ok()
}

/// Hostname of `url`, or `None` when it does not parse or has no host.
pub fn extract_hostname(url: &str) -> Option<String> {
    Url::parse(url.trim())
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .filter(|h| !h.is_empty())
}

/// Parse a newline separated URL list.
///
/// Blank lines are skipped and each line is trimmed; the URLs are otherwise
/// returned exactly as typed. Any malformed line rejects the whole list.
pub fn parse_url_list(text: &str) -> Result<Vec<String>, ValidationError> {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if is_http_url(line) {
            valid.push(line.to_string());
        } else {
            invalid.push(line);
        }
    }

    if !invalid.is_empty() {
        let mut preview = invalid
            .iter()
            .take(INVALID_URL_PREVIEW)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        if invalid.len() > INVALID_URL_PREVIEW {
            preview.push_str("...");
        }
        return Err(ValidationError::InvalidUrls(preview));
    }
    if valid.is_empty() {
        return Err(ValidationError::NoValidUrls);
    }
    if valid.len() > MAX_PURGE_FILES {
        return Err(ValidationError::TooManyUrls);
    }
    Ok(valid)
}

/// Every URL must be served by `zone`; reports the first one that is not.
pub fn check_urls_in_zone(urls: &[String], zone: &Zone) -> Result<(), ValidationError> {
    let outside = urls.iter().find(|url| {
        extract_hostname(url).is_none_or(|host| !belongs_to_zone(&host, &zone.name))
    });
    match outside {
        Some(url) => Err(ValidationError::UrlOutsideZone {
            zone: zone.name.clone(),
            url: url.clone(),
        }),
        None => Ok(()),
    }
}

/// Single-URL variant of [`check_urls_in_zone`] used by Quick Purge.
pub fn check_url_in_zone(url: &str, zone: &Zone) -> Result<(), ValidationError> {
    let host = extract_hostname(url).ok_or(ValidationError::InvalidUrl)?;
    if belongs_to_zone(&host, &zone.name) {
        Ok(())
    } else {
        Err(ValidationError::DomainMismatch {
            domain: host,
            zone: zone.name.clone(),
        })
    }
}

/// Split a tag or prefix list on newlines and commas, dropping blanks.
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::zone;

    #[test]
    fn parse_http_url_accepts_http_and_https() {
        assert!(parse_http_url("https://example.com/a").is_ok());
        assert!(parse_http_url("  http://example.com  ").is_ok());
    }

    #[test]
    fn parse_http_url_rejects_other_input() {
        assert_eq!(parse_http_url(""), Err(ValidationError::UrlRequired));
        assert_eq!(parse_http_url("   "), Err(ValidationError::UrlRequired));
        assert_eq!(parse_http_url("example.com/a"), Err(ValidationError::InvalidUrl));
        assert_eq!(parse_http_url("ftp://example.com"), Err(ValidationError::InvalidUrl));
    }

    #[test]
    fn extract_hostname_works() {
        assert_eq!(
            extract_hostname("https://www.example.com:8443/x?y=1").as_deref(),
            Some("www.example.com")
        );
        assert_eq!(extract_hostname("garbage"), None);
    }

    #[test]
    fn url_list_skips_blank_lines_and_keeps_text() {
        let text = "\n https://example.com/a?v=1 \n\nhttps://example.com/B\n";
        let urls = parse_url_list(text).unwrap();
        assert_eq!(urls, vec!["https://example.com/a?v=1", "https://example.com/B"]);
    }

    #[test]
    fn url_list_reports_first_three_invalid_lines() {
        let text = "bad1\nhttps://example.com/ok\nbad2\nbad3\nbad4";
        assert_eq!(
            parse_url_list(text),
            Err(ValidationError::InvalidUrls("bad1, bad2, bad3...".into()))
        );
        assert_eq!(
            parse_url_list("bad1").unwrap_err().to_string(),
            "Invalid URLs: bad1"
        );
    }

    #[test]
    fn url_list_requires_at_least_one() {
        assert_eq!(parse_url_list(" \n \n"), Err(ValidationError::NoValidUrls));
    }

    #[test]
    fn url_list_count_boundaries() {
        let list = |n: usize| {
            (0..n)
                .map(|i| format!("https://example.com/{i}"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(parse_url_list(&list(30)).unwrap().len(), 30);
        assert_eq!(parse_url_list(&list(31)), Err(ValidationError::TooManyUrls));
    }

    #[test]
    fn urls_must_belong_to_zone() {
        let z = zone("z1", "example.com");
        let ok = vec![
            "https://example.com/".to_string(),
            "https://cdn.example.com/app.js".to_string(),
        ];
        assert!(check_urls_in_zone(&ok, &z).is_ok());

        let bad = vec![
            "https://example.com/".to_string(),
            "https://evilexample.com/x".to_string(),
        ];
        assert_eq!(
            check_urls_in_zone(&bad, &z).unwrap_err().to_string(),
            "Some URLs don't belong to example.com: https://evilexample.com/x"
        );
    }

    #[test]
    fn single_url_zone_mismatch_message() {
        let z = zone("z1", "example.com");
        assert!(check_url_in_zone("https://www.example.com/a", &z).is_ok());
        assert_eq!(
            check_url_in_zone("https://other.org/a", &z).unwrap_err().to_string(),
            "URL domain (other.org) doesn't match zone (example.com)"
        );
    }

    #[test]
    fn parse_list_splits_on_newlines_and_commas() {
        assert_eq!(
            parse_list("blog, assets\n\n  product-42 ,"),
            vec!["blog", "assets", "product-42"]
        );
        assert!(parse_list(" , \n").is_empty());
    }
}

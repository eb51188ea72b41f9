//! Cloudflare API 类型定义

use serde::Deserialize;

use crate::types::{Zone, ZoneStatus};

/// Cloudflare API 通用响应
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<CloudflareError>,
    pub result_info: Option<CloudflareResultInfo>,
}

impl<T> CloudflareResponse<T> {
    /// 第一个错误的 (code, message)；errors 为空时返回 None
    pub fn first_error(&self) -> Option<(String, String)> {
        self.errors
            .first()
            .map(|e| (e.code.to_string(), e.message.clone()))
    }

    /// 所有错误消息，以 ", " 连接
    pub fn joined_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareResultInfo {
    #[allow(dead_code)]
    pub page: u32,
    #[allow(dead_code)]
    pub per_page: u32,
    pub total_count: u32,
}

/// Cloudflare Zone 结构
#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub paused: bool,
}

impl From<CloudflareZone> for Zone {
    fn from(zone: CloudflareZone) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
            status: ZoneStatus::parse(&zone.status),
            paused: zone.paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_list_response_parses() {
        let json = r#"{
            "success": true,
            "errors": [],
            "messages": [],
            "result": [
                {"id": "z1", "name": "example.com", "status": "active", "paused": false},
                {"id": "z2", "name": "example.org", "status": "pending", "paused": true}
            ],
            "result_info": {"page": 1, "per_page": 50, "count": 2, "total_count": 2, "total_pages": 1}
        }"#;
        let resp: CloudflareResponse<Vec<CloudflareZone>> = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        let zones: Vec<Zone> = resp.result.unwrap().into_iter().map(Zone::from).collect();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[1].status, ZoneStatus::Pending);
        assert!(zones[1].paused);
    }

    #[test]
    fn error_response_joins_messages() {
        let json = r#"{
            "success": false,
            "errors": [
                {"code": 10000, "message": "Authentication error"},
                {"code": 9109, "message": "Invalid access token"}
            ],
            "messages": [],
            "result": null
        }"#;
        let resp: CloudflareResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert_eq!(
            resp.first_error(),
            Some(("10000".to_string(), "Authentication error".to_string()))
        );
        assert_eq!(
            resp.joined_messages(),
            "Authentication error, Invalid access token"
        );
    }

    #[test]
    fn missing_errors_field_defaults_to_empty() {
        let resp: CloudflareResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success": false, "result": null}"#).unwrap();
        assert!(resp.first_error().is_none());
        assert!(resp.joined_messages().is_empty());
    }
}

//! 配置服务
//!
//! 读取 `<config_dir>/cf-purge/config.json`，再用环境变量覆盖：
//!
//! ```json
//! { "apiToken": "...", "defaultZoneId": "...", "language": "en-US", "theme": "dark" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cf_purge_core::PurgeConfig;
use serde::{Deserialize, Serialize};

/// API Token 环境变量
pub const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
/// 默认 Zone 环境变量
pub const ENV_DEFAULT_ZONE_ID: &str = "CLOUDFLARE_DEFAULT_ZONE_ID";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_token: Option<String>,
    pub default_zone_id: Option<String>,
    /// API 地址覆盖（测试或代理用）
    pub api_base: Option<String>,
    pub language: String,
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            default_zone_id: None,
            api_base: None,
            language: "en-US".to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl AppConfig {
    /// 用环境变量覆盖文件中的值（空字符串视为未设置）
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(token) = non_blank(ENV_API_TOKEN) {
            self.api_token = Some(token);
        }
        if let Some(zone_id) = non_blank(ENV_DEFAULT_ZONE_ID) {
            self.default_zone_id = Some(zone_id);
        }
        self
    }

    /// 转换为核心库配置
    ///
    /// 缺少 Token 时报错，并指出配置文件与环境变量两个来源。
    pub fn to_purge_config(&self, config_path: &Path) -> Result<PurgeConfig> {
        let token = self
            .api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .with_context(|| {
                format!(
                    "No Cloudflare API token configured. Set \"apiToken\" in {} or the {ENV_API_TOKEN} environment variable",
                    config_path.display()
                )
            })?;

        let config = PurgeConfig::new(token)
            .with_default_zone_id(self.default_zone_id.clone())
            .with_api_base(self.api_base.clone());
        config.validate()?;
        Ok(config)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 配置文件路径
    fn path(&self) -> &Path;

    /// 加载配置（文件不存在时返回默认值）
    fn load(&self) -> Result<AppConfig>;
}

/// 基于 JSON 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认配置文件路径
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cf-purge")
            .join("config.json")
    }
}

impl Default for FileConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for FileConfigService {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!(
                "Config file {} not found, using defaults",
                self.path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;

        log::debug!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "cf-purge-config-test-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let service = FileConfigService::new("/nonexistent/cf-purge/config.json");
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn load_reads_camel_case_keys() {
        let path = temp_file(
            "camel",
            r#"{"apiToken":"tok","defaultZoneId":"z1","language":"zh-CN","theme":"light"}"#,
        );
        let config = FileConfigService::new(&path).load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.api_token.as_deref(), Some("tok"));
        assert_eq!(config.default_zone_id.as_deref(), Some("z1"));
        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = temp_file("partial", r#"{"apiToken":"tok"}"#);
        let config = FileConfigService::new(&path).load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.theme, "dark");
        assert!(config.default_zone_id.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_file("broken", "{ not json");
        let result = FileConfigService::new(&path).load();
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let config = AppConfig {
            api_token: Some("from-file".into()),
            ..AppConfig::default()
        }
        .with_overrides(|key| match key {
            ENV_API_TOKEN => Some("from-env".into()),
            ENV_DEFAULT_ZONE_ID => Some("  ".into()),
            _ => None,
        });

        assert_eq!(config.api_token.as_deref(), Some("from-env"));
        assert!(config.default_zone_id.is_none());
    }

    #[test]
    fn missing_token_names_file_and_variable() {
        let err = AppConfig::default()
            .to_purge_config(Path::new("/etc/cf-purge.json"))
            .unwrap_err()
            .to_string();
        assert!(err.contains("/etc/cf-purge.json"));
        assert!(err.contains(ENV_API_TOKEN));
    }

    #[test]
    fn to_purge_config_carries_default_zone() {
        let config = AppConfig {
            api_token: Some("tok".into()),
            default_zone_id: Some("z1".into()),
            ..AppConfig::default()
        }
        .to_purge_config(Path::new("config.json"))
        .unwrap();

        assert_eq!(config.api_token, "tok");
        assert_eq!(config.default_zone_id.as_deref(), Some("z1"));
    }
}

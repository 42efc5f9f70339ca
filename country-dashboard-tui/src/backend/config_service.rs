//! 配置服务
//!
//! 配置文件位于 `{config_dir}/country-dashboard/config.json`，
//! 所有字段均可省略，缺省时使用默认值。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use country_dashboard_api::{ClientOptions, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 配置目录名
const APP_DIR: &str = "country-dashboard";
/// 配置文件名
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// API 根地址
    pub api_base_url: String,
    /// 搜索防抖（毫秒）
    pub search_debounce_ms: u64,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 临时性错误的重试次数
    pub max_retries: u32,
    /// `dark` / `light`
    pub theme: String,
    /// `en-US` / `zh-CN`
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            search_debounce_ms: 500,
            request_timeout_secs: 30,
            max_retries: 2,
            theme: "dark".to_string(),
            language: "en-US".to_string(),
        }
    }
}

impl AppConfig {
    /// 转换为 API 客户端选项
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.api_base_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_retries: self.max_retries,
            ..ClientOptions::default()
        }
    }
}

/// 配置读写错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 基于 JSON 文件的配置服务
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    /// 使用平台默认配置目录
    pub fn new() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    /// 使用指定的配置文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for FileConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = FileConfigService::with_path(dir.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"searchDebounceMs": 250, "theme": "light"}"#).unwrap();

        let config = FileConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.theme, "light");
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = FileConfigService::with_path(&path).load();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn save_then_load_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let service = FileConfigService::with_path(dir.path().join("nested/app/config.json"));
        let config = AppConfig {
            language: "zh-CN".to_string(),
            ..AppConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);

        let raw = fs::read_to_string(service.path()).unwrap();
        assert!(raw.contains("\"apiBaseUrl\""));
    }

    #[test]
    fn client_options_carry_timeout_and_retries() {
        let config = AppConfig {
            request_timeout_secs: 5,
            max_retries: 0,
            ..AppConfig::default()
        };
        let options = config.client_options();
        assert_eq!(options.request_timeout, Duration::from_secs(5));
        assert_eq!(options.max_retries, 0);
        assert_eq!(options.base_url, DEFAULT_BASE_URL);
    }
}

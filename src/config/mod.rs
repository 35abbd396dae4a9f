#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::api::DEFAULT_BASE_URL;
use crate::core::format::DEFAULT_CURRENCY;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use std::time::Duration;

pub use toml_config::TomlConfig;

pub const DEFAULT_STORAGE_PATH: &str = ".job-portal/session.json";

/// 合併預設值、TOML 檔案與命令列參數後的最終設定
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub base_url: String,
    pub storage_path: String,
    pub timeout_seconds: Option<u64>,
    pub default_currency: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            timeout_seconds: None,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ClientSettings {
    /// 以檔案中有設定的欄位覆蓋目前的值
    pub fn merge_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(base_url) = file.base_url() {
            self.base_url = base_url.to_string();
        }
        if let Some(path) = file.storage_path() {
            self.storage_path = path.to_string();
        }
        if let Some(timeout) = file.timeout_seconds() {
            self.timeout_seconds = Some(timeout);
        }
        if let Some(currency) = file.default_currency() {
            self.default_currency = currency.to_string();
        }
        self
    }
}

impl ConfigProvider for ClientSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn default_currency(&self) -> &str {
        &self.default_currency
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_path("storage.path", &self.storage_path)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("api.timeout_seconds", timeout, 1, 300)?;
        }
        validate_non_empty_string("display.default_currency", &self.default_currency)?;
        Ok(())
    }
}

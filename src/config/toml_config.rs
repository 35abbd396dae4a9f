use crate::utils::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub storage: Option<StorageConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub default_currency: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${JOB_PORTAL_API})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.api.as_ref()?.base_url.as_deref()
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.api.as_ref()?.timeout_seconds
    }

    pub fn storage_path(&self) -> Option<&str> {
        self.storage.as_ref()?.path.as_deref()
    }

    pub fn default_currency(&self) -> Option<&str> {
        self.display.as_ref()?.default_currency.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_toml_config_parsing() {
        let toml_content = r#"
[api]
base_url = "https://jobs.example.com/api"
timeout_seconds = 15

[storage]
path = "/tmp/job-portal/session.json"

[display]
default_currency = "USD"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), Some("https://jobs.example.com/api"));
        assert_eq!(config.timeout_seconds(), Some(15));
        assert_eq!(config.storage_path(), Some("/tmp/job-portal/session.json"));
        assert_eq!(config.default_currency(), Some("USD"));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[api]\n").unwrap();
        assert_eq!(config.base_url(), None);
        assert_eq!(config.storage_path(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JOB_PORTAL_TEST_BASE_URL", "https://env.example.com/api");

        let toml_content = r#"
[api]
base_url = "${JOB_PORTAL_TEST_BASE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), Some("https://env.example.com/api"));

        std::env::remove_var("JOB_PORTAL_TEST_BASE_URL");
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = TomlConfig::from_toml_str("[api\nbase_url = 1");
        assert!(matches!(
            result,
            Err(ClientError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\ndefault_currency = \"EUR\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_currency(), Some("EUR"));
    }
}

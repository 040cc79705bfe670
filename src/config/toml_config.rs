use crate::config::{DEFAULT_GALLERY_ROUTE, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MuralError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: BackendConfig,
    pub navigation: Option<NavigationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    pub gallery_route: Option<String>,
    pub site_url: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MuralError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MURAL_BACKEND_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MuralError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn site_url(&self) -> Option<&str> {
        self.navigation.as_ref()?.site_url.as_deref()
    }

    pub fn validate_config(&self) -> Result<()> {
        // 空字串或只有空白視為未設定
        if self.backend.endpoint.trim().is_empty() {
            return Err(MuralError::MissingConfigError {
                field: "backend.endpoint".to_string(),
            });
        }
        validation::validate_url("backend.endpoint", &self.backend.endpoint)?;

        if let Some(timeout) = self.backend.timeout_seconds {
            validation::validate_positive_number("backend.timeout_seconds", timeout, 1)?;
        }

        validation::validate_route("navigation.gallery_route", self.gallery_route())?;

        if let Some(site_url) = self.site_url() {
            validation::validate_url("navigation.site_url", site_url)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn backend_endpoint(&self) -> &str {
        &self.backend.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn gallery_route(&self) -> &str {
        self.navigation
            .as_ref()
            .and_then(|nav| nav.gallery_route.as_deref())
            .unwrap_or(DEFAULT_GALLERY_ROUTE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

use crate::adapters::open_meteo::DEFAULT_BASE_URL;
use crate::core::location_repository::default_locations;
use crate::domain::model::Location;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_unique, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    pub dashboard: Option<DashboardSettings>,
    #[serde(default = "default_locations")]
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub default_location: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            dashboard: None,
            locations: default_locations(),
        }
    }
}

impl DashboardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPEN_METEO_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashboardError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列的 `--base-url` 優先
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.provider.base_url = base_url;
        }
        self
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("provider.base_url", &self.provider.base_url)?;

        for location in &self.locations {
            validate_non_empty_string("locations.id", &location.id)?;
            validate_non_empty_string("locations.name", &location.name)?;
            validate_range("locations.latitude", location.latitude, -90.0, 90.0)?;
            validate_range("locations.longitude", location.longitude, -180.0, 180.0)?;
        }
        validate_unique(
            "locations.id",
            self.locations.iter().map(|location| location.id.as_str()),
        )?;

        if let Some(id) = self.default_location() {
            if !self.locations.iter().any(|location| location.id == id) {
                return Err(DashboardError::InvalidConfigValueError {
                    field: "dashboard.default_location".to_string(),
                    value: id.to_string(),
                    reason: "No location with this id is configured".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for DashboardConfig {
    fn base_url(&self) -> &str {
        &self.provider.base_url
    }

    fn locations(&self) -> &[Location] {
        &self.locations
    }

    fn default_location(&self) -> Option<&str> {
        self.dashboard
            .as_ref()
            .and_then(|settings| settings.default_location.as_deref())
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

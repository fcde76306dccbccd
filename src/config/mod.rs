pub mod toml_config;

pub use toml_config::DashboardConfig;

#[cfg(feature = "cli")]
use crate::domain::ports::{ConfigProvider, FixedClock};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "meteo-dash", version)]
#[command(about = "Current and ±7-day weather for a configured location")]
pub struct CliConfig {
    #[arg(help = "Location id to show (defaults to the configured default, then the first location)")]
    pub location: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the weather provider endpoint")]
    pub base_url: Option<String>,

    #[arg(long, help = "Anchor date for the ±7-day window, YYYY-MM-DD (defaults to today)")]
    pub anchor: Option<NaiveDate>,

    #[arg(long, help = "List the configured locations and exit")]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 設定檔（或內建預設）→ 命令列覆寫 → 驗證
    pub fn resolve(&self) -> Result<DashboardConfig> {
        let config = match &self.config {
            Some(path) => DashboardConfig::from_file(path)?,
            None => DashboardConfig::default(),
        };

        let config = config.with_base_url(self.base_url.clone());
        config.validate()?;
        Ok(config)
    }

    pub fn selected_location(&self, config: &DashboardConfig) -> Option<String> {
        self.location
            .clone()
            .or_else(|| config.default_location().map(str::to_string))
            .or_else(|| config.locations().first().map(|location| location.id.clone()))
    }

    pub fn anchor_clock(&self) -> Option<FixedClock> {
        self.anchor
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| FixedClock(naive.and_utc()))
    }
}

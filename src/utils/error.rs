use thiserror::Error;

/// 天氣資料來源（HTTP 層）的錯誤
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch weather data. Status: {status}")]
    Status { status: u16 },

    #[error("Weather API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode weather API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing current weather data in API response.")]
    MissingCurrentWeather,

    #[error("Missing daily weather data in API response.")]
    MissingDaily,

    #[error("Date window around {anchor} is outside the supported calendar range")]
    WindowOutOfRange { anchor: chrono::NaiveDate },
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{message}")]
    NotAvailable { message: String },

    #[error("Unknown location: {id}")]
    UnknownLocation { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DashboardError {
    pub fn not_available(message: impl Into<String>) -> Self {
        Self::NotAvailable {
            message: message.into(),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Fetch(_) => "Could not reach the weather service".to_string(),
            Self::NotAvailable { message } => message.clone(),
            Self::UnknownLocation { id } => format!("There is no location called '{}'", id),
            Self::Io(e) => format!("Could not read a file: {}", e),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Fetch(_) | Self::NotAvailable { .. } => {
                "Check your network connection and the provider base URL, then try again"
            }
            Self::UnknownLocation { .. } => "Run with --list to see the configured locations",
            Self::Io(_) => "Check that the configuration file exists and is readable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

pub mod response;
pub mod transform;

use crate::domain::model::Location;
use crate::domain::ports::{ConfigProvider, WeatherSource};
use crate::utils::error::{DashboardError, FetchError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, Utc};
use reqwest::Client;
use response::{CurrentEnvelope, CurrentWeatherResponse, RangeEnvelope, RangeWeatherRow};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

const DAILY_FIELDS: &str = "temperature_2m_max,wind_speed_10m_max,weather_code";
const WINDOW_DAYS: u64 = 7;

#[derive(Debug, Serialize)]
struct CurrentQuery<'a> {
    latitude: f64,
    longitude: f64,
    current_weather: bool,
    timezone: &'a str,
}

#[derive(Debug, Serialize)]
struct RangeQuery<'a> {
    latitude: f64,
    longitude: f64,
    daily: &'a str,
    timezone: &'a str,
    start_date: String,
    end_date: String,
}

/// 以 anchor 的 UTC 日期為中心，前後各 7 天（含頭尾共 15 天）。
/// 靠近 chrono 日期上下限時視窗無法表示，回傳錯誤。
pub fn range_window(
    anchor: DateTime<Utc>,
) -> std::result::Result<(NaiveDate, NaiveDate), FetchError> {
    let day = anchor.date_naive();
    let window = Days::new(WINDOW_DAYS);
    match (day.checked_sub_days(window), day.checked_add_days(window)) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(FetchError::WindowOutOfRange { anchor: day }),
    }
}

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: Url,
}

impl OpenMeteoClient {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("provider.base_url", base_url)?;
        let base_url = Url::parse(base_url).map_err(|e| DashboardError::InvalidConfigValueError {
            field: "provider.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .user_agent(concat!("meteo-dash/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::from)?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T, Q>(&self, query: &Q) -> std::result::Result<T, FetchError>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized,
    {
        tracing::debug!("Making weather API request to: {}", self.base_url);
        let response = self
            .client
            .get(self.base_url.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Weather API response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn current_once(
        &self,
        location: &Location,
    ) -> std::result::Result<CurrentWeatherResponse, FetchError> {
        let query = CurrentQuery {
            latitude: location.latitude,
            longitude: location.longitude,
            current_weather: true,
            timezone: "auto",
        };

        let envelope: CurrentEnvelope = self.get_json(&query).await?;
        envelope
            .current_weather
            .map(|current_weather| CurrentWeatherResponse { current_weather })
            .ok_or(FetchError::MissingCurrentWeather)
    }

    async fn range_once(
        &self,
        location: &Location,
        anchor: DateTime<Utc>,
    ) -> std::result::Result<Vec<RangeWeatherRow>, FetchError> {
        let (start, end) = range_window(anchor)?;
        let query = RangeQuery {
            latitude: location.latitude,
            longitude: location.longitude,
            daily: DAILY_FIELDS,
            timezone: "auto",
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
        };

        let envelope: RangeEnvelope = self.get_json(&query).await?;
        let daily = envelope.daily.ok_or(FetchError::MissingDaily)?;
        Ok(daily.into_rows())
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    /// 失敗時記錄後往上傳
    async fn fetch_current(
        &self,
        location: &Location,
    ) -> std::result::Result<CurrentWeatherResponse, FetchError> {
        self.current_once(location)
            .await
            .inspect_err(|e| tracing::error!("Error fetching current weather: {}", e))
    }

    /// 任何失敗都只記錄，回傳空清單
    async fn fetch_range(
        &self,
        location: &Location,
        anchor: DateTime<Utc>,
    ) -> std::result::Result<Vec<RangeWeatherRow>, FetchError> {
        match self.range_once(location, anchor).await {
            Ok(rows) => {
                tracing::debug!("Received {} daily rows for {}", rows.len(), location.id);
                Ok(rows)
            }
            Err(e) => {
                tracing::error!("Error fetching weather data: {}", e);
                Ok(Vec::new())
            }
        }
    }
}

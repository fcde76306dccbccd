use crate::adapters::open_meteo::response::{CurrentWeatherResponse, RangeWeatherRow};
use crate::domain::model::{Location, Weather};
use crate::utils::error::FetchError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// 外部天氣資料來源
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn fetch_current(
        &self,
        location: &Location,
    ) -> std::result::Result<CurrentWeatherResponse, FetchError>;

    /// 以 `anchor` 為中心前後各 7 天
    async fn fetch_range(
        &self,
        location: &Location,
        anchor: DateTime<Utc>,
    ) -> std::result::Result<Vec<RangeWeatherRow>, FetchError>;
}

/// 失敗一律轉成 `None`，不往上拋
#[async_trait]
pub trait WeatherRepository: Send + Sync {
    async fn fetch_current_weather(&self, location: &Location) -> Option<Weather>;

    async fn fetch_range_weather(
        &self,
        location: &Location,
        anchor: DateTime<Utc>,
    ) -> Option<Vec<Weather>>;
}

pub trait LocationRepository: Send + Sync {
    fn list_all(&self) -> Vec<Location>;
    fn find_by_id(&self, id: &str) -> Option<Location>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn locations(&self) -> &[Location];
    fn default_location(&self) -> Option<&str>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定時間點，用於指定 anchor 日期
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

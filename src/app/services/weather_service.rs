use crate::domain::model::{Location, Weather};
use crate::domain::ports::{Clock, SystemClock, WeatherRepository};
use crate::utils::error::DashboardError;

/// UI 使用的天氣服務。不會回傳錯誤，失敗一律是 `None`。
pub struct WeatherService<R: WeatherRepository> {
    repository: R,
    clock: Box<dyn Clock>,
}

impl<R: WeatherRepository> WeatherService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// repository 回傳 `None` 時視為錯誤並記錄
    pub async fn get_current_weather(&self, location: &Location) -> Option<Weather> {
        match self.repository.fetch_current_weather(location).await {
            Some(weather) => Some(weather),
            None => {
                let err = DashboardError::not_available("Weather data not available");
                tracing::error!("Error fetching current weather: {}", err);
                None
            }
        }
    }

    /// 以現在為 anchor；repository 的 `None` 直接往上傳，不記錄
    pub async fn get_7days_before_and_after_weather(
        &self,
        location: &Location,
    ) -> Option<Vec<Weather>> {
        let anchor = self.clock.now();
        self.repository.fetch_range_weather(location, anchor).await
    }
}

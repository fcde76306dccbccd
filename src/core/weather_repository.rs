use crate::adapters::open_meteo::transform::{normalize_current, normalize_range};
use crate::domain::model::{Location, Weather};
use crate::domain::ports::{WeatherRepository, WeatherSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub struct RemoteWeatherRepository<S: WeatherSource> {
    source: S,
}

impl<S: WeatherSource> RemoteWeatherRepository<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S: WeatherSource> WeatherRepository for RemoteWeatherRepository<S> {
    async fn fetch_current_weather(&self, location: &Location) -> Option<Weather> {
        match self.source.fetch_current(location).await {
            Ok(response) => Some(normalize_current(&response).at_location(location)),
            Err(e) => {
                tracing::error!("WeatherRepository error: {}", e);
                None
            }
        }
    }

    async fn fetch_range_weather(
        &self,
        location: &Location,
        anchor: DateTime<Utc>,
    ) -> Option<Vec<Weather>> {
        match self.source.fetch_range(location, anchor).await {
            Ok(rows) => Some(
                rows.iter()
                    .map(|row| normalize_range(row).at_location(location))
                    .collect(),
            ),
            Err(e) => {
                tracing::error!("WeatherRepository error: {}", e);
                None
            }
        }
    }
}

use crate::app::services::{LocationService, WeatherService};
use crate::domain::model::{Location, Weather};
use crate::domain::ports::{LocationRepository, WeatherRepository};
use crate::utils::error::{DashboardError, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub selected: Option<Location>,
    pub current: Option<Weather>,
    pub range: Option<Vec<Weather>>,
    /// 目前畫面資料所屬的選擇序號
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Applied,
    /// 有更新的選擇在途中開始，這次結果已丟棄
    Superseded,
}

/// 保存目前選擇的地點與天氣資料。
///
/// 每次 `select_location` 先取一個遞增序號再發出請求；結果回來時若序號已不是最新，
/// 直接丟棄。重疊的選擇因此不會讓舊請求覆蓋新結果。
pub struct Dashboard<W: WeatherRepository, L: LocationRepository> {
    weather: WeatherService<W>,
    locations: LocationService<L>,
    generation: AtomicU64,
    state: Mutex<DashboardState>,
}

impl<W: WeatherRepository, L: LocationRepository> Dashboard<W, L> {
    pub fn new(weather: WeatherService<W>, locations: LocationService<L>) -> Self {
        Self {
            weather,
            locations,
            generation: AtomicU64::new(0),
            state: Mutex::new(DashboardState::default()),
        }
    }

    pub fn locations(&self) -> Option<Vec<Location>> {
        self.locations.get_locations()
    }

    pub async fn select_location(&self, id: &str) -> Result<Selection> {
        let location = self
            .locations
            .find_location(id)
            .ok_or_else(|| DashboardError::UnknownLocation { id: id.to_string() })?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Selecting {} (generation {})", location.id, generation);

        let (current, range) = tokio::join!(
            self.weather.get_current_weather(&location),
            self.weather.get_7days_before_and_after_weather(&location),
        );

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(
                "Discarding weather for {} (generation {} superseded)",
                location.id,
                generation
            );
            return Ok(Selection::Superseded);
        }

        *state = DashboardState {
            selected: Some(location),
            current,
            range,
            generation,
        };
        Ok(Selection::Applied)
    }

    pub async fn snapshot(&self) -> DashboardState {
        self.state.lock().await.clone()
    }
}

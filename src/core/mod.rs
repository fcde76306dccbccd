pub mod location_repository;
pub mod weather_repository;

pub use crate::domain::model::{Location, Weather, WeatherDate};
pub use crate::domain::ports::{
    Clock, ConfigProvider, FixedClock, LocationRepository, SystemClock, WeatherRepository,
    WeatherSource,
};
pub use crate::utils::error::Result;
pub use location_repository::StaticLocationRepository;
pub use weather_repository::RemoteWeatherRepository;

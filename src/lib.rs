pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::open_meteo::OpenMeteoClient;
pub use app::services::{LocationService, WeatherService};
pub use app::{Dashboard, DashboardState, Selection};
pub use config::DashboardConfig;
pub use crate::core::{RemoteWeatherRepository, StaticLocationRepository};
pub use domain::model::{Location, Weather, WeatherDate};
pub use utils::error::{DashboardError, FetchError, Result};

pub mod location_service;
pub mod weather_service;

pub use location_service::LocationService;
pub use weather_service::WeatherService;

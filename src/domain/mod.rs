// Domain layer: models, WMO code table and ports (interfaces).

pub mod model;
pub mod ports;
pub mod weather_code;

use super::response::{CurrentWeatherResponse, RangeWeatherRow};
use crate::domain::model::{Weather, WeatherDate};
use crate::domain::weather_code;

/// 把即時天氣回應轉成領域模型；缺的欄位保持 `None`
pub fn normalize_current(response: &CurrentWeatherResponse) -> Weather {
    let current = &response.current_weather;

    Weather {
        temperature: current.temperature,
        wind_speed: current.windspeed,
        description: weather_code::describe(current.weathercode).to_string(),
        date: WeatherDate::parse(current.time.as_deref()),
        humidity: current.relative_humidity,
        location: None,
    }
}

/// 日期原樣帶過去，不重新解析
pub fn normalize_range(row: &RangeWeatherRow) -> Weather {
    Weather {
        temperature: row.temperature,
        wind_speed: row.wind_speed,
        description: weather_code::describe(row.weather_code).to_string(),
        date: row.date,
        humidity: None,
        location: None,
    }
}

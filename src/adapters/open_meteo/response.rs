//! Open-Meteo 回應的資料形狀。欄位名稱跟著 API 走，不是領域模型。

use crate::domain::model::WeatherDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub current_weather: CurrentConditions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub windspeed: Option<f64>,
    pub weathercode: Option<i64>,
    pub time: Option<String>,
}

/// 用來偵測 `current_weather` 是否存在
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentEnvelope {
    pub(crate) current_weather: Option<CurrentConditions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeWeatherRow {
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub weather_code: Option<i64>,
    pub date: WeatherDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RangeEnvelope {
    pub(crate) daily: Option<DailyColumns>,
}

/// 以欄為主的每日資料：同一索引代表同一天
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct DailyColumns {
    #[serde(default)]
    pub(crate) time: Vec<Option<String>>,
    #[serde(default)]
    pub(crate) temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) wind_speed_10m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) weather_code: Vec<Option<i64>>,
}

impl DailyColumns {
    /// 依 `time` 的每個索引組出一列；其他欄位較短時該欄為 `None`，
    /// 日期為 null 時記為 `Absent`
    pub(crate) fn into_rows(self) -> Vec<RangeWeatherRow> {
        self.time
            .iter()
            .enumerate()
            .map(|(i, time)| RangeWeatherRow {
                temperature: self.temperature_2m_max.get(i).copied().flatten(),
                wind_speed: self.wind_speed_10m_max.get(i).copied().flatten(),
                weather_code: self.weather_code.get(i).copied().flatten(),
                date: match time.as_deref() {
                    Some(raw) => WeatherDate::parse(Some(raw)),
                    None => WeatherDate::Absent,
                },
            })
            .collect()
    }
}

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            latitude,
            longitude,
        }
    }
}

/// 觀測 / 預報時間。上游欄位缺漏或無法解析時不會被補成「現在」。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum WeatherDate {
    Valid(DateTime<Utc>),
    /// 需要時間戳但缺漏或格式錯誤
    Invalid,
    /// 上游根本沒有提供日期
    Absent,
}

impl WeatherDate {
    /// 解析供應商的時間字串。
    ///
    /// 接受 RFC 3339、無時區的 `YYYY-MM-DDTHH:MM[:SS]`（視為 UTC）以及
    /// 純日期 `YYYY-MM-DD`（UTC 午夜）。`None` 或其他格式一律為 `Invalid`。
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::Invalid;
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Self::Valid(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Self::Valid(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self::Valid(naive.and_utc()))
            .unwrap_or(Self::Invalid)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(dt) => Some(*dt),
            Self::Invalid | Self::Absent => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// °C
    pub temperature: Option<f64>,
    /// km/h
    pub wind_speed: Option<f64>,
    pub description: String,
    pub date: WeatherDate,
    /// 相對濕度 %，只有即時資料可能帶
    pub humidity: Option<f64>,
    pub location: Option<Location>,
}

impl Weather {
    pub fn at_location(mut self, location: &Location) -> Self {
        self.location = Some(location.clone());
        self
    }
}

//! WMO 天氣代碼轉換
//!
//! 代碼表見 https://open-meteo.com/en/docs#weathervariables

pub const UNKNOWN_CONDITION: &str = "Unknown weather condition";

pub fn translate(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",

        // 霧
        45 => "Fog",
        48 => "Depositing rime fog",

        // 毛毛雨
        51 => "Drizzle: Light",
        53 => "Drizzle: Moderate",
        55 => "Drizzle: Dense intensity",

        // 雨
        61 => "Rain: Slight",
        63 => "Rain: Moderate",
        65 => "Rain: Heavy",
        66 => "Freezing Rain: Light",
        67 => "Freezing Rain: Heavy",

        // 雪
        71 => "Snowfall: Slight",
        73 => "Snowfall: Moderate",
        75 => "Snowfall: Heavy",
        77 => "Snow grains",

        // 陣雨 / 陣雪
        80 => "Rain showers: Slight",
        81 => "Rain showers: Moderate",
        82 => "Rain showers: Violent",
        85 => "Snow showers: Slight",
        86 => "Snow showers: Heavy",

        // 雷雨
        95 => "Thunderstorm: Slight or moderate",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",

        _ => UNKNOWN_CONDITION,
    }
}

/// 代碼缺漏時同樣回傳預設描述
pub fn describe(code: Option<i64>) -> &'static str {
    code.map(translate).unwrap_or(UNKNOWN_CONDITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [(i64, &str); 26] = [
        (0, "Clear sky"),
        (1, "Mainly clear"),
        (2, "Partly cloudy"),
        (3, "Overcast"),
        (45, "Fog"),
        (48, "Depositing rime fog"),
        (51, "Drizzle: Light"),
        (53, "Drizzle: Moderate"),
        (55, "Drizzle: Dense intensity"),
        (61, "Rain: Slight"),
        (63, "Rain: Moderate"),
        (65, "Rain: Heavy"),
        (66, "Freezing Rain: Light"),
        (67, "Freezing Rain: Heavy"),
        (71, "Snowfall: Slight"),
        (73, "Snowfall: Moderate"),
        (75, "Snowfall: Heavy"),
        (77, "Snow grains"),
        (80, "Rain showers: Slight"),
        (81, "Rain showers: Moderate"),
        (82, "Rain showers: Violent"),
        (85, "Snow showers: Slight"),
        (86, "Snow showers: Heavy"),
        (95, "Thunderstorm: Slight or moderate"),
        (96, "Thunderstorm with slight hail"),
        (99, "Thunderstorm with heavy hail"),
    ];

    #[test]
    fn test_known_codes() {
        for (code, expected) in KNOWN {
            assert_eq!(translate(code), expected, "code {}", code);
        }
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in -200..=200 {
            if KNOWN.iter().any(|(known, _)| *known == code) {
                continue;
            }
            assert_eq!(translate(code), UNKNOWN_CONDITION, "code {}", code);
        }
        assert_eq!(translate(i64::MAX), UNKNOWN_CONDITION);
        assert_eq!(translate(i64::MIN), UNKNOWN_CONDITION);
    }

    #[test]
    fn test_describe_missing_code() {
        assert_eq!(describe(None), UNKNOWN_CONDITION);
        assert_eq!(describe(Some(3)), "Overcast");
    }
}

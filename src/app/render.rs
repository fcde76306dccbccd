use crate::domain::model::{Location, Weather, WeatherDate};

const MISSING: &str = "--";

/// en-GB medium 樣式，例如 `4 Apr 2025`
pub fn format_date(date: &WeatherDate) -> String {
    match date.as_datetime() {
        Some(dt) => dt.format("%-d %b %Y").to_string(),
        None => MISSING.to_string(),
    }
}

fn format_value(value: Option<f64>, precision: usize, unit: &str) -> String {
    match value {
        Some(v) => format!("{v:.precision$}{unit}"),
        None => MISSING.to_string(),
    }
}

pub fn render_locations(locations: &[Location]) -> String {
    let mut lines = vec![format!(" {:<10} {:<12} {}", "ID", "Name", "Country")];
    for location in locations {
        lines.push(format!(
            " {:<10} {:<12} {}",
            location.id, location.name, location.country
        ));
    }
    lines.join("\n")
}

pub fn render_current(location: &Location, weather: Option<&Weather>) -> String {
    let mut lines = vec![format!(" {}, {}", location.name, location.country)];

    let Some(weather) = weather else {
        lines.push(format!(" {:13}{}", "Conditions", MISSING));
        return lines.join("\n");
    };

    lines.push(format!(" {:13}{}", "Date", format_date(&weather.date)));
    lines.push(format!(
        " {:13}{}",
        "Temperature",
        format_value(weather.temperature, 1, " °C")
    ));
    lines.push(format!(
        " {:13}{}",
        "Wind",
        format_value(weather.wind_speed, 1, " km/h")
    ));
    if weather.humidity.is_some() {
        lines.push(format!(
            " {:13}{}",
            "Humidity",
            format_value(weather.humidity, 0, "%")
        ));
    }
    lines.push(format!(" {:13}{}", "Conditions", weather.description));

    lines.join("\n")
}

pub fn render_range(range: Option<&[Weather]>) -> String {
    let Some(range) = range else {
        return format!(" {}", MISSING);
    };
    if range.is_empty() {
        return " No daily data".to_string();
    }

    let mut lines = vec![format!(
        " {:<12} {:>10} {:>12}  {}",
        "Date", "Max temp", "Max wind", "Conditions"
    )];
    for day in range {
        lines.push(format!(
            " {:<12} {:>10} {:>12}  {}",
            format_date(&day.date),
            format_value(day.temperature, 1, " °C"),
            format_value(day.wind_speed, 1, " km/h"),
            day.description
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn lisbon() -> Location {
        Location::new("lisbon", "Lisbon", "Portugal", 38.7169, -9.1399)
    }

    fn weather(date: WeatherDate) -> Weather {
        Weather {
            temperature: Some(13.64),
            wind_speed: Some(14.3),
            description: "Rain showers: Slight".to_string(),
            date,
            humidity: None,
            location: None,
        }
    }

    #[test]
    fn test_format_date() {
        let date = WeatherDate::Valid(Utc.with_ymd_and_hms(2025, 4, 4, 4, 0, 0).unwrap());
        assert_eq!(format_date(&date), "4 Apr 2025");
        assert_eq!(format_date(&WeatherDate::Invalid), "--");
        assert_eq!(format_date(&WeatherDate::Absent), "--");
    }

    #[test]
    fn test_render_current() {
        let date = WeatherDate::Valid(Utc.with_ymd_and_hms(2025, 4, 4, 4, 0, 0).unwrap());
        let output = render_current(&lisbon(), Some(&weather(date)));

        assert!(output.contains("Lisbon, Portugal"));
        assert!(output.contains("4 Apr 2025"));
        assert!(output.contains("13.6 °C"));
        assert!(output.contains("14.3 km/h"));
        assert!(output.contains("Rain showers: Slight"));
        assert!(!output.contains("Humidity"));
    }

    #[test]
    fn test_render_current_missing_values() {
        let mut partial = weather(WeatherDate::Invalid);
        partial.temperature = None;
        partial.humidity = Some(61.0);

        let output = render_current(&lisbon(), Some(&partial));

        assert!(output.contains("Temperature  --"));
        assert!(output.contains("Humidity     61%"));
        assert!(render_current(&lisbon(), None).contains("Conditions   --"));
    }

    #[test]
    fn test_render_range() {
        let date = WeatherDate::Valid(Utc.with_ymd_and_hms(2025, 3, 28, 0, 0, 0).unwrap());
        let days = vec![weather(date), weather(WeatherDate::Absent)];

        let output = render_range(Some(days.as_slice()));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("28 Mar 2025"));
        assert!(lines[2].starts_with(" --"));
        assert_eq!(render_range(Some(&[][..])), " No daily data");
        assert_eq!(render_range(None), " --");
    }

    #[test]
    fn test_render_locations() {
        let output = render_locations(&[lisbon()]);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("lisbon"));
        assert!(output.contains("Portugal"));
    }
}

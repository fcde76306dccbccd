use chrono::{TimeZone, Utc};
use httpmock::prelude::*;
use meteo_dash::core::FixedClock;
use meteo_dash::{
    Dashboard, DashboardConfig, LocationService, OpenMeteoClient, RemoteWeatherRepository,
    Selection, StaticLocationRepository, WeatherDate, WeatherService,
};

type LiveDashboard = Dashboard<RemoteWeatherRepository<OpenMeteoClient>, StaticLocationRepository>;

fn build_dashboard(server: &MockServer) -> LiveDashboard {
    let config = DashboardConfig::default().with_base_url(Some(server.url("/v1/forecast")));
    let client = OpenMeteoClient::from_config(&config).unwrap();
    let anchor = Utc.with_ymd_and_hms(2025, 4, 4, 4, 0, 0).unwrap();

    Dashboard::new(
        WeatherService::new(RemoteWeatherRepository::new(client)).with_clock(FixedClock(anchor)),
        LocationService::new(StaticLocationRepository::from_config(&config)),
    )
}

#[tokio::test]
async fn test_end_to_end_selection_with_mock_provider() {
    let server = MockServer::start();

    let current_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/forecast")
            .query_param("latitude", "38.7169")
            .query_param("longitude", "-9.1399")
            .query_param("current_weather", "true");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "current_weather": {
                    "temperature": 13.6,
                    "windspeed": 14.3,
                    "weathercode": 80,
                    "time": "2025-04-04T04:00"
                }
            }));
    });

    let range_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/forecast")
            .query_param_exists("daily")
            .query_param("start_date", "2025-03-28")
            .query_param("end_date", "2025-04-11");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "daily": {
                    "temperature_2m_max": [22.2, 23.8, 19.1],
                    "wind_speed_10m_max": [15.5, 14.0, 30.2],
                    "weather_code": [1, 3, 95],
                    "time": ["2025-03-28", "2025-03-29", "2025-03-30"]
                }
            }));
    });

    let dashboard = build_dashboard(&server);
    let outcome = dashboard.select_location("lisbon").await.unwrap();

    current_mock.assert();
    range_mock.assert();
    assert_eq!(outcome, Selection::Applied);

    let state = dashboard.snapshot().await;
    let current = state.current.unwrap();
    assert_eq!(current.temperature, Some(13.6));
    assert_eq!(current.description, "Rain showers: Slight");
    assert_eq!(
        current.date,
        WeatherDate::Valid(Utc.with_ymd_and_hms(2025, 4, 4, 4, 0, 0).unwrap())
    );
    assert_eq!(current.location.unwrap().id, "lisbon");

    let range = state.range.unwrap();
    let descriptions: Vec<&str> = range.iter().map(|w| w.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec!["Mainly clear", "Overcast", "Thunderstorm: Slight or moderate"]
    );
    assert!(range.iter().all(|w| w.date.is_valid()));
}

#[tokio::test]
async fn test_provider_failure_keeps_divergent_policies() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/forecast");
        then.status(500);
    });

    let dashboard = build_dashboard(&server);
    let outcome = dashboard.select_location("funchal").await.unwrap();

    api_mock.assert_hits(2);
    assert_eq!(outcome, Selection::Applied);

    let state = dashboard.snapshot().await;
    assert_eq!(state.selected.unwrap().id, "funchal");
    // 即時資料：錯誤往上傳，最後變成 None
    assert!(state.current.is_none());
    // 區間資料：來源吞掉錯誤，得到空清單
    assert_eq!(state.range, Some(Vec::new()));
}

#[tokio::test]
async fn test_missing_current_weather_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/v1/forecast")
            .query_param("current_weather", "true");
        then.status(200).json_body(serde_json::json!({ "latitude": 32.6496 }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/v1/forecast").query_param_exists("daily");
        then.status(200).json_body(serde_json::json!({
            "daily": {
                "temperature_2m_max": [],
                "wind_speed_10m_max": [],
                "weather_code": [],
                "time": []
            }
        }));
    });

    let dashboard = build_dashboard(&server);
    dashboard.select_location("funchal").await.unwrap();

    let state = dashboard.snapshot().await;
    assert!(state.current.is_none());
    assert_eq!(state.range, Some(Vec::new()));
}

#[tokio::test]
async fn test_unknown_location_makes_no_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/forecast");
        then.status(200);
    });

    let dashboard = build_dashboard(&server);
    let result = dashboard.select_location("Lisbon").await;

    assert!(result.is_err());
    api_mock.assert_hits(0);
}

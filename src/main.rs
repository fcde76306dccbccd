use anyhow::Context;
use clap::Parser;
use meteo_dash::app::render::{render_current, render_locations, render_range};
use meteo_dash::utils::logger;
use meteo_dash::{
    CliConfig, Dashboard, DashboardError, LocationService, OpenMeteoClient,
    RemoteWeatherRepository, StaticLocationRepository, WeatherService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting meteo-dash");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e, 1),
    };

    let client = OpenMeteoClient::from_config(&config)
        .context("failed to build the weather API client")?;
    tracing::debug!("Using weather provider at {}", client.base_url());

    let mut weather = WeatherService::new(RemoteWeatherRepository::new(client));
    if let Some(clock) = cli.anchor_clock() {
        weather = weather.with_clock(clock);
    }
    let locations = LocationService::new(StaticLocationRepository::from_config(&config));
    let dashboard = Dashboard::new(weather, locations);

    if cli.list {
        match dashboard.locations() {
            Some(locations) => println!("{}", render_locations(&locations)),
            None => exit_with(&DashboardError::not_available("No locations available"), 2),
        }
        return Ok(());
    }

    let Some(id) = cli.selected_location(&config) else {
        exit_with(&DashboardError::not_available("No locations available"), 2);
    };

    if let Err(e) = dashboard.select_location(&id).await {
        exit_with(&e, 1);
    }

    let state = dashboard.snapshot().await;
    if let Some(location) = &state.selected {
        println!("{}", render_current(location, state.current.as_ref()));
        println!();
        println!("{}", render_range(state.range.as_deref()));
    }

    Ok(())
}

fn exit_with(e: &DashboardError, code: i32) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(code);
}

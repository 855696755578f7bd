use crate::app_config::AppConfig;
use crate::console::StdPrompter;
use crate::geocoder::NominatimGeocoder;
use tracing::info;

mod app_config;
mod console;
mod distance;
mod domain;
mod geocoder;
mod map_renderer;
mod trip_planner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::WARN).init();

    info!("🧭 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    let client = geocoder::new_client(&config)?;
    let geocoder = NominatimGeocoder::new(client, &config);

    trip_planner::run(&StdPrompter, &geocoder, &config).await?;

    Ok(())
}

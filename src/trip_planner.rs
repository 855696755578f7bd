use crate::app_config::AppConfig;
use crate::console::Prompter;
use crate::distance::total_distance_km;
use crate::domain::{Route, Stop, TravelSummary, TripParameters};
use crate::geocoder::Geocode;
use crate::map_renderer::{MapRendererError, render_map};
use std::io;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, instrument};

/// Runs one trip from address collection to the printed summary. Returns the
/// summary so the whole flow stays observable in tests.
pub async fn run(
    prompter: &impl Prompter,
    geocoder: &impl Geocode,
    config: &AppConfig,
) -> Result<TravelSummary, TripError> {
    let addresses = collect_addresses(prompter)?;
    let parameters = collect_parameters(prompter)?;

    let route = resolve_route(prompter, geocoder, config, addresses).await?;
    render_map(route.stops(), Path::new(config.map().file())).await?;

    let summary = TravelSummary::calculate(total_distance_km(&route.coordinates()), &parameters);
    print_summary(&summary);

    Ok(summary)
}

fn collect_addresses(prompter: &impl Prompter) -> Result<Vec<String>, TripError> {
    println!("Enter the addresses travelled to, one per line. Enter a blank line to finish:");

    let mut addresses = Vec::new();
    loop {
        let address = prompter.read_line("Address: ")?;
        if address.is_empty() {
            break;
        }
        addresses.push(address);
    }

    Ok(addresses)
}

fn collect_parameters(prompter: &impl Prompter) -> Result<TripParameters, TripError> {
    let clients = prompt_number(prompter, "How many clients were seen during travel? ", |_: &u32| true)?;
    let hourly_rate = prompt_number(prompter, "How much is charged for travel per hour (in dollars)? ", |_: &f64| true)?;
    let average_speed_kmh = prompt_number(
        prompter,
        "Enter average travel speed in km/h (e.g., 60): ",
        |speed: &f64| *speed > 0.0,
    )?;

    Ok(TripParameters {
        clients,
        hourly_rate,
        average_speed_kmh,
    })
}

fn prompt_number<T, P>(prompter: &impl Prompter, prompt: &str, accept: P) -> Result<T, TripError>
where
    T: FromStr,
    P: Fn(&T) -> bool,
{
    loop {
        let line = prompter.read_line(prompt)?;
        match line.parse::<T>() {
            Ok(value) if accept(&value) => return Ok(value),
            Ok(_) => println!("That value must be greater than zero, please try again."),
            Err(_) => println!("That is not a valid number, please try again."),
        }
    }
}

#[instrument(skip_all)]
async fn resolve_route(
    prompter: &impl Prompter,
    geocoder: &impl Geocode,
    config: &AppConfig,
    addresses: Vec<String>,
) -> Result<Route, TripError> {
    println!("Geocoding addresses...");

    let mut route = Route::new();
    for address in addresses {
        let stop = resolve_stop(prompter, geocoder, config, address).await?;
        info!("📍 Resolved '{}' to ({})", stop.address, stop.coordinate);
        route.push(stop);
    }

    Ok(route)
}

/// Resolves one address, letting the user correct it after a failed lookup.
/// Unlike the geocoder itself, this loop is bounded: after the configured
/// number of attempts the trip fails instead of hanging forever.
async fn resolve_stop(
    prompter: &impl Prompter,
    geocoder: &impl Geocode,
    config: &AppConfig,
    mut address: String,
) -> Result<Stop, TripError> {
    let max_attempts = config.geocoder().max_attempts();

    for attempt in 1..=max_attempts {
        let coordinate = geocoder.lookup(&address).await;
        // Nominatim allows at most one request per second
        sleep(config.geocoder().lookup_pause()).await;

        match coordinate {
            Some(coordinate) => return Ok(Stop::new(address, coordinate)),
            None if attempt < max_attempts => {
                println!("Could not geocode address: {address}");
                println!("Please try again or check the address.");
                address = prompter.read_line(&format!("Re-enter address for {address}: "))?;
            }
            None => {}
        }
    }

    Err(TripError::GeocodingFailed {
        address,
        attempts: max_attempts,
    })
}

fn print_summary(summary: &TravelSummary) {
    println!("Total travel distance: {:.2} km", summary.total_distance_km);
    println!("Estimated total travel time: {:.2} hours", summary.total_time_hours);
    println!("Total travel cost: ${:.2}", summary.total_cost);
    println!("Travel cost per client: ${:.2}", summary.cost_per_client);
}

#[derive(Error, Debug)]
pub enum TripError {
    #[error("could not geocode '{address}' after {attempts} attempt(s)")]
    GeocodingFailed { address: String, attempts: u32 },
    #[error(transparent)]
    MapRenderer(#[from] MapRendererError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

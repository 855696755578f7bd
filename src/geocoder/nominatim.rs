use crate::app_config::AppConfig;
use crate::domain::Coordinate;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// A single address-to-coordinate lookup. The trait is the seam the trip
/// planner depends on; retry policy lives with the caller, not here.
#[async_trait]
pub trait Geocode {
    /// Resolves an address, or reports that no coordinate could be found.
    /// Never fails louder than that: every error collapses to `None` with a
    /// diagnostic naming the address and the cause.
    async fn lookup(&self, address: &str) -> Option<Coordinate>;
}

pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        NominatimGeocoder {
            client,
            base_url: config.geocoder().url().to_string(),
        }
    }

    async fn search(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?;

        let places = response.json::<Vec<Place>>().await?;
        let place = places.into_iter().next().ok_or(GeocodeError::NotFound)?;

        // Nominatim serializes lat/lon as strings
        let latitude = place
            .lat
            .parse::<f64>()
            .map_err(|_| GeocodeError::MalformedCoordinate(place.lat.clone()))?;
        let longitude = place
            .lon
            .parse::<f64>()
            .map_err(|_| GeocodeError::MalformedCoordinate(place.lon.clone()))?;

        Ok(Coordinate { latitude, longitude })
    }
}

#[async_trait]
impl Geocode for NominatimGeocoder {
    #[instrument(skip(self))]
    async fn lookup(&self, address: &str) -> Option<Coordinate> {
        match self.search(address).await {
            Ok(coordinate) => {
                debug!("📍 Geocoded '{}' to ({})", address, coordinate);
                Some(coordinate)
            }
            Err(e) => {
                warn!("⚠️ Could not geocode '{}': {}", address, e);
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

#[derive(Error, Debug)]
enum GeocodeError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("no results")]
    NotFound,
    #[error("unparsable coordinate value '{0}'")]
    MalformedCoordinate(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::geocoder::new_client;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn geocoder_for(server: &Server) -> NominatimGeocoder {
        let config = AppConfigBuilder::new().geocoder_url(server.url()).build();
        let client = new_client(&config).unwrap();
        NominatimGeocoder::new(client, &config)
    }

    #[test(tokio::test)]
    async fn lookup_returns_the_first_result() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Brandenburger Tor, Berlin".into()),
                Matcher::UrlEncoded("format".into(), "json".into()),
                Matcher::UrlEncoded("limit".into(), "1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"lat": "52.5162699", "lon": "13.3776576", "display_name": "Brandenburger Tor"}]"#)
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);
        let coordinate = geocoder.lookup("Brandenburger Tor, Berlin").await;

        mock.assert();
        assert_eq!(
            coordinate,
            Some(Coordinate {
                latitude: 52.516_269_9,
                longitude: 13.377_657_6,
            })
        );
    }

    #[test(tokio::test)]
    async fn lookup_reports_not_found_for_an_empty_result_list() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);

        assert_eq!(geocoder.lookup("Atlantis").await, None);
    }

    #[test(tokio::test)]
    async fn lookup_reports_not_found_when_the_service_errors() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);

        assert_eq!(geocoder.lookup("Berlin").await, None);
    }

    #[test(tokio::test)]
    async fn lookup_reports_not_found_for_an_unparsable_coordinate() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"lat": "not-a-number", "lon": "13.3776576"}]"#)
            .create_async()
            .await;

        let geocoder = geocoder_for(&server);

        assert_eq!(geocoder.lookup("Berlin").await, None);
    }

    #[test(tokio::test)]
    async fn lookup_reports_not_found_when_the_service_is_unreachable() {
        let config = AppConfigBuilder::new()
            .geocoder_url("http://127.0.0.1:1".to_string())
            .build();
        let client = new_client(&config).unwrap();
        let geocoder = NominatimGeocoder::new(client, &config);

        assert_eq!(geocoder.lookup("Berlin").await, None);
    }
}

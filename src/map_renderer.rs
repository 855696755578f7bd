use crate::domain::Stop;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::instrument;

const INITIAL_ZOOM: u32 = 13;

#[derive(Serialize)]
struct Marker {
    label: String,
    lat: f64,
    lon: f64,
}

/// Writes a self-contained Leaflet map for the route: one marker per stop,
/// labeled with the address and its 1-based position, and a polyline through
/// the stops in travel order. Overwrites any existing file at `path`.
#[instrument(skip(stops))]
pub async fn render_map(stops: &[Stop], path: &Path) -> Result<(), MapRendererError> {
    let html = map_html(stops)?;
    fs::write(path, html).await.map_err(|source| MapRendererError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    println!("Map saved as {}", path.display());
    Ok(())
}

fn map_html(stops: &[Stop]) -> Result<String, MapRendererError> {
    // The initial view centers on the first stop, so an empty route has
    // nothing to render.
    let center = stops.first().map(|stop| stop.coordinate).ok_or(MapRendererError::EmptyRoute)?;

    let markers = stops
        .iter()
        .enumerate()
        .map(|(i, stop)| Marker {
            label: format!("{} ({})", stop.address, i + 1),
            lat: stop.coordinate.latitude,
            lon: stop.coordinate.longitude,
        })
        .collect::<Vec<_>>();
    let stops_json = serde_json::to_string(&markers)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Travel map</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
const stops = {stops_json};
const map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
  attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
for (const stop of stops) {{
  L.marker([stop.lat, stop.lon]).bindPopup(stop.label).addTo(map);
}}
L.polyline(stops.map(stop => [stop.lat, stop.lon]), {{ color: 'blue' }}).addTo(map);
</script>
</body>
</html>
"#,
        stops_json = stops_json,
        lat = center.latitude,
        lon = center.longitude,
        zoom = INITIAL_ZOOM,
    ))
}

#[derive(Error, Debug)]
pub enum MapRendererError {
    #[error("cannot render a map without stops")]
    EmptyRoute,
    #[error("could not write map to '{path}': {source}")]
    Io { source: std::io::Error, path: PathBuf },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

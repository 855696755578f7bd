mod client;
mod nominatim;

pub use client::{GeocoderClientError, new_client};
pub use nominatim::{Geocode, NominatimGeocoder};

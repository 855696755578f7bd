use crate::domain::Coordinate;
use haversine::{Location, Units, distance};

/// Sums the great-circle distances between each consecutive pair of
/// coordinates, in kilometers. A route of fewer than two coordinates has
/// travelled no distance.
pub fn total_distance_km(coordinates: &[Coordinate]) -> f64 {
    coordinates.windows(2).map(|pair| segment_km(pair[0], pair[1])).sum()
}

fn segment_km(from: Coordinate, to: Coordinate) -> f64 {
    distance(
        Location {
            latitude: from.latitude,
            longitude: from.longitude,
        },
        Location {
            latitude: to.latitude,
            longitude: to.longitude,
        },
        Units::Kilometers,
    )
}

mod coordinate;
mod route;
mod summary;

pub use coordinate::Coordinate;
pub use route::{Route, Stop};
pub use summary::{TravelSummary, TripParameters};

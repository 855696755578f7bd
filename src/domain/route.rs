use crate::domain::Coordinate;

/// A single visited address with its resolved coordinate.
#[derive(Clone, PartialEq, Debug)]
pub struct Stop {
    pub address: String,
    pub coordinate: Coordinate,
}

impl Stop {
    pub fn new(address: String, coordinate: Coordinate) -> Self {
        Stop { address, coordinate }
    }
}

/// The travelled route, in entry order. Order is significant and is never
/// reordered after collection.
#[derive(Default, Debug)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    pub fn new() -> Self {
        Route::default()
    }

    pub fn push(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.stops.iter().map(|stop| stop.coordinate).collect()
    }
}

use std::fmt;

/// A geographic coordinate in decimal degrees. Only ever produced by the
/// geocoder; a failed lookup yields no coordinate at all.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_formats_with_four_decimals() {
        let coordinate = Coordinate {
            latitude: 52.520_006_6,
            longitude: 13.404_954,
        };

        assert_eq!(coordinate.to_string(), "52.5200, 13.4050");
    }
}

/// Billing parameters collected from the user before geocoding starts.
#[derive(Clone, PartialEq, Debug)]
pub struct TripParameters {
    pub clients: u32,
    pub hourly_rate: f64,
    pub average_speed_kmh: f64,
}

/// Derived figures for a completed trip. Computed once, printed, discarded.
#[derive(Clone, PartialEq, Debug)]
pub struct TravelSummary {
    pub total_distance_km: f64,
    pub total_time_hours: f64,
    pub total_cost: f64,
    pub cost_per_client: f64,
}

impl TravelSummary {
    pub fn calculate(total_distance_km: f64, parameters: &TripParameters) -> Self {
        let total_time_hours = total_distance_km / parameters.average_speed_kmh;
        let total_cost = total_time_hours * parameters.hourly_rate;
        let cost_per_client = if parameters.clients > 0 {
            total_cost / f64::from(parameters.clients)
        } else {
            0.0
        };

        TravelSummary {
            total_distance_km,
            total_time_hours,
            total_cost,
            cost_per_client,
        }
    }
}

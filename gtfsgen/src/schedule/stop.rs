use serde::Serialize;

/// a row of stops.txt. coordinates are kept in their written form
/// (`%+.6f`) so identical stops from different rows compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Stop {
    pub stop_id: String,
    pub stop_code: String,
    pub stop_name: String,
    pub stop_desc: String,
    pub stop_lat: String,
    pub stop_lon: String,
    pub zone_id: String,
    pub stop_url: String,
    pub location_type: i64,
    pub parent_station: String,
    pub stop_timezone: String,
    pub wheelchair_boarding: i64,
}

impl Stop {
    pub fn format_coordinate(value: f64) -> String {
        format!("{value:+.6}")
    }
}

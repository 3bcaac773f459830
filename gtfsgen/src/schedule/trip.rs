use serde::Serialize;

/// a row of trips.txt. every trip column of a worksheet yields one trip and
/// all trips of a worksheet share the attributes of its header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub trip_headsign: String,
    pub trip_short_name: String,
    pub direction_id: String,
    pub block_id: String,
    pub shape_id: String,
    pub wheelchair_accessible: String,
    pub bikes_allowed: String,
}

use serde::Serialize;

/// a row of stop_times.txt. rows between timepoints carry empty times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopTime {
    pub trip_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_id: String,
    /// copied verbatim from the worksheet
    pub stop_sequence: String,
    pub stop_headsign: String,
    pub pickup_type: String,
    pub drop_off_type: String,
    #[serde(rename = "shape_dist_traveled")]
    pub distance_traveled: String,
}

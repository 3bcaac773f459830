use serde::{Serialize, Serializer};

/// a row of shapes.txt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapePoint {
    pub shape_id: String,
    #[serde(rename = "shape_pt_lat", serialize_with = "six_decimals")]
    pub lat: f64,
    #[serde(rename = "shape_pt_lon", serialize_with = "six_decimals")]
    pub lon: f64,
    #[serde(rename = "shape_pt_sequence")]
    pub sequence: u32,
    #[serde(rename = "shape_dist_traveled", serialize_with = "two_decimals")]
    pub cumulative_distance: f64,
}

fn six_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.6}"))
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}

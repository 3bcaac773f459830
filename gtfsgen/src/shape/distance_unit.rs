use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;
use uom::si::length::{foot, kilometer, meter, mile};

/// unit of the cumulative distances written to shapes.txt
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Feet,
    #[default]
    Miles,
    Meters,
    Kilometers,
}

impl DistanceUnit {
    /// reads a configured unit name. unknown names fall back to miles.
    pub fn from_name(name: &str) -> DistanceUnit {
        match name.trim().to_lowercase().as_str() {
            "feet" | "foot" | "ft" => DistanceUnit::Feet,
            "miles" | "mile" | "mi" => DistanceUnit::Miles,
            "meters" | "meter" | "m" => DistanceUnit::Meters,
            "kilometers" | "kilometer" | "km" => DistanceUnit::Kilometers,
            other => {
                log::warn!("unknown distance unit '{other}', using miles");
                DistanceUnit::Miles
            }
        }
    }

    pub fn convert(&self, length: Length) -> f64 {
        match self {
            DistanceUnit::Feet => length.get::<foot>(),
            DistanceUnit::Miles => length.get::<mile>(),
            DistanceUnit::Meters => length.get::<meter>(),
            DistanceUnit::Kilometers => length.get::<kilometer>(),
        }
    }
}

/// geodesic (WGS-84 ellipsoid) distance between two (x=lon, y=lat) points
pub fn geodesic_distance(src_point: Point<f64>, dst_point: Point<f64>) -> Length {
    Length::new::<meter>(Geodesic.distance(src_point, dst_point))
}

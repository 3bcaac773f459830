mod distance_unit;
mod kml_ops;
mod shape_accumulator;
mod shape_path_builder;
mod shape_point;
mod shape_source;

pub use distance_unit::{geodesic_distance, DistanceUnit};
pub use kml_ops::{parse_coordinates, read_kml_segments, KmlError, KML_NAMESPACE};
pub use shape_accumulator::{build_shape_path, ShapeAccumulator};
pub use shape_path_builder::ShapePathBuilder;
pub use shape_point::ShapePoint;
pub use shape_source::{resolve_shape_sources, ShapeSource};

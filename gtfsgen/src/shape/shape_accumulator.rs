use super::{geodesic_distance, DistanceUnit, ShapePoint};
use geo::{Coord, Point};

/// running state of one shape: the last sequence number written, the
/// distance covered so far and the last point seen. it is carried across
/// every source and segment of a shape and starts fresh for the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeAccumulator {
    pub sequence: u32,
    pub accumulated_distance: f64,
    pub previous_point: Option<Point<f64>>,
}

impl ShapeAccumulator {
    pub fn advance(self, coord: Coord<f64>, unit: DistanceUnit) -> ShapeAccumulator {
        let point = Point::from(coord);
        let step = match self.previous_point {
            Some(previous) => unit.convert(geodesic_distance(previous, point)),
            None => 0.0,
        };
        ShapeAccumulator {
            sequence: self.sequence + 1,
            accumulated_distance: self.accumulated_distance + step,
            previous_point: Some(point),
        }
    }

    /// appends one segment of (x=lon, y=lat) coordinates to the path
    pub fn extend(
        self,
        shape_id: &str,
        segment: &[Coord<f64>],
        unit: DistanceUnit,
    ) -> (ShapeAccumulator, Vec<ShapePoint>) {
        let mut acc = self;
        let mut points = Vec::with_capacity(segment.len());
        for coord in segment {
            acc = acc.advance(*coord, unit);
            points.push(ShapePoint {
                shape_id: shape_id.to_string(),
                lat: coord.y,
                lon: coord.x,
                sequence: acc.sequence,
                cumulative_distance: acc.accumulated_distance,
            });
        }
        (acc, points)
    }
}

/// builds the full path of a shape from its sources (each a list of
/// segments), in order
pub fn build_shape_path(
    shape_id: &str,
    sources: &[Vec<Vec<Coord<f64>>>],
    unit: DistanceUnit,
) -> Vec<ShapePoint> {
    let mut acc = ShapeAccumulator::default();
    let mut path = vec![];
    for segment in sources.iter().flatten() {
        let (next, points) = acc.extend(shape_id, segment, unit);
        acc = next;
        path.extend(points);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_path_continues_across_sources() {
        let first = vec![vec![
            coord! { x: -80.0, y: 39.0 },
            coord! { x: -80.0, y: 39.01 },
        ]];
        let second = vec![
            vec![coord! { x: -80.0, y: 39.02 }],
            vec![coord! { x: -80.01, y: 39.02 }],
        ];
        let path = build_shape_path("blue", &[first, second], DistanceUnit::Miles);

        let sequences: Vec<u32> = path.iter().map(|p| p.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4]);
        assert_eq!(path[0].cumulative_distance, 0.0);
        assert!(path
            .windows(2)
            .all(|w| w[0].cumulative_distance < w[1].cumulative_distance));

        // the third point is measured from the last point of the first source
        let expected = DistanceUnit::Miles.convert(geodesic_distance(
            Point::new(-80.0, 39.01),
            Point::new(-80.0, 39.02),
        ));
        let step = path[2].cumulative_distance - path[1].cumulative_distance;
        assert!((step - expected).abs() < 1e-9);
        assert_eq!((path[2].lat, path[2].lon), (39.02, -80.0));
    }

    #[test]
    fn test_empty_sources_emit_nothing() {
        let path = build_shape_path("none", &[vec![], vec![vec![]]], DistanceUnit::Feet);
        assert!(path.is_empty());
    }
}

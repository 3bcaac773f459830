use super::{
    build_shape_path, read_kml_segments, resolve_shape_sources, DistanceUnit, ShapePoint,
    ShapeSource,
};
use crate::report::GeneratorException;
use std::path::PathBuf;

/// reads the KML sources of a shape and turns them into one sequenced,
/// distance-annotated path.
#[derive(Debug, Clone)]
pub struct ShapePathBuilder {
    kml_root: PathBuf,
    unit: DistanceUnit,
}

impl ShapePathBuilder {
    pub fn new(kml_root: impl Into<PathBuf>, unit: DistanceUnit) -> ShapePathBuilder {
        ShapePathBuilder {
            kml_root: kml_root.into(),
            unit,
        }
    }

    /// a file that cannot be read or parsed is reported and skipped; the
    /// path carries on with the remaining files.
    pub fn build(&self, shape_id: &str) -> (Vec<ShapePoint>, Vec<GeneratorException>) {
        let mut exceptions = vec![];
        let missing = || GeneratorException::MissingSource {
            shape_id: shape_id.to_string(),
            directory: self.kml_root.display().to_string(),
        };
        let source = match resolve_shape_sources(&self.kml_root, shape_id) {
            Ok(ShapeSource::Missing) => return (vec![], vec![missing()]),
            Ok(source) => source,
            Err(e) => {
                log::error!("failed reading shape manifest for '{shape_id}': {e}");
                return (vec![], vec![missing()]);
            }
        };

        let mut sources = vec![];
        for file in source.files() {
            match read_kml_segments(file) {
                Ok((segments, errors)) => {
                    exceptions.extend(errors);
                    sources.push(segments);
                }
                Err(e) => exceptions.push(e.into_exception(shape_id)),
            }
        }
        let path = build_shape_path(shape_id, &sources, self.unit);
        log::debug!(
            "shape '{shape_id}': {} points from {} file(s)",
            path.len(),
            source.files().len()
        );
        (path, exceptions)
    }
}

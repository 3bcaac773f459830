use std::path::{Path, PathBuf};

/// where the coordinates of a shape come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeSource {
    /// `<shape_id>.kml`
    Single(PathBuf),
    /// the KML files listed, in order, by `<shape_id>.txt`
    Manifest {
        manifest: PathBuf,
        files: Vec<PathBuf>,
    },
    Missing,
}

impl ShapeSource {
    pub fn files(&self) -> &[PathBuf] {
        match self {
            ShapeSource::Single(path) => std::slice::from_ref(path),
            ShapeSource::Manifest { files, .. } => files,
            ShapeSource::Missing => &[],
        }
    }
}

/// looks for `<shape_id>.kml` under `kml_root`, then for a manifest
/// `<shape_id>.txt` listing KML files separated by commas or newlines.
/// listed files are relative to `kml_root`.
pub fn resolve_shape_sources(
    kml_root: &Path,
    shape_id: &str,
) -> Result<ShapeSource, std::io::Error> {
    let single = kml_root.join(format!("{shape_id}.kml"));
    if single.is_file() {
        return Ok(ShapeSource::Single(single));
    }
    let manifest = kml_root.join(format!("{shape_id}.txt"));
    if manifest.is_file() {
        let listing = std::fs::read_to_string(&manifest)?;
        let files = listing
            .split([',', '\n', '\r'])
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(|f| kml_root.join(f))
            .collect();
        return Ok(ShapeSource::Manifest { manifest, files });
    }
    Ok(ShapeSource::Missing)
}

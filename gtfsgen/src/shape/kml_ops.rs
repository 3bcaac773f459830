//! reads route line coordinates out of KML documents. a document holds its
//! lines either inside folders or directly under the document element.
use crate::report::GeneratorException;
use geo::{coord, Coord};
use roxmltree::{Document, Node};
use std::path::Path;

pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

const FOLDER_PATH: [&str; 5] = [
    "Document",
    "Folder",
    "Placemark",
    "LineString",
    "coordinates",
];
const DOCUMENT_PATH: [&str; 4] = ["Document", "Placemark", "LineString", "coordinates"];

#[derive(thiserror::Error, Debug)]
pub enum KmlError {
    #[error("failed reading {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed parsing {path}: {source}")]
    XmlError {
        path: String,
        source: roxmltree::Error,
    },
}

impl KmlError {
    /// the exception recorded against the shape whose source failed
    pub fn into_exception(self, shape_id: &str) -> GeneratorException {
        match self {
            KmlError::ReadError { path, source } => {
                log::debug!("{path}: {source}");
                GeneratorException::MissingSource {
                    shape_id: shape_id.to_string(),
                    directory: path,
                }
            }
            KmlError::XmlError { path, source } => {
                GeneratorException::parse_error(path, "kml document", source)
            }
        }
    }
}

/// reads the line segments of a KML file. each coordinates element is one
/// segment of (x=lon, y=lat) coordinates. malformed tuples are returned as
/// exceptions and left out of their segment.
pub fn read_kml_segments(
    path: &Path,
) -> Result<(Vec<Vec<Coord<f64>>>, Vec<GeneratorException>), KmlError> {
    let text = std::fs::read_to_string(path).map_err(|source| KmlError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    let document = Document::parse(&text).map_err(|source| KmlError::XmlError {
        path: path.display().to_string(),
        source,
    })?;
    let root = document.root_element();
    if root.tag_name().namespace() != Some(KML_NAMESPACE) {
        log::debug!(
            "{} uses namespace {:?} rather than {KML_NAMESPACE}",
            path.display(),
            root.tag_name().namespace()
        );
    }

    let mut elements = find_all(root, &FOLDER_PATH);
    if elements.is_empty() {
        elements = find_all(root, &DOCUMENT_PATH);
    }

    let mut segments = vec![];
    let mut exceptions = vec![];
    for element in elements {
        let (segment, errors) = parse_coordinates(element.text().unwrap_or_default());
        exceptions.extend(errors.into_iter().map(|token| {
            GeneratorException::parse_error(
                path.display().to_string(),
                &token,
                "expected lon,lat[,alt]",
            )
        }));
        segments.push(segment);
    }
    Ok((segments, exceptions))
}

/// element path lookup by local name, one level per path step
fn find_all<'a, 'input>(root: Node<'a, 'input>, path: &[&str]) -> Vec<Node<'a, 'input>> {
    path.iter().fold(vec![root], |nodes, step| {
        nodes
            .into_iter()
            .flat_map(|n| n.children())
            .filter(|c| c.is_element() && c.tag_name().name() == *step)
            .collect()
    })
}

/// splits whitespace-delimited `lon,lat[,alt]` tuples. returns the parsed
/// coordinates and the tuples that failed to parse.
pub fn parse_coordinates(text: &str) -> (Vec<Coord<f64>>, Vec<String>) {
    let mut coords = vec![];
    let mut errors = vec![];
    for token in text.split_whitespace() {
        let mut parts = token.split(',');
        let lon = parts.next().and_then(|v| v.trim().parse::<f64>().ok());
        let lat = parts.next().and_then(|v| v.trim().parse::<f64>().ok());
        match (lon, lat) {
            (Some(x), Some(y)) if parts.clone().count() <= 1 => coords.push(coord! { x: x, y: y }),
            _ => errors.push(token.to_string()),
        }
    }
    (coords, errors)
}

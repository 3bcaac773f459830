#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("failure writing {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure writing csv rows to {path}: {source}")]
    CsvError { path: String, source: csv::Error },
    #[error("failure packaging {path}: {source}")]
    ZipError {
        path: String,
        source: zip::result::ZipError,
    },
}

impl FeedError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> FeedError {
        FeedError::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}

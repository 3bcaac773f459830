use crate::{
    config::ConfigError, feed::FeedError, report::GeneratorException,
    schedule::WorksheetSourceError,
};

#[derive(thiserror::Error, Debug)]
pub enum GtfsGenError {
    #[error("failure reading run configuration: {source}")]
    ConfigurationError {
        #[from]
        source: ConfigError,
    },
    #[error("worksheet source failed: {source}")]
    ExternalServiceError {
        #[from]
        source: WorksheetSourceError,
    },
    #[error("worksheet does not match the schema: {0}")]
    SchemaError(GeneratorException),
    #[error("failure writing feed: {source}")]
    FeedError {
        #[from]
        source: FeedError,
    },
    #[error("failure creating exception log in {path}: {source}")]
    ReportError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure writing output: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}

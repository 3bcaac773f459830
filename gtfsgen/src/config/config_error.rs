#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

mod config_error;
mod fares_config;
mod generator_config;

pub use config_error::ConfigError;
pub use fares_config::{FareConfig, FaresConfig};
pub use generator_config::{FeedConfig, GeneratorConfig, WorkbookConfig, ENV_PREFIX};

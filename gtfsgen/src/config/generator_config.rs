use super::{ConfigError, FaresConfig};
use crate::{
    calendar::date_codec::deserialize_optional_naive_date, feed::Agency,
    schedule::WorksheetSchema, shape::DistanceUnit,
};
use chrono::NaiveDate;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// environment variables such as `GTFSGEN__GTFS_ROOT` override file values
pub const ENV_PREFIX: &str = "GTFSGEN";

/// a workbook to process. with no worksheets listed, every worksheet the
/// source holds for it is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookConfig {
    pub name: String,
    #[serde(default)]
    pub worksheets: Vec<String>,
}

/// feed_info.txt values. without a version, the run time (`%Y%m%d.%H`) is
/// used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub publisher_name: String,
    pub publisher_url: String,
    pub lang: String,
    pub version: Option<String>,
}

/// run configuration for a feed generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// unit feeds are written below this directory, the master feed into it
    pub gtfs_root: PathBuf,
    /// worksheet exports, `<source_root>/<workbook>/<worksheet>.csv`
    pub source_root: PathBuf,
    pub kml_root: PathBuf,
    pub report_root: PathBuf,
    pub dist_units: Option<String>,
    /// the longest allowed span, in days, between feed start and end
    pub max_span_days: u32,
    /// labels of the holidays without service
    pub holidays: Vec<String>,
    #[serde(deserialize_with = "deserialize_optional_naive_date")]
    pub feed_start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "deserialize_optional_naive_date")]
    pub feed_end_date: Option<NaiveDate>,
    pub default_route_type: String,
    pub ignore_sheets: Vec<String>,
    pub workbooks: Vec<WorkbookConfig>,
    pub agency: Agency,
    pub feed: FeedConfig,
    pub fares: FaresConfig,
    pub schema: WorksheetSchema,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            gtfs_root: PathBuf::from("gtfs"),
            source_root: PathBuf::from("worksheets"),
            kml_root: PathBuf::from("kml"),
            report_root: PathBuf::from("reports"),
            dist_units: None,
            max_span_days: 364,
            holidays: vec![],
            feed_start_date: None,
            feed_end_date: None,
            default_route_type: String::from("3"),
            ignore_sheets: vec![],
            workbooks: vec![],
            agency: Agency::default(),
            feed: FeedConfig::default(),
            fares: FaresConfig::default(),
            schema: WorksheetSchema::default(),
        }
    }
}

impl GeneratorConfig {
    /// loads a TOML configuration file, applying environment overrides
    pub fn from_file(filepath: &str) -> Result<GeneratorConfig, ConfigError> {
        let config = Config::builder()
            .add_source(File::new(filepath, FileFormat::Toml))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| ConfigError::ConfigReadError {
                msg: format!("failed reading '{filepath}'"),
                source: e,
            })?;
        Self::from_config(config, filepath)
    }

    /// loads configuration from TOML text
    pub fn from_toml_str(toml: &str) -> Result<GeneratorConfig, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::ConfigReadError {
                msg: String::from("failed reading configuration text"),
                source: e,
            })?;
        Self::from_config(config, "configuration text")
    }

    fn from_config(config: Config, origin: &str) -> Result<GeneratorConfig, ConfigError> {
        let generator_config = config
            .try_deserialize::<GeneratorConfig>()
            .map_err(|e| ConfigError::ConfigReadError {
                msg: format!("failed deserializing '{origin}'"),
                source: e,
            })?;
        generator_config.validate()?;
        Ok(generator_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agency.agency_id.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(String::from(
                "agency.agency_id is required, it names the master archive",
            )));
        }
        if let (Some(start), Some(end)) = (self.feed_start_date, self.feed_end_date) {
            if end < start {
                return Err(ConfigError::InvalidConfig(format!(
                    "feed_end_date {end} is before feed_start_date {start}"
                )));
            }
        }
        Ok(())
    }

    pub fn distance_unit(&self) -> DistanceUnit {
        self.dist_units
            .as_deref()
            .map(DistanceUnit::from_name)
            .unwrap_or_default()
    }
}

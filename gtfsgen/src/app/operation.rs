use super::{generate_ops, GtfsGenError, RunContext};
use crate::{calendar::date_codec, config::GeneratorConfig, schedule::CsvWorksheetSource};
use chrono::{Local, NaiveDate};
use clap::Subcommand;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum GtfsGenOperation {
    /// decode every configured worksheet into a unit feed, then merge and
    /// package the master feed
    Generate {
        /// TOML run configuration
        #[arg(long)]
        config: String,
        /// date standing in for today when no feed start date is configured,
        /// as YYYYMMDD
        #[arg(long, value_parser = date_codec::parse_date)]
        run_date: Option<NaiveDate>,
    },
    /// merge existing unit feeds into the master feed and package it
    Merge {
        /// TOML run configuration
        #[arg(long)]
        config: String,
    },
    /// print the service window and the configured holidays it contains
    Holidays {
        /// TOML run configuration
        #[arg(long)]
        config: String,
        #[arg(long, value_parser = date_codec::parse_date)]
        run_date: Option<NaiveDate>,
    },
}

impl GtfsGenOperation {
    pub fn run(&self) -> Result<(), GtfsGenError> {
        match self {
            GtfsGenOperation::Generate { config, run_date } => {
                let config = GeneratorConfig::from_file(config)?;
                let context = RunContext::new(Local::now(), *run_date);
                let source = CsvWorksheetSource::new(&config.source_root);
                let summary = generate_ops::generate(&config, &source, &context)?;
                log::info!(
                    "generated {} unit feed(s), {} failed, {} exception(s) logged",
                    summary.units_processed,
                    summary.units_failed,
                    summary.exceptions
                );
                Ok(())
            }
            GtfsGenOperation::Merge { config } => {
                let config = GeneratorConfig::from_file(config)?;
                let source = CsvWorksheetSource::new(&config.source_root);
                let summary = generate_ops::merge(&config, &source)?;
                log::info!("merged {} unit feed(s)", summary.units_processed);
                Ok(())
            }
            GtfsGenOperation::Holidays { config, run_date } => {
                let config = GeneratorConfig::from_file(config)?;
                let context = RunContext::new(Local::now(), *run_date);
                let report = generate_ops::holiday_report(&config, &context);
                println!("{}", serde_json::to_string_pretty(&report)?);
                Ok(())
            }
        }
    }
}

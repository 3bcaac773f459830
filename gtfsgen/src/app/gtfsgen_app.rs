use super::GtfsGenOperation;
use clap::Parser;

/// command line tool that generates a GTFS feed from worksheet schedules,
/// KML route lines and a holiday calendar
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GtfsGenApp {
    #[command(subcommand)]
    pub op: GtfsGenOperation,
}

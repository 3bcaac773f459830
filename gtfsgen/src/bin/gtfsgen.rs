//! generates a GTFS feed from worksheet schedules, KML route lines and a
//! holiday calendar, one unit feed per worksheet plus a merged master feed.
use clap::Parser;
use gtfsgen::app::GtfsGenApp;

fn main() {
    env_logger::init();
    let args = GtfsGenApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

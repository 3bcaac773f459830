mod generate_ops;
mod gtfsgen_app;
mod gtfsgen_error;
mod operation;
mod run_summary;

pub use generate_ops::{
    enumerate_units, generate, holiday_report, merge, static_tables, HolidayReport, RunContext,
    UnitPipeline,
};
pub use gtfsgen_app::GtfsGenApp;
pub use gtfsgen_error::GtfsGenError;
pub use operation::GtfsGenOperation;
pub use run_summary::RunSummary;

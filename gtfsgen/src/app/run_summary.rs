use serde::Serialize;
use std::path::PathBuf;

/// outcome of a generate or merge run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub units_processed: usize,
    pub units_failed: usize,
    pub exceptions: usize,
    pub archive: Option<PathBuf>,
}

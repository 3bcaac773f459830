use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// one worksheet within one workbook. every unit produces its own feed
/// directory at `<gtfs_root>/<workbook>/<worksheet>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessingUnit {
    pub workbook: String,
    pub worksheet: String,
}

impl ProcessingUnit {
    pub fn new(workbook: &str, worksheet: &str) -> ProcessingUnit {
        ProcessingUnit {
            workbook: workbook.to_string(),
            worksheet: worksheet.to_string(),
        }
    }

    pub fn output_directory(&self, gtfs_root: &Path) -> PathBuf {
        gtfs_root.join(&self.workbook).join(&self.worksheet)
    }
}

impl Display for ProcessingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.workbook, self.worksheet)
    }
}

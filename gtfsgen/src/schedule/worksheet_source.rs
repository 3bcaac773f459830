use super::WorksheetMatrix;
use crate::report::ProcessingUnit;
use std::{fs::File, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum WorksheetSourceError {
    #[error("failed opening worksheet {path}: {source}")]
    OpenError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed reading worksheet {path}: {source}")]
    ReadError { path: String, source: csv::Error },
    #[error("failed listing workbook {path}: {source}")]
    ListError {
        path: String,
        source: std::io::Error,
    },
}

/// supplies the cell matrix of one worksheet.
pub trait WorksheetSource {
    fn worksheet(&self, unit: &ProcessingUnit) -> Result<WorksheetMatrix, WorksheetSourceError>;

    /// names of all worksheets of a workbook, in the order they should be
    /// processed
    fn worksheet_names(&self, workbook: &str) -> Result<Vec<String>, WorksheetSourceError>;
}

/// worksheets exported as `<source_root>/<workbook>/<worksheet>.csv`
#[derive(Debug, Clone)]
pub struct CsvWorksheetSource {
    source_root: PathBuf,
}

impl CsvWorksheetSource {
    pub fn new(source_root: impl Into<PathBuf>) -> CsvWorksheetSource {
        CsvWorksheetSource {
            source_root: source_root.into(),
        }
    }

    fn worksheet_path(&self, unit: &ProcessingUnit) -> PathBuf {
        self.source_root
            .join(&unit.workbook)
            .join(format!("{}.csv", unit.worksheet))
    }
}

impl WorksheetSource for CsvWorksheetSource {
    fn worksheet(&self, unit: &ProcessingUnit) -> Result<WorksheetMatrix, WorksheetSourceError> {
        let path = self.worksheet_path(unit);
        let file = File::open(&path).map_err(|source| WorksheetSourceError::OpenError {
            path: path.display().to_string(),
            source,
        })?;
        WorksheetMatrix::from_csv_reader(file).map_err(|source| WorksheetSourceError::ReadError {
            path: path.display().to_string(),
            source,
        })
    }

    fn worksheet_names(&self, workbook: &str) -> Result<Vec<String>, WorksheetSourceError> {
        let directory = self.source_root.join(workbook);
        let list_error = |source| WorksheetSourceError::ListError {
            path: directory.display().to_string(),
            source,
        };
        let mut names = vec![];
        for entry in std::fs::read_dir(&directory).map_err(list_error)? {
            let path = entry.map_err(list_error)?.path();
            if path.extension().is_some_and(|ext| ext == "csv") {
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_worksheets_of_a_workbook() {
        let dir = tempfile::tempdir().expect("temp dir");
        let workbook = dir.path().join("Blue");
        std::fs::create_dir_all(&workbook).expect("workbook dir");
        std::fs::write(workbook.join("Weekday.csv"), "a,b\nc,d\n").expect("write");
        std::fs::write(workbook.join("Saturday.csv"), "e\n").expect("write");
        std::fs::write(workbook.join("notes.md"), "ignored").expect("write");

        let source = CsvWorksheetSource::new(dir.path());
        let names = source.worksheet_names("Blue").expect("listed");
        assert_eq!(
            names,
            vec![String::from("Saturday"), String::from("Weekday")]
        );

        let matrix = source
            .worksheet(&ProcessingUnit::new("Blue", "Weekday"))
            .expect("read");
        assert_eq!(matrix.cell(1, 1), Ok("d"));

        let missing = source.worksheet(&ProcessingUnit::new("Blue", "Sunday"));
        assert!(matches!(
            missing,
            Err(WorksheetSourceError::OpenError { .. })
        ));
    }
}

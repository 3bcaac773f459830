use crate::report::GeneratorException;
use std::io::Read;

/// a worksheet as a grid of string cells, 0-indexed by row then column.
/// rows may be ragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorksheetMatrix {
    rows: Vec<Vec<String>>,
}

impl WorksheetMatrix {
    pub fn new(rows: Vec<Vec<String>>) -> WorksheetMatrix {
        WorksheetMatrix { rows }
    }

    /// reads a header-less, possibly ragged CSV export of a worksheet.
    /// cells are trimmed.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<WorksheetMatrix, csv::Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut rows = vec![];
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.trim().to_string()).collect());
        }
        Ok(WorksheetMatrix { rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&str, GeneratorException> {
        let cells = self.rows.get(row).ok_or_else(|| {
            GeneratorException::StructuralError(format!(
                "row {row} is outside the worksheet ({} rows)",
                self.rows.len()
            ))
        })?;
        cells.get(column).map(String::as_str).ok_or_else(|| {
            GeneratorException::StructuralError(format!(
                "column {column} is outside row {row} ({} cells)",
                cells.len()
            ))
        })
    }
}

impl From<Vec<Vec<&str>>> for WorksheetMatrix {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        WorksheetMatrix::new(
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
    }
}

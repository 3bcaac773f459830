use super::{GeneratorException, ProcessingUnit};
use chrono::{DateTime, Local};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

pub const EXCEPTION_LOG_FILENAME: &str = "exceptions.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionEntry {
    pub unit: ProcessingUnit,
    pub exception: GeneratorException,
}

/// append-only log of every exception raised during a run, keyed by unit.
/// entries are kept in memory and, when a sink file is attached, appended
/// to it as they arrive.
#[derive(Debug, Default)]
pub struct ExceptionLog {
    entries: Vec<ExceptionEntry>,
    sink: Option<(PathBuf, File)>,
}

impl ExceptionLog {
    /// a log with no file sink
    pub fn in_memory() -> ExceptionLog {
        ExceptionLog::default()
    }

    /// truncates (or creates) `<directory>/exceptions.txt` and writes the
    /// run start line.
    pub fn create(
        directory: &Path,
        started: &DateTime<Local>,
    ) -> Result<ExceptionLog, std::io::Error> {
        std::fs::create_dir_all(directory)?;
        let path = directory.join(EXCEPTION_LOG_FILENAME);
        let mut file = File::create(&path)?;
        writeln!(
            file,
            "gtfsgen process start: {}",
            started.format("%Y-%m-%d %H:%M:%S")
        )?;
        let file = OpenOptions::new().append(true).open(&path)?;
        Ok(ExceptionLog {
            entries: vec![],
            sink: Some((path, file)),
        })
    }

    pub fn record(&mut self, unit: &ProcessingUnit, exception: GeneratorException) {
        log::warn!("{unit}: {exception}");
        if let Some((path, file)) = self.sink.as_mut() {
            let line = format!(
                "workbook: {} worksheet: {} exception: {}",
                unit.workbook, unit.worksheet, exception
            );
            if let Err(e) = writeln!(file, "{line}") {
                log::error!("failed appending to {}: {e}", path.display());
            }
        }
        self.entries.push(ExceptionEntry {
            unit: unit.clone(),
            exception,
        });
    }

    pub fn record_all(
        &mut self,
        unit: &ProcessingUnit,
        exceptions: impl IntoIterator<Item = GeneratorException>,
    ) {
        for exception in exceptions {
            self.record(unit, exception);
        }
    }

    pub fn entries_for<'a>(
        &'a self,
        unit: &'a ProcessingUnit,
    ) -> impl Iterator<Item = &'a GeneratorException> + 'a {
        self.entries
            .iter()
            .filter(move |e| &e.unit == unit)
            .map(|e| &e.exception)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

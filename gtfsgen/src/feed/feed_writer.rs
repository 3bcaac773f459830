use super::{FeedError, GtfsFile};
use csv::QuoteStyle;
use serde::Serialize;
use std::{fs::File, path::Path};

/// writes one feed file in a single pass: the canonical header line, then
/// every record. an existing file is replaced.
pub fn write_table<T: Serialize>(
    directory: &Path,
    file: GtfsFile,
    records: &[T],
) -> Result<(), FeedError> {
    let filepath = directory.join(file.filename());
    let csv_error = |source| FeedError::CsvError {
        path: filepath.display().to_string(),
        source,
    };
    let mut writer = create_writer(&filepath, QuoteStyle::Necessary)?;
    writer
        .write_record(file.header().split(','))
        .map_err(csv_error)?;
    for record in records {
        writer.serialize(record).map_err(csv_error)?;
    }
    writer
        .flush()
        .map_err(|source| FeedError::io(&filepath, source))?;
    log::debug!("wrote {} rows to {}", records.len(), filepath.display());
    Ok(())
}

fn create_writer(filepath: &Path, quote_style: QuoteStyle) -> Result<csv::Writer<File>, FeedError> {
    let file = File::create(filepath).map_err(|source| FeedError::io(filepath, source))?;
    let writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(quote_style)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    Ok(writer)
}

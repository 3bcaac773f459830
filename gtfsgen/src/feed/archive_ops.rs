use super::FeedError;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

pub fn archive_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(format!("{name}.zip"))
}

/// packages every `*.txt` file of `directory` into `<directory>/<name>.zip`
/// with deflate compression. returns the archived file names, sorted.
pub fn archive_directory(directory: &Path, name: &str) -> Result<Vec<String>, FeedError> {
    let mut filenames = vec![];
    let entries = std::fs::read_dir(directory).map_err(|e| FeedError::io(directory, e))?;
    for entry in entries {
        let path = entry.map_err(|e| FeedError::io(directory, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            if let Some(filename) = path.file_name() {
                filenames.push(filename.to_string_lossy().to_string());
            }
        }
    }
    filenames.sort();

    let zip_path = archive_path(directory, name);
    let zip_error = |source| FeedError::ZipError {
        path: zip_path.display().to_string(),
        source,
    };
    let file = File::create(&zip_path).map_err(|e| FeedError::io(&zip_path, e))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for filename in filenames.iter() {
        let source = directory.join(filename);
        let bytes = std::fs::read(&source).map_err(|e| FeedError::io(&source, e))?;
        zip.start_file(filename.as_str(), options).map_err(zip_error)?;
        zip.write_all(&bytes).map_err(|e| FeedError::io(&zip_path, e))?;
    }
    zip.finish().map_err(zip_error)?;
    log::info!(
        "packaged {} files into {}",
        filenames.len(),
        zip_path.display()
    );
    Ok(filenames)
}

use super::{archive_directory, FeedError, GtfsFile};
use indexmap::IndexSet;
use std::path::PathBuf;

/// merges unit feeds into one master feed. for every file the unit copies
/// are concatenated in unit order without their headers and reduced to
/// distinct lines, first occurrence first.
#[derive(Debug, Clone)]
pub struct FeedAssembler {
    master_directory: PathBuf,
}

impl FeedAssembler {
    pub fn new(master_directory: impl Into<PathBuf>) -> FeedAssembler {
        FeedAssembler {
            master_directory: master_directory.into(),
        }
    }

    /// merges all eleven files. returns the number of distinct data lines
    /// written for each.
    pub fn merge(
        &self,
        unit_directories: &[PathBuf],
    ) -> Result<Vec<(GtfsFile, usize)>, FeedError> {
        let mut counts = Vec::with_capacity(GtfsFile::ALL.len());
        for file in GtfsFile::ALL {
            counts.push((file, self.merge_file(file, unit_directories)?));
        }
        Ok(counts)
    }

    /// rebuilds one master file from scratch, creating the master directory
    /// when needed. a unit without the file contributes nothing.
    pub fn merge_file(
        &self,
        file: GtfsFile,
        unit_directories: &[PathBuf],
    ) -> Result<usize, FeedError> {
        std::fs::create_dir_all(&self.master_directory)
            .map_err(|e| FeedError::io(&self.master_directory, e))?;
        let master_path = self.master_directory.join(file.filename());
        if master_path.exists() {
            std::fs::remove_file(&master_path).map_err(|e| FeedError::io(&master_path, e))?;
        }

        let header = file.header();
        let mut lines: IndexSet<String> = IndexSet::new();
        for directory in unit_directories {
            let unit_path = directory.join(file.filename());
            if !unit_path.is_file() {
                log::warn!(
                    "{} is missing, skipping it in the merge",
                    unit_path.display()
                );
                continue;
            }
            let contents = std::fs::read_to_string(&unit_path)
                .map_err(|e| FeedError::io(&unit_path, e))?;
            for line in contents.lines() {
                if line.trim().is_empty() || line == header {
                    continue;
                }
                lines.insert(line.to_string());
            }
        }

        let mut output = String::with_capacity(header.len() + 1);
        output.push_str(header);
        output.push('\n');
        for line in lines.iter() {
            output.push_str(line);
            output.push('\n');
        }
        std::fs::write(&master_path, output).map_err(|e| FeedError::io(&master_path, e))?;
        log::debug!(
            "merged {} lines into {}",
            lines.len(),
            master_path.display()
        );
        Ok(lines.len())
    }

    /// packages the master feed as `<name>.zip` in the master directory
    pub fn package(&self, name: &str) -> Result<Vec<String>, FeedError> {
        archive_directory(&self.master_directory, name)
    }
}

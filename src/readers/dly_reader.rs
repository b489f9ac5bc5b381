use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;

/// Reads a `.dly` station file into record lines.
///
/// Empty lines are filtered here so the parser only ever sees records.
pub struct DlyReader {
    use_mmap: bool,
}

impl DlyReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    pub fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let lines = if self.use_mmap {
            self.read_lines_mmap(path)?
        } else {
            self.read_lines_buffered(path)?
        };

        debug!(path = %path.display(), records = lines.len(), "read station file");
        Ok(lines)
    }

    fn read_lines_buffered(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut lines = Vec::new();

        for line_result in reader.lines() {
            let line = line_result?;
            if line.trim().is_empty() {
                continue;
            }
            lines.push(line);
        }

        Ok(lines)
    }

    /// Memory-mapped read path for large station files.
    fn read_lines_mmap(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let content = std::str::from_utf8(&mmap)
            .map_err(|e| ProcessingError::InvalidFormat(format!("Invalid UTF-8: {}", e)))?;

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl Default for DlyReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_lines_are_filtered() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "CHM00057679202001TAVG   40    51")?;
        writeln!(temp_file)?;
        writeln!(temp_file, "CHM00057679202001PRCP    0  -9999")?;
        writeln!(temp_file, "   ")?;

        let reader = DlyReader::new();
        let lines = reader.read_lines(temp_file.path())?;

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("TAVG"));
        assert!(lines[1].contains("PRCP"));

        Ok(())
    }

    #[test]
    fn test_mmap_matches_buffered() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "CHM00057679202001TMIN  -12   -20")?;
        writeln!(temp_file)?;
        writeln!(temp_file, "CHM00057679202001TMAX  102    95")?;

        let buffered = DlyReader::new().read_lines(temp_file.path())?;
        let mapped = DlyReader::with_mmap(true).read_lines(temp_file.path())?;

        assert_eq!(buffered, mapped);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let reader = DlyReader::new();
        assert!(reader.read_lines(Path::new("/nonexistent/station.dly")).is_err());
    }
}

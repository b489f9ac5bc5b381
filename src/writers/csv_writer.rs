use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::models::{DailyObservation, Dataset, TableRow};

/// Writes one delimited table per variable type.
///
/// Column order and content follow `TableRow` exactly; downstream consumers
/// rely on that contract.
/// Header row of every written table
const TABLE_COLUMNS: [&str; 7] = ["datetime", "year", "month", "day", "value", "color", "type"];

pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Write each variable group to `<output_dir>/<TAG>.csv`.
    ///
    /// Empty groups still produce a file with the header row, so a run always
    /// leaves the same four tables behind.
    pub fn write_dataset(&self, dataset: &Dataset, output_dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(output_dir)?;

        let mut paths = Vec::with_capacity(4);
        for (variable, records) in dataset.groups() {
            let path = output_dir.join(format!("{}.csv", variable.tag()));
            self.write_records(records, &path)?;
            paths.push(path);
        }

        Ok(paths)
    }

    pub fn write_records(&self, records: &[DailyObservation], path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_path(path)?;

        // Written explicitly so empty groups still get the header row
        writer.write_record(TABLE_COLUMNS)?;
        for observation in records {
            writer.serialize(TableRow::from_observation(observation))?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = records.len(), "wrote table");
        Ok(())
    }

    /// Read a written table back into rows.
    pub fn read_rows(&self, path: &Path) -> Result<Vec<TableRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)?;

        let mut rows = Vec::new();
        for result in reader.deserialize::<TableRow>() {
            rows.push(result?);
        }

        Ok(rows)
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

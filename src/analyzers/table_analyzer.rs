use chrono::NaiveDate;
use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::writers::CsvWriter;

#[derive(Debug)]
pub struct TableStatistics {
    pub variable: String,
    pub total_rows: usize,
    pub missing_rows: usize,
    pub colored_rows: usize,
    pub date_range: (NaiveDate, NaiveDate),
    pub value_stats: Option<ValueStats>,
}

/// Min/max/mean over the observed (non-sentinel) values.
#[derive(Debug)]
pub struct ValueStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl TableStatistics {
    pub fn missing_percentage(&self) -> f64 {
        (self.missing_rows as f64 / self.total_rows as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Table: {}", self.variable),
            format!("  Rows: {}", self.total_rows),
            format!(
                "  Date range: {} to {}",
                self.date_range.0.format("%Y-%m-%d"),
                self.date_range.1.format("%Y-%m-%d")
            ),
            format!(
                "  Missing: {} ({:.1}%)",
                self.missing_rows,
                self.missing_percentage()
            ),
            format!("  Colored: {}", self.colored_rows),
        ];

        match &self.value_stats {
            Some(stats) => lines.push(format!(
                "  Values: min {:.1}, max {:.1}, mean {:.1}",
                stats.min, stats.max, stats.mean
            )),
            None => lines.push("  Values: all missing".to_string()),
        }

        lines.join("\n")
    }
}

/// Summarizes a written per-variable table.
pub struct TableAnalyzer;

impl TableAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_csv(&self, path: &Path) -> Result<TableStatistics> {
        self.analyze_csv_with_limit(path, 0) // Default to all rows
    }

    pub fn analyze_csv_with_limit(&self, path: &Path, limit: usize) -> Result<TableStatistics> {
        let mut rows = CsvWriter::new().read_rows(path)?;
        if limit > 0 {
            rows.truncate(limit);
        }

        if rows.is_empty() {
            return Err(ProcessingError::MissingData(format!(
                "No rows in table: {}",
                path.display()
            )));
        }

        let variable = rows[0].variable.clone();
        let mut missing_rows = 0;
        let mut colored_rows = 0;
        let mut min_date = NaiveDate::MAX;
        let mut max_date = NaiveDate::MIN;
        let mut min_value = f32::MAX;
        let mut max_value = f32::MIN;
        let mut sum = 0.0f64;
        let mut observed = 0usize;

        for row in &rows {
            let date = row.date()?;
            min_date = min_date.min(date);
            max_date = max_date.max(date);

            if !row.color.is_empty() {
                colored_rows += 1;
            }

            if row.is_missing() {
                missing_rows += 1;
                continue;
            }

            let value = row.parsed_value()?;
            min_value = min_value.min(value);
            max_value = max_value.max(value);
            sum += value as f64;
            observed += 1;
        }

        let value_stats = (observed > 0).then(|| ValueStats {
            min: min_value,
            max: max_value,
            mean: (sum / observed as f64) as f32,
        });

        Ok(TableStatistics {
            variable,
            total_rows: rows.len(),
            missing_rows,
            colored_rows,
            date_range: (min_date, max_date),
            value_stats,
        })
    }
}

impl Default for TableAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

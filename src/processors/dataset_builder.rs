use tracing::debug;

use crate::color::display_color;
use crate::error::{ProcessingError, Result};
use crate::models::{DailyObservation, Dataset};
use crate::readers::parse_line;
use crate::utils::constants::{DEFAULT_STATION_ID, VALUE_SCALE};
use crate::utils::dates::assign_date;

/// Build-time configuration, passed in explicitly rather than read from
/// process-wide state.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub station_id: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            station_id: DEFAULT_STATION_ID.to_string(),
        }
    }
}

/// Turns raw record lines into per-variable observation tables.
///
/// The build is a single sequential pass and fails fast: the first malformed
/// record aborts with its content identified, since a corrupt input file must
/// not silently produce an incomplete dataset.
pub struct DatasetBuilder {
    config: BuilderConfig,
}

impl DatasetBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn with_station_id(station_id: impl Into<String>) -> Self {
        Self::new(BuilderConfig {
            station_id: station_id.into(),
        })
    }

    pub fn build<I, S>(&self, lines: I) -> Result<Dataset>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dataset = Dataset::new();

        for line in lines {
            let record = parse_line(line.as_ref(), &self.config.station_id)?;
            debug!(
                variable = record.variable.tag(),
                year_month = %record.year_month,
                tokens = record.tokens.len(),
                "parsed record"
            );

            for (day_index, token) in record.tokens.iter().enumerate() {
                let date = match assign_date(&record.year_month, day_index as u32)? {
                    Some(date) => date,
                    // Trailing slot past the end of a short month
                    None => continue,
                };

                let raw: i32 = token.parse().map_err(|_| ProcessingError::InvalidValueToken {
                    token: token.clone(),
                })?;
                let value = raw as f32 * VALUE_SCALE;
                let color = display_color(record.variable, raw, value);

                dataset.push(DailyObservation::new(date, value, record.variable, color));
            }
        }

        Ok(dataset)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

use chrono::NaiveDate;

use crate::error::{ProcessingError, Result};
use crate::utils::constants::YEAR_MONTH_LEN;

/// Assign a calendar date to the value at `day_index` within a record.
///
/// `year_month` is the record's 6-digit YYYYMM prefix; day-of-month is
/// `day_index + 1`. Records are fixed-width with 31 token slots, so short
/// months carry trailing tokens that map to no real date: those return
/// `Ok(None)` and are dropped by the caller, not treated as errors.
pub fn assign_date(year_month: &str, day_index: u32) -> Result<Option<NaiveDate>> {
    let (year, month) = split_year_month(year_month)?;

    let day = day_index + 1;
    Ok(NaiveDate::from_ymd_opt(year, month, day))
}

/// Validate and split a YYYYMM prefix into (year, month).
///
/// A prefix of the wrong length, with non-numeric characters, or with a
/// month outside 1-12 is malformed input, not a short-month artifact.
fn split_year_month(year_month: &str) -> Result<(i32, u32)> {
    if year_month.len() != YEAR_MONTH_LEN || !year_month.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProcessingError::InvalidDatePrefix {
            prefix: year_month.to_string(),
        });
    }

    let year: i32 = year_month[..4].parse().map_err(|_| ProcessingError::InvalidDatePrefix {
        prefix: year_month.to_string(),
    })?;
    let month: u32 = year_month[4..].parse().map_err(|_| ProcessingError::InvalidDatePrefix {
        prefix: year_month.to_string(),
    })?;

    if !(1..=12).contains(&month) {
        return Err(ProcessingError::InvalidDatePrefix {
            prefix: year_month.to_string(),
        });
    }

    Ok((year, month))
}

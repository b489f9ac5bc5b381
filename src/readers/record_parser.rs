use crate::error::{ProcessingError, Result};
use crate::models::VariableType;
use crate::utils::constants::{MAX_DAYS_PER_RECORD, VARIABLE_TAG_LEN, YEAR_MONTH_LEN};

/// One fixed-width record split into its parts: the variable tag, the
/// YYYYMM prefix, and the raw day-value tokens in day order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub variable: VariableType,
    pub year_month: String,
    pub tokens: Vec<String>,
}

/// Split one raw station record into variable type, date prefix, and tokens.
///
/// Fields are delimited by whitespace and by the `s`/`S` source-flag
/// characters that trail each day value in the fixed-width format. The first
/// field is `<station id><YYYYMM><TAG>`; the rest are day-value tokens,
/// capped at 31 (one slot per possible day of the month).
pub fn parse_line(line: &str, station_id: &str) -> Result<ParsedRecord> {
    let mut fields = line
        .split(|c: char| c.is_whitespace() || c == 's' || c == 'S')
        .filter(|field| !field.is_empty());

    let header = fields.next().ok_or_else(|| ProcessingError::RecordTooShort {
        line: line.to_string(),
    })?;
    let header = header.strip_prefix(station_id).unwrap_or(header);

    if header.len() < YEAR_MONTH_LEN + VARIABLE_TAG_LEN {
        return Err(ProcessingError::RecordTooShort {
            line: line.to_string(),
        });
    }

    let (year_month, tag) = header.split_at(header.len() - VARIABLE_TAG_LEN);
    let variable = VariableType::from_tag(tag).ok_or_else(|| ProcessingError::UnknownVariableTag {
        tag: tag.to_string(),
        line: line.to_string(),
    })?;

    let tokens = fields
        .take(MAX_DAYS_PER_RECORD)
        .map(str::to_string)
        .collect();

    Ok(ParsedRecord {
        variable,
        year_month: year_month.to_string(),
        tokens,
    })
}

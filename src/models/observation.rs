use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};
use crate::utils::constants::MISSING_VALUE;

/// The physical quantity a record encodes, determined by its 4-character tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableType {
    Precipitation,
    TempAvg,
    TempMin,
    TempMax,
}

impl VariableType {
    pub const ALL: [VariableType; 4] = [
        VariableType::Precipitation,
        VariableType::TempAvg,
        VariableType::TempMin,
        VariableType::TempMax,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PRCP" => Some(VariableType::Precipitation),
            "TAVG" => Some(VariableType::TempAvg),
            "TMIN" => Some(VariableType::TempMin),
            "TMAX" => Some(VariableType::TempMax),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            VariableType::Precipitation => "PRCP",
            VariableType::TempAvg => "TAVG",
            VariableType::TempMin => "TMIN",
            VariableType::TempMax => "TMAX",
        }
    }
}

/// One day's reading: date, tenths-scaled physical value, and display color.
///
/// Immutable after creation; `value` keeps the sentinel reading (-999.9) so
/// missing days stay visible in the output tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub value: f32,
    pub variable: VariableType,
    pub color: Option<String>,
}

impl DailyObservation {
    pub fn new(date: NaiveDate, value: f32, variable: VariableType, color: Option<String>) -> Self {
        Self {
            date,
            value,
            variable,
            color,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value == MISSING_VALUE
    }
}

/// The column contract of the written tables.
///
/// `value` is serialized with exactly one fractional digit and `color` is the
/// hex string or empty, so the row is defined over strings rather than the
/// in-memory types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub datetime: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub value: String,
    pub color: String,
    #[serde(rename = "type")]
    pub variable: String,
}

impl TableRow {
    pub fn from_observation(obs: &DailyObservation) -> Self {
        Self {
            datetime: obs.date.format("%Y-%m-%d").to_string(),
            year: obs.date.year(),
            month: obs.date.month(),
            day: obs.date.day(),
            value: format!("{:.1}", obs.value),
            color: obs.color.clone().unwrap_or_default(),
            variable: obs.variable.tag().to_string(),
        }
    }

    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.datetime, "%Y-%m-%d")
            .map_err(|_| ProcessingError::InvalidFormat(format!("Invalid datetime: '{}'", self.datetime)))
    }

    pub fn parsed_value(&self) -> Result<f32> {
        self.value
            .parse::<f32>()
            .map_err(|_| ProcessingError::InvalidFormat(format!("Invalid value: '{}'", self.value)))
    }

    pub fn is_missing(&self) -> bool {
        self.parsed_value().map(|v| v == MISSING_VALUE).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_tag_roundtrip() {
        for variable in VariableType::ALL {
            assert_eq!(VariableType::from_tag(variable.tag()), Some(variable));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(VariableType::from_tag("PCRC"), None);
        assert_eq!(VariableType::from_tag(""), None);
    }

    #[test]
    fn test_table_row_formatting() {
        let date = NaiveDate::from_ymd_opt(2020, 4, 3).unwrap();
        let obs = DailyObservation::new(date, 12.0, VariableType::TempAvg, None);
        let row = TableRow::from_observation(&obs);

        assert_eq!(row.datetime, "2020-04-03");
        assert_eq!(row.year, 2020);
        assert_eq!(row.month, 4);
        assert_eq!(row.day, 3);
        assert_eq!(row.value, "12.0");
        assert_eq!(row.color, "");
        assert_eq!(row.variable, "TAVG");
        assert_eq!(row.date().unwrap(), date);
        assert_eq!(row.parsed_value().unwrap(), 12.0);
    }

    #[test]
    fn test_missing_detection() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let obs = DailyObservation::new(date, -999.9, VariableType::Precipitation, None);
        assert!(obs.is_missing());
        assert!(TableRow::from_observation(&obs).is_missing());
    }
}

use crate::models::{DailyObservation, VariableType};

/// Per-variable observation tables, in arrival order.
///
/// The four vectors are constructed independently: an append to one group
/// must never be visible through another.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    precipitation: Vec<DailyObservation>,
    temp_avg: Vec<DailyObservation>,
    temp_min: Vec<DailyObservation>,
    temp_max: Vec<DailyObservation>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            precipitation: Vec::new(),
            temp_avg: Vec::new(),
            temp_min: Vec::new(),
            temp_max: Vec::new(),
        }
    }

    pub fn push(&mut self, observation: DailyObservation) {
        match observation.variable {
            VariableType::Precipitation => self.precipitation.push(observation),
            VariableType::TempAvg => self.temp_avg.push(observation),
            VariableType::TempMin => self.temp_min.push(observation),
            VariableType::TempMax => self.temp_max.push(observation),
        }
    }

    pub fn records(&self, variable: VariableType) -> &[DailyObservation] {
        match variable {
            VariableType::Precipitation => &self.precipitation,
            VariableType::TempAvg => &self.temp_avg,
            VariableType::TempMin => &self.temp_min,
            VariableType::TempMax => &self.temp_max,
        }
    }

    /// Iterate the groups in the fixed variable order.
    pub fn groups(&self) -> impl Iterator<Item = (VariableType, &[DailyObservation])> + '_ {
        VariableType::ALL.iter().map(move |&v| (v, self.records(v)))
    }

    pub fn len(&self) -> usize {
        self.precipitation.len() + self.temp_avg.len() + self.temp_min.len() + self.temp_max.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(variable: VariableType, day: u32) -> DailyObservation {
        let date = NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
        DailyObservation::new(date, 1.0, variable, None)
    }

    #[test]
    fn test_groups_are_independent() {
        let mut dataset = Dataset::new();
        dataset.push(observation(VariableType::Precipitation, 1));

        assert_eq!(dataset.records(VariableType::Precipitation).len(), 1);
        assert!(dataset.records(VariableType::TempAvg).is_empty());
        assert!(dataset.records(VariableType::TempMin).is_empty());
        assert!(dataset.records(VariableType::TempMax).is_empty());
    }

    #[test]
    fn test_push_preserves_arrival_order() {
        let mut dataset = Dataset::new();
        dataset.push(observation(VariableType::TempAvg, 2));
        dataset.push(observation(VariableType::TempAvg, 1));

        let records = dataset.records(VariableType::TempAvg);
        assert_eq!(records[0].date.format("%d").to_string(), "02");
        assert_eq!(records[1].date.format("%d").to_string(), "01");
    }

    #[test]
    fn test_len_counts_all_groups() {
        let mut dataset = Dataset::new();
        assert!(dataset.is_empty());

        dataset.push(observation(VariableType::Precipitation, 1));
        dataset.push(observation(VariableType::TempMax, 1));
        assert_eq!(dataset.len(), 2);
    }
}

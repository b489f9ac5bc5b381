pub mod dataset;
pub mod observation;

pub use dataset::Dataset;
pub use observation::{DailyObservation, TableRow, VariableType};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown variable tag '{tag}' in record: {line}")]
    UnknownVariableTag { tag: String, line: String },

    #[error("Record too short to contain a date prefix and variable tag: {line}")]
    RecordTooShort { line: String },

    #[error("Invalid year-month prefix: '{prefix}'")]
    InvalidDatePrefix { prefix: String },

    #[error("Invalid value token: '{token}'")]
    InvalidValueToken { token: String },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Missing required data: {0}")]
    MissingData(String),
}

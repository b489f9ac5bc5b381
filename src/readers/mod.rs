pub mod dly_reader;
pub mod record_parser;

pub use dly_reader::DlyReader;
pub use record_parser::{parse_line, ParsedRecord};

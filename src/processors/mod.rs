pub mod dataset_builder;

pub use dataset_builder::{BuilderConfig, DatasetBuilder};

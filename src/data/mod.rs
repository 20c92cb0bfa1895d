//! Data module - records, datasets and CSV loading

mod loader;
mod record;

pub use loader::{read_source, read_sources, DataLoader, LoaderError};
pub use record::{DataError, Dataset, RecordAnalysis, TextRecord};

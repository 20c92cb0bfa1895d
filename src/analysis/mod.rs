//! Analysis module - labeling pipeline, aggregation and batch runs

mod aggregator;
mod batch;
mod pipeline;
pub mod report;
mod summary;

pub use aggregator::{Aggregator, AnalysisError, SourceReport};
pub use batch::{run_batch, BatchReport, SourceFailure};
pub use pipeline::Pipeline;
pub use summary::SentimentSummary;

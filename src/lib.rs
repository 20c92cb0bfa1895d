//! Sentiscope - batch sentiment labeling for short social-media texts.
//!
//! Texts are cleaned, stemmed and scored against a lexicon, then reduced to
//! positive / neutral / negative percentages per source and after merging.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod nlp;
pub mod sentiment;
pub mod stats;

pub use analysis::{Aggregator, AnalysisError, Pipeline, SentimentSummary};
pub use data::{Dataset, TextRecord};
pub use sentiment::{Polarity, Sentiment};

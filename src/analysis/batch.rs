//! Batch Run Module
//! Load every source, report per source, then merge and report again.

use crate::analysis::{AnalysisError, Aggregator, SentimentSummary, SourceReport};
use crate::config::{LoadOptions, SourceConfig};
use crate::data::{DataLoader, Dataset};
use crate::sentiment::Sentiment;
use crate::stats::PolarityStats;

/// A source that could not be loaded.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub name: String,
    pub error: String,
}

/// Everything one batch run produces.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub sources: Vec<SourceReport>,
    pub failures: Vec<SourceFailure>,
    pub merged: Dataset,
    pub merged_summary: Result<SentimentSummary, AnalysisError>,
    pub polarity: Option<PolarityStats>,
}

impl BatchReport {
    /// Share of the merged records that remain after keeping only positives.
    pub fn positive_after_reduction(&self) -> Option<f64> {
        let total = self.merged.len();
        if total == 0 {
            return None;
        }
        let kept = self.merged.filter_by_label(Sentiment::Positive).len();
        Some(100.0 * kept as f64 / total as f64)
    }
}

/// Run the full batch: load all sources, label each one, merge, relabel.
///
/// `progress` receives a percentage and a status line at each stage.
pub fn run_batch<F>(
    aggregator: &Aggregator,
    sources: &[SourceConfig],
    options: &LoadOptions,
    mut progress: F,
) -> BatchReport
where
    F: FnMut(f32, &str),
{
    progress(5.0, "Loading sources...");
    let mut loader = DataLoader::new(options.clone());
    let failures: Vec<SourceFailure> = loader
        .load_all(sources)
        .into_iter()
        .map(|(name, e)| {
            log::warn!("Skipping {}: {}", name, e);
            SourceFailure {
                name,
                error: e.to_string(),
            }
        })
        .collect();
    log::debug!("Loaded {} records", loader.get_row_count());
    let mut datasets = loader.take_datasets();

    progress(40.0, "Labeling each source...");
    let reports = aggregator.process_all(&mut datasets);

    progress(70.0, "Labeling merged dataset...");
    let mut merged = Aggregator::merge(&datasets);
    let merged_summary = aggregator.process(&mut merged);
    let polarity = PolarityStats::from_dataset(&merged);

    progress(100.0, "Complete");
    log::info!(
        "Batch complete: {} sources, {} failed, {} merged records",
        reports.len(),
        failures.len(),
        merged.len()
    );

    BatchReport {
        sources: reports,
        failures,
        merged,
        merged_summary,
        polarity,
    }
}

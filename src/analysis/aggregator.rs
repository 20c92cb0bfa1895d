//! Aggregator Module
//! Labels every record of a dataset and reduces the labels to percentages.

use crate::analysis::{Pipeline, SentimentSummary};
use crate::data::Dataset;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Cannot aggregate an empty dataset")]
    EmptyDataset,
}

/// Outcome of processing one named dataset.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub name: String,
    pub summary: Result<SentimentSummary, AnalysisError>,
}

/// Drives the pipeline over datasets.
#[derive(Debug, Clone)]
pub struct Aggregator {
    pipeline: Pipeline,
}

impl Aggregator {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Label every record in order, overwriting earlier labels, and summarize.
    pub fn process(&self, dataset: &mut Dataset) -> Result<SentimentSummary, AnalysisError> {
        if dataset.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        for record in dataset.records_mut() {
            let analysis = self.pipeline.analyze(record.raw());
            record.set_analysis(analysis);
        }

        let summary = SentimentSummary::from_labels(dataset.iter().filter_map(|r| r.label()))
            .ok_or(AnalysisError::EmptyDataset)?;
        log::debug!(
            "Labeled {} records of '{}': {} positive, {} neutral, {} negative",
            summary.total,
            dataset.name(),
            summary.positive,
            summary.neutral,
            summary.negative
        );
        Ok(summary)
    }

    /// Process each dataset independently, keeping going past failures.
    pub fn process_all(&self, datasets: &mut [Dataset]) -> Vec<SourceReport> {
        datasets
            .iter_mut()
            .map(|dataset| SourceReport {
                name: dataset.name().to_string(),
                summary: self.process(dataset),
            })
            .collect()
    }

    /// Concatenate datasets in input order.
    pub fn merge(datasets: &[Dataset]) -> Dataset {
        Dataset::merge("merged", datasets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{StemRuleset, StopwordSet};
    use crate::sentiment::{Lexicon, Sentiment};

    fn aggregator() -> Aggregator {
        let lexicon = Lexicon::new([("good", 0.7), ("bad", -0.7)]).unwrap();
        Aggregator::new(Pipeline::new(
            StopwordSet::english(),
            StemRuleset::porter(),
            &lexicon,
        ))
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let mut ds = Dataset::from_texts("empty", Vec::<String>::new());
        assert_eq!(aggregator().process(&mut ds), Err(AnalysisError::EmptyDataset));
    }

    #[test]
    fn ten_records_four_three_three() {
        let texts = [
            "good", "good day", "so good", "good good", "bad", "bad news", "very bad",
            "table", "chair", "window",
        ];
        let mut ds = Dataset::from_texts("ten", texts);
        let summary = aggregator().process(&mut ds).unwrap();

        assert_eq!(summary.positive_pct, 40.0);
        assert_eq!(summary.negative_pct, 30.0);
        assert_eq!(summary.neutral_pct, 30.0);
        assert!(ds.iter().all(|r| r.is_labeled()));
    }

    #[test]
    fn processing_fills_fields_in_record_order() {
        let mut ds = Dataset::from_texts("a", ["Good stuff @me", "BAD!!"]);
        aggregator().process(&mut ds).unwrap();
        let r0 = &ds.records()[0];
        assert_eq!(r0.clean(), Some("good stuff"));
        assert_eq!(r0.stemmed(), Some("good stuff"));
        assert_eq!(r0.label(), Some(Sentiment::Positive));
        assert_eq!(ds.records()[1].label(), Some(Sentiment::Negative));
    }

    #[test]
    fn merged_dataset_is_fully_relabeled() {
        let agg = aggregator();
        let mut d1 = Dataset::from_texts("d1", ["good", "bad"]);
        let d2 = Dataset::from_texts("d2", ["table"]);
        agg.process(&mut d1).unwrap();

        let mut merged = Aggregator::merge(&[d1.clone(), d2.clone()]);
        assert_eq!(merged.len(), d1.len() + d2.len());
        assert!(!merged.records()[2].is_labeled());

        let summary = agg.process(&mut merged).unwrap();
        assert_eq!(summary.total, 3);
        let origins: Vec<&str> = merged.iter().map(|r| r.origin()).collect();
        assert_eq!(origins, vec!["d1", "d1", "d2"]);
        assert!(merged.iter().all(|r| r.is_labeled()));
    }

    #[test]
    fn process_all_reports_each_source() {
        let agg = aggregator();
        let mut datasets = vec![
            Dataset::from_texts("a", ["good"]),
            Dataset::from_texts("b", Vec::<String>::new()),
        ];
        let reports = agg.process_all(&mut datasets);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].summary.as_ref().unwrap().positive, 1);
        assert_eq!(reports[1].name, "b");
        assert_eq!(reports[1].summary, Err(AnalysisError::EmptyDataset));
    }
}

//! Polarity Statistics Module
//! Descriptive statistics over the polarity scores of labeled records.

use crate::data::Dataset;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Distribution of polarity scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl PolarityStats {
    /// Statistics for a set of scores; `None` when empty.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        let n = scores.len();
        if n == 0 {
            return None;
        }

        let mut sorted = scores.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = Statistics::mean(scores.iter());
        let std = if n > 1 {
            Statistics::std_dev(scores.iter())
        } else {
            0.0
        };

        Some(Self {
            count: n,
            mean,
            median: percentile(&sorted, 50.0),
            std,
            min: sorted[0],
            max: sorted[n - 1],
        })
    }

    /// Statistics over the labeled records of a dataset.
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        let scores: Vec<f64> = dataset
            .iter()
            .filter_map(|r| r.polarity())
            .map(|p| p.score)
            .collect();
        Self::from_scores(&scores)
    }
}

/// Percentile using linear interpolation (NumPy compatible).
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Aggregator, Pipeline};

    #[test]
    fn empty_scores_give_none() {
        assert!(PolarityStats::from_scores(&[]).is_none());
    }

    #[test]
    fn single_score_has_zero_spread() {
        let s = PolarityStats::from_scores(&[0.4]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.median, 0.4);
        assert_eq!(s.std, 0.0);
    }

    #[test]
    fn describes_scores() {
        let s = PolarityStats::from_scores(&[-0.5, 0.0, 0.5, 1.0]).unwrap();
        assert!((s.mean - 0.25).abs() < 1e-12);
        assert!((s.median - 0.25).abs() < 1e-12);
        assert_eq!(s.min, -0.5);
        assert_eq!(s.max, 1.0);
        // sample standard deviation
        assert!((s.std - 0.6454972243679028).abs() < 1e-12);
    }

    #[test]
    fn unlabeled_dataset_has_no_stats() {
        let ds = Dataset::from_texts("a", ["good"]);
        assert!(PolarityStats::from_dataset(&ds).is_none());

        let mut ds = ds;
        Aggregator::new(Pipeline::english()).process(&mut ds).unwrap();
        assert_eq!(PolarityStats::from_dataset(&ds).unwrap().count, 1);
    }
}

//! Sentiment Summary Module
//! Per-label counts and percentage breakdown of a labeled dataset.

use crate::sentiment::Sentiment;
use serde::Serialize;
use std::fmt;

/// Label counts and percentages over one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub positive_pct: f64,
    pub neutral_pct: f64,
    pub negative_pct: f64,
}

impl SentimentSummary {
    /// Summarize a non-empty label sequence; `None` when there are no labels.
    ///
    /// The neutral share is derived by subtraction so the three percentages
    /// always add up to 100.
    pub fn from_labels<I>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = Sentiment>,
    {
        let (mut positive, mut neutral, mut negative) = (0usize, 0usize, 0usize);
        for label in labels {
            match label {
                Sentiment::Positive => positive += 1,
                Sentiment::Neutral => neutral += 1,
                Sentiment::Negative => negative += 1,
            }
        }

        let total = positive + neutral + negative;
        if total == 0 {
            return None;
        }

        let positive_pct = 100.0 * positive as f64 / total as f64;
        let negative_pct = 100.0 * negative as f64 / total as f64;
        Some(Self {
            total,
            positive,
            neutral,
            negative,
            positive_pct,
            neutral_pct: 100.0 - positive_pct - negative_pct,
            negative_pct,
        })
    }

    pub fn count(&self, label: Sentiment) -> usize {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn percentage(&self, label: Sentiment) -> f64 {
        match label {
            Sentiment::Positive => self.positive_pct,
            Sentiment::Neutral => self.neutral_pct,
            Sentiment::Negative => self.negative_pct,
        }
    }
}

impl fmt::Display for SentimentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Positive: {:.2}%", self.positive_pct)?;
        writeln!(f, "Neutral: {:.2}%", self.neutral_pct)?;
        write!(f, "Negative: {:.2}%", self.negative_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn labels(p: usize, n: usize, neg: usize) -> Vec<Sentiment> {
        std::iter::repeat(Sentiment::Positive)
            .take(p)
            .chain(std::iter::repeat(Sentiment::Neutral).take(n))
            .chain(std::iter::repeat(Sentiment::Negative).take(neg))
            .collect()
    }

    #[test]
    fn four_three_three_split() {
        let s = SentimentSummary::from_labels(labels(4, 3, 3)).unwrap();
        assert_eq!(s.positive_pct, 40.0);
        assert_eq!(s.negative_pct, 30.0);
        assert_eq!(s.neutral_pct, 30.0);
        assert_eq!(s.total, 10);
    }

    #[test]
    fn no_labels_gives_none() {
        assert!(SentimentSummary::from_labels(Vec::new()).is_none());
    }

    #[test]
    fn display_rounds_to_two_decimals() {
        let s = SentimentSummary::from_labels(labels(1, 1, 1)).unwrap();
        assert_eq!(
            s.to_string(),
            "Positive: 33.33%\nNeutral: 33.33%\nNegative: 33.33%"
        );
    }

    #[test]
    fn accessors_follow_label() {
        let s = SentimentSummary::from_labels(labels(2, 0, 2)).unwrap();
        assert_eq!(s.count(Sentiment::Negative), 2);
        assert_eq!(s.percentage(Sentiment::Positive), 50.0);
        assert_eq!(s.percentage(Sentiment::Neutral), 0.0);
    }

    proptest! {
        #[test]
        fn percentages_sum_to_hundred(p in 0usize..200, n in 0usize..200, neg in 0usize..200) {
            prop_assume!(p + n + neg > 0);
            let s = SentimentSummary::from_labels(labels(p, n, neg)).unwrap();
            let sum = s.positive_pct + s.neutral_pct + s.negative_pct;
            prop_assert!((sum - 100.0).abs() < 1e-9);
            prop_assert_eq!(s.total, p + n + neg);
        }
    }
}

//! Polarity Classifier Module
//! Scores text against a lexicon and buckets the score by sign.

use crate::sentiment::Lexicon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Sentiment label derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Positive above zero, negative below, neutral only at exactly zero.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity score in [-1, 1] with its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polarity {
    pub score: f64,
    pub label: Sentiment,
}

impl Polarity {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            label: Sentiment::from_score(score),
        }
    }
}

/// Lexicon-averaging polarity classifier.
#[derive(Debug, Clone)]
pub struct PolarityClassifier {
    lexicon: Arc<Lexicon>,
}

impl PolarityClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Mean weight of the tokens found in the lexicon; 0.0 when none are.
    pub fn classify(&self, text: &str) -> Polarity {
        let (sum, hits) = text
            .split_whitespace()
            .filter_map(|token| self.lexicon.score(token))
            .fold((0.0, 0usize), |(sum, hits), score| (sum + score, hits + 1));

        let score = if hits == 0 {
            0.0
        } else {
            (sum / hits as f64).clamp(-1.0, 1.0)
        };
        Polarity::from_score(score)
    }
}

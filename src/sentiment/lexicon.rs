//! Sentiment Lexicon Module
//! Word to polarity weight mapping, built in or loaded from JSON.

use crate::nlp::Stemmer;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse lexicon: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Score {score} for '{word}' is outside [-1, 1]")]
    ScoreOutOfRange { word: String, score: f64 },
}

/// Built-in English weights, roughly following common polarity lexicons.
const ENGLISH: &[(&str, f64)] = &[
    // Positive
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("loving", 0.6),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("happiness", 0.8),
    ("glad", 0.5),
    ("sunny", 0.5),
    ("nice", 0.6),
    ("best", 1.0),
    ("better", 0.5),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("beautiful", 0.85),
    ("perfect", 1.0),
    ("fun", 0.3),
    ("funny", 0.25),
    ("cool", 0.35),
    ("excited", 0.4),
    ("exciting", 0.3),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("thankful", 0.4),
    ("grateful", 0.5),
    ("win", 0.8),
    ("winning", 0.5),
    ("hope", 0.3),
    ("hopeful", 0.4),
    ("safe", 0.5),
    ("proud", 0.8),
    ("favorite", 0.5),
    ("sweet", 0.35),
    ("smile", 0.3),
    ("laugh", 0.3),
    ("positive", 0.23),
    ("success", 0.3),
    ("successful", 0.75),
    ("brilliant", 0.9),
    ("fine", 0.4),
    ("welcome", 0.8),
    ("recover", 0.2),
    ("recovered", 0.2),
    ("support", 0.2),
    ("strong", 0.43),
    ("free", 0.4),
    ("interesting", 0.5),
    ("incredible", 0.9),
    // Negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("sad", -0.5),
    ("sadly", -0.5),
    ("hate", -0.8),
    ("hated", -0.9),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("sick", -0.71),
    ("ill", -0.5),
    ("tired", -0.4),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("annoyed", -0.4),
    ("boring", -1.0),
    ("bored", -0.5),
    ("sorry", -0.5),
    ("poor", -0.4),
    ("wrong", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("hurt", -0.6),
    ("pain", -0.6),
    ("lonely", -0.5),
    ("upset", -0.6),
    ("miss", -0.3),
    ("missed", -0.3),
    ("cry", -0.6),
    ("crying", -0.6),
    ("stupid", -0.8),
    ("dead", -0.2),
    ("death", -0.6),
    ("died", -0.6),
    ("scared", -0.6),
    ("afraid", -0.6),
    ("fear", -0.5),
    ("worried", -0.5),
    ("crisis", -0.4),
    ("lost", -0.3),
    ("negative", -0.3),
    ("ugly", -0.7),
    ("broken", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("crap", -0.8),
    ("shit", -0.2),
    ("damn", -0.4),
    ("fake", -0.5),
    ("dangerous", -0.6),
    ("difficult", -0.5),
    ("unfortunately", -0.5),
];

/// Read-only mapping from word (or stem) to a weight in [-1, 1].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    scores: HashMap<String, f64>,
}

impl Lexicon {
    /// Build a lexicon, rejecting weights outside [-1, 1]. Words are lowercased.
    pub fn new<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut scores = HashMap::new();
        for (word, score) in entries {
            let word = word.as_ref().trim().to_lowercase();
            if !(-1.0..=1.0).contains(&score) {
                return Err(LexiconError::ScoreOutOfRange { word, score });
            }
            if !word.is_empty() {
                scores.insert(word, score);
            }
        }
        Ok(Self { scores })
    }

    /// The built-in English lexicon.
    pub fn english() -> Self {
        Self {
            scores: ENGLISH
                .iter()
                .map(|&(word, score)| (word.to_string(), score))
                .collect(),
        }
    }

    /// Parse a JSON object of `{"word": weight}` pairs.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let raw: BTreeMap<String, f64> = serde_json::from_str(json)?;
        Self::new(raw)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, LexiconError> {
        let contents = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let lexicon = Self::from_json_str(&contents)?;
        log::debug!(
            "Loaded lexicon with {} entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Re-key every entry by its stem so lookups match stemmed text.
    ///
    /// Words that share a stem are averaged, visiting them in sorted order
    /// so the result does not depend on hash iteration order.
    pub fn keyed_by_stem(&self, stemmer: &Stemmer) -> Self {
        let mut sorted: Vec<(&String, &f64)> = self.scores.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut buckets: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for (word, &score) in sorted {
            let bucket = buckets.entry(stemmer.stem_word(word)).or_insert((0.0, 0));
            bucket.0 += score;
            bucket.1 += 1;
        }

        Self {
            scores: buckets
                .into_iter()
                .map(|(stem, (sum, count))| (stem, sum / count as f64))
                .collect(),
        }
    }

    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

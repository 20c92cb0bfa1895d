//! Sentiment module - lexicon and polarity classification

mod classifier;
mod lexicon;

pub use classifier::{Polarity, PolarityClassifier, Sentiment};
pub use lexicon::{Lexicon, LexiconError};

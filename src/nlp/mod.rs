//! NLP module - text normalization and stemming

mod normalizer;
mod stemmer;
mod stopwords;

pub use normalizer::Normalizer;
pub use stemmer::{StemRuleset, Stemmer, SuffixRule};
pub use stopwords::StopwordSet;

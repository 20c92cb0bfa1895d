//! Labeling Pipeline Module
//! Normalizer -> Stemmer -> Classifier over shared read-only reference data.

use crate::data::RecordAnalysis;
use crate::nlp::{Normalizer, StemRuleset, Stemmer, StopwordSet};
use crate::sentiment::{Lexicon, PolarityClassifier};
use std::sync::Arc;

/// The three labeling stages. Cloning is cheap: reference data is shared.
#[derive(Debug, Clone)]
pub struct Pipeline {
    normalizer: Normalizer,
    stemmer: Stemmer,
    classifier: PolarityClassifier,
}

impl Pipeline {
    /// Build the stages. The lexicon is re-keyed by stem because the
    /// classifier only ever sees stemmed text.
    pub fn new(stopwords: StopwordSet, rules: StemRuleset, lexicon: &Lexicon) -> Self {
        let stemmer = Stemmer::new(Arc::new(rules));
        let classifier = PolarityClassifier::new(Arc::new(lexicon.keyed_by_stem(&stemmer)));
        log::debug!(
            "Pipeline ready: {} stopwords, {} lexicon stems",
            stopwords.len(),
            classifier.lexicon().len()
        );

        Self {
            normalizer: Normalizer::new(Arc::new(stopwords)),
            stemmer,
            classifier,
        }
    }

    /// English stopwords, Porter rules, built-in lexicon.
    pub fn english() -> Self {
        Self::new(
            StopwordSet::english(),
            StemRuleset::porter(),
            &Lexicon::english(),
        )
    }

    /// Run all stages on one text.
    pub fn analyze(&self, raw: &str) -> RecordAnalysis {
        let clean = self.normalizer.normalize(raw);
        let stemmed = self.stemmer.stem(&clean);
        let polarity = self.classifier.classify(&stemmed);
        RecordAnalysis {
            clean,
            stemmed,
            polarity,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn stemmer(&self) -> &Stemmer {
        &self.stemmer
    }

    pub fn classifier(&self) -> &PolarityClassifier {
        &self.classifier
    }
}

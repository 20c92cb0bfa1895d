//! Text Normalizer Module
//! Lowercases, strips mentions, URLs and punctuation, then drops stopwords.

use crate::nlp::StopwordSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[A-Za-z0-9_]+").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http://\S+|https://\S+").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Cleans raw social-media text into space-separated content words.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: Arc<StopwordSet>,
}

impl Normalizer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Normalize a single text.
    ///
    /// Mentions are removed before URLs, and both before punctuation, so that
    /// `@user` and `https://...` never leave word fragments behind.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let without_mentions = MENTION.replace_all(&lowered, "");
        let without_urls = URL.replace_all(&without_mentions, "");
        let words_only = NON_WORD.replace_all(&without_urls, "");

        words_only
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

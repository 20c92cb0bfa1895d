//! Porter Stemmer Module
//! Suffix-stripping stemmer driven by an explicit, replaceable rule table.
//!
//! Implements the algorithm from Porter, M.F. "An algorithm for suffix
//! stripping." Program 14.3 (1980): 130-137. The word-shape conditions
//! (measure, vowel presence, double consonant, cvc) are fixed; the suffix
//! tables for steps 1a, 2, 3 and 4 live in [`StemRuleset`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single `suffix -> replacement` rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub replacement: String,
}

impl SuffixRule {
    pub fn new(suffix: &str, replacement: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Suffix tables consulted by the stemmer.
///
/// Within each table the first matching suffix wins, so longer suffixes must
/// precede shorter ones they end with (`ational` before `tional`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemRuleset {
    /// Step 1a, applied unconditionally.
    pub plurals: Vec<SuffixRule>,
    /// Step 2, applied when the remaining stem has measure > 0.
    pub double_suffixes: Vec<SuffixRule>,
    /// Step 3, applied when the remaining stem has measure > 0.
    pub derivational: Vec<SuffixRule>,
    /// Step 4, removed when the remaining stem has measure > 1.
    /// `ion` additionally needs the stem to end in `s` or `t`.
    pub residual: Vec<String>,
}

impl Default for StemRuleset {
    fn default() -> Self {
        Self::porter()
    }
}

impl StemRuleset {
    /// The classic Porter tables.
    pub fn porter() -> Self {
        fn rules(pairs: &[(&str, &str)]) -> Vec<SuffixRule> {
            pairs.iter().map(|(s, r)| SuffixRule::new(s, r)).collect()
        }

        Self {
            plurals: rules(&[("sses", "ss"), ("ies", "i"), ("ss", "ss"), ("s", "")]),
            double_suffixes: rules(&[
                ("ational", "ate"),
                ("tional", "tion"),
                ("enci", "ence"),
                ("anci", "ance"),
                ("izer", "ize"),
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
                ("ization", "ize"),
                ("ation", "ate"),
                ("ator", "ate"),
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
                ("aliti", "al"),
                ("iviti", "ive"),
                ("biliti", "ble"),
                ("logi", "log"),
            ]),
            derivational: rules(&[
                ("icate", "ic"),
                ("ative", ""),
                ("alize", "al"),
                ("iciti", "ic"),
                ("ical", "ic"),
                ("ful", ""),
                ("ness", ""),
            ]),
            residual: [
                "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent",
                "ion", "ou", "ism", "ate", "iti", "ous", "ive", "ize",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Stems whitespace-separated tokens independently.
#[derive(Debug, Clone)]
pub struct Stemmer {
    rules: Arc<StemRuleset>,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new(Arc::new(StemRuleset::porter()))
    }
}

impl Stemmer {
    pub fn new(rules: Arc<StemRuleset>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &StemRuleset {
        &self.rules
    }

    /// Stem every token of `text` and rejoin with single spaces.
    pub fn stem(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.stem_word(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Stem one word. Words of two letters or fewer, and words containing
    /// non-ASCII characters, are returned unchanged.
    pub fn stem_word(&self, word: &str) -> String {
        if word.len() <= 2 || !word.is_ascii() {
            return word.to_string();
        }

        let mut w = word.to_string();
        w = self.step1a(&w);
        w = step1b(&w);
        w = step1c(&w);
        w = self.step2(&w);
        w = self.step3(&w);
        w = self.step4(&w);
        w = step5a(&w);
        step5b(&w)
    }

    fn step1a(&self, word: &str) -> String {
        match self
            .rules
            .plurals
            .iter()
            .find(|rule| word.ends_with(rule.suffix.as_str()))
        {
            Some(rule) => format!(
                "{}{}",
                stem_before(word, rule.suffix.len()),
                rule.replacement
            ),
            None => word.to_string(),
        }
    }

    fn step2(&self, word: &str) -> String {
        replace_with_measure(word, &self.rules.double_suffixes, 0)
    }

    fn step3(&self, word: &str) -> String {
        replace_with_measure(word, &self.rules.derivational, 0)
    }

    fn step4(&self, word: &str) -> String {
        let Some(suffix) = self
            .rules
            .residual
            .iter()
            .find(|suffix| word.ends_with(suffix.as_str()))
        else {
            return word.to_string();
        };

        let stem = stem_before(word, suffix.len());
        if measure(stem) <= 1 {
            return word.to_string();
        }
        if suffix == "ion" && !matches!(stem.as_bytes().last().copied(), Some(b's' | b't')) {
            return word.to_string();
        }
        stem.to_string()
    }
}

/// Apply the first rule whose suffix matches, if the stem measure exceeds `min`.
fn replace_with_measure(word: &str, rules: &[SuffixRule], min: usize) -> String {
    match rules.iter().find(|rule| word.ends_with(rule.suffix.as_str())) {
        Some(rule) => {
            let stem = stem_before(word, rule.suffix.len());
            if measure(stem) > min {
                format!("{}{}", stem, rule.replacement)
            } else {
                word.to_string()
            }
        }
        None => word.to_string(),
    }
}

/// Consonant flag per byte, in one left-to-right pass. A `y` is a consonant
/// at the start of a word or after a vowel.
fn consonant_flags(word: &str) -> Vec<bool> {
    let mut flags: Vec<bool> = Vec::with_capacity(word.len());
    for (i, &b) in word.as_bytes().iter().enumerate() {
        let consonant = match b {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !flags[i - 1],
            _ => true,
        };
        flags.push(consonant);
    }
    flags
}

/// Number of VC sequences in `[C](VC)^m[V]`.
fn measure(word: &str) -> usize {
    let flags = consonant_flags(word);
    let mut m = 0;
    let mut prev_vowel = false;
    for &consonant in &flags {
        if consonant && prev_vowel {
            m += 1;
        }
        prev_vowel = !consonant;
    }
    m
}

fn contains_vowel(word: &str) -> bool {
    consonant_flags(word).iter().any(|&c| !c)
}

fn ends_double_consonant(word: &str) -> bool {
    let b = word.as_bytes();
    let len = b.len();
    len >= 2 && b[len - 1] == b[len - 2] && consonant_flags(word)[len - 1]
}

/// Ends consonant-vowel-consonant, final consonant not w, x or y.
fn ends_cvc(word: &str) -> bool {
    let b = word.as_bytes();
    let len = b.len();
    if len < 3 {
        return false;
    }
    let flags = consonant_flags(word);
    flags[len - 3] && !flags[len - 2] && flags[len - 1] && !matches!(b[len - 1], b'w' | b'x' | b'y')
}

fn stem_before(word: &str, suffix_len: usize) -> &str {
    &word[..word.len() - suffix_len]
}

/// Step 1b: `-eed`, `-ed`, `-ing`, with the fix-up after `-ed`/`-ing`.
fn step1b(word: &str) -> String {
    if word.ends_with("eed") {
        let stem = stem_before(word, 3);
        return if measure(stem) > 0 {
            format!("{}ee", stem)
        } else {
            word.to_string()
        };
    }

    let stripped = ["ed", "ing"].iter().find_map(|suffix| {
        word.ends_with(suffix)
            .then(|| stem_before(word, suffix.len()))
            .filter(|stem| contains_vowel(stem))
    });

    match stripped {
        Some(stem) => step1b_fixup(stem),
        None => word.to_string(),
    }
}

fn step1b_fixup(word: &str) -> String {
    if word.ends_with("at") || word.ends_with("bl") || word.ends_with("iz") {
        return format!("{}e", word);
    }
    if ends_double_consonant(word) && !matches!(word.as_bytes()[word.len() - 1], b'l' | b's' | b'z')
    {
        return word[..word.len() - 1].to_string();
    }
    if measure(word) == 1 && ends_cvc(word) {
        return format!("{}e", word);
    }
    word.to_string()
}

/// Step 1c: terminal `y` becomes `i` when the stem has a vowel.
fn step1c(word: &str) -> String {
    match word.strip_suffix('y') {
        Some(stem) if contains_vowel(stem) => format!("{}i", stem),
        _ => word.to_string(),
    }
}

fn step5a(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('e') {
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            return stem.to_string();
        }
    }
    word.to_string()
}

fn step5b(word: &str) -> String {
    if word.ends_with("ll") && measure(word) > 1 {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn porter() -> Stemmer {
        Stemmer::default()
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure("tr"), 0);
        assert_eq!(measure("ee"), 0);
        assert_eq!(measure("tree"), 0);
        assert_eq!(measure("by"), 0);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("oats"), 1);
        assert_eq!(measure("ivy"), 1);
        assert_eq!(measure("troubles"), 2);
        assert_eq!(measure("private"), 2);
        assert_eq!(measure("orrery"), 2);
    }

    #[test]
    fn long_y_runs_stem_in_linear_time() {
        let word = format!("{}ed", "y".repeat(200_000));
        let first = porter().stem_word(&word);
        assert!(first.starts_with("yy"));
        assert!(first.len() <= word.len());
        assert_eq!(porter().stem_word(&word), first);
    }

    #[test]
    fn y_alternates_between_consonant_and_vowel() {
        assert_eq!(consonant_flags("yyy"), vec![true, false, true]);
        assert_eq!(consonant_flags("toy"), vec![true, false, true]);
        assert_eq!(consonant_flags("sky"), vec![true, true, false]);
    }

    #[test]
    fn test_cvc() {
        assert!(ends_cvc("hop"));
        assert!(ends_cvc("fil"));
        assert!(!ends_cvc("snow"));
        assert!(!ends_cvc("box"));
        assert!(!ends_cvc("tray"));
    }

    #[test]
    fn step1_vectors() {
        let s = porter();
        let cases = [
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("ties", "ti"),
            ("caress", "caress"),
            ("cats", "cat"),
            ("feed", "feed"),
            ("agreed", "agre"),
            ("plastered", "plaster"),
            ("bled", "bled"),
            ("motoring", "motor"),
            ("sing", "sing"),
            ("conflated", "conflat"),
            ("hopping", "hop"),
            ("hissing", "hiss"),
            ("falling", "fall"),
            ("filing", "file"),
            ("happy", "happi"),
            ("sky", "sky"),
        ];
        for (word, expected) in cases {
            assert_eq!(s.stem_word(word), expected, "stemming {}", word);
        }
    }

    #[test]
    fn later_step_vectors() {
        let s = porter();
        let cases = [
            ("relational", "relat"),
            ("generalization", "gener"),
            ("hopefulness", "hope"),
            ("running", "run"),
            ("adjustment", "adjust"),
            ("adoption", "adopt"),
            ("controlling", "control"),
            ("rate", "rate"),
            ("cease", "ceas"),
            ("love", "love"),
            ("sunny", "sunni"),
            ("days", "dai"),
        ];
        for (word, expected) in cases {
            assert_eq!(s.stem_word(word), expected, "stemming {}", word);
        }
    }

    #[test]
    fn short_and_non_ascii_words_untouched() {
        let s = porter();
        assert_eq!(s.stem_word("is"), "is");
        assert_eq!(s.stem_word("cafés"), "cafés");
    }

    #[test]
    fn stem_text_rejoins_tokens() {
        let s = porter();
        assert_eq!(s.stem("love  sunny days"), "love sunni dai");
        assert_eq!(s.stem(""), "");
    }

    #[test]
    fn stemming_is_deterministic() {
        let s = porter();
        let text = "generalizations running happily controlling";
        assert_eq!(s.stem(text), s.stem(text));
    }

    #[test]
    fn custom_ruleset_is_honored() {
        let mut rules = StemRuleset::porter();
        rules.plurals.clear();
        let s = Stemmer::new(Arc::new(rules));
        assert_eq!(s.stem_word("cats"), "cats");
    }
}

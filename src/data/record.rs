//! Text Record Module
//! Per-row text records and ordered datasets of them.

use crate::sentiment::{Polarity, Sentiment};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Record {row} in '{dataset}' has no text value")]
    MalformedRecord { dataset: String, row: usize },
}

/// Fields derived by the pipeline, always set together.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordAnalysis {
    pub clean: String,
    pub stemmed: String,
    pub polarity: Polarity,
}

/// One input row: raw text plus whatever the pipeline has derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRecord {
    id: usize,
    origin: String,
    raw: String,
    analysis: Option<RecordAnalysis>,
}

impl TextRecord {
    pub fn new(id: usize, origin: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            id,
            origin: origin.into(),
            raw: raw.into(),
            analysis: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Name of the dataset the record was loaded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn clean(&self) -> Option<&str> {
        self.analysis.as_ref().map(|a| a.clean.as_str())
    }

    pub fn stemmed(&self) -> Option<&str> {
        self.analysis.as_ref().map(|a| a.stemmed.as_str())
    }

    pub fn polarity(&self) -> Option<Polarity> {
        self.analysis.as_ref().map(|a| a.polarity)
    }

    pub fn label(&self) -> Option<Sentiment> {
        self.polarity().map(|p| p.label)
    }

    pub fn is_labeled(&self) -> bool {
        self.analysis.is_some()
    }

    pub(crate) fn set_analysis(&mut self, analysis: RecordAnalysis) {
        self.analysis = Some(analysis);
    }
}

/// Ordered collection of records from one source (or a merge of several).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    name: String,
    columns: Vec<String>,
    records: Vec<TextRecord>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            records: Vec::new(),
        }
    }

    /// Build from plain texts, with a single `text` column.
    pub fn from_texts<I, S>(name: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dataset = Self::new(name, vec!["text".to_string()]);
        for text in texts {
            dataset.push_text(text);
        }
        dataset
    }

    /// Build from a text column that may contain missing values.
    ///
    /// A missing value is rejected unless `skip_missing` is set, in which case
    /// the row is dropped and ids stay contiguous.
    pub fn from_cells<I>(
        name: impl Into<String>,
        columns: Vec<String>,
        cells: I,
        skip_missing: bool,
    ) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut dataset = Self::new(name, columns);
        for (row, cell) in cells.into_iter().enumerate() {
            match cell {
                Some(text) => dataset.push_text(text),
                None if skip_missing => {
                    log::warn!("Skipping row {} of '{}': no text value", row, dataset.name);
                }
                None => {
                    return Err(DataError::MalformedRecord {
                        dataset: dataset.name.clone(),
                        row,
                    })
                }
            }
        }
        Ok(dataset)
    }

    /// Append a record; its id is its position.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let id = self.records.len();
        self.records.push(TextRecord::new(id, self.name.clone(), text));
    }

    /// Concatenate datasets in order. Ids are renumbered by position while
    /// each record keeps its origin; derived fields are carried over as-is.
    pub fn merge<'a, I>(name: impl Into<String>, datasets: I) -> Self
    where
        I: IntoIterator<Item = &'a Dataset>,
    {
        let mut merged = Self::new(name, Vec::new());
        for dataset in datasets {
            for column in &dataset.columns {
                if !merged.columns.contains(column) {
                    merged.columns.push(column.clone());
                }
            }
            for record in &dataset.records {
                let mut record = record.clone();
                record.id = merged.records.len();
                merged.records.push(record);
            }
        }
        merged
    }

    /// Records carrying `label`, with their ids and origins unchanged.
    pub fn filter_by_label(&self, label: Sentiment) -> Self {
        Self {
            name: format!("{} ({})", self.name, label),
            columns: self.columns.clone(),
            records: self
                .records
                .iter()
                .filter(|r| r.label() == Some(label))
                .cloned()
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[TextRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [TextRecord] {
        &mut self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labeled(text: &str, score: f64) -> RecordAnalysis {
        RecordAnalysis {
            clean: text.to_string(),
            stemmed: text.to_string(),
            polarity: Polarity::from_score(score),
        }
    }

    #[test]
    fn records_start_unlabeled() {
        let ds = Dataset::from_texts("a", ["hello", "world"]);
        assert_eq!(ds.len(), 2);
        let r = &ds.records()[1];
        assert_eq!(r.id(), 1);
        assert_eq!(r.origin(), "a");
        assert_eq!(r.raw(), "world");
        assert!(!r.is_labeled());
        assert_eq!(r.clean(), None);
        assert_eq!(r.stemmed(), None);
        assert_eq!(r.label(), None);
    }

    #[test]
    fn label_defined_iff_stem_defined() {
        let mut r = TextRecord::new(0, "a", "Good day");
        assert_eq!(r.stemmed().is_some(), r.label().is_some());
        r.set_analysis(labeled("good dai", 0.7));
        assert_eq!(r.stemmed(), Some("good dai"));
        assert_eq!(r.label(), Some(Sentiment::Positive));
    }

    #[test]
    fn missing_cells_are_rejected() {
        let err = Dataset::from_cells(
            "tweets",
            vec!["text".into()],
            vec![Some("ok".to_string()), None],
            false,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DataError::MalformedRecord {
                dataset: "tweets".into(),
                row: 1
            }
        );
    }

    #[test]
    fn missing_cells_can_be_skipped() {
        let ds = Dataset::from_cells(
            "tweets",
            vec!["text".into()],
            vec![None, Some("a".to_string()), None, Some("b".to_string())],
            true,
        )
        .unwrap();
        let ids: Vec<usize> = ds.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(ds.records()[1].raw(), "b");
    }

    #[test]
    fn merge_preserves_order_and_renumbers() {
        let mut a = Dataset::new("a", vec!["id".into(), "text".into()]);
        a.push_text("a0");
        a.push_text("a1");
        let b = Dataset::from_texts("b", ["b0"]);

        let merged = Dataset::merge("merged", [&a, &b]);
        let rows: Vec<(usize, &str, &str)> = merged
            .iter()
            .map(|r| (r.id(), r.origin(), r.raw()))
            .collect();
        assert_eq!(
            rows,
            vec![(0, "a", "a0"), (1, "a", "a1"), (2, "b", "b0")]
        );
        assert_eq!(merged.columns(), &["id".to_string(), "text".to_string()]);
    }

    #[test]
    fn filter_by_label_keeps_matching_records() {
        let mut ds = Dataset::from_texts("a", ["x", "y", "z"]);
        ds.records_mut()[0].set_analysis(labeled("x", 0.5));
        ds.records_mut()[1].set_analysis(labeled("y", -0.5));
        ds.records_mut()[2].set_analysis(labeled("z", 0.1));

        let positives = ds.filter_by_label(Sentiment::Positive);
        let ids: Vec<usize> = positives.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}

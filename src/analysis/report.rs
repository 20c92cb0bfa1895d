//! Text Report Module
//! Plain-text rendering of a batch report for headless runs.

use crate::analysis::BatchReport;
use crate::data::Dataset;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::fmt;

/// Summaries before and after merging, as printed by the headless mode.
pub fn summary_text(report: &BatchReport) -> String {
    SummaryText(report).to_string()
}

/// Display adapter over a batch report.
pub struct SummaryText<'a>(pub &'a BatchReport);

impl fmt::Display for SummaryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        for source in &report.sources {
            writeln!(f, "Results for {} before merging:", source.name)?;
            match &source.summary {
                Ok(summary) => writeln!(f, "{}", summary)?,
                Err(e) => writeln!(f, "{}", e)?,
            }
            writeln!(f)?;
        }

        for failure in &report.failures {
            writeln!(f, "Skipped {}: {}\n", failure.name, failure.error)?;
        }

        writeln!(f, "Results after merging:")?;
        match &report.merged_summary {
            Ok(summary) => writeln!(f, "{}", summary)?,
            Err(e) => writeln!(f, "{}", e)?,
        }

        if let Some(kept) = report.positive_after_reduction() {
            writeln!(f, "Positive after reduction: {:.2}%", kept)?;
        }

        if let Some(stats) = &report.polarity {
            writeln!(
                f,
                "Polarity: mean {:.3}, median {:.3}, std {:.3}, min {:.3}, max {:.3}",
                stats.mean, stats.median, stats.std, stats.min, stats.max
            )?;
        }

        Ok(())
    }
}

/// Per-record table: number, origin, original text, cleaned text, label.
pub fn records_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Origin", "Original text", "Cleaned text", "Label"]);

    for record in dataset.iter() {
        table.add_row(vec![
            (record.id() + 1).to_string(),
            record.origin().to_string(),
            record.raw().to_string(),
            record.clean().unwrap_or("").to_string(),
            record
                .label()
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}

//! Results Viewer Widget
//! Right side panel: per-source summaries, merged pie chart and record table.

use egui::{Color32, RichText, ScrollArea};
use sentiscope::analysis::BatchReport;
use sentiscope::charts::ChartPlotter;
use sentiscope::data::TextRecord;

const SECTION_SPACING: f32 = 15.0;
const PIE_HEIGHT: f32 = 320.0;
const ROW_HEIGHT: f32 = 20.0;
const TEXT_PREVIEW: usize = 80;

/// Scrollable view of the latest batch report.
#[derive(Default)]
pub struct ResultsViewer {
    pub report: Option<BatchReport>,
}

impl ResultsViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.report = None;
    }

    pub fn set_report(&mut self, report: BatchReport) {
        self.report = Some(report);
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(report) = &self.report else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .id_salt("results_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_sources(ui, report);
                ui.add_space(SECTION_SPACING);
                Self::draw_merged(ui, report);
                ui.add_space(SECTION_SPACING);
                Self::draw_records(ui, report);
            });
    }

    fn draw_sources(ui: &mut egui::Ui, report: &BatchReport) {
        ui.label(RichText::new("Before merging").size(18.0).strong());
        ui.add_space(8.0);

        let rows: Vec<_> = report
            .sources
            .iter()
            .filter_map(|s| s.summary.as_ref().ok().map(|summary| (s.name.clone(), *summary)))
            .collect();
        if !rows.is_empty() {
            ChartPlotter::draw_summary_table(ui, "sources", &rows);
        }

        let error_color = Color32::from_rgb(220, 53, 69);
        for source in &report.sources {
            if let Err(e) = &source.summary {
                ui.label(RichText::new(format!("⚠ {}: {}", source.name, e)).color(error_color));
            }
        }
        for failure in &report.failures {
            ui.label(
                RichText::new(format!("⚠ {} not loaded: {}", failure.name, failure.error))
                    .color(error_color),
            );
        }
    }

    fn draw_merged(ui: &mut egui::Ui, report: &BatchReport) {
        ui.label(RichText::new("After merging").size(18.0).strong());
        ui.add_space(8.0);

        let summary = match &report.merged_summary {
            Ok(summary) => summary,
            Err(e) => {
                ui.label(RichText::new(e.to_string()).color(Color32::GRAY));
                return;
            }
        };

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_width(PIE_HEIGHT);
                ChartPlotter::draw_pie_chart(ui, "merged", summary, PIE_HEIGHT);
            });
            ui.add_space(SECTION_SPACING);
            ui.vertical(|ui| {
                ChartPlotter::draw_summary_table(
                    ui,
                    "merged",
                    &[(report.merged.name().to_string(), *summary)],
                );
                ui.add_space(8.0);
                if let Some(kept) = report.positive_after_reduction() {
                    ui.label(format!(
                        "Data remaining after reduction (positive only): {:.2}%",
                        kept
                    ));
                }
                if let Some(stats) = &report.polarity {
                    ui.add_space(8.0);
                    ui.label(RichText::new("Polarity scores").size(14.0).strong());
                    ChartPlotter::draw_polarity_table(ui, stats);
                }
            });
        });
    }

    fn draw_records(ui: &mut egui::Ui, report: &BatchReport) {
        ui.label(
            RichText::new(format!("Records ({})", report.merged.len()))
                .size(18.0)
                .strong(),
        );
        ui.add_space(8.0);

        egui::Grid::new("records_header")
            .num_columns(5)
            .min_col_width(60.0)
            .show(ui, |ui| {
                for header in ["#", "Origin", "Original text", "Cleaned text", "Label"] {
                    ui.label(RichText::new(header).strong().size(11.0));
                }
                ui.end_row();
            });

        let records = report.merged.records();
        ScrollArea::vertical()
            .id_salt("records_scroll")
            .max_height(400.0)
            .show_rows(ui, ROW_HEIGHT, records.len(), |ui, row_range| {
                egui::Grid::new("records_rows")
                    .num_columns(5)
                    .striped(true)
                    .min_col_width(60.0)
                    .start_row(row_range.start)
                    .show(ui, |ui| {
                        for record in &records[row_range] {
                            Self::draw_record_row(ui, record);
                        }
                    });
            });
    }

    fn draw_record_row(ui: &mut egui::Ui, record: &TextRecord) {
        ui.label(RichText::new((record.id() + 1).to_string()).size(11.0));
        ui.label(RichText::new(record.origin()).size(11.0));
        ui.label(RichText::new(preview(record.raw())).size(11.0))
            .on_hover_text(record.raw());
        ui.label(RichText::new(preview(record.clean().unwrap_or(""))).size(11.0));
        match record.label() {
            Some(label) => ui.label(
                RichText::new(label.as_str())
                    .size(11.0)
                    .color(ChartPlotter::label_color32(label)),
            ),
            None => ui.label(RichText::new("-").size(11.0)),
        };
        ui.end_row();
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() <= TEXT_PREVIEW {
        text.to_string()
    } else {
        let cut: String = text.chars().take(TEXT_PREVIEW).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_is_shortened() {
        let long = "a".repeat(TEXT_PREVIEW + 5);
        assert_eq!(preview(&long).chars().count(), TEXT_PREVIEW + 1);
        assert_eq!(preview("short"), "short");
    }
}

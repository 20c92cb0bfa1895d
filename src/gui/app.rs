//! Sentiscope Main Application
//! Main window with control panel and results viewer.

use crate::gui::{ControlPanel, ControlPanelAction, ResultsViewer, UserSettings};
use egui::SidePanel;
use sentiscope::analysis::{run_batch, Aggregator, BatchReport};
use sentiscope::charts::StaticChartRenderer;
use sentiscope::config::{AppConfig, LoadOptions};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Analysis result from background thread
enum AnalysisResult {
    Progress(f32, String),
    Complete(Box<BatchReport>),
}

/// Main application window.
pub struct SentimentApp {
    config: AppConfig,
    aggregator: Aggregator,
    control_panel: ControlPanel,
    results_viewer: ResultsViewer,

    // Async analysis
    analysis_rx: Option<Receiver<AnalysisResult>>,
    is_analyzing: bool,
}

impl SentimentApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, aggregator: Aggregator) -> Self {
        let settings = UserSettings {
            sources: config.sources.clone(),
            limit_rows: config.max_rows.is_some(),
            max_rows: config.max_rows.unwrap_or(UserSettings::default().max_rows),
            skip_malformed: config.skip_malformed,
            ..UserSettings::default()
        };

        Self {
            config,
            aggregator,
            control_panel: ControlPanel::new(settings),
            results_viewer: ResultsViewer::new(),
            analysis_rx: None,
            is_analyzing: false,
        }
    }

    /// Pick CSV files and append them to the source list.
    fn handle_add_files(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_files()
        {
            self.control_panel.add_files(paths);
        }
    }

    /// Start loading and labeling in a background thread.
    fn start_analysis(&mut self) {
        let settings = &self.control_panel.settings;
        let sources = settings.sources.clone();
        let options = LoadOptions {
            max_rows: settings.max_rows(),
            skip_malformed: settings.skip_malformed,
        };
        let aggregator = self.aggregator.clone();

        self.results_viewer.clear();
        self.control_panel.export_enabled = false;

        let (tx, rx) = channel();
        self.analysis_rx = Some(rx);
        self.is_analyzing = true;
        self.control_panel.set_progress(1.0, "Starting...");

        thread::spawn(move || {
            let progress_tx = tx.clone();
            let report = run_batch(&aggregator, &sources, &options, |progress, status| {
                let _ = progress_tx.send(AnalysisResult::Progress(progress, status.to_string()));
            });
            let _ = tx.send(AnalysisResult::Complete(Box::new(report)));
        });
    }

    /// Check for analysis results
    fn check_analysis_results(&mut self) {
        // Take the receiver temporarily to avoid borrow issues
        let rx = self.analysis_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    AnalysisResult::Progress(progress, status) => {
                        // Completion is reported with the record count below.
                        if progress < 100.0 {
                            self.control_panel.set_progress(progress, &status);
                        }
                    }
                    AnalysisResult::Complete(report) => {
                        let status = completion_status(&report);
                        self.control_panel.export_enabled = report.merged_summary.is_ok();
                        self.control_panel.set_progress(100.0, &status);
                        self.results_viewer.set_report(*report);
                        self.is_analyzing = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.analysis_rx = Some(rx);
            }
        }
    }

    /// Render the merged pie chart to a PNG chosen by the user.
    fn handle_export_chart(&mut self) {
        let Some(summary) = self
            .results_viewer
            .report
            .as_ref()
            .and_then(|r| r.merged_summary.as_ref().ok().copied())
        else {
            self.control_panel.set_progress(0.0, "No chart to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("sentiment_pie.png")
            .save_file()
        else {
            return;
        };

        let chart = self.config.chart;
        match StaticChartRenderer::save_pie_png(&summary, &path, chart.width, chart.height) {
            Ok(()) => {
                self.control_panel
                    .set_progress(100.0, &format!("Chart exported: {}", path.display()));
                if let Err(e) = open::that(&path) {
                    log::warn!("Could not open {}: {}", path.display(), e);
                }
            }
            Err(e) => {
                self.control_panel
                    .set_progress(0.0, &format!("Export Error: {}", e));
            }
        }
    }
}

fn completion_status(report: &BatchReport) -> String {
    let mut status = format!(
        "Complete! {} records from {} sources",
        report.merged.len(),
        report.sources.len()
    );
    if !report.failures.is_empty() {
        status.push_str(&format!(", {} failed", report.failures.len()));
    }
    status
}

impl eframe::App for SentimentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_analysis_results();

        if self.is_analyzing {
            ctx.request_repaint();
        }

        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui, self.is_analyzing) {
                        ControlPanelAction::AddFiles => self.handle_add_files(),
                        ControlPanelAction::Analyze => {
                            if !self.is_analyzing {
                                self.start_analysis();
                            }
                        }
                        ControlPanelAction::ExportChart => self.handle_export_chart(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.results_viewer.show(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiscope::analysis::SourceFailure;
    use sentiscope::data::Dataset;
    use sentiscope::Pipeline;

    #[test]
    fn completion_status_mentions_failures() {
        let aggregator = Aggregator::new(Pipeline::english());
        let mut report = run_batch(&aggregator, &[], &LoadOptions::default(), |_, _| {});
        assert_eq!(completion_status(&report), "Complete! 0 records from 0 sources");

        report.merged = Dataset::from_texts("merged", ["good day"]);
        report.failures.push(SourceFailure {
            name: "gone.csv".to_string(),
            error: "missing".to_string(),
        });
        assert_eq!(
            completion_status(&report),
            "Complete! 1 records from 0 sources, 1 failed"
        );
    }
}

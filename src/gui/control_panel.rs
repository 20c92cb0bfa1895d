//! Control Panel Widget
//! Left side panel with source selection, load settings and actions.

use egui::{Color32, ComboBox, RichText, ScrollArea};
use sentiscope::config::{SchemaPreset, SourceConfig, DEFAULT_MAX_ROWS};

/// User settings for the next analysis run
#[derive(Clone)]
pub struct UserSettings {
    pub sources: Vec<SourceConfig>,
    /// Preset applied to files added from the dialog; `None` means headered CSV.
    pub preset: Option<SchemaPreset>,
    pub limit_rows: bool,
    pub max_rows: usize,
    pub skip_malformed: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            preset: None,
            limit_rows: true,
            max_rows: DEFAULT_MAX_ROWS,
            skip_malformed: false,
        }
    }
}

impl UserSettings {
    pub fn max_rows(&self) -> Option<usize> {
        self.limit_rows.then_some(self.max_rows)
    }
}

/// Left side control panel with file selection and processing controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub progress: f32,
    pub status: String,
    pub export_enabled: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            progress: 0.0,
            status: "Ready".to_string(),
            export_enabled: false,
        }
    }
}

impl ControlPanel {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Register files picked in the dialog with the current preset.
    pub fn add_files(&mut self, paths: Vec<std::path::PathBuf>) {
        for path in paths {
            if self.settings.sources.iter().any(|s| s.path == path) {
                continue;
            }
            let source = match self.settings.preset {
                Some(preset) => SourceConfig::with_preset(path, preset),
                None => SourceConfig::with_header(path),
            };
            self.settings.sources.push(source);
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, busy: bool) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Sentiscope")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Social text sentiment")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Sources =====
        ui.label(RichText::new("📁 Data Sources").size(14.0).strong());
        ui.add_space(5.0);

        let label_width = 110.0;
        let combo_width = 150.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Schema:"));
            let selected = self
                .settings
                .preset
                .map(|p| p.as_str())
                .unwrap_or("header row");
            ComboBox::from_id_salt("schema_preset")
                .width(combo_width)
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.settings.preset, None, "header row");
                    for preset in SchemaPreset::ALL {
                        ui.selectable_value(
                            &mut self.settings.preset,
                            Some(preset),
                            preset.as_str(),
                        );
                    }
                });
        });

        ui.add_space(5.0);

        let mut remove = None;
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                if self.settings.sources.is_empty() {
                    ui.label(RichText::new("No files selected").size(12.0).color(Color32::GRAY));
                }
                ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                    for (i, source) in self.settings.sources.iter().enumerate() {
                        ui.horizontal(|ui| {
                            let schema = source.preset.map(|p| p.as_str()).unwrap_or("header");
                            ui.label(RichText::new(source.name()).size(12.0));
                            ui.label(RichText::new(schema).size(10.0).color(Color32::GRAY));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("✖").clicked() {
                                        remove = Some(i);
                                    }
                                },
                            );
                        });
                    }
                });
            });
        if let Some(i) = remove {
            self.settings.sources.remove(i);
        }

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui.button("📂 Add CSV files").clicked() {
                action = ControlPanelAction::AddFiles;
            }
            if ui.small_button("Clear").clicked() {
                self.settings.sources.clear();
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Load settings =====
        ui.label(RichText::new("⚙️ Loading").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.checkbox(&mut self.settings.limit_rows, "Rows per file:");
            ui.add_enabled(
                self.settings.limit_rows,
                egui::DragValue::new(&mut self.settings.max_rows).range(1..=1_000_000),
            );
        });
        ui.checkbox(&mut self.settings.skip_malformed, "Skip rows without text");

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let can_analyze = !busy && !self.settings.sources.is_empty();
            ui.add_enabled_ui(can_analyze, |ui| {
                let button = egui::Button::new(RichText::new("▶ Analyze").size(16.0))
                    .min_size(egui::vec2(200.0, 35.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Analyze;
                }
            });

            ui.add_space(8.0);

            ui.add_enabled_ui(self.export_enabled && !busy, |ui| {
                let export_button = egui::Button::new(RichText::new("🖼 Export chart").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(export_button).clicked() {
                    action = ControlPanelAction::ExportChart;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("📊 Progress").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Complete") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlPanelAction {
    None,
    AddFiles,
    Analyze,
    ExportChart,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn added_files_take_current_preset_once() {
        let mut panel = ControlPanel::default();
        panel.settings.preset = Some(SchemaPreset::Sentiment140);
        panel.add_files(vec![PathBuf::from("a.csv"), PathBuf::from("a.csv")]);
        panel.settings.preset = None;
        panel.add_files(vec![PathBuf::from("b.csv")]);

        assert_eq!(panel.settings.sources.len(), 2);
        assert_eq!(panel.settings.sources[0].preset, Some(SchemaPreset::Sentiment140));
        assert_eq!(panel.settings.sources[1].preset, None);
    }

    #[test]
    fn row_limit_can_be_disabled() {
        let mut settings = UserSettings::default();
        assert_eq!(settings.max_rows(), Some(DEFAULT_MAX_ROWS));
        settings.limit_rows = false;
        assert_eq!(settings.max_rows(), None);
    }
}

//! Chart Plotter Module
//! Interactive sentiment views drawn with egui_plot and egui grids.

use crate::analysis::SentimentSummary;
use crate::charts::{label_color, PieChart};
use crate::sentiment::Sentiment;
use crate::stats::PolarityStats;
use egui::{Color32, RichText};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

const PIE_SEGMENTS: usize = 120;
const CAPTION_RADIUS: f64 = 0.62;

/// Slice polygon in unit-circle plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SlicePolygon {
    pub label: Sentiment,
    pub caption: String,
    pub points: Vec<[f64; 2]>,
    pub anchor: [f64; 2],
}

/// Draws sentiment charts and tables inside egui.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn label_color32(label: Sentiment) -> Color32 {
        let [r, g, b] = label_color(label);
        Color32::from_rgb(r, g, b)
    }

    /// Unit-circle polygons for every non-empty slice of `summary`.
    pub fn pie_polygons(summary: &SentimentSummary) -> Vec<SlicePolygon> {
        PieChart::from_summary(summary)
            .slices
            .iter()
            .map(|slice| {
                let points = slice
                    .outline((0.0, 0.0), 1.0, PIE_SEGMENTS)
                    .into_iter()
                    .map(|(x, y)| [x, y])
                    .collect();
                let (ax, ay) = slice.label_anchor((0.0, 0.0), 1.0, CAPTION_RADIUS);
                SlicePolygon {
                    label: slice.label,
                    caption: slice.caption(),
                    points,
                    anchor: [ax, ay],
                }
            })
            .collect()
    }

    /// Draw the pie chart for `summary`. Axes and grid are hidden.
    pub fn draw_pie_chart(ui: &mut egui::Ui, id: &str, summary: &SentimentSummary, height: f32) {
        let polygons = Self::pie_polygons(summary);

        Plot::new(format!("pie_{}", id))
            .height(height)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for slice in &polygons {
                    let color = Self::label_color32(slice.label);
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(slice.points.clone()))
                            .fill_color(color)
                            .stroke(egui::Stroke::new(1.0, Color32::WHITE))
                            .name(slice.label.as_str()),
                    );
                }
                for slice in &polygons {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(slice.anchor[0], slice.anchor[1]),
                            RichText::new(&slice.caption).size(13.0).strong(),
                        )
                        .color(Color32::WHITE),
                    );
                }
            });
    }

    /// Counts and percentages per source, one row each.
    pub fn draw_summary_table(ui: &mut egui::Ui, id: &str, rows: &[(String, SentimentSummary)]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new(ui.make_persistent_id(format!("summary_table_{}", id)))
                    .striped(true)
                    .min_col_width(55.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Source").strong().size(11.0));
                        ui.label(RichText::new("N").strong().size(11.0));
                        for label in Sentiment::ALL {
                            ui.label(
                                RichText::new(label.to_string())
                                    .strong()
                                    .size(11.0)
                                    .color(Self::label_color32(label)),
                            );
                        }
                        ui.end_row();

                        for (name, summary) in rows {
                            ui.label(RichText::new(name).size(11.0));
                            ui.label(RichText::new(summary.total.to_string()).size(11.0));
                            for label in Sentiment::ALL {
                                ui.label(
                                    RichText::new(format!(
                                        "{:.2}% ({})",
                                        summary.percentage(label),
                                        summary.count(label)
                                    ))
                                    .size(11.0),
                                );
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    /// Descriptive statistics of the polarity scores.
    pub fn draw_polarity_table(ui: &mut egui::Ui, stats: &PolarityStats) {
        egui::Grid::new(ui.make_persistent_id("polarity_table"))
            .striped(true)
            .min_col_width(55.0)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for header in ["N", "Mean", "Median", "Std", "Min", "Max"] {
                    ui.label(RichText::new(header).strong().size(11.0));
                }
                ui.end_row();

                ui.label(RichText::new(stats.count.to_string()).size(11.0));
                for value in [stats.mean, stats.median, stats.std, stats.min, stats.max] {
                    ui.label(RichText::new(format!("{:.3}", value)).size(11.0));
                }
                ui.end_row();
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygons_follow_label_order_and_start_at_origin() {
        let summary = SentimentSummary::from_labels([
            Sentiment::Negative,
            Sentiment::Positive,
            Sentiment::Positive,
        ])
        .unwrap();
        let polygons = ChartPlotter::pie_polygons(&summary);

        let labels: Vec<Sentiment> = polygons.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec![Sentiment::Positive, Sentiment::Negative]);
        assert_eq!(polygons[0].points[0], [0.0, 0.0]);
        assert_eq!(polygons[0].caption, "66.7%");
        assert_eq!(polygons[1].caption, "33.3%");
    }

    #[test]
    fn captions_sit_inside_the_circle() {
        let summary = SentimentSummary::from_labels(Sentiment::ALL).unwrap();
        for polygon in ChartPlotter::pie_polygons(&summary) {
            let [x, y] = polygon.anchor;
            assert!((x * x + y * y).sqrt() < 1.0);
        }
    }

    #[test]
    fn colors_match_static_renderer() {
        assert_eq!(
            ChartPlotter::label_color32(Sentiment::Positive),
            Color32::from_rgb(46, 160, 67)
        );
    }
}

//! Pie Chart Geometry Module
//! Slice angles, colors and outlines shared by the interactive and static views.

use crate::analysis::SentimentSummary;
use crate::sentiment::Sentiment;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Slice colors per label (RGB).
pub fn label_color(label: Sentiment) -> [u8; 3] {
    match label {
        Sentiment::Positive => [46, 160, 67],   // Green
        Sentiment::Neutral => [150, 150, 150],  // Gray
        Sentiment::Negative => [214, 39, 40],   // Red
    }
}

/// One slice of the sentiment pie. Angles are in radians, counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: Sentiment,
    pub count: usize,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieSlice {
    pub fn color(&self) -> [u8; 3] {
        label_color(self.label)
    }

    /// Text shown on the slice, e.g. `40.0%`.
    pub fn caption(&self) -> String {
        format!("{:.1}%", self.percentage)
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Closed polygon approximating the slice: center, then the arc.
    pub fn outline(&self, center: (f64, f64), radius: f64, segments: usize) -> Vec<(f64, f64)> {
        let span = self.end_angle - self.start_angle;
        let steps = ((segments as f64 * span / TAU - 1e-9).ceil() as usize).max(1);

        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let angle = self.start_angle + span * i as f64 / steps as f64;
            points.push(point_on_circle(center, radius, angle));
        }
        points
    }

    /// Anchor for the caption, at `fraction` of the radius along the mid angle.
    pub fn label_anchor(&self, center: (f64, f64), radius: f64, fraction: f64) -> (f64, f64) {
        point_on_circle(center, radius * fraction, self.mid_angle())
    }
}

fn point_on_circle(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (
        center.0 + radius * angle.cos(),
        center.1 + radius * angle.sin(),
    )
}

/// Sentiment pie starting at 12 o'clock, slices in label order.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Build slices for every label with a non-zero count.
    pub fn from_summary(summary: &SentimentSummary) -> Self {
        let mut slices = Vec::new();
        if summary.total == 0 {
            return Self { slices };
        }

        let mut start = FRAC_PI_2;
        let mut seen = 0usize;
        for label in Sentiment::ALL {
            let count = summary.count(label);
            if count == 0 {
                continue;
            }
            seen += count;
            // Close the circle exactly on the last slice.
            let end = if seen == summary.total {
                FRAC_PI_2 + TAU
            } else {
                start + TAU * count as f64 / summary.total as f64
            };
            slices.push(PieSlice {
                label,
                count,
                percentage: summary.percentage(label),
                start_angle: start,
                end_angle: end,
            });
            start = end;
        }

        Self { slices }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(p: usize, n: usize, neg: usize) -> SentimentSummary {
        let labels = std::iter::repeat(Sentiment::Positive)
            .take(p)
            .chain(std::iter::repeat(Sentiment::Neutral).take(n))
            .chain(std::iter::repeat(Sentiment::Negative).take(neg));
        SentimentSummary::from_labels(labels).unwrap()
    }

    #[test]
    fn slices_cover_full_circle() {
        let pie = PieChart::from_summary(&summary(4, 3, 3));
        assert_eq!(pie.slices.len(), 3);
        let span: f64 = pie.slices.iter().map(|s| s.end_angle - s.start_angle).sum();
        assert!((span - TAU).abs() < 1e-9);
        assert_eq!(pie.slices[0].start_angle, FRAC_PI_2);
        assert_eq!(pie.slices[2].end_angle, FRAC_PI_2 + TAU);
        assert!((pie.slices[0].end_angle - pie.slices[0].start_angle - 0.4 * TAU).abs() < 1e-9);
    }

    #[test]
    fn zero_count_labels_are_skipped() {
        let pie = PieChart::from_summary(&summary(2, 0, 1));
        let labels: Vec<Sentiment> = pie.slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Sentiment::Positive, Sentiment::Negative]);
    }

    #[test]
    fn captions_use_one_decimal() {
        let pie = PieChart::from_summary(&summary(1, 1, 1));
        assert_eq!(pie.slices[0].caption(), "33.3%");
    }

    #[test]
    fn outline_starts_at_center_and_spans_arc() {
        let pie = PieChart::from_summary(&summary(1, 0, 0));
        let outline = pie.slices[0].outline((0.0, 0.0), 1.0, 64);
        assert_eq!(outline[0], (0.0, 0.0));
        assert_eq!(outline.len(), 64 + 2);
        let first = outline[1];
        let last = outline[outline.len() - 1];
        assert!(first.0.abs() < 1e-12 && (first.1 - 1.0).abs() < 1e-12);
        assert!((last.0 - first.0).abs() < 1e-9 && (last.1 - first.1).abs() < 1e-9);
    }

    #[test]
    fn colors_follow_labels() {
        assert_eq!(label_color(Sentiment::Positive), [46, 160, 67]);
        assert_ne!(label_color(Sentiment::Neutral), label_color(Sentiment::Negative));
    }
}

//! Static Chart Renderer
//! Renders the sentiment pie chart to PNG bytes for export.
//!
//! Layout:
//! 1. Title centered at the top
//! 2. Pie on the left, one filled polygon per slice, percentage captions inside
//! 3. Legend on the right: colored box, label, count

use crate::analysis::SentimentSummary;
use crate::charts::PieChart;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("Chart size {0}x{1} is too small")]
    TooSmall(u32, u32),
    #[error("Chart size {0}x{1} is too large")]
    TooLarge(u32, u32),
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}

const MIN_SIZE: u32 = 200;
const MAX_SIZE: u32 = 16_384;
const ARC_SEGMENTS: usize = 180;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the pie chart for `summary` as PNG bytes.
    pub fn render_pie_png(
        summary: &SentimentSummary,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        if width < MIN_SIZE || height < MIN_SIZE {
            return Err(RenderError::TooSmall(width, height));
        }

        if width > MAX_SIZE || height > MAX_SIZE {
            return Err(RenderError::TooLarge(width, height));
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(RenderError::TooLarge(width, height))?;
        let mut buffer = vec![255u8; len];
        Self::draw_pie(&mut buffer, summary, width, height)
            .map_err(|e| RenderError::Draw(e.to_string()))?;

        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| RenderError::Draw("pixel buffer size mismatch".to_string()))?;
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(png)
    }

    /// Render and write a PNG file.
    pub fn save_pie_png(
        summary: &SentimentSummary,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let png = Self::render_pie_png(summary, width, height)?;
        std::fs::write(path, png)?;
        log::info!("Chart written to {}", path.display());
        Ok(())
    }

    fn draw_pie(
        buffer: &mut [u8],
        summary: &SentimentSummary,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::with_buffer(buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let title_font = ("sans-serif", 24.0).into_font();
        let body = root.titled("Sentiment distribution", title_font)?;
        let (body_w, body_h) = body.dim_in_pixel();

        let legend_w = (body_w as f64 * 0.3) as i32;
        let pie_w = body_w as i32 - legend_w;
        let center = (pie_w as f64 / 2.0, body_h as f64 / 2.0);
        let radius = (pie_w.min(body_h as i32) as f64 / 2.0) * 0.85;

        let pie = PieChart::from_summary(summary);
        let caption_font = ("sans-serif", 16.0).into_font().color(&WHITE);
        for slice in &pie.slices {
            let [r, g, b] = slice.color();
            // Image y grows downward, so flip angles to keep counter-clockwise order.
            let points: Vec<(i32, i32)> = slice
                .outline(center, radius, ARC_SEGMENTS)
                .into_iter()
                .map(|(x, y)| (x.round() as i32, (2.0 * center.1 - y).round() as i32))
                .collect();
            body.draw(&Polygon::new(points, RGBColor(r, g, b).filled()))?;

            let (lx, ly) = slice.label_anchor(center, radius, 0.6);
            body.draw(&Text::new(
                slice.caption(),
                (lx.round() as i32 - 18, (2.0 * center.1 - ly).round() as i32 - 8),
                caption_font.clone(),
            ))?;
        }

        let legend_font = ("sans-serif", 16.0).into_font();
        let mut y = (body_h as i32 / 2) - 40;
        for slice in &pie.slices {
            let [r, g, b] = slice.color();
            let x = pie_w + 10;
            body.draw(&Rectangle::new(
                [(x, y), (x + 16, y + 16)],
                RGBColor(r, g, b).filled(),
            ))?;
            body.draw(&Text::new(
                format!("{} ({})", slice.label, slice.count),
                (x + 24, y),
                legend_font.clone(),
            ))?;
            y += 28;
        }

        root.present()?;
        Ok(())
    }
}

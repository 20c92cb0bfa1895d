//! Sentiscope - sentiment labeling for social-media text exports
//!
//! Opens the desktop window by default; `--headless` prints the report instead.

mod cli;
mod gui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use eframe::egui;
use gui::SentimentApp;
use sentiscope::analysis::{report, run_batch, Aggregator};
use sentiscope::charts::StaticChartRenderer;
use sentiscope::config::{AppConfig, SourceConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::discover(&std::env::current_dir()?)?,
    };
    config
        .sources
        .extend(cli.files.iter().cloned().map(SourceConfig::with_header));
    if let Some(rows) = cli.max_rows {
        config.max_rows = (rows > 0).then_some(rows);
    }

    let pipeline = config
        .build_pipeline()
        .context("Failed to build the labeling pipeline")?;
    let aggregator = Aggregator::new(pipeline);

    if cli.headless {
        run_headless(&config, &aggregator, &cli)
    } else {
        run_gui(config, aggregator)
    }
}

fn run_headless(config: &AppConfig, aggregator: &Aggregator, cli: &Cli) -> Result<()> {
    if config.sources.is_empty() {
        anyhow::bail!("No sources given; pass CSV files or configure `sources`");
    }

    let options = config.load_options();
    let batch = run_batch(aggregator, &config.sources, &options, |progress, status| {
        log::debug!("[{:>3.0}%] {}", progress, status);
    });

    print!("{}", report::summary_text(&batch));
    println!("\nRecords:");
    println!("{}", report::records_table(&batch.merged));

    if let Some(path) = &cli.export_chart {
        let summary = batch
            .merged_summary
            .as_ref()
            .map_err(|e| anyhow::anyhow!("Cannot export chart: {}", e))?;
        StaticChartRenderer::save_pie_png(summary, path, config.chart.width, config.chart.height)
            .with_context(|| format!("Failed to export chart to {}", path.display()))?;
        println!("Chart written to {}", path.display());
    }

    Ok(())
}

fn run_gui(config: AppConfig, aggregator: Aggregator) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Sentiscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiscope",
        options,
        Box::new(move |cc| Ok(Box::new(SentimentApp::new(cc, config, aggregator)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}

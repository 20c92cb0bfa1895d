//! Command Line Module
//! Flags for choosing sources, configuration and the headless report.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentiscope")]
#[command(about = "Batch sentiment labeling for social-media CSV exports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV files with a header row, added to the configured sources
    pub files: Vec<PathBuf>,

    /// Configuration file (defaults to ./sentiscope.json when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report to stdout instead of opening the window
    #[arg(long)]
    pub headless: bool,

    /// Write the merged pie chart as PNG (headless only)
    #[arg(long = "export-chart", requires = "headless")]
    pub export_chart: Option<PathBuf>,

    /// Rows read per file; 0 reads every row
    #[arg(long)]
    pub max_rows: Option<usize>,
}

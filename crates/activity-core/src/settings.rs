use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Aggregate exported repository-activity records into chart data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "activity-charts",
    about = "Aggregate exported repository-activity records into chart data",
    version
)]
pub struct Settings {
    /// Directory with the exported activity documents (raw_*.json)
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Path of the generated chart-data artifact
    #[arg(long, default_value = "chart_data.js")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

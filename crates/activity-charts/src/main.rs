mod bootstrap;

use activity_core::settings::Settings;
use activity_data::analysis::analyze_activity;
use activity_data::emitter::write_chart_data;
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("activity-charts v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data dir: {}, output: {}",
        settings.data_dir.display(),
        settings.output.display()
    );

    let report = analyze_activity(&settings.data_dir)?;

    tracing::info!(
        "Aggregated {} commits and {} pull requests from {} documents in {:.2}s",
        report.metadata.commits_processed,
        report.metadata.prs_counted,
        report.metadata.files_discovered,
        report.metadata.load_time_seconds,
    );

    write_chart_data(&report.chart, &settings.output)?;

    Ok(())
}

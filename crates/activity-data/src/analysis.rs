//! Top-level aggregation pipeline.
//!
//! Strings together document loading, per-record aggregation and the chart
//! projection, returning an [`ActivityReport`] ready for the emitter.

use std::path::Path;

use activity_core::error::Result;
use chrono::Utc;
use tracing::debug;

use crate::aggregator::ActivityStats;
use crate::projection::ChartData;
use crate::reader::{find_raw_files, load_commit_records};

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the chart data.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ActivityMetadata {
    /// ISO-8601 timestamp when this report was generated.
    pub generated_at: String,
    /// Number of `raw_*.json` documents discovered.
    pub files_discovered: usize,
    /// Number of commit records processed.
    pub commits_processed: usize,
    /// Number of fully-identified pull requests counted.
    pub prs_counted: u64,
    /// Wall-clock seconds spent loading and parsing the documents.
    pub load_time_seconds: f64,
}

/// The complete output of [`analyze_activity`].
#[derive(Debug, Clone)]
pub struct ActivityReport {
    /// The raw accumulated statistics.
    pub stats: ActivityStats,
    /// The chart-ready projection of those statistics.
    pub chart: ChartData,
    /// Metadata about this run.
    pub metadata: ActivityMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full aggregation pipeline over the documents in `data_dir`.
///
/// 1. Discover and load all `raw_*.json` documents (malformed documents
///    are reported and skipped inside the loader).
/// 2. Feed every commit record through the aggregator.
/// 3. Project the accumulated state into chart series.
///
/// Fails only on the fatal timestamp cases; everything else degrades to
/// skipped documents or skipped pull requests.
pub fn analyze_activity(data_dir: &Path) -> Result<ActivityReport> {
    let load_start = std::time::Instant::now();
    let files_discovered = find_raw_files(data_dir).len();
    let records = load_commit_records(data_dir);
    let load_time = load_start.elapsed().as_secs_f64();

    let mut stats = ActivityStats::default();
    for record in &records {
        stats.process_commit(record)?;
    }

    debug!(
        "Aggregated {} commits and {} pull requests from {} documents",
        records.len(),
        stats.counted_prs(),
        files_discovered,
    );

    let chart = ChartData::from_stats(&stats);

    let metadata = ActivityMetadata {
        generated_at: Utc::now().to_rfc3339(),
        files_discovered,
        commits_processed: records.len(),
        prs_counted: stats.counted_prs(),
        load_time_seconds: load_time,
    };

    Ok(ActivityReport {
        stats,
        chart,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

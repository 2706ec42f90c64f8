//! Emission of the chart-data artifact.
//!
//! The charting front end consumes a plain JavaScript file of `const`
//! assignments, one per series, in a fixed order.

use std::path::Path;

use activity_core::error::{ActivityError, Result};
use serde::Serialize;
use tracing::info;

use crate::projection::ChartData;

/// Render the artifact content: one `const <name> = <json>;` line per
/// series, in the order the front end expects.
pub fn render_chart_data(chart: &ChartData) -> Result<String> {
    let mut out = String::new();

    assign(&mut out, "labels_authors", &chart.labels_authors)?;
    assign(&mut out, "data_authors", &chart.data_authors)?;
    assign(&mut out, "common_dates", &chart.common_dates)?;
    assign(&mut out, "common_dates_counts", &chart.common_dates_counts)?;
    assign(&mut out, "days", &chart.days)?;
    assign(&mut out, "data_days", &chart.data_days)?;
    assign(&mut out, "months", &chart.months)?;
    assign(&mut out, "data_months", &chart.data_months)?;
    assign(&mut out, "labels_pr_authors", &chart.labels_pr_authors)?;
    assign(&mut out, "data_pr_authors", &chart.data_pr_authors)?;
    assign(&mut out, "labels_statuses", &chart.labels_statuses)?;
    assign(&mut out, "data_statuses", &chart.data_statuses)?;
    assign(&mut out, "average_merge_time", &chart.average_merge_time)?;
    assign(
        &mut out,
        "average_review_comments",
        &chart.average_review_comments,
    )?;
    assign(&mut out, "labels_pr_approval", &chart.labels_pr_approval)?;
    assign(&mut out, "data_pr_approval", &chart.data_pr_approval)?;
    assign(&mut out, "years", &chart.years)?;
    assign(&mut out, "data_years", &chart.data_years)?;

    Ok(out)
}

/// Render and write the artifact to `path`.
pub fn write_chart_data(chart: &ChartData, path: &Path) -> Result<()> {
    let content = render_chart_data(chart)?;
    std::fs::write(path, &content).map_err(|source| ActivityError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote chart data to {}", path.display());
    Ok(())
}

fn assign<T: Serialize>(out: &mut String, name: &str, value: &T) -> Result<()> {
    out.push_str("const ");
    out.push_str(name);
    out.push_str(" = ");
    out.push_str(&serde_json::to_string(value)?);
    out.push_str(";\n");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::ActivityStats;
    use tempfile::TempDir;

    fn sample_chart() -> ChartData {
        let mut stats = ActivityStats::default();
        stats.commits_per_author.insert("Alice".to_string(), 2);
        stats.status_counts.insert("MERGED".to_string(), 1);
        stats.prs_per_author.insert("alice".to_string(), 1);
        stats.merge_durations_hours.push(36.0);
        stats.review_counts.push(1);
        stats.other_approved_prs = 1;
        ChartData::from_stats(&stats)
    }

    #[test]
    fn test_render_has_one_assignment_per_series() {
        let content = render_chart_data(&sample_chart()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 18);
        assert!(lines
            .iter()
            .all(|l| l.starts_with("const ") && l.ends_with(";")));
    }

    #[test]
    fn test_render_fixed_order() {
        let content = render_chart_data(&sample_chart()).unwrap();
        let names: Vec<&str> = content
            .lines()
            .map(|l| l.trim_start_matches("const "))
            .map(|l| l.split(" = ").next().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "labels_authors",
                "data_authors",
                "common_dates",
                "common_dates_counts",
                "days",
                "data_days",
                "months",
                "data_months",
                "labels_pr_authors",
                "data_pr_authors",
                "labels_statuses",
                "data_statuses",
                "average_merge_time",
                "average_review_comments",
                "labels_pr_approval",
                "data_pr_approval",
                "years",
                "data_years",
            ]
        );
    }

    #[test]
    fn test_render_json_literals() {
        let content = render_chart_data(&sample_chart()).unwrap();
        assert!(content.contains(r#"const labels_authors = ["Alice"];"#));
        assert!(content.contains("const data_authors = [2];"));
        assert!(content.contains("const average_merge_time = 36.0;"));
        assert!(content.contains(r#"const labels_pr_approval = ["Approved by Others","Self-Approved"];"#));
    }

    #[test]
    fn test_render_deterministic() {
        let a = render_chart_data(&sample_chart()).unwrap();
        let b = render_chart_data(&sample_chart()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_chart_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chart_data.js");
        write_chart_data(&sample_chart(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_chart_data(&sample_chart()).unwrap());
    }

    #[test]
    fn test_write_chart_data_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-subdir").join("chart_data.js");
        let err = write_chart_data(&sample_chart(), &path).unwrap_err();
        assert!(matches!(err, ActivityError::FileWrite { .. }));
    }
}

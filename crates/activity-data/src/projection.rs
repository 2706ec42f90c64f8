//! Projection of [`ActivityStats`] into chart-ready series.
//!
//! Everything here is a read-only view over the accumulated state,
//! produced once after all documents have been processed. Each `labels_*`
//! / `data_*` pair is index-aligned.

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;

use crate::aggregator::ActivityStats;

/// Labels for the weekday buckets, Monday first.
pub const DAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Labels for the calendar-month buckets.
pub const MONTH_LABELS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Labels for the approval split, aligned with
/// `[other_approved, self_approved]`.
pub const APPROVAL_LABELS: [&str; 2] = ["Approved by Others", "Self-Approved"];

/// How many of the most frequent commit dates are exposed.
const TOP_DATES: usize = 5;

// ── ChartData ─────────────────────────────────────────────────────────────────

/// All chart series derived from one aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels_authors: Vec<String>,
    pub data_authors: Vec<u64>,
    /// The most frequent commit dates as `YYYY-MM-DD` strings, up to five.
    pub common_dates: Vec<String>,
    pub common_dates_counts: Vec<u64>,
    pub days: Vec<String>,
    /// Commit counts per weekday, Monday=0; always 7 entries.
    pub data_days: Vec<u64>,
    pub months: Vec<String>,
    /// Commit counts per calendar month; always 12 entries.
    pub data_months: Vec<u64>,
    pub labels_pr_authors: Vec<String>,
    pub data_pr_authors: Vec<u64>,
    pub labels_statuses: Vec<String>,
    pub data_statuses: Vec<u64>,
    /// Mean merge duration in hours, 0 when no PR was merged.
    pub average_merge_time: f64,
    /// Mean number of reviews per counted PR, 0 when none were counted.
    pub average_review_comments: f64,
    pub labels_pr_approval: Vec<String>,
    pub data_pr_approval: Vec<u64>,
    /// Distinct years with commits, ascending; gaps are not filled.
    pub years: Vec<i32>,
    pub data_years: Vec<u64>,
}

impl ChartData {
    /// Build every chart series from the accumulated statistics.
    pub fn from_stats(stats: &ActivityStats) -> Self {
        let (common_dates, common_dates_counts) = top_dates(&stats.commit_dates);

        let mut data_days = vec![0u64; 7];
        for date in &stats.commit_dates {
            data_days[date.weekday().num_days_from_monday() as usize] += 1;
        }

        let mut data_months = vec![0u64; 12];
        for date in &stats.commit_dates {
            data_months[date.month0() as usize] += 1;
        }

        let mut year_counts: IndexMap<i32, u64> = IndexMap::new();
        for date in &stats.commit_dates {
            *year_counts.entry(date.year()).or_insert(0) += 1;
        }
        year_counts.sort_keys();
        let years: Vec<i32> = year_counts.keys().copied().collect();
        let data_years: Vec<u64> = year_counts.values().copied().collect();

        Self {
            labels_authors: stats.commits_per_author.keys().cloned().collect(),
            data_authors: stats.commits_per_author.values().copied().collect(),
            common_dates,
            common_dates_counts,
            days: DAY_LABELS.iter().map(|d| d.to_string()).collect(),
            data_days,
            months: MONTH_LABELS.iter().map(|m| m.to_string()).collect(),
            data_months,
            labels_pr_authors: stats.prs_per_author.keys().cloned().collect(),
            data_pr_authors: stats.prs_per_author.values().copied().collect(),
            labels_statuses: stats.status_counts.keys().cloned().collect(),
            data_statuses: stats.status_counts.values().copied().collect(),
            average_merge_time: mean(&stats.merge_durations_hours),
            average_review_comments: mean_u64(&stats.review_counts),
            labels_pr_approval: APPROVAL_LABELS.iter().map(|l| l.to_string()).collect(),
            data_pr_approval: vec![stats.other_approved_prs, stats.self_approved_prs],
            years,
            data_years,
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// The up-to-five most frequent commit dates with their counts.
///
/// Frequency ties are broken by first-encountered order, which the
/// insertion-ordered counting map preserves through the stable sort.
fn top_dates(dates: &[NaiveDate]) -> (Vec<String>, Vec<u64>) {
    let mut counts: IndexMap<NaiveDate, u64> = IndexMap::new();
    for date in dates {
        *counts.entry(*date).or_insert(0) += 1;
    }

    let mut ranked: Vec<(NaiveDate, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_DATES);

    let labels = ranked
        .iter()
        .map(|(date, _)| date.format("%Y-%m-%d").to_string())
        .collect();
    let values = ranked.iter().map(|(_, count)| *count).collect();
    (labels, values)
}

/// Arithmetic mean, 0 for an empty slice.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Arithmetic mean of integer counts, 0 for an empty slice.
fn mean_u64(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u64>() as f64 / values.len() as f64
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stats_with_dates(dates: &[NaiveDate]) -> ActivityStats {
        ActivityStats {
            commit_dates: dates.to_vec(),
            ..Default::default()
        }
    }

    // ── top dates ─────────────────────────────────────────────────────────────

    #[test]
    fn test_top_dates_most_frequent_first() {
        let mut dates = Vec::new();
        dates.extend(std::iter::repeat(date(2024, 1, 1)).take(3));
        dates.extend(std::iter::repeat(date(2024, 1, 2)).take(5));
        dates.push(date(2024, 1, 3));

        let chart = ChartData::from_stats(&stats_with_dates(&dates));
        assert_eq!(chart.common_dates[0], "2024-01-02");
        assert_eq!(chart.common_dates_counts[0], 5);
        assert_eq!(chart.common_dates.len(), 3);
    }

    #[test]
    fn test_top_dates_capped_at_five() {
        let dates: Vec<NaiveDate> = (1..=8).map(|d| date(2024, 1, d)).collect();
        let chart = ChartData::from_stats(&stats_with_dates(&dates));
        assert_eq!(chart.common_dates.len(), 5);
        assert_eq!(chart.common_dates_counts.len(), 5);
    }

    #[test]
    fn test_top_dates_ties_broken_by_first_encounter() {
        // Same frequency everywhere; first-seen date must rank first.
        let dates = vec![date(2024, 3, 9), date(2024, 3, 7), date(2024, 3, 8)];
        let chart = ChartData::from_stats(&stats_with_dates(&dates));
        assert_eq!(
            chart.common_dates,
            vec!["2024-03-09", "2024-03-07", "2024-03-08"]
        );
    }

    // ── weekday / month buckets ───────────────────────────────────────────────

    #[test]
    fn test_weekday_buckets_fixed_length_and_zero_filled() {
        // 2024-01-01 is a Monday, 2024-01-07 a Sunday.
        let dates = vec![date(2024, 1, 1), date(2024, 1, 1), date(2024, 1, 7)];
        let chart = ChartData::from_stats(&stats_with_dates(&dates));

        assert_eq!(chart.data_days.len(), 7);
        assert_eq!(chart.data_days[0], 2);
        assert_eq!(chart.data_days[6], 1);
        assert_eq!(chart.data_days[1..6], [0, 0, 0, 0, 0]);
        assert_eq!(chart.days.len(), 7);
        assert_eq!(chart.days[0], "Monday");
    }

    #[test]
    fn test_month_buckets_fixed_length_and_zero_filled() {
        let dates = vec![date(2024, 1, 10), date(2024, 12, 25), date(2024, 12, 26)];
        let chart = ChartData::from_stats(&stats_with_dates(&dates));

        assert_eq!(chart.data_months.len(), 12);
        assert_eq!(chart.data_months[0], 1);
        assert_eq!(chart.data_months[11], 2);
        assert_eq!(chart.data_months[1..11], [0; 10]);
        assert_eq!(chart.months[0], "January");
        assert_eq!(chart.months[11], "December");
    }

    #[test]
    fn test_empty_stats_still_have_fixed_buckets() {
        let chart = ChartData::from_stats(&ActivityStats::default());
        assert_eq!(chart.data_days, vec![0; 7]);
        assert_eq!(chart.data_months, vec![0; 12]);
        assert!(chart.common_dates.is_empty());
        assert!(chart.years.is_empty());
    }

    // ── year buckets ──────────────────────────────────────────────────────────

    #[test]
    fn test_years_ascending_without_gap_filling() {
        let dates = vec![
            date(2024, 5, 1),
            date(2020, 5, 1),
            date(2024, 6, 1),
            date(2020, 7, 1),
            date(2022, 1, 1),
        ];
        let chart = ChartData::from_stats(&stats_with_dates(&dates));

        // 2021 and 2023 had no commits and must not appear.
        assert_eq!(chart.years, vec![2020, 2022, 2024]);
        assert_eq!(chart.data_years, vec![2, 1, 2]);
    }

    // ── averages ──────────────────────────────────────────────────────────────

    #[test]
    fn test_average_merge_time() {
        let stats = ActivityStats {
            merge_durations_hours: vec![12.0, 36.0],
            ..Default::default()
        };
        let chart = ChartData::from_stats(&stats);
        assert!((chart.average_merge_time - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_merge_time_empty_is_zero() {
        let chart = ChartData::from_stats(&ActivityStats::default());
        assert_eq!(chart.average_merge_time, 0.0);
        assert_eq!(chart.average_review_comments, 0.0);
    }

    #[test]
    fn test_average_review_comments() {
        let stats = ActivityStats {
            review_counts: vec![0, 1, 5],
            ..Default::default()
        };
        let chart = ChartData::from_stats(&stats);
        assert!((chart.average_review_comments - 2.0).abs() < 1e-9);
    }

    // ── approval split and pass-throughs ──────────────────────────────────────

    #[test]
    fn test_approval_split_ordering() {
        let stats = ActivityStats {
            self_approved_prs: 3,
            other_approved_prs: 7,
            ..Default::default()
        };
        let chart = ChartData::from_stats(&stats);
        assert_eq!(
            chart.labels_pr_approval,
            vec!["Approved by Others", "Self-Approved"]
        );
        assert_eq!(chart.data_pr_approval, vec![7, 3]);
    }

    #[test]
    fn test_pass_through_pairs_index_aligned() {
        let mut stats = ActivityStats::default();
        stats.commits_per_author.insert("Carol".to_string(), 4);
        stats.commits_per_author.insert("Alice".to_string(), 1);
        stats.status_counts.insert("MERGED".to_string(), 2);
        stats.status_counts.insert("OPEN".to_string(), 1);

        let chart = ChartData::from_stats(&stats);
        assert_eq!(chart.labels_authors, vec!["Carol", "Alice"]);
        assert_eq!(chart.data_authors, vec![4, 1]);
        assert_eq!(chart.labels_statuses, vec!["MERGED", "OPEN"]);
        assert_eq!(chart.data_statuses, vec![2, 1]);
    }
}

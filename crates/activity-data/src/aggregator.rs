//! Aggregation of commit records into activity statistics.
//!
//! [`ActivityStats`] is the single accumulator for a run: constructed
//! fresh, fed one commit record at a time, then projected into chart
//! series by the `projection` module.

use activity_core::error::{ActivityError, Result};
use activity_core::models::{resolve_login, CommitRecord, PullRequestRecord};
use activity_core::time_utils::parse_timestamp;
use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;

// ── ActivityStats ─────────────────────────────────────────────────────────────

/// Running statistics accumulated over all commit records of a run.
///
/// The counter maps are insertion-ordered so that downstream label/value
/// projections come out in first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct ActivityStats {
    /// Commit count per author display name. A commit with several authors
    /// increments each of them.
    pub commits_per_author: IndexMap<String, u64>,
    /// Calendar date of every commit that carried a parsable timestamp.
    pub commit_dates: Vec<NaiveDate>,
    /// Pull-request count per author login, fully-identified PRs only.
    pub prs_per_author: IndexMap<String, u64>,
    /// Pull-request count per lifecycle status.
    pub status_counts: IndexMap<String, u64>,
    /// `(mergedAt - createdAt)` in hours for each counted MERGED PR.
    pub merge_durations_hours: Vec<f64>,
    /// Number of reviews attached to each counted PR.
    pub review_counts: Vec<u64>,
    /// PRs merged by their own author without an external review.
    pub self_approved_prs: u64,
    /// All other counted PRs.
    pub other_approved_prs: u64,
}

impl ActivityStats {
    /// Accumulate one commit record.
    ///
    /// Missing or wrong-shaped sub-fields are treated as absent. The one
    /// exception is a timestamp that is present but unparsable, which is a
    /// structural data problem and aborts the run.
    pub fn process_commit(&mut self, commit: &CommitRecord) -> Result<()> {
        for author in &commit.authors.nodes {
            if let Some(name) = author.name.as_deref().filter(|n| !n.is_empty()) {
                *self.commits_per_author.entry(name.to_string()).or_insert(0) += 1;
            }
        }

        if let Some(raw) = commit.committed_date.as_deref() {
            let ts = parse_timestamp(raw).ok_or_else(|| ActivityError::TimestampParse {
                field: "committedDate".to_string(),
                value: raw.to_string(),
            })?;
            self.commit_dates.push(ts.date_naive());
        }

        // The exported node lists are heterogeneous; non-object entries are
        // discarded here, record-level gaps are handled per PR below.
        for node in &commit.associated_pull_requests.nodes {
            if let Some(pr) = PullRequestRecord::from_value(node) {
                self.process_pull_request(&pr)?;
            }
        }

        Ok(())
    }

    /// Accumulate one pull request.
    ///
    /// A PR without a resolvable author login, merger login and status is
    /// dropped entirely: none of the counters are touched. The source data
    /// is known to contain such records, so this is policy, not an error.
    pub fn process_pull_request(&mut self, pr: &PullRequestRecord) -> Result<()> {
        let (Some(author), Some(merger), Some(status)) = (
            resolve_login(pr.author.as_ref()),
            resolve_login(pr.merged_by.as_ref()),
            pr.state.as_deref().filter(|s| !s.is_empty()),
        ) else {
            return Ok(());
        };

        *self.prs_per_author.entry(author.to_string()).or_insert(0) += 1;
        *self.status_counts.entry(status.to_string()).or_insert(0) += 1;

        if status == "MERGED" {
            let created = required_timestamp(pr.created_at.as_deref(), "createdAt")?;
            let merged = required_timestamp(pr.merged_at.as_deref(), "mergedAt")?;
            let hours = (merged - created).num_milliseconds() as f64 / 3_600_000.0;
            self.merge_durations_hours.push(hours);
        }

        self.review_counts.push(pr.reviews.nodes.len() as u64);

        // A review by the PR author never counts as external approval.
        let has_external_review = pr
            .reviews
            .nodes
            .iter()
            .any(|review| resolve_login(review.author.as_ref()) != Some(author));
        if !has_external_review && author == merger {
            self.self_approved_prs += 1;
        } else {
            self.other_approved_prs += 1;
        }

        Ok(())
    }

    /// Number of fully-identified pull requests seen so far.
    pub fn counted_prs(&self) -> u64 {
        self.self_approved_prs + self.other_approved_prs
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// A MERGED pull request must carry this timestamp; absence or an
/// unparsable value is fatal for the run.
fn required_timestamp(value: Option<&str>, field: &str) -> Result<DateTime<Utc>> {
    let raw = value.ok_or_else(|| ActivityError::MissingTimestamp {
        field: field.to_string(),
    })?;
    parse_timestamp(raw).ok_or_else(|| ActivityError::TimestampParse {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Document discovery and loading for the activity chart generator.
//!
//! Finds exported `raw_*.json` documents under the data directory and
//! parses each one into [`CommitRecord`]s, skipping documents that cannot
//! be read or parsed.

use std::path::{Path, PathBuf};

use activity_core::models::CommitRecord;
use regex::Regex;
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all documents matching the `raw_*.json` naming convention under
/// `data_dir`, recursively, sorted by path.
pub fn find_raw_files(data_dir: &Path) -> Vec<PathBuf> {
    if !data_dir.exists() {
        warn!("Data path does not exist: {}", data_dir.display());
        return Vec::new();
    }

    let pattern = Regex::new(r"^raw_.*\.json$").expect("regex is valid");

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| pattern.is_match(name))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load every commit record from the documents under `data_dir`.
///
/// Each document is expected to be a JSON array of commit records. A
/// document that cannot be read or parsed is reported and skipped; the
/// run continues with the remaining documents. No record-level validation
/// happens here.
pub fn load_commit_records(data_dir: &Path) -> Vec<CommitRecord> {
    let files = find_raw_files(data_dir);
    if files.is_empty() {
        warn!("No raw_*.json documents found in {}", data_dir.display());
        return Vec::new();
    }

    let mut records: Vec<CommitRecord> = Vec::new();

    for file_path in &files {
        match load_single_document(file_path) {
            Some(mut file_records) => {
                if file_records.is_empty() {
                    debug!("Parsed {}, but got nothing", file_path.display());
                    continue;
                }
                debug!(
                    "Document {}: {} commit records",
                    file_path.display(),
                    file_records.len()
                );
                records.append(&mut file_records);
            }
            None => continue,
        }
    }

    debug!(
        "Loaded {} commit records from {} documents",
        records.len(),
        files.len()
    );

    records
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read and parse one document. Returns `None` after reporting when the
/// file cannot be read or is not a valid commit-record array.
fn load_single_document(file_path: &Path) -> Option<Vec<CommitRecord>> {
    let content = match std::fs::read_to_string(file_path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read file {}: {}", file_path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(records) => Some(records),
        Err(e) => {
            warn!("Error parsing {}: {}", file_path.display(), e);
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

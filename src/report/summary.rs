use std::fs;
use std::path::{Path, PathBuf};

use crate::report::record::{load_metadata, ProgressRecord, METADATA_FILE, PROGRESS_FILE};
use crate::report::status::{RunStatus, StatusCounts};

/// A run whose status is exactly `failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRun {
    pub run_dir: String,
    pub error: String,
}

/// Summary built from the aggregate progress file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub counts: StatusCounts,
    pub failed: Vec<FailedRun>,
}

impl ProgressSummary {
    pub fn total(&self) -> usize {
        self.counts.total()
    }
}

/// Summary built by scanning per-run metadata files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataSummary {
    pub total: usize,
    pub failed: Vec<FailedRun>,
}

/// Report for one run directory, in whichever mode applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Progress(ProgressSummary),
    Metadata(MetadataSummary),
}

impl Report {
    pub fn failed(&self) -> &[FailedRun] {
        match self {
            Report::Progress(s) => &s.failed,
            Report::Metadata(s) => &s.failed,
        }
    }
}

/// Build the report for `base_dir`.
///
/// Uses the aggregate progress file when present, otherwise scans the
/// immediate subdirectories for metadata files.
pub fn generate(base_dir: &Path) -> Report {
    let progress_path = base_dir.join(PROGRESS_FILE);
    if progress_path.exists() {
        tracing::debug!(path = %progress_path.display(), "Using aggregate progress record");
        let record = ProgressRecord::load(&progress_path);
        return Report::Progress(summarize_progress(&record));
    }

    tracing::debug!(dir = %base_dir.display(), "No progress record, scanning run metadata");
    Report::Metadata(summarize_metadata(base_dir))
}

/// Count every case by status and collect the failed ones in record order.
pub fn summarize_progress(record: &ProgressRecord) -> ProgressSummary {
    let mut summary = ProgressSummary::default();

    for (run_dir, entry) in &record.cases {
        summary.counts.record(entry.status);
        if entry.status == RunStatus::Failed {
            summary.failed.push(FailedRun {
                run_dir: run_dir.clone(),
                error: entry.error.clone(),
            });
        }
    }

    summary
}

/// Scan the immediate subdirectories of `base_dir`, sorted by name.
///
/// Every subdirectory holding a metadata file counts toward the total, even
/// when that file cannot be decoded.
pub fn summarize_metadata(base_dir: &Path) -> MetadataSummary {
    let mut summary = MetadataSummary::default();

    for run_dir in run_directories(base_dir) {
        let metadata_path = run_dir.join(METADATA_FILE);
        if !metadata_path.exists() {
            continue;
        }
        summary.total += 1;

        let Some(entry) = load_metadata(&metadata_path) else {
            continue;
        };
        if entry.status == RunStatus::Failed {
            summary.failed.push(FailedRun {
                run_dir: run_dir.display().to_string(),
                error: entry.error,
            });
        }
    }

    summary
}

fn run_directories(base_dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %base_dir.display(), error = %e, "Cannot list run directory");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

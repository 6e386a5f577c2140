use std::fmt;

use serde_json::Value;

/// Outcome label of a single run.
///
/// Only the four canonical labels get their own bucket. Everything else,
/// including a literal `"unknown"`, lands in [`RunStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Failed,
    Skipped,
    Running,
    Unknown,
}

impl RunStatus {
    /// Fixed display order of the summary counters.
    pub const ALL: [RunStatus; 5] = [
        RunStatus::Completed,
        RunStatus::Failed,
        RunStatus::Skipped,
        RunStatus::Running,
        RunStatus::Unknown,
    ];

    /// Classify a status label. Matching is exact and case-sensitive.
    pub fn parse(label: &str) -> Self {
        match label {
            "completed" => RunStatus::Completed,
            "failed" => RunStatus::Failed,
            "skipped" => RunStatus::Skipped,
            "running" => RunStatus::Running,
            _ => RunStatus::Unknown,
        }
    }

    /// Classify the `status` field of a record, if any.
    ///
    /// Missing, null or otherwise non-string values count as unknown.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(label)) => Self::parse(label),
            _ => RunStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
            RunStatus::Skipped => "skipped",
            RunStatus::Running => "running",
            RunStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-status counters for a progress record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub completed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub running: usize,
    pub unknown: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: RunStatus) {
        let slot = match status {
            RunStatus::Completed => &mut self.completed,
            RunStatus::Failed => &mut self.failed,
            RunStatus::Skipped => &mut self.skipped,
            RunStatus::Running => &mut self.running,
            RunStatus::Unknown => &mut self.unknown,
        };
        *slot += 1;
    }

    pub fn get(&self, status: RunStatus) -> usize {
        match status {
            RunStatus::Completed => self.completed,
            RunStatus::Failed => self.failed,
            RunStatus::Skipped => self.skipped,
            RunStatus::Running => self.running,
            RunStatus::Unknown => self.unknown,
        }
    }

    /// Number of entries recorded across all buckets.
    pub fn total(&self) -> usize {
        RunStatus::ALL.into_iter().map(|s| self.get(s)).sum()
    }

    /// `(status, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RunStatus, usize)> + '_ {
        RunStatus::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

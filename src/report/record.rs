use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::RecordError;
use crate::report::status::RunStatus;

/// Aggregate progress file written next to the run directories.
pub const PROGRESS_FILE: &str = "smoke_progress.json";

/// Per-run metadata file inside each run directory.
pub const METADATA_FILE: &str = "metadata.json";

/// Read and decode a JSON document.
pub fn load_json(path: &Path) -> Result<Value, RecordError> {
    let content = fs::read_to_string(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RecordError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Status and error message of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEntry {
    pub status: RunStatus,
    pub error: String,
}

impl RunEntry {
    /// Build an entry from a decoded JSON value. Non-object values carry no
    /// usable fields and become an unknown entry with no error.
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(fields) => Self {
                status: RunStatus::from_value(fields.get("status")),
                error: error_text(fields.get("error")),
            },
            None => Self {
                status: RunStatus::Unknown,
                error: String::new(),
            },
        }
    }
}

/// Only string messages are kept; any other JSON value means "no error text".
fn error_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// JSON truthiness: null, false, zero and empty containers are all "empty".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawProgress {
    #[serde(default)]
    cases: Map<String, Value>,
}

/// Snapshot of the aggregate progress file. Cases keep the file's key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    pub cases: Vec<(String, RunEntry)>,
}

impl ProgressRecord {
    /// Interpret a decoded document. Anything without an object-valued
    /// `cases` field is treated as an empty record.
    pub fn from_value(value: Value) -> Self {
        let raw = match serde_json::from_value::<RawProgress>(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(error = %e, "Progress record has no usable cases");
                RawProgress::default()
            }
        };

        let cases = raw
            .cases
            .iter()
            .map(|(run_dir, entry)| (run_dir.clone(), RunEntry::from_value(entry)))
            .collect();
        Self { cases }
    }

    /// Load the progress file, substituting an empty record when it cannot
    /// be read or decoded.
    pub fn load(path: &Path) -> Self {
        match load_json(path) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unreadable progress record");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Load a per-run metadata file.
///
/// Returns `None` when the file is unreadable, not JSON, empty (falsy) or
/// not a JSON object.
pub fn load_metadata(path: &Path) -> Option<RunEntry> {
    let value = match load_json(path) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unreadable metadata record");
            return None;
        }
    };

    if is_falsy(&value) || !value.is_object() {
        tracing::debug!(path = %path.display(), "Metadata record is empty");
        return None;
    }
    Some(RunEntry::from_value(&value))
}

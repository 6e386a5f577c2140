use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::ReportError;

/// Resolve the user-supplied run directory to an absolute, canonical path.
///
/// A leading `~` expands to `$HOME`. The result must be an existing
/// directory; a missing path is reported with `.` and `..` folded lexically.
pub fn resolve_run_dir(raw: &str) -> Result<PathBuf, ReportError> {
    let expanded = expand_home(raw);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir()
            .map_err(ReportError::CurrentDir)?
            .join(expanded)
    };

    if !absolute.exists() {
        return Err(ReportError::NotFound(normalize(&absolute)));
    }
    let resolved = absolute
        .canonicalize()
        .unwrap_or_else(|_| normalize(&absolute));
    if !resolved.is_dir() {
        return Err(ReportError::NotADirectory(resolved));
    }

    tracing::debug!(path = %resolved.display(), "Resolved run directory");
    Ok(resolved)
}

/// Fold `.` and `..` components without touching the filesystem. `..` at the
/// root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                match last {
                    Some(Component::Normal(_)) => {
                        out.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => out.push(component),
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Only the current user's `~` and `~/...` forms are expanded; `~name/...`
/// is taken literally.
fn expand_home(raw: &str) -> PathBuf {
    let home = || env::var_os("HOME").map(PathBuf::from);

    if raw == "~" {
        if let Some(home) = home() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = home() {
            return home.join(rest);
        }
    }
    Path::new(raw).to_path_buf()
}

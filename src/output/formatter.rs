use colored::Colorize;

use crate::report::summary::{FailedRun, MetadataSummary, ProgressSummary, Report};

/// Print a fatal error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Render a report as plain text, one `\n`-terminated line per row.
pub fn render(report: &Report) -> String {
    match report {
        Report::Progress(summary) => render_progress(summary),
        Report::Metadata(summary) => render_metadata(summary),
    }
}

fn render_progress(summary: &ProgressSummary) -> String {
    let mut lines = vec![format!("Total: {}", summary.total())];
    lines.extend(
        summary
            .counts
            .iter()
            .map(|(status, count)| format!("{}: {}", status, count)),
    );
    failed_lines(&mut lines, &summary.failed);
    join_lines(&lines)
}

fn render_metadata(summary: &MetadataSummary) -> String {
    let mut lines = vec![
        format!("Total (metadata only): {}", summary.total),
        format!("failed: {}", summary.failed.len()),
    ];
    failed_lines(&mut lines, &summary.failed);
    join_lines(&lines)
}

fn failed_lines(lines: &mut Vec<String>, failed: &[FailedRun]) {
    if failed.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push("Failed cases:".to_string());
    lines.extend(failed.iter().map(|run| {
        if run.error.is_empty() {
            format!("- {}", run.run_dir)
        } else {
            format!("- {} ({})", run.run_dir, run.error)
        }
    }));
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::status::{RunStatus, StatusCounts};

    fn failed(run_dir: &str, error: &str) -> FailedRun {
        FailedRun {
            run_dir: run_dir.to_string(),
            error: error.to_string(),
        }
    }

    #[test]
    fn test_render_progress_with_failures() {
        let mut counts = StatusCounts::default();
        counts.record(RunStatus::Completed);
        counts.record(RunStatus::Failed);
        let report = Report::Progress(ProgressSummary {
            counts,
            failed: vec![failed("run2", "timeout")],
        });

        assert_eq!(
            render(&report),
            "Total: 2\ncompleted: 1\nfailed: 1\nskipped: 0\nrunning: 0\nunknown: 0\n\
             \nFailed cases:\n- run2 (timeout)\n"
        );
    }

    #[test]
    fn test_render_empty_progress_has_no_failed_section() {
        let report = Report::Progress(ProgressSummary::default());
        let text = render(&report);
        assert_eq!(
            text,
            "Total: 0\ncompleted: 0\nfailed: 0\nskipped: 0\nrunning: 0\nunknown: 0\n"
        );
        assert!(!text.contains("Failed cases:"));
    }

    #[test]
    fn test_render_metadata_omits_empty_error_suffix() {
        let report = Report::Metadata(MetadataSummary {
            total: 3,
            failed: vec![failed("/runs/b", ""), failed("/runs/c", "oom")],
        });
        assert_eq!(
            render(&report),
            "Total (metadata only): 3\nfailed: 2\n\nFailed cases:\n- /runs/b\n- /runs/c (oom)\n"
        );
    }
}

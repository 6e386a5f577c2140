use std::io::{IsTerminal, Write};
use std::process::ExitCode;

/// Reset SIGPIPE to default behavior so piping (e.g. `smoke-report runs | head`) exits cleanly
/// instead of panicking on broken pipe.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smoke_report::config::cli::Cli;
use smoke_report::config::run_dir::resolve_run_dir;
use smoke_report::error::ReportError;
use smoke_report::output::formatter;
use smoke_report::report;

fn main() -> ExitCode {
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ReportError>() {
            Some(report_err) => {
                formatter::print_error(&report_err.to_string());
                ExitCode::from(report_err.exit_code())
            }
            None => {
                formatter::print_error(&format!("{:#}", e));
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    let base_dir = resolve_run_dir(&cli.run_dir)?;
    let report = report::generate(&base_dir);
    tracing::debug!(failed = report.failed().len(), "Report generated");

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(formatter::render(&report).as_bytes())
        .context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;
    Ok(())
}

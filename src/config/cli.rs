use clap::Parser;

/// smoke-report - Summarize the outcome of a batch of smoke-test runs
#[derive(Debug, Parser)]
#[command(name = "smoke-report", version, about, long_about = None)]
pub struct Cli {
    /// Run directory holding smoke_progress.json or per-run metadata.json files
    #[arg(value_name = "run_dir")]
    pub run_dir: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub mod cli;
pub mod run_dir;

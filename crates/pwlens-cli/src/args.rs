use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "pwlens")]
#[command(about = "Extract failures, traces and attachments from Playwright HTML report bundles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the HTML report: the index.html itself, or the directory
    /// containing it
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show report statistics (total, passed, failed, flaky, skipped)")]
    Stats,

    #[command(about = "List test files with per-file statistics")]
    Files,

    #[command(about = "List failing results with error messages and result IDs")]
    Failures,

    #[command(about = "Decode the trace events recorded for one failing result")]
    Trace {
        #[arg(long, help = "Result ID from 'failures' ({testId}x{retry})")]
        result_id: String,
    },

    #[command(about = "Save the screenshots of one failing result to disk")]
    Screenshots {
        #[arg(long, help = "Result ID from 'failures' ({testId}x{retry})")]
        result_id: String,

        #[arg(long, help = "Output directory (default: ./screenshots)")]
        output: Option<PathBuf>,
    },

    #[command(about = "Show the error-context attachment of one failing result")]
    ErrorContext {
        #[arg(long, help = "Result ID from 'failures' ({testId}x{retry})")]
        result_id: String,
    },
}

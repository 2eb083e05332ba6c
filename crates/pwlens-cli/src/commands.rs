use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use pwlens_engine::ReportBundle;

use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let report_arg = cli.report.or_else(|| config.default_report.clone());
    let Some(report_arg) = report_arg else {
        bail!("Missing required option: --report <path>");
    };

    let report_path = resolve_report_path(&report_arg);
    let bundle = ReportBundle::open(&report_path)
        .with_context(|| format!("Failed to open report bundle at {}", report_path.display()))?;

    match cli.command {
        Commands::Stats => handlers::stats::handle(&bundle, cli.format),
        Commands::Files => handlers::files::handle(&bundle, cli.format),
        Commands::Failures => handlers::failures::handle(&bundle, cli.format),
        Commands::Trace { result_id } => handlers::trace::handle(&bundle, &result_id, cli.format),
        Commands::Screenshots { result_id, output } => {
            let output_dir = output
                .or_else(|| config.screenshot_dir.clone())
                .unwrap_or_else(|| PathBuf::from("./screenshots"));
            handlers::screenshots::handle(&bundle, &result_id, &output_dir, cli.format)
        }
        Commands::ErrorContext { result_id } => {
            handlers::error_context::handle(&bundle, &result_id, cli.format)
        }
    }
}

/// A directory argument means "the index.html inside it".
fn resolve_report_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "html") {
        path.to_path_buf()
    } else {
        path.join("index.html")
    }
}

use anyhow::Result;
use pwlens_engine::ReportBundle;

use crate::presentation::{StatsView, emit, plain};
use crate::types::OutputFormat;

pub fn handle(bundle: &ReportBundle, format: OutputFormat) -> Result<()> {
    let report = bundle.report()?;
    emit(format, &StatsView::new(&report), plain::stats)
}

use anyhow::Result;
use pwlens_engine::ReportBundle;

use crate::presentation::{FailureView, emit, plain};
use crate::types::OutputFormat;

pub fn handle(bundle: &ReportBundle, format: OutputFormat) -> Result<()> {
    let report = bundle.report()?;
    let failing = bundle.failing_results(&report)?;
    let views: Vec<FailureView> = failing.iter().map(FailureView::new).collect();
    emit(format, &views, plain::failures)
}

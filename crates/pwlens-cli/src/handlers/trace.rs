use anyhow::{Result, bail};
use pwlens_engine::ReportBundle;

use crate::handlers::find_result;
use crate::presentation::{TraceView, emit, plain};
use crate::types::OutputFormat;

pub fn handle(bundle: &ReportBundle, result_id: &str, format: OutputFormat) -> Result<()> {
    let failing = find_result(bundle, result_id)?;

    let Some(trace) = bundle.trace(&failing.result)? else {
        bail!("No trace found for result ID: \"{result_id}\"");
    };

    let view = TraceView::new(failing.result_id().to_string(), trace);
    emit(format, &view, plain::trace)
}

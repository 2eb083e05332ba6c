use anyhow::Result;
use pwlens_engine::ReportBundle;

use crate::presentation::{FileView, emit, plain};
use crate::types::OutputFormat;

pub fn handle(bundle: &ReportBundle, format: OutputFormat) -> Result<()> {
    let report = bundle.report()?;
    let views: Vec<FileView> = report.files.iter().map(FileView::new).collect();
    emit(format, &views, plain::files)
}

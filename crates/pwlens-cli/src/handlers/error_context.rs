use anyhow::{Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use pwlens_engine::ReportBundle;

use crate::handlers::find_result;
use crate::presentation::{ErrorContextView, emit, plain};
use crate::types::OutputFormat;

pub fn handle(bundle: &ReportBundle, result_id: &str, format: OutputFormat) -> Result<()> {
    let failing = find_result(bundle, result_id)?;

    let Some(handle) = bundle.error_context(&failing.result) else {
        bail!("No error context found for result ID: \"{result_id}\"");
    };

    let content_type = handle.content_type().to_string();
    let Some(bytes) = handle.read()? else {
        bail!("Failed to read error context for result ID: \"{result_id}\"");
    };

    let is_text = content_type.starts_with("text/") || content_type.contains("markdown");
    let (content, encoding) = if is_text {
        (String::from_utf8_lossy(&bytes).into_owned(), "utf-8")
    } else {
        (STANDARD.encode(&bytes), "base64")
    };

    let view = ErrorContextView {
        result_id: failing.result_id().to_string(),
        content_type,
        encoding: encoding.to_string(),
        content,
    };
    emit(format, &view, plain::error_context)
}

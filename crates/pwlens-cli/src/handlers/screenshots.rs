use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use pwlens_engine::ReportBundle;

use crate::handlers::find_result;
use crate::presentation::{ScreenshotsView, WrittenScreenshot, emit, plain};
use crate::types::OutputFormat;

pub fn handle(
    bundle: &ReportBundle,
    result_id: &str,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<()> {
    let failing = find_result(bundle, result_id)?;
    let canonical_id = failing.result_id().to_string();

    let shots = bundle.screenshots(&failing.result);
    if shots.is_empty() {
        bail!("No screenshots found for result ID: \"{result_id}\"");
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    let mut files = Vec::new();
    for (idx, shot) in shots.iter().enumerate() {
        // A descriptor with no payload source is skipped, not an error
        let Some(bytes) = shot.read()? else {
            continue;
        };

        let dest = output_dir.join(format!("{canonical_id}-{idx}.png"));
        fs::write(&dest, bytes)
            .with_context(|| format!("Failed to write screenshot to {}", dest.display()))?;

        files.push(WrittenScreenshot {
            path: dest.display().to_string(),
            content_type: shot.content_type().to_string(),
        });
    }

    let view = ScreenshotsView {
        result_id: canonical_id,
        screenshot_count: files.len(),
        files,
    };
    emit(format, &view, plain::screenshots)
}

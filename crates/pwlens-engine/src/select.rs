use pwlens_types::{FailingResult, HtmlReport};

use crate::Result;
use crate::bundle::ReportBundle;

/// Walk the full model and keep only failed/timed-out attempts.
///
/// Output order is file order, then test order, then retry order, so
/// "the first listed failure" means the same result across repeated runs
/// of the same bundle. A file whose detail entry is missing contributes
/// zero tests and is skipped silently.
pub(crate) fn failing_results(
    bundle: &ReportBundle,
    report: &HtmlReport,
) -> Result<Vec<FailingResult>> {
    let mut failing = Vec::new();

    for file in &report.files {
        let Some(detail) = bundle.file_detail(&file.file_id)? else {
            continue;
        };

        for test in detail.tests {
            for result in &test.results {
                if result.status.is_failing() {
                    failing.push(FailingResult {
                        file_id: file.file_id.clone(),
                        test: test.clone(),
                        result: result.clone(),
                    });
                }
            }
        }
    }

    Ok(failing)
}

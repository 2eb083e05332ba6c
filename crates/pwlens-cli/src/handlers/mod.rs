pub mod error_context;
pub mod failures;
pub mod files;
pub mod screenshots;
pub mod stats;
pub mod trace;

use anyhow::{Context, Result};
use pwlens_engine::ReportBundle;
use pwlens_types::{FailingResult, ResultId};

/// Locate one failing attempt by its composite ID.
///
/// Parsing uses the rightmost-separator heuristic; a well-formed ID that
/// matches no failing result is a user error, not a bundle error.
pub(crate) fn find_result(bundle: &ReportBundle, result_id: &str) -> Result<FailingResult> {
    let id: ResultId = result_id.parse()?;

    let report = bundle.report()?;
    let failing = bundle.failing_results(&report)?;

    failing
        .into_iter()
        .find(|f| f.test.test_id == id.test_id && f.result.retry == id.retry)
        .with_context(|| format!("No failing test result found for result ID: \"{result_id}\""))
}

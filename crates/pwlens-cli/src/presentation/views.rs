//! Serializable view models, one per command.
//!
//! Field names are camelCase so `--format json` output composes with the
//! report's own vocabulary.

use serde::Serialize;

use pwlens_types::{
    FailingResult, HtmlReport, Location, Stats, TestError, TestFileSummary, Trace, TraceEvent,
};

/// Aggregate counts with the user-facing vocabulary (`passed`/`failed`
/// instead of the wire's `expected`/`unexpected`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsView {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub flaky: u64,
    pub skipped: u64,
    pub ok: bool,
}

impl From<Stats> for CountsView {
    fn from(stats: Stats) -> Self {
        Self {
            total: stats.total,
            passed: stats.expected,
            failed: stats.unexpected,
            flaky: stats.flaky,
            skipped: stats.skipped,
            ok: stats.ok,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub start_time: f64,
    pub duration: f64,
    pub project_names: Vec<String>,
    pub errors: Vec<String>,
    pub stats: CountsView,
}

impl StatsView {
    pub fn new(report: &HtmlReport) -> Self {
        Self {
            title: report.title.clone(),
            start_time: report.start_time,
            duration: report.duration,
            project_names: report.project_names.clone(),
            errors: report.errors.clone(),
            stats: report.stats.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileView {
    pub file_id: String,
    pub file_name: String,
    pub test_count: usize,
    pub stats: CountsView,
}

impl FileView {
    pub fn new(file: &TestFileSummary) -> Self {
        Self {
            file_id: file.file_id.clone(),
            file_name: file.file_name.clone(),
            test_count: file.tests.len(),
            stats: file.stats.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureView {
    pub result_id: String,
    pub test_id: String,
    pub title: String,
    pub path: Vec<String>,
    pub project_name: String,
    pub location: Location,
    pub tags: Vec<String>,
    pub retry: u32,
    pub status: String,
    pub duration: f64,
    pub errors: Vec<TestError>,
}

impl FailureView {
    pub fn new(failing: &FailingResult) -> Self {
        Self {
            result_id: failing.result_id().to_string(),
            test_id: failing.test.test_id.clone(),
            title: failing.test.title.clone(),
            path: failing.test.path.clone(),
            project_name: failing.test.project_name.clone(),
            location: failing.test.location.clone(),
            tags: failing.test.tags.clone(),
            retry: failing.result.retry,
            status: failing.result.status.to_string(),
            duration: failing.result.duration,
            errors: failing.result.errors.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceView {
    pub result_id: String,
    pub event_count: usize,
    pub events: Vec<TraceEvent>,
}

impl TraceView {
    pub fn new(result_id: String, trace: Trace) -> Self {
        Self {
            result_id,
            event_count: trace.events.len(),
            events: trace.events,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrittenScreenshot {
    pub path: String,
    pub content_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotsView {
    pub result_id: String,
    pub screenshot_count: usize,
    pub files: Vec<WrittenScreenshot>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContextView {
    pub result_id: String,
    pub content_type: String,
    /// `utf-8` for text payloads, `base64` otherwise
    pub encoding: String,
    pub content: String,
}

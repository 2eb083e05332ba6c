use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::result_id::ResultId;

// NOTE: Wire Format
//
// These records mirror the JSON the HTML report writer embeds in its zip
// container: `report.json` holds the summary (HtmlReport), and each
// `{fileId}.json` entry holds the detailed test list for one source file
// (TestFileDetail). Field names are camelCase on the wire. Unknown fields
// are ignored so newer report versions keep decoding; optional fields are
// defaulted so older ones do too.

/// Top-level report summary, decoded from the `report.json` container entry.
///
/// Read-only view over the archive. Decoded once per call, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlReport {
    #[serde(default)]
    pub title: Option<String>,

    /// Run start, milliseconds since the epoch
    #[serde(default)]
    pub start_time: f64,

    /// Wall-clock duration of the whole run, milliseconds
    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub project_names: Vec<String>,

    pub stats: Stats,

    /// Per-file summaries in report order
    pub files: Vec<TestFileSummary>,

    /// Top-level errors not attributable to any test
    #[serde(default)]
    pub errors: Vec<String>,

    #[serde(default)]
    pub metadata: Value,
}

/// Aggregate counts, at report or file granularity.
///
/// `expected` counts passing tests, `unexpected` counts failing ones; the
/// reporter's vocabulary is kept as-is on the wire.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: u64,
    pub expected: u64,
    pub unexpected: u64,
    pub flaky: u64,
    pub skipped: u64,
    pub ok: bool,
    #[serde(default)]
    pub duration: f64,
}

/// Shallow per-file entry inside the report summary.
///
/// `file_id` is the stable key into the container: the matching detail entry
/// lives at `{fileId}.json`. A summary with no detail entry decodes to a
/// file with zero tests downstream, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFileSummary {
    pub file_id: String,
    pub file_name: String,
    pub stats: Stats,
    #[serde(default)]
    pub tests: Vec<TestCaseSummary>,
}

/// Shallow test entry inside a file summary (results elided on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseSummary {
    pub test_id: String,
    pub title: String,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub project_name: String,
    pub location: Location,
    #[serde(default)]
    pub duration: f64,
    pub outcome: Outcome,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// Detailed per-file entry, decoded from a `{fileId}.json` container entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFileDetail {
    pub file_id: String,
    pub file_name: String,
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

/// One test with its full attempt history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub test_id: String,
    pub title: String,

    /// Enclosing describe-block chain, outermost first
    #[serde(default)]
    pub path: Vec<String>,

    #[serde(default)]
    pub project_name: String,

    pub location: Location,

    #[serde(default)]
    pub duration: f64,

    pub outcome: Outcome,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    /// One result per attempt, retries included, in chronological order
    #[serde(default)]
    pub results: Vec<TestResult>,
}

/// The outcome of one attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub status: TestStatus,

    /// 0 = first attempt
    #[serde(default)]
    pub retry: u32,

    #[serde(default)]
    pub start_time: Option<String>,

    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub errors: Vec<TestError>,

    #[serde(default)]
    pub steps: Vec<TestStep>,

    /// Descriptors only; payloads are resolved lazily and separately
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// A structured error attached to a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeframe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// One execution step. Steps nest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    pub title: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub skipped: Option<bool>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub steps: Vec<TestStep>,
    /// Indexes into the owning result's attachment list
    #[serde(default)]
    pub attachments: Vec<u32>,
}

/// Attachment descriptor: metadata plus at most one payload source.
///
/// `body` is an inline base64 payload; `path` is relative to the directory
/// containing the host document. Neither is resolved here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Source location within the test file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// Test annotation (`@slow`, skip reasons, custom markers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub annotation_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Run-level classification of a test across all of its attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Expected,
    Unexpected,
    Flaky,
    Skipped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Expected => write!(f, "expected"),
            Outcome::Unexpected => write!(f, "unexpected"),
            Outcome::Flaky => write!(f, "flaky"),
            Outcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Status of a single attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestStatus {
    Passed,
    Failed,
    TimedOut,
    Skipped,
    Interrupted,
}

impl TestStatus {
    /// Whether this attempt counts as a failure for selection purposes.
    ///
    /// `interrupted` and `skipped` are excluded: interrupted runs are
    /// infrastructure artifacts, not assertion failures.
    pub fn is_failing(self) -> bool {
        matches!(self, TestStatus::Failed | TestStatus::TimedOut)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "passed"),
            TestStatus::Failed => write!(f, "failed"),
            TestStatus::TimedOut => write!(f, "timedOut"),
            TestStatus::Skipped => write!(f, "skipped"),
            TestStatus::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// One failing attempt, tagged with enough identity to be addressed later.
///
/// Derived by the selector, never persisted. The composite key from
/// [`FailingResult::result_id`] is the stable external reference for this
/// specific attempt.
#[derive(Debug, Clone)]
pub struct FailingResult {
    pub file_id: String,
    pub test: TestCase,
    pub result: TestResult,
}

impl FailingResult {
    pub fn result_id(&self) -> ResultId {
        ResultId {
            test_id: self.test.test_id.clone(),
            retry: self.result.retry,
        }
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use pwlens_types::{Attachment, FailingResult, HtmlReport, TestFileDetail, TestResult, Trace};

use crate::attachment::AttachmentHandle;
use crate::container::Container;
use crate::{Error, Result, select, trace};

/// Container entry holding the report summary
const REPORT_ENTRY: &str = "report.json";

/// Data-URI prefix the report writer puts in front of the payload.
/// Optional: the payload may also appear bare.
const DATA_URI_PREFIX: &str = "data:application/zip;base64,";

/// The uniquely-tagged script element embedding the report archive
static BUNDLE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<script id="playwrightReportBase64"[^>]*>(.*?)</script>"#).unwrap()
});

/// A loaded report bundle: the decoded container plus the directory the
/// host document lives in (the root that attachment paths resolve against).
///
/// All accessors are pure functions of the immutable container plus their
/// arguments; there is no hidden state and no memoization. Repeated calls
/// re-decode from the source bytes.
pub struct ReportBundle {
    container: Container,
    base_dir: PathBuf,
}

impl ReportBundle {
    /// Read the host document, extract the embedded archive payload, and
    /// decode it into a container.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = fs::read_to_string(path)?;
        let container = extract_container(&html)?;
        let base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

        Ok(Self {
            container,
            base_dir,
        })
    }

    /// Directory containing the host document
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Decode the top-level report summary.
    pub fn report(&self) -> Result<HtmlReport> {
        let Some(bytes) = self.container.entry(REPORT_ENTRY)? else {
            return Err(Error::MissingReportEntry);
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Decode the detailed test list for one file, or `None` when the
    /// container has no entry for it (the file then has zero tests).
    pub fn file_detail(&self, file_id: &str) -> Result<Option<TestFileDetail>> {
        let entry_name = format!("{file_id}.json");
        match self.container.entry(&entry_name)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// All failed/timed-out results in file, test, then attempt order.
    pub fn failing_results(&self, report: &HtmlReport) -> Result<Vec<FailingResult>> {
        select::failing_results(self, report)
    }

    /// Decode the trace recorded for one attempt, or `None` when no trace
    /// attachment (or no stream inside it) exists.
    pub fn trace(&self, result: &TestResult) -> Result<Option<Trace>> {
        trace::read_trace(self, result)
    }

    /// Lazy handles for every screenshot attachment of one attempt.
    /// Listing never touches the filesystem.
    pub fn screenshots<'a>(&'a self, result: &'a TestResult) -> Vec<AttachmentHandle<'a>> {
        self.attachments_named(result, "screenshot")
    }

    /// Lazy handle for the error-context attachment of one attempt, if any.
    pub fn error_context<'a>(&'a self, result: &'a TestResult) -> Option<AttachmentHandle<'a>> {
        self.attachments_named(result, "error-context").into_iter().next()
    }

    /// Lazy handle over an arbitrary attachment descriptor.
    pub fn attachment<'a>(&'a self, attachment: &'a Attachment) -> AttachmentHandle<'a> {
        AttachmentHandle::new(attachment, &self.base_dir)
    }

    fn attachments_named<'a>(
        &'a self,
        result: &'a TestResult,
        name: &str,
    ) -> Vec<AttachmentHandle<'a>> {
        result
            .attachments
            .iter()
            .filter(|a| a.name == name)
            .map(|a| AttachmentHandle::new(a, &self.base_dir))
            .collect()
    }
}

/// Pull the base64 payload out of the host document and decode it.
fn extract_container(html: &str) -> Result<Container> {
    let Some(captures) = BUNDLE_MARKER.captures(html) else {
        return Err(Error::MalformedBundle(
            "could not find the playwrightReportBase64 element in the HTML".to_string(),
        ));
    };

    let content = captures[1].trim();
    if content.is_empty() {
        return Err(Error::MalformedBundle(
            "embedded report payload is empty".to_string(),
        ));
    }

    let payload = content.strip_prefix(DATA_URI_PREFIX).unwrap_or(content);
    let bytes = STANDARD
        .decode(payload)
        .map_err(|err| Error::MalformedBundle(format!("payload is not valid base64: {err}")))?;

    Container::new(bytes)
        .map_err(|err| Error::MalformedBundle(format!("payload is not a valid archive: {err}")))
}

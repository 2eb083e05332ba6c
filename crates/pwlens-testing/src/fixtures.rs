//! Bundle synthesis: a host HTML document embedding a zip container, plus
//! on-disk attachment files next to it.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use pwlens_types::{HtmlReport, Stats, TestCase, TestCaseSummary, TestFileDetail, TestFileSummary};

use crate::model::stats_for;

/// Builds a complete report bundle on disk.
///
/// Detail files added with [`file`] get both a summary entry and a
/// `{fileId}.json` container entry; [`orphan_file`] adds a summary entry
/// with no detail entry, for exercising the zero-tests degradation path.
///
/// [`file`]: BundleBuilder::file
/// [`orphan_file`]: BundleBuilder::orphan_file
pub struct BundleBuilder {
    title: Option<String>,
    project_names: Vec<String>,
    errors: Vec<String>,
    details: Vec<TestFileDetail>,
    orphans: Vec<TestFileSummary>,
}

impl Default for BundleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            project_names: vec!["chromium".to_string()],
            errors: Vec::new(),
            details: Vec::new(),
            orphans: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Add a top-level error not attributable to any test.
    pub fn run_error(mut self, message: &str) -> Self {
        self.errors.push(message.to_string());
        self
    }

    /// Add a file with the given tests; its detail entry is written to the
    /// container.
    pub fn file(mut self, file_id: &str, file_name: &str, tests: Vec<TestCase>) -> Self {
        self.details.push(TestFileDetail {
            file_id: file_id.to_string(),
            file_name: file_name.to_string(),
            tests,
        });
        self
    }

    /// Add a summary-only file: it appears in `report.json` but has no
    /// `{fileId}.json` entry.
    pub fn orphan_file(mut self, file_id: &str, file_name: &str) -> Self {
        self.orphans.push(TestFileSummary {
            file_id: file_id.to_string(),
            file_name: file_name.to_string(),
            stats: Stats::default(),
            tests: Vec::new(),
        });
        self
    }

    /// Write `index.html` into `dir` and return its path.
    pub fn write(self, dir: &Path) -> Result<PathBuf> {
        let report = self.report();

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

        writer.start_file("report.json", options)?;
        writer.write_all(&serde_json::to_vec(&report)?)?;

        for detail in &self.details {
            writer.start_file(format!("{}.json", detail.file_id), options)?;
            writer.write_all(&serde_json::to_vec(detail)?)?;
        }

        let archive = writer.finish()?.into_inner();
        let payload = STANDARD.encode(&archive);

        let html = format!(
            "<!DOCTYPE html>\n<html>\n<head><title>Test Report</title></head>\n<body>\n\
             <div id=\"root\"></div>\n\
             <script id=\"playwrightReportBase64\" type=\"text/plain\">data:application/zip;base64,{payload}</script>\n\
             </body>\n</html>\n"
        );

        fs::create_dir_all(dir)?;
        let html_path = dir.join("index.html");
        fs::write(&html_path, html)?;
        Ok(html_path)
    }

    fn report(&self) -> HtmlReport {
        let mut files: Vec<TestFileSummary> = self
            .details
            .iter()
            .map(|detail| TestFileSummary {
                file_id: detail.file_id.clone(),
                file_name: detail.file_name.clone(),
                stats: stats_for(&detail.tests),
                tests: detail.tests.iter().map(summarize).collect(),
            })
            .collect();
        files.extend(self.orphans.iter().cloned());

        let mut stats = Stats::default();
        for file in &files {
            stats.total += file.stats.total;
            stats.expected += file.stats.expected;
            stats.unexpected += file.stats.unexpected;
            stats.flaky += file.stats.flaky;
            stats.skipped += file.stats.skipped;
            stats.duration += file.stats.duration;
        }
        stats.ok = stats.unexpected == 0 && self.errors.is_empty();

        HtmlReport {
            title: self.title.clone(),
            start_time: 1_700_000_000_000.0,
            duration: stats.duration,
            project_names: self.project_names.clone(),
            stats,
            files,
            errors: self.errors.clone(),
            metadata: Value::Null,
        }
    }
}

fn summarize(test: &TestCase) -> TestCaseSummary {
    TestCaseSummary {
        test_id: test.test_id.clone(),
        title: test.title.clone(),
        path: test.path.clone(),
        project_name: test.project_name.clone(),
        location: test.location.clone(),
        duration: test.duration,
        outcome: test.outcome,
        tags: test.tags.clone(),
        annotations: test.annotations.clone(),
    }
}

/// Write a nested trace archive (fixed entry `test.trace`, one JSON value
/// per line) at `path`, creating parent directories.
pub fn write_trace_archive(path: &Path, events: &[Value]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    writer.start_file("test.trace", options)?;
    for event in events {
        writer.write_all(serde_json::to_string(event)?.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    let archive = writer.finish()?.into_inner();
    fs::write(path, archive)?;
    Ok(())
}

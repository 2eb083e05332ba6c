//! Model-construction helpers with fixture defaults.

use pwlens_types::{
    Attachment, Location, Outcome, Stats, TestCase, TestError, TestResult, TestStatus,
};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Minimal valid PNG: the 8-byte signature plus a stub IHDR chunk header.
/// Enough for signature checks; not a renderable image.
pub fn png_bytes() -> Vec<u8> {
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R']);
    bytes
}

pub fn location(file: &str, line: u32) -> Location {
    Location {
        file: file.to_string(),
        line,
        column: 1,
    }
}

/// A result with the given status and retry index and no errors, steps, or
/// attachments.
pub fn result(status: TestStatus, retry: u32) -> TestResult {
    TestResult {
        status,
        retry,
        start_time: None,
        duration: 120.0,
        errors: Vec::new(),
        steps: Vec::new(),
        attachments: Vec::new(),
        annotations: Vec::new(),
    }
}

/// A failed result carrying one structured error per message.
pub fn failed_result(retry: u32, messages: &[&str]) -> TestResult {
    let mut r = result(TestStatus::Failed, retry);
    r.errors = messages
        .iter()
        .map(|m| TestError {
            message: m.to_string(),
            codeframe: None,
            stack: None,
        })
        .collect();
    r
}

fn test_case(test_id: &str, title: &str, outcome: Outcome, results: Vec<TestResult>) -> TestCase {
    TestCase {
        test_id: test_id.to_string(),
        title: title.to_string(),
        path: Vec::new(),
        project_name: "chromium".to_string(),
        location: location("tests/example.spec.ts", 10),
        duration: results.iter().map(|r| r.duration).sum(),
        outcome,
        tags: Vec::new(),
        annotations: Vec::new(),
        results,
    }
}

pub fn passing_test(test_id: &str, title: &str) -> TestCase {
    test_case(
        test_id,
        title,
        Outcome::Expected,
        vec![result(TestStatus::Passed, 0)],
    )
}

pub fn failing_test(test_id: &str, title: &str, messages: &[&str]) -> TestCase {
    test_case(
        test_id,
        title,
        Outcome::Unexpected,
        vec![failed_result(0, messages)],
    )
}

/// A test that failed on the first attempt and timed out on the retry.
pub fn retried_test(test_id: &str, title: &str) -> TestCase {
    test_case(
        test_id,
        title,
        Outcome::Unexpected,
        vec![
            failed_result(0, &["first attempt failed"]),
            result(TestStatus::TimedOut, 1),
        ],
    )
}

pub fn skipped_test(test_id: &str, title: &str) -> TestCase {
    test_case(
        test_id,
        title,
        Outcome::Skipped,
        vec![result(TestStatus::Skipped, 0)],
    )
}

pub fn interrupted_test(test_id: &str, title: &str) -> TestCase {
    test_case(
        test_id,
        title,
        Outcome::Unexpected,
        vec![result(TestStatus::Interrupted, 0)],
    )
}

pub fn trace_attachment(rel_path: &str) -> Attachment {
    Attachment {
        name: "trace".to_string(),
        content_type: "application/zip".to_string(),
        path: Some(rel_path.to_string()),
        body: None,
    }
}

pub fn screenshot_on_disk(rel_path: &str) -> Attachment {
    Attachment {
        name: "screenshot".to_string(),
        content_type: "image/png".to_string(),
        path: Some(rel_path.to_string()),
        body: None,
    }
}

pub fn screenshot_inline(bytes: &[u8]) -> Attachment {
    Attachment {
        name: "screenshot".to_string(),
        content_type: "image/png".to_string(),
        path: None,
        body: Some(STANDARD.encode(bytes)),
    }
}

pub fn error_context_inline(markdown: &str) -> Attachment {
    Attachment {
        name: "error-context".to_string(),
        content_type: "text/markdown".to_string(),
        path: None,
        body: Some(STANDARD.encode(markdown.as_bytes())),
    }
}

/// Aggregate stats the way the report writer does: one bucket per outcome.
pub fn stats_for(tests: &[TestCase]) -> Stats {
    let mut stats = Stats {
        total: tests.len() as u64,
        ..Stats::default()
    };

    for test in tests {
        match test.outcome {
            Outcome::Expected => stats.expected += 1,
            Outcome::Unexpected => stats.unexpected += 1,
            Outcome::Flaky => stats.flaky += 1,
            Outcome::Skipped => stats.skipped += 1,
        }
        stats.duration += test.duration;
    }

    stats.ok = stats.unexpected == 0;
    stats
}

use pwlens_engine::{Error, ReportBundle};
use pwlens_testing::{
    BundleBuilder, error_context_inline, failing_test, interrupted_test, passing_test, png_bytes,
    retried_test, screenshot_inline, screenshot_on_disk, skipped_test, trace_attachment,
    write_trace_archive,
};
use pwlens_types::TestStatus;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const PNG_SIGNATURE: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];

#[test]
fn test_report_stats_sum_and_failing_count() {
    let temp = TempDir::new().unwrap();
    let html = BundleBuilder::new()
        .title("nightly run")
        .file(
            "f1",
            "login.spec.ts",
            vec![
                passing_test("t1", "logs in"),
                failing_test("t2", "rejects bad password", &["expected 403"]),
                skipped_test("t3", "sso flow"),
            ],
        )
        .file(
            "f2",
            "checkout.spec.ts",
            vec![retried_test("t4", "pays with card")],
        )
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();

    let s = report.stats;
    assert_eq!(
        s.total,
        s.expected + s.unexpected + s.flaky + s.skipped,
        "stats buckets must sum to total"
    );
    assert_eq!(report.title.as_deref(), Some("nightly run"));

    // t2 failed once; t4 failed then timed out: three failing attempts
    let failing = bundle.failing_results(&report).unwrap();
    assert_eq!(failing.len(), 3);
}

#[test]
fn test_failing_results_exact_status_union() {
    let temp = TempDir::new().unwrap();
    let html = BundleBuilder::new()
        .file(
            "f1",
            "mixed.spec.ts",
            vec![
                passing_test("t1", "a"),
                failing_test("t2", "b", &["boom"]),
                skipped_test("t3", "c"),
                interrupted_test("t4", "d"),
                retried_test("t5", "e"),
            ],
        )
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();
    let failing = bundle.failing_results(&report).unwrap();

    assert!(
        failing
            .iter()
            .all(|f| matches!(f.result.status, TestStatus::Failed | TestStatus::TimedOut))
    );
    // t2 (failed), t5 retry 0 (failed), t5 retry 1 (timedOut); t4 is
    // interrupted and must not appear
    assert_eq!(failing.len(), 3);
    assert!(failing.iter().all(|f| f.test.test_id != "t4"));
}

#[test]
fn test_failing_results_ordering_is_stable() {
    let temp = TempDir::new().unwrap();
    let html = BundleBuilder::new()
        .file("f1", "a.spec.ts", vec![failing_test("t1", "a", &["x"])])
        .file("f2", "b.spec.ts", vec![retried_test("t2", "b")])
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();

    let ids = |results: &[pwlens_types::FailingResult]| -> Vec<String> {
        results.iter().map(|f| f.result_id().to_string()).collect()
    };

    let first = ids(&bundle.failing_results(&report).unwrap());
    let second = ids(&bundle.failing_results(&report).unwrap());

    assert_eq!(first, vec!["t1x0", "t2x0", "t2x1"]);
    assert_eq!(first, second);
}

#[test]
fn test_missing_detail_entry_degrades_to_zero_tests() {
    let temp = TempDir::new().unwrap();
    let html = BundleBuilder::new()
        .file("f1", "a.spec.ts", vec![failing_test("t1", "a", &["x"])])
        .orphan_file("ghost", "ghost.spec.ts")
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();

    assert!(bundle.file_detail("ghost").unwrap().is_none());

    // The orphan is skipped silently; t1 still comes through
    let failing = bundle.failing_results(&report).unwrap();
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].file_id, "f1");
}

#[test]
fn test_soft_assertion_errors_kept_intact() {
    let temp = TempDir::new().unwrap();
    let html = BundleBuilder::new()
        .file(
            "f1",
            "soft.spec.ts",
            vec![failing_test(
                "t1",
                "three soft failures",
                &["soft #1", "soft #2", "soft #3"],
            )],
        )
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();
    let failing = bundle.failing_results(&report).unwrap();

    assert_eq!(failing[0].result.errors.len(), 3);
    assert_eq!(failing[0].result.errors[1].message, "soft #2");
}

#[test]
fn test_trace_absent_is_none() {
    let temp = TempDir::new().unwrap();
    let html = BundleBuilder::new()
        .file("f1", "a.spec.ts", vec![failing_test("t1", "a", &["x"])])
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();
    let failing = bundle.failing_results(&report).unwrap();

    assert!(bundle.trace(&failing[0].result).unwrap().is_none());
}

#[test]
fn test_trace_round_trip_preserves_order() {
    let temp = TempDir::new().unwrap();

    let events = vec![
        json!({"type": "context-options", "browserName": "chromium", "platform": "linux", "wallTime": 1.0, "monotonicTime": 0.0, "options": {}}),
        json!({"type": "before", "callId": "call@7", "startTime": 5.0, "class": "Frame", "method": "click", "params": {"selector": "#go"}}),
        json!({"type": "log", "callId": "call@7", "message": "waiting for #go", "time": 6.0}),
        json!({"type": "after", "callId": "call@7", "endTime": 9.0, "error": {"message": "timeout exceeded"}}),
        json!({"type": "stdout", "timestamp": 10.0, "text": "done"}),
    ];
    write_trace_archive(&temp.path().join("data/t1.zip"), &events).unwrap();

    let mut test = failing_test("t1", "a", &["x"]);
    test.results[0].attachments.push(trace_attachment("data/t1.zip"));

    let html = BundleBuilder::new()
        .file("f1", "a.spec.ts", vec![test])
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();
    let failing = bundle.failing_results(&report).unwrap();

    let trace = bundle.trace(&failing[0].result).unwrap().unwrap();
    assert_eq!(trace.events.len(), events.len());

    let before_pos = trace
        .events
        .iter()
        .position(|e| matches!(e, pwlens_types::TraceEvent::Before(_)))
        .unwrap();
    let after_pos = trace
        .events
        .iter()
        .position(|e| matches!(e, pwlens_types::TraceEvent::After(_)))
        .unwrap();
    assert!(before_pos < after_pos, "before must precede its after");
    assert_eq!(trace.events[before_pos].call_id(), Some("call@7"));
}

#[test]
fn test_trace_with_corrupt_line_fails_whole_trace() {
    let temp = TempDir::new().unwrap();

    // Hand-build an archive whose second line is not JSON
    let trace_path = temp.path().join("data/bad.zip");
    write_trace_archive(&trace_path, &[json!({"type": "stdout", "timestamp": 1.0})]).unwrap();
    {
        use std::io::{Cursor, Write};
        use zip::write::SimpleFileOptions;
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("test.trace", SimpleFileOptions::default())
            .unwrap();
        writer
            .write_all(b"{\"type\":\"stdout\",\"timestamp\":1.0}\nnot json\n")
            .unwrap();
        fs::write(&trace_path, writer.finish().unwrap().into_inner()).unwrap();
    }

    let mut test = failing_test("t1", "a", &["x"]);
    test.results[0].attachments.push(trace_attachment("data/bad.zip"));

    let html = BundleBuilder::new()
        .file("f1", "a.spec.ts", vec![test])
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();
    let failing = bundle.failing_results(&report).unwrap();

    assert!(matches!(
        bundle.trace(&failing[0].result),
        Err(Error::TraceDecode { line: 2, .. })
    ));
}

#[test]
fn test_screenshots_resolve_lazily() {
    let temp = TempDir::new().unwrap();

    let shot_path = temp.path().join("data/shot.png");
    fs::create_dir_all(shot_path.parent().unwrap()).unwrap();
    fs::write(&shot_path, png_bytes()).unwrap();

    let mut test = failing_test("t1", "a", &["x"]);
    test.results[0].attachments.push(screenshot_on_disk("data/shot.png"));
    test.results[0].attachments.push(screenshot_inline(&png_bytes()));

    let html = BundleBuilder::new()
        .file("f1", "a.spec.ts", vec![test])
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();
    let failing = bundle.failing_results(&report).unwrap();

    let shots = bundle.screenshots(&failing[0].result);
    assert_eq!(shots.len(), 2);
    assert!(shots.iter().all(|s| s.content_type() == "image/png"));

    for shot in &shots {
        let bytes = shot.read().unwrap().unwrap();
        assert_eq!(&bytes[..4], &PNG_SIGNATURE);
    }
}

#[test]
fn test_listing_does_no_io_but_read_fails_on_missing_path() {
    let temp = TempDir::new().unwrap();

    let mut test = failing_test("t1", "a", &["x"]);
    test.results[0]
        .attachments
        .push(screenshot_on_disk("data/never-written.png"));

    let html = BundleBuilder::new()
        .file("f1", "a.spec.ts", vec![test])
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();
    let failing = bundle.failing_results(&report).unwrap();

    // Listing succeeds even though the path does not exist on disk
    let shots = bundle.screenshots(&failing[0].result);
    assert_eq!(shots.len(), 1);

    // A declared-but-unreadable path is bundle corruption, not absence
    assert!(matches!(
        shots[0].read(),
        Err(Error::AttachmentRead { .. })
    ));
}

#[test]
fn test_error_context_resolves_inline() {
    let temp = TempDir::new().unwrap();

    let mut test = failing_test("t1", "a", &["x"]);
    test.results[0]
        .attachments
        .push(error_context_inline("# Page state\n- button was disabled\n"));

    let html = BundleBuilder::new()
        .file("f1", "a.spec.ts", vec![test])
        .write(temp.path())
        .unwrap();

    let bundle = ReportBundle::open(&html).unwrap();
    let report = bundle.report().unwrap();
    let failing = bundle.failing_results(&report).unwrap();

    let ctx = bundle.error_context(&failing[0].result).unwrap();
    assert_eq!(ctx.content_type(), "text/markdown");

    let bytes = ctx.read().unwrap().unwrap();
    assert!(String::from_utf8(bytes).unwrap().contains("button was disabled"));
}

#[test]
fn test_open_rejects_document_without_marker() {
    let temp = TempDir::new().unwrap();
    let html_path = temp.path().join("index.html");
    fs::write(&html_path, "<html><body>plain page</body></html>").unwrap();

    assert!(matches!(
        ReportBundle::open(&html_path),
        Err(Error::MalformedBundle(_))
    ));
}

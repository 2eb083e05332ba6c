//! Human-oriented renderings of the view models.

use std::fmt::Write as _;

use chrono::DateTime;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use super::views::{
    CountsView, ErrorContextView, FailureView, FileView, ScreenshotsView, StatsView, TraceView,
};

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn paint_status(status: &str) -> String {
    if use_color() {
        match status {
            "passed" => status.green().to_string(),
            "failed" | "timedOut" => status.red().to_string(),
            _ => status.yellow().to_string(),
        }
    } else {
        status.to_string()
    }
}

fn format_millis(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.1}s", ms / 1000.0)
    } else {
        format!("{:.0}ms", ms)
    }
}

fn counts_line(counts: &CountsView) -> String {
    format!(
        "total: {}  passed: {}  failed: {}  flaky: {}  skipped: {}",
        counts.total, counts.passed, counts.failed, counts.flaky, counts.skipped
    )
}

pub fn stats(view: &StatsView) -> String {
    let mut out = String::new();

    if let Some(title) = &view.title {
        let _ = writeln!(out, "{}", title);
    }
    if let Some(started) = DateTime::from_timestamp_millis(view.start_time as i64) {
        let _ = writeln!(out, "Started:  {}", started.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    let _ = writeln!(out, "Duration: {}", format_millis(view.duration));
    if !view.project_names.is_empty() {
        let _ = writeln!(out, "Projects: {}", view.project_names.join(", "));
    }
    let _ = writeln!(out, "{}", counts_line(&view.stats));

    for error in &view.errors {
        let _ = writeln!(out, "Run error: {}", error);
    }

    out
}

pub fn files(views: &Vec<FileView>) -> String {
    let mut out = String::new();
    for file in views {
        let _ = writeln!(
            out,
            "{}  {}  ({} tests; {})",
            file.file_id,
            file.file_name,
            file.test_count,
            counts_line(&file.stats)
        );
    }
    if views.is_empty() {
        let _ = writeln!(out, "No test files in report");
    }
    out
}

pub fn failures(views: &Vec<FailureView>) -> String {
    let mut out = String::new();

    if views.is_empty() {
        let _ = writeln!(out, "No failing results");
        return out;
    }

    for failure in views {
        let title = if failure.path.is_empty() {
            failure.title.clone()
        } else {
            format!("{} > {}", failure.path.join(" > "), failure.title)
        };

        let _ = writeln!(
            out,
            "{}  {}  {}  {}:{}  (retry {}, {})",
            failure.result_id,
            paint_status(&failure.status),
            title,
            failure.location.file,
            failure.location.line,
            failure.retry,
            format_millis(failure.duration)
        );

        for error in &failure.errors {
            for line in error.message.lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
    }

    out
}

pub fn trace(view: &TraceView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {} trace events", view.result_id, view.event_count);
    // The event list itself is structured data; point plain users at json
    let _ = writeln!(out, "(use --format json to see the decoded events)");
    out
}

pub fn screenshots(view: &ScreenshotsView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: wrote {} screenshot(s)",
        view.result_id, view.screenshot_count
    );
    for file in &view.files {
        let _ = writeln!(out, "  {}  ({})", file.path, file.content_type);
    }
    out
}

pub fn error_context(view: &ErrorContextView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: error context ({}, {})",
        view.result_id, view.content_type, view.encoding
    );
    let _ = writeln!(out, "{}", view.content);
    out
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

// NOTE: Trace Wire Format
//
// A trace is a newline-delimited JSON stream where every line is one event
// discriminated by its `type` field. The variants below carry the fields
// each kind is known to emit; snapshots stay as raw JSON since reconstructing
// a DOM timeline is out of scope. Unknown kinds decode to `Unknown` so a
// newer writer never breaks the stream, at the cost of dropping that event's
// payload.

/// An ordered action log for one test attempt.
///
/// Event order is the physical line order of the decoded stream; it
/// reconstructs the original chronological action log and must be preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub events: Vec<TraceEvent>,
}

/// One line of the trace stream, keyed by its `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
#[serde(rename_all = "kebab-case")]
pub enum TraceEvent {
    ContextOptions(ContextOptionsEvent),
    ScreencastFrame(ScreencastFrameEvent),
    Before(BeforeActionEvent),
    Input(InputActionEvent),
    After(AfterActionEvent),
    Event(LibraryEvent),
    Log(LogEvent),
    Console(ConsoleEvent),
    ResourceSnapshot(ResourceSnapshotEvent),
    FrameSnapshot(FrameSnapshotEvent),
    Stdout(StdioEvent),
    Stderr(StdioEvent),
    Error(ErrorEvent),
    #[serde(other)]
    Unknown,
}

impl TraceEvent {
    /// The call identifier linking `before`/`input`/`after`/`log` events of
    /// one action, when the kind carries one.
    pub fn call_id(&self) -> Option<&str> {
        match self {
            TraceEvent::Before(e) => Some(&e.call_id),
            TraceEvent::Input(e) => Some(&e.call_id),
            TraceEvent::After(e) => Some(&e.call_id),
            TraceEvent::Log(e) => Some(&e.call_id),
            _ => None,
        }
    }
}

/// Browser context creation, the first event of a trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOptionsEvent {
    #[serde(default)]
    pub browser_name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub wall_time: f64,
    #[serde(default)]
    pub monotonic_time: f64,
    #[serde(default)]
    pub sdk_language: Option<String>,
    #[serde(default)]
    pub test_id_attribute_name: Option<String>,
    #[serde(default)]
    pub options: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreencastFrameEvent {
    pub page_id: String,
    pub sha1: String,
    pub timestamp: f64,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub frame_swap_wall_time: Option<f64>,
}

/// Start of one driver action (click, navigation, assertion, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeforeActionEvent {
    pub call_id: String,
    pub start_time: f64,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub step_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(default)]
    pub before_snapshot: Option<String>,
    #[serde(default)]
    pub stack: Vec<StackFrame>,
}

/// Pointer position recorded between `before` and `after`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputActionEvent {
    pub call_id: String,
    #[serde(default)]
    pub input_snapshot: Option<String>,
    #[serde(default)]
    pub point: Option<Point>,
}

/// Completion of one driver action, with its result or error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AfterActionEvent {
    pub call_id: String,
    pub end_time: f64,
    #[serde(default)]
    pub after_snapshot: Option<String>,
    #[serde(default)]
    pub attachments: Vec<TraceAttachment>,
    #[serde(default)]
    pub error: Option<ErrorPayload>,
    #[serde(default)]
    pub point: Option<Point>,
    #[serde(default)]
    pub result: Option<Value>,
}

/// Attachment recorded by an `after` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceAttachment {
    pub name: String,
    pub content_type: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub sha1: Option<String>,
    #[serde(default)]
    pub base64: Option<String>,
}

/// Library-level event (page, dialog, download, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEvent {
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub page_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub call_id: String,
    pub message: String,
    #[serde(default)]
    pub time: f64,
}

/// A console message captured from the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleEvent {
    pub message_type: String,
    pub text: String,
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(default)]
    pub args: Vec<ConsoleArg>,
    #[serde(default)]
    pub location: Option<ConsoleLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleArg {
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleLocation {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub line_number: u32,
    #[serde(default)]
    pub column_number: u32,
}

/// Network resource snapshot; kept as raw JSON (HAR-shaped).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSnapshotEvent {
    pub snapshot: Value,
}

/// DOM frame snapshot; kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshotEvent {
    pub snapshot: Value,
}

/// A chunk of captured process output (`stdout`/`stderr` kinds).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StdioEvent {
    pub timestamp: f64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub base64: Option<String>,
}

/// A test-runner-level error recorded into the trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEvent {
    pub message: String,
    #[serde(default)]
    pub stack: Vec<StackFrame>,
}

/// Serialized error carried by an `after` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stack: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    pub file: String,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
    #[serde(default)]
    pub function: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

use pwlens_types::{TestResult, Trace, TraceEvent};

use crate::bundle::ReportBundle;
use crate::container::Container;
use crate::{Error, Result};

/// Attachment name carrying the trace archive
const TRACE_ATTACHMENT: &str = "trace";

/// Fixed entry inside the trace archive holding the event stream
const TRACE_ENTRY: &str = "test.trace";

/// Resolve and decode the trace recorded for one attempt.
///
/// "No trace recorded" is a common, expected outcome and comes back as
/// `Ok(None)` at every step: no trace attachment, no resolvable payload,
/// or no `test.trace` entry inside the nested archive.
pub(crate) fn read_trace(bundle: &ReportBundle, result: &TestResult) -> Result<Option<Trace>> {
    let Some(attachment) = result.attachments.iter().find(|a| a.name == TRACE_ATTACHMENT) else {
        return Ok(None);
    };

    let Some(bytes) = bundle.attachment(attachment).read()? else {
        return Ok(None);
    };

    // The trace payload is itself a container; same abstraction, one level
    // deeper.
    let container = Container::new(bytes)?;
    let Some(stream) = container.entry(TRACE_ENTRY)? else {
        return Ok(None);
    };

    decode_stream(&stream).map(Some)
}

/// Decode a newline-delimited JSON event stream, preserving line order.
///
/// A line that fails to decode fails the whole trace: traces are
/// well-formed by construction, and a partial trace would hide real
/// failures.
fn decode_stream(bytes: &[u8]) -> Result<Trace> {
    let text = String::from_utf8_lossy(bytes);
    let mut events = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: TraceEvent = serde_json::from_str(line).map_err(|source| Error::TraceDecode {
            line: idx + 1,
            source,
        })?;
        events.push(event);
    }

    Ok(Trace { events })
}

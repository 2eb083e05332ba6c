// NOTE: Engine Shape
//
// One immutable container per parse, pure accessors on top:
//
//   ReportBundle::open -> Container (embedded zip, decoded once)
//     .report()          -> HtmlReport            (report.json)
//     .file_detail(id)   -> Option<TestFileDetail> ({fileId}.json)
//     .failing_results() -> Vec<FailingResult>     (file/test/retry order)
//     .screenshots(r) / .error_context(r) -> lazy AttachmentHandle(s)
//     .trace(r)          -> Option<Trace>          (nested archive, NDJSON)
//
// Nothing is cached: every accessor re-decodes from the container buffer,
// and attachment bytes are only read when a handle's read() is invoked.

pub mod attachment;
pub mod bundle;
pub mod container;
pub mod error;
mod select;
mod trace;

pub use attachment::AttachmentHandle;
pub use bundle::ReportBundle;
pub use container::Container;
pub use error::{Error, Result};

use std::fmt;
use std::path::PathBuf;

/// Result type for pwlens-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the extraction engine
///
/// Absence is not represented here: a missing file detail entry, a missing
/// attachment, or a missing trace is an `Ok(None)` at the call site. Errors
/// mean the bundle is unreadable or corrupt.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON decoding failed
    Json(serde_json::Error),

    /// Zip archive could not be opened or read
    Archive(zip::result::ZipError),

    /// Base64 payload could not be decoded
    Base64(base64::DecodeError),

    /// Host document missing the embedded payload marker, or the payload
    /// undecodable as base64/archive
    MalformedBundle(String),

    /// The container has no `report.json` entry
    MissingReportEntry,

    /// An attachment declared an on-disk path that could not be read.
    /// Distinct from "attachment simply absent": this indicates a corrupt
    /// bundle and is propagated, never swallowed.
    AttachmentRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line inside `test.trace` is not valid JSON; the whole trace fails
    TraceDecode {
        line: usize,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Archive(err) => write!(f, "Archive error: {}", err),
            Error::Base64(err) => write!(f, "Base64 error: {}", err),
            Error::MalformedBundle(msg) => write!(f, "Malformed report bundle: {}", msg),
            Error::MissingReportEntry => {
                write!(f, "Could not find report.json in the report archive")
            }
            Error::AttachmentRead { path, source } => {
                write!(
                    f,
                    "Could not read attachment at {}: {}",
                    path.display(),
                    source
                )
            }
            Error::TraceDecode { line, source } => {
                write!(f, "Invalid trace event on line {}: {}", line, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Archive(err) => Some(err),
            Error::Base64(err) => Some(err),
            Error::AttachmentRead { source, .. } => Some(source),
            Error::TraceDecode { source, .. } => Some(source),
            Error::MalformedBundle(_) | Error::MissingReportEntry => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Archive(err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Base64(err)
    }
}

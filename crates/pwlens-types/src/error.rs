use std::fmt;

/// Result type for pwlens-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A composite result identifier did not match `{testId}x{retry}`
    InvalidResultId(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidResultId(id) => {
                write!(
                    f,
                    "Invalid result ID format: \"{}\". Expected format: {{testId}}x{{retry}}",
                    id
                )
            }
        }
    }
}

impl std::error::Error for Error {}

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Composite reference for one specific attempt: `{testId}x{retry}`.
///
/// The separator is a plain `x` with no escaping, so a test id that itself
/// ends in `x<digits>` parses ambiguously. Parsing splits on the RIGHTMOST
/// `x`, which recovers the original pair for every id the report writer
/// emits today (hex digests), and is the documented heuristic for the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultId {
    pub test_id: String,
    pub retry: u32,
}

impl ResultId {
    pub fn new(test_id: impl Into<String>, retry: u32) -> Self {
        Self {
            test_id: test_id.into(),
            retry,
        }
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.test_id, self.retry)
    }
}

impl FromStr for ResultId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(idx) = s.rfind('x') else {
            return Err(Error::InvalidResultId(s.to_string()));
        };

        let test_id = &s[..idx];
        let retry: u32 = s[idx + 1..]
            .parse()
            .map_err(|_| Error::InvalidResultId(s.to_string()))?;

        if test_id.is_empty() {
            return Err(Error::InvalidResultId(s.to_string()));
        }

        Ok(ResultId {
            test_id: test_id.to_string(),
            retry,
        })
    }
}

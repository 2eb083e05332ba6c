use std::io::{Cursor, Read};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::{Error, Result};

/// Named-entry byte lookup over a zip buffer held fully in memory.
///
/// The buffer is immutable after construction, so lookups take `&self` and
/// are safe to run concurrently. Each lookup re-opens the central directory
/// from the buffer; there is no caching layer, and no partial or streaming
/// reads. Containers compose: the bytes of one entry (a trace attachment)
/// can seed another `Container`.
#[derive(Debug)]
pub struct Container {
    data: Vec<u8>,
}

impl Container {
    /// Wrap a byte buffer, validating that it parses as a zip archive.
    pub fn new(data: Vec<u8>) -> Result<Self> {
        ZipArchive::new(Cursor::new(data.as_slice()))?;
        Ok(Self { data })
    }

    /// Raw bytes of a named entry, or `None` when no such entry exists.
    ///
    /// Absence is not an error; callers decide its significance.
    pub fn entry(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let mut archive = ZipArchive::new(Cursor::new(self.data.as_slice()))?;

        let mut file = match archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(err) => return Err(Error::Archive(err)),
        };

        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }
}

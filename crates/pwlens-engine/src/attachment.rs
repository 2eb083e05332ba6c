use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use pwlens_types::Attachment;

use crate::{Error, Result};

/// A deferred view over one attachment descriptor.
///
/// Listing handles is metadata-only; bytes move only when [`read`] is
/// called. Resolution is idempotent but uncached: every call re-reads from
/// the descriptor's source.
///
/// [`read`]: AttachmentHandle::read
pub struct AttachmentHandle<'a> {
    attachment: &'a Attachment,
    base_dir: &'a Path,
}

impl<'a> AttachmentHandle<'a> {
    pub(crate) fn new(attachment: &'a Attachment, base_dir: &'a Path) -> Self {
        Self {
            attachment,
            base_dir,
        }
    }

    pub fn name(&self) -> &str {
        &self.attachment.name
    }

    pub fn content_type(&self) -> &str {
        &self.attachment.content_type
    }

    pub fn descriptor(&self) -> &Attachment {
        self.attachment
    }

    /// Resolve the attachment to bytes.
    ///
    /// Policy, in priority order: an inline base64 body wins (self-contained,
    /// no filesystem access); otherwise a declared relative path is resolved
    /// against the host document's directory and read from disk, with read
    /// failures propagated as [`Error::AttachmentRead`] since a declared but
    /// unreadable path means the bundle is corrupt; with neither source,
    /// `Ok(None)`.
    pub fn read(&self) -> Result<Option<Vec<u8>>> {
        if let Some(body) = self.attachment.body.as_deref()
            && !body.is_empty()
        {
            return Ok(Some(STANDARD.decode(body.trim())?));
        }

        if let Some(rel_path) = self.attachment.path.as_deref() {
            let path = self.base_dir.join(rel_path);
            return match fs::read(&path) {
                Ok(bytes) => Ok(Some(bytes)),
                Err(source) => Err(Error::AttachmentRead { path, source }),
            };
        }

        Ok(None)
    }
}

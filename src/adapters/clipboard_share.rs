//! Clipboard-backed share surface.

use crate::error::ShareError;
use crate::traits::{ShareOutcome, ShareSurface};

/// Copies shared messages to the system clipboard via `arboard`.
///
/// The clipboard handle is opened per share so a missing display server
/// only fails the share, not app startup.
#[derive(Debug, Default)]
pub struct ClipboardShare;

impl ClipboardShare {
    pub fn new() -> Self {
        Self
    }
}

impl ShareSurface for ClipboardShare {
    fn share(&mut self, message: &str) -> Result<ShareOutcome, ShareError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ShareError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .set_text(message.to_string())
            .map_err(|e| ShareError::WriteFailed(e.to_string()))?;
        tracing::debug!("Shared {} chars to clipboard", message.len());
        Ok(ShareOutcome::Copied)
    }
}

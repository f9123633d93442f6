//! Clipboard service for reading pasted documents.
//!
//! Only the plain-text flavor is read. Failures are logged and reported as
//! "nothing to paste" rather than as errors.

use arboard::Clipboard;
use log::debug;

/// Anything that can hand the controller a pasted string.
pub trait ClipboardSource: Send + Sync {
    /// Returns the clipboard text, or `None` when there is none or it can't be read.
    fn read_text(&self) -> Option<String>;
}

/// System clipboard backed by arboard.
pub struct SystemClipboard;

impl SystemClipboard {
    /// Creates a new clipboard reader.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&self) -> Option<String> {
        let mut clipboard = match Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                debug!("Failed to access clipboard: {}", e);
                return None;
            }
        };

        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("No text on clipboard: {}", e);
                None
            }
        }
    }
}

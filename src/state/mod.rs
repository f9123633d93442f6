//! State model for the viewer.
//!
//! [`AppState`] is the single source of truth the controller owns and the
//! presentation layer renders. Every consumer matches it exhaustively.

use crate::config::{CLIPBOARD_SOURCE_PATH, NOT_AVAILABLE};
use crate::file_utils;

pub mod navigation;

pub use navigation::{Direction, SearchDirection};

/// What the window is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    /// Nothing loaded yet.
    #[default]
    Initial,
    /// A load started before any document was shown.
    InitialLoading,
    /// A load started after the first one.
    Loading,
    /// The last attempt failed.
    Error(ErrorKind),
    /// A document is loaded.
    Content(Content),
}

impl AppState {
    /// Returns the loaded document, if any.
    pub fn content(&self) -> Option<&Content> {
        match self {
            AppState::Content(content) => Some(content),
            AppState::Initial
            | AppState::InitialLoading
            | AppState::Loading
            | AppState::Error(_) => None,
        }
    }

    pub fn is_content(&self) -> bool {
        self.content().is_some()
    }

    /// Loading state to show while an ingestion started from this state runs.
    pub fn loading_successor(&self) -> AppState {
        match self {
            AppState::Initial => AppState::InitialLoading,
            AppState::InitialLoading
            | AppState::Loading
            | AppState::Error(_)
            | AppState::Content(_) => AppState::Loading,
        }
    }
}

/// Failure categories surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The drop carried no usable file.
    DragAndDrop,
    /// Bad path, unsupported extension or I/O failure.
    FileRead,
    /// Clipboard empty or unreadable.
    CopyPaste,
    /// The renderer rejected the text.
    JsonParser { message: String },
}

/// How the loaded document is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Render,
    Edit,
}

/// A loaded document and its view settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub text: String,
    pub search_direction: Option<SearchDirection>,
    pub display_mode: DisplayMode,
    pub stats: Option<FileStats>,
}

impl Content {
    /// Freshly loaded document: rendered, no search request yet.
    pub fn loaded(text: String, stats: FileStats) -> Self {
        Self {
            text,
            search_direction: None,
            display_mode: DisplayMode::Render,
            stats: Some(stats),
        }
    }
}

/// Metadata captured when the document was loaded. Never follows live edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub file_path: String,
    pub file_name: String,
    pub file_size: String,
    pub file_read_time: String,
    pub file_lines: String,
}

impl FileStats {
    /// Stats for a document pasted from the clipboard.
    pub fn from_clipboard(text: &str) -> Self {
        Self {
            file_path: CLIPBOARD_SOURCE_PATH.to_string(),
            file_name: NOT_AVAILABLE.to_string(),
            file_size: NOT_AVAILABLE.to_string(),
            file_read_time: NOT_AVAILABLE.to_string(),
            file_lines: file_utils::count_lines(text).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_initial() {
        assert_eq!(AppState::default(), AppState::Initial);
    }

    #[test]
    fn loading_successor_depends_on_prior_content() {
        assert_eq!(AppState::Initial.loading_successor(), AppState::InitialLoading);
        assert_eq!(AppState::Loading.loading_successor(), AppState::Loading);
        assert_eq!(
            AppState::Error(ErrorKind::CopyPaste).loading_successor(),
            AppState::Loading
        );
    }

    #[test]
    fn clipboard_stats_use_sentinels() {
        let stats = FileStats::from_clipboard("[1,\n2]");
        assert_eq!(stats.file_path, "from clipboard");
        assert_eq!(stats.file_name, "n/a");
        assert_eq!(stats.file_size, "n/a");
        assert_eq!(stats.file_read_time, "n/a");
        assert_eq!(stats.file_lines, "2");
    }
}

//! Helper functions to set multiple ViewState properties in a grouped manner.
//!
//! Keeps the per-property setters out of the presenter so each screen
//! updates the properties it owns in one call.

use crate::state::{DisplayMode, ErrorKind, FileStats};
use slint::ComponentHandle;

/// Sets the stats sidebar. `None` hides the Info button.
pub fn set_file_stats(ui: &crate::AppWindow, stats: Option<&FileStats>) {
    let view_state = ui.global::<crate::ViewState>();
    match stats {
        Some(stats) => {
            view_state.set_stats(crate::FileStatsView {
                file_path: stats.file_path.as_str().into(),
                file_name: stats.file_name.as_str().into(),
                file_size: stats.file_size.as_str().into(),
                file_read_time: stats.file_read_time.as_str().into(),
                file_lines: stats.file_lines.as_str().into(),
            });
            view_state.set_has_stats(true);
        }
        None => {
            view_state.set_stats(crate::FileStatsView::default());
            view_state.set_has_stats(false);
        }
    }
}

/// Sets the error title and detail for an error screen.
pub fn set_error(ui: &crate::AppWindow, error: &ErrorKind) {
    let (title, detail) = error_text(error);
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_error_title(title.into());
    view_state.set_error_detail(detail.into());
}

/// Clears the error properties.
pub fn clear_error(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_error_title("".into());
    view_state.set_error_detail("".into());
}

/// Sets the editor text without disturbing an edit in progress.
pub fn set_document_text(ui: &crate::AppWindow, text: &str) {
    let view_state = ui.global::<crate::ViewState>();
    if view_state.get_document_text().as_str() != text {
        view_state.set_document_text(text.into());
    }
}

pub fn set_display_mode(ui: &crate::AppWindow, mode: DisplayMode) {
    ui.global::<crate::ViewState>()
        .set_display_mode(to_view_mode(mode));
}

/// Sets all search-related properties at once.
///
/// Groups: selected-result, total-results, selected-line
pub fn set_search_info(ui: &crate::AppWindow, selected: usize, total: usize, line: &str) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_selected_result(selected as i32);
    view_state.set_total_results(total as i32);
    view_state.set_selected_line(line.into());
}

pub fn to_view_mode(mode: DisplayMode) -> crate::ViewMode {
    match mode {
        DisplayMode::Render => crate::ViewMode::Render,
        DisplayMode::Edit => crate::ViewMode::Edit,
    }
}

pub fn from_view_mode(mode: crate::ViewMode) -> DisplayMode {
    match mode {
        crate::ViewMode::Render => DisplayMode::Render,
        crate::ViewMode::Edit => DisplayMode::Edit,
    }
}

fn error_text(error: &ErrorKind) -> (&'static str, String) {
    match error {
        ErrorKind::DragAndDrop => ("The dropped item is not a file.", String::new()),
        ErrorKind::FileRead => (
            "The file could not be read. Only .json and .txt files are supported.",
            String::new(),
        ),
        ErrorKind::CopyPaste => ("The clipboard does not contain any text.", String::new()),
        ErrorKind::JsonParser { message } => ("The document is not valid JSON.", message.clone()),
    }
}

//! Pushes controller state into the Slint window.
//!
//! Runs on the UI thread only. Holds the rendered document between state
//! changes so unchanged text is not parsed again.

use crate::state::{AppState, Content, DisplayMode};
use crate::ui::document_view::DocumentView;
use crate::ui::state_helpers::{
    clear_error, set_display_mode, set_document_text, set_error, set_file_stats, set_search_info,
};
use slint::ComponentHandle;
use std::sync::atomic::{AtomicU64, Ordering};

/// A document the renderer could not parse, with the text that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub source: String,
    pub message: String,
}

/// Stamps state snapshots queued for the event loop, in mutation order.
///
/// A snapshot whose stamp is no longer the latest must not write the editor
/// text, since a newer state is already on its way.
#[derive(Debug, Default)]
pub struct SnapshotSequence {
    latest: AtomicU64,
}

impl SnapshotSequence {
    pub fn stamp(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, stamp: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == stamp
    }
}

/// Rendered document cached against the text it was rendered from.
struct RenderedDocument {
    source: String,
    view: DocumentView,
}

#[derive(Default)]
pub struct Presenter {
    document: Option<RenderedDocument>,
    query: String,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the window for `state`.
    ///
    /// `latest` is false for a snapshot that a newer state already
    /// superseded; such a snapshot leaves the editor text alone. Returns the
    /// failure when the document could not be rendered; the caller reports it
    /// to the controller.
    pub fn present(
        &mut self,
        ui: &crate::AppWindow,
        state: &AppState,
        latest: bool,
    ) -> Option<ParseFailure> {
        let view_state = ui.global::<crate::ViewState>();
        match state {
            AppState::Initial => {
                self.close_document(ui);
                set_file_stats(ui, None);
                clear_error(ui);
                view_state.set_screen(crate::ScreenKind::Initial);
                None
            }
            AppState::InitialLoading => {
                self.close_document(ui);
                view_state.set_screen(crate::ScreenKind::InitialLoading);
                None
            }
            AppState::Loading => {
                self.close_document(ui);
                view_state.set_screen(crate::ScreenKind::Loading);
                None
            }
            AppState::Error(error) => {
                self.close_document(ui);
                set_error(ui, error);
                view_state.set_screen(crate::ScreenKind::Error);
                None
            }
            AppState::Content(content) => {
                clear_error(ui);
                set_file_stats(ui, content.stats.as_ref());
                if latest {
                    set_document_text(ui, &content.text);
                }
                set_display_mode(ui, content.display_mode);
                let parse_error = match content.display_mode {
                    DisplayMode::Render => self.render(ui, content),
                    DisplayMode::Edit => None,
                };
                view_state.set_screen(crate::ScreenKind::Content);
                parse_error
            }
        }
    }

    fn render(&mut self, ui: &crate::AppWindow, content: &Content) -> Option<ParseFailure> {
        let stale = match &self.document {
            Some(document) => document.source != content.text,
            None => true,
        };

        if stale {
            let previous_direction = self
                .document
                .take()
                .and_then(|document| document.view.last_direction());
            let mut view = match DocumentView::render(&content.text) {
                Ok(view) => view,
                Err(message) => {
                    return Some(ParseFailure {
                        source: content.text.clone(),
                        message,
                    });
                }
            };
            view.set_query(&self.query);
            view.acknowledge_direction(previous_direction);
            ui.global::<crate::ViewState>()
                .set_rendered_text(view.rendered().into());
            self.document = Some(RenderedDocument {
                source: content.text.clone(),
                view,
            });
        }

        if let Some(document) = &mut self.document {
            document.view.observe_direction(content.search_direction);
        }
        self.push_search_info(ui);
        None
    }

    /// Applies a new search query typed into the search bar.
    pub fn set_query(&mut self, ui: &crate::AppWindow, query: &str) {
        self.query = query.to_string();
        if let Some(document) = &mut self.document {
            document.view.set_query(query);
        }
        self.push_search_info(ui);
    }

    fn close_document(&mut self, ui: &crate::AppWindow) {
        self.document = None;
        self.query.clear();
        let view_state = ui.global::<crate::ViewState>();
        view_state.set_search_query("".into());
        view_state.set_rendered_text("".into());
        view_state.set_document_text("".into());
        set_search_info(ui, 0, 0, "");
    }

    fn push_search_info(&self, ui: &crate::AppWindow) {
        match &self.document {
            Some(document) => set_search_info(
                ui,
                document.view.selected_result(),
                document.view.total_results(),
                document.view.selected_line().unwrap_or(""),
            ),
            None => set_search_info(ui, 0, 0, ""),
        }
    }
}

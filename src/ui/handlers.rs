//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (key presses, open, display mode, edits,
//! search, reset) and subscribes the presenter to controller state changes.

use crate::config::SUPPORTED_FILE_EXTENSIONS;
use crate::controller::AppStateController;
use crate::input::{Key, KeyInput, Modifiers};
use crate::state::Direction;
use crate::ui::presenter::{ParseFailure, Presenter, SnapshotSequence};
use crate::ui::state_helpers::from_view_mode;
use log::info;
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use slint::platform::Key as SlintKey;
use std::sync::{Arc, Mutex, PoisonError};

/// Sets up all UI event handlers for the application.
///
/// State changes may come from rayon workers, so the presenter always runs
/// through `slint::invoke_from_event_loop`.
pub fn setup_handlers(ui: &crate::AppWindow, controller: &AppStateController) {
    let presenter = Arc::new(Mutex::new(Presenter::new()));
    let sequence = Arc::new(SnapshotSequence::default());

    controller.subscribe(Box::new({
        let ui_handle = ui.as_weak();
        let presenter = presenter.clone();
        let controller = controller.clone();
        move |state| {
            let state = state.clone();
            let stamp = sequence.stamp();
            let sequence = sequence.clone();
            let ui_handle = ui_handle.clone();
            let presenter = presenter.clone();
            let controller = controller.clone();
            let _ = slint::invoke_from_event_loop(move || {
                if let Some(ui) = ui_handle.upgrade() {
                    let failure = presenter
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .present(&ui, &state, sequence.is_latest(stamp));
                    report_parse_failure(&controller, failure);
                }
            });
        }
    }));

    let initial = controller.state();
    let failure = presenter
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .present(ui, &initial, true);
    report_parse_failure(controller, failure);

    let logic = ui.global::<crate::Logic>();

    logic.on_key_pressed({
        let controller = controller.clone();
        move |text, control, meta, alt, shift| {
            let modifiers = Modifiers {
                control,
                meta,
                alt,
                shift,
            };
            controller.handle_key(KeyInput::new(modifiers, decode_key(&text)))
        }
    });

    // AsyncFileDialog must run on the main thread, so spawn_local rather than rayon
    logic.on_open_file({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            let _ = slint::spawn_local(async move {
                let Some(file_handle) = AsyncFileDialog::new()
                    .add_filter("JSON or text", &SUPPORTED_FILE_EXTENSIONS)
                    .pick_file()
                    .await
                else {
                    info!("No file selected");
                    return;
                };
                controller.open_file(file_handle.path().to_path_buf());
            });
        }
    });

    logic.on_update_display_mode({
        let controller = controller.clone();
        move |mode| controller.update_display_mode(from_view_mode(mode))
    });

    logic.on_update_json({
        let controller = controller.clone();
        move |text| controller.update_json(text.to_string())
    });

    logic.on_search_query_changed({
        let ui_handle = ui.as_weak();
        let presenter = presenter.clone();
        move |query| {
            if let Some(ui) = ui_handle.upgrade() {
                presenter
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .set_query(&ui, &query);
            }
        }
    });

    logic.on_select_next({
        let controller = controller.clone();
        move || {
            controller.request_search(Direction::Next);
        }
    });

    logic.on_select_previous({
        let controller = controller.clone();
        move || {
            controller.request_search(Direction::Previous);
        }
    });

    logic.on_reset({
        let controller = controller.clone();
        move || controller.reset()
    });
}

fn report_parse_failure(controller: &AppStateController, failure: Option<ParseFailure>) {
    if let Some(ParseFailure { source, message }) = failure {
        controller.show_json_parsing_error(&source, message);
    }
}

/// Maps Slint key event text to a toolkit-independent key.
fn decode_key(text: &str) -> Key {
    let mut chars = text.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Key::Other;
    };

    if c == char::from(SlintKey::DownArrow) {
        Key::ArrowDown
    } else if c == char::from(SlintKey::UpArrow) {
        Key::ArrowUp
    } else if c == char::from(SlintKey::Return) {
        Key::Enter
    } else {
        Key::Char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_text(key: SlintKey) -> String {
        char::from(key).to_string()
    }

    #[test]
    fn decodes_navigation_keys() {
        assert_eq!(decode_key(&key_text(SlintKey::DownArrow)), Key::ArrowDown);
        assert_eq!(decode_key(&key_text(SlintKey::UpArrow)), Key::ArrowUp);
        assert_eq!(decode_key(&key_text(SlintKey::Return)), Key::Enter);
    }

    #[test]
    fn decodes_characters() {
        assert_eq!(decode_key("v"), Key::Char('v'));
        assert_eq!(decode_key("V"), Key::Char('V'));
    }

    #[test]
    fn empty_or_multi_char_text_is_other() {
        assert_eq!(decode_key(""), Key::Other);
        assert_eq!(decode_key("ab"), Key::Other);
    }
}

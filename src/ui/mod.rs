//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `rayon::spawn` (via the controller's spawner): file and clipboard reads
//! - `slint::invoke_from_event_loop`: state changes from workers back to the UI thread
//! - `slint::spawn_local`: the file dialog, which must run on the main thread

pub mod document_view;
pub mod handlers;
mod presenter;
mod state_helpers;

pub use handlers::setup_handlers;

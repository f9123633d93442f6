//! Application state controller.
//!
//! Owns the one [`AppState`] and turns drops, pastes, key presses and
//! presentation callbacks into state transitions. File and clipboard reads
//! run on a [`TaskSpawner`]; the state shows `InitialLoading`/`Loading`
//! until they complete.
//!
//! Threading model:
//! - every mutation goes through one mutex, so transitions are serialized
//! - observers run while that mutex is held, in mutation order, and must not
//!   call back into the controller synchronously
//! - background completions carry the generation they were started in; see
//!   [`CompletionPolicy`] for what happens when the user moved on meanwhile

pub mod spawner;

use crate::input::{DragAndDropOutcome, KeyCommand, KeyInput};
use crate::services::{ClipboardSource, Ingested, ingest_file};
use crate::state::{
    AppState, Content, Direction, DisplayMode, ErrorKind, FileStats, SearchDirection,
};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use spawner::{InlineSpawner, RayonSpawner, Task, TaskSpawner};

/// Callback invoked with the new state after every change.
pub type StateObserver = Box<dyn Fn(&AppState) + Send>;

/// What to do with a background completion that finishes after a newer
/// user action (another drop or paste, a failed drop, a reset).
///
/// There is no cancellation: the read always runs to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionPolicy {
    /// Drop the stale result; the newest request decides the state.
    #[default]
    DiscardStale,
    /// Every completion overwrites the state, even after a reset.
    LastWriterWins,
}

struct Inner {
    state: AppState,
    /// Bumped by every user action that replaces the state wholesale.
    generation: u64,
    observers: Vec<StateObserver>,
}

impl Inner {
    fn set_state(&mut self, state: AppState) {
        if self.state == state {
            return;
        }
        debug!("State: {} -> {}", label(&self.state), label(&state));
        self.state = state;
        self.notify();
    }

    /// Replaces the state on behalf of a user action, outdating in-flight loads.
    fn replace_state(&mut self, state: AppState) -> u64 {
        self.generation += 1;
        self.set_state(state);
        self.generation
    }

    fn update_content(&mut self, update: impl FnOnce(&mut Content)) -> bool {
        match &mut self.state {
            AppState::Content(content) => update(content),
            AppState::Initial
            | AppState::InitialLoading
            | AppState::Loading
            | AppState::Error(_) => return false,
        }
        self.notify();
        true
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}

fn label(state: &AppState) -> &'static str {
    match state {
        AppState::Initial => "Initial",
        AppState::InitialLoading => "InitialLoading",
        AppState::Loading => "Loading",
        AppState::Error(_) => "Error",
        AppState::Content(_) => "Content",
    }
}

/// Handle to the application state. Clones share the same state.
#[derive(Clone)]
pub struct AppStateController {
    inner: Arc<Mutex<Inner>>,
    spawner: Arc<dyn TaskSpawner>,
    clipboard: Arc<dyn ClipboardSource>,
    policy: CompletionPolicy,
}

impl AppStateController {
    /// Creates a controller in the `Initial` state.
    pub fn new(spawner: Arc<dyn TaskSpawner>, clipboard: Arc<dyn ClipboardSource>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: AppState::Initial,
                generation: 0,
                observers: Vec::new(),
            })),
            spawner,
            clipboard,
            policy: CompletionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CompletionPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.lock().state.clone()
    }

    /// Registers a callback for state changes.
    pub fn subscribe(&self, observer: StateObserver) {
        self.lock().observers.push(observer);
    }

    /// Applies the outcome of a drop gesture.
    pub fn update_drag_and_drop_state(&self, outcome: DragAndDropOutcome) {
        match outcome {
            DragAndDropOutcome::Success { file } => self.open_file(file),
            DragAndDropOutcome::Failure => {
                self.lock().replace_state(AppState::Error(ErrorKind::DragAndDrop));
            }
        }
    }

    /// Loads a document from disk in the background.
    pub fn open_file(&self, path: PathBuf) {
        let generation = {
            let mut inner = self.lock();
            let loading = inner.state.loading_successor();
            inner.replace_state(loading)
        };
        info!("Loading {}", path.display());

        let controller = self.clone();
        self.spawner.spawn(Box::new(move || {
            let next = match ingest_file(&path) {
                Ok(Ingested { text, stats }) => AppState::Content(Content::loaded(text, stats)),
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    AppState::Error(ErrorKind::FileRead)
                }
            };
            controller.complete_load(generation, next);
        }));
    }

    /// Handles a key press. Returns whether the key was consumed.
    pub fn handle_key(&self, input: KeyInput) -> bool {
        match input.command() {
            Some(KeyCommand::Paste) => self.paste_from_clipboard(),
            Some(KeyCommand::Search(direction)) => self.request_search(direction),
            None => false,
        }
    }

    /// Starts a clipboard load unless a document is already open.
    ///
    /// Pasting over an open document is not supported; the shortcut is left
    /// unconsumed in that case.
    fn paste_from_clipboard(&self) -> bool {
        let generation = {
            let mut inner = self.lock();
            if inner.state.is_content() {
                debug!("Paste ignored while a document is open");
                return false;
            }
            let loading = inner.state.loading_successor();
            inner.replace_state(loading)
        };
        info!("Loading from clipboard");

        let controller = self.clone();
        let clipboard = self.clipboard.clone();
        self.spawner.spawn(Box::new(move || {
            let next = match clipboard.read_text() {
                Some(text) => {
                    let stats = FileStats::from_clipboard(&text);
                    AppState::Content(Content::loaded(text, stats))
                }
                None => {
                    warn!("Clipboard holds no text");
                    AppState::Error(ErrorKind::CopyPaste)
                }
            };
            controller.complete_load(generation, next);
        }));
        true
    }

    fn complete_load(&self, generation: u64, next: AppState) {
        let mut inner = self.lock();
        match self.policy {
            CompletionPolicy::DiscardStale if generation != inner.generation => {
                debug!(
                    "Discarding stale load result (generation {}, current {})",
                    generation, inner.generation
                );
            }
            CompletionPolicy::DiscardStale | CompletionPolicy::LastWriterWins => {
                inner.set_state(next);
            }
        }
    }

    /// Asks the renderer to move to the next or previous search result.
    ///
    /// Returns false when no document is open.
    pub fn request_search(&self, direction: Direction) -> bool {
        self.lock().update_content(|content| {
            content.search_direction =
                Some(SearchDirection::advance(content.search_direction, direction));
        })
    }

    /// Switches between the rendered view and the raw editor.
    pub fn update_display_mode(&self, mode: DisplayMode) {
        if !self.lock().update_content(|content| content.display_mode = mode) {
            debug!("Display mode change ignored: no document open");
        }
    }

    /// Replaces the document text after an edit. Stats keep describing the load.
    pub fn update_json(&self, text: String) {
        if !self.lock().update_content(|content| content.text = text) {
            debug!("Text update ignored: no document open");
        }
    }

    /// Reports that the renderer could not parse `source`.
    ///
    /// Ignored unless `source` is still the open document's text, so a report
    /// about a document that was replaced or edited meanwhile has no effect.
    pub fn show_json_parsing_error(&self, source: &str, message: String) {
        let mut inner = self.lock();
        let matches_open_document = match inner.state.content() {
            Some(content) => content.text == source,
            None => {
                debug!("Parse error ignored: no document open");
                return;
            }
        };
        if matches_open_document {
            warn!("Document failed to parse: {}", message);
            inner.set_state(AppState::Error(ErrorKind::JsonParser { message }));
        } else {
            debug!("Parse error ignored: document changed since render");
        }
    }

    /// Closes the document and returns to the start screen.
    pub fn reset(&self) {
        self.lock().replace_state(AppState::Initial);
    }
}

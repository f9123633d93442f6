//! Drag-and-drop normalization.
//!
//! [`DragAndDropTarget`] reduces drop sessions to a hover flag and a
//! [`DragAndDropOutcome`]. [`WinitDropAdapter`] feeds it from winit, which
//! reports each file of a multi-file drop as its own event.

use log::{debug, info};
use std::path::PathBuf;

/// Result of a drop, as the controller sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragAndDropOutcome {
    Success { file: PathBuf },
    Failure,
}

/// What a drop carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPayload {
    Files(Vec<PathBuf>),
    Text(String),
    Unknown,
}

/// A completed drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub payload: DropPayload,
}

impl DropEvent {
    pub fn files(files: Vec<PathBuf>) -> Self {
        Self {
            payload: DropPayload::Files(files),
        }
    }

    fn first_file(self) -> Option<PathBuf> {
        match self.payload {
            DropPayload::Files(files) => files.into_iter().next(),
            DropPayload::Text(_) | DropPayload::Unknown => None,
        }
    }
}

/// Turns drop session callbacks into hover changes and outcomes.
pub struct DragAndDropTarget<O, H>
where
    O: Fn(DragAndDropOutcome),
    H: Fn(bool),
{
    on_outcome: O,
    on_hovering_changed: H,
}

impl<O, H> DragAndDropTarget<O, H>
where
    O: Fn(DragAndDropOutcome),
    H: Fn(bool),
{
    pub fn new(on_outcome: O, on_hovering_changed: H) -> Self {
        Self {
            on_outcome,
            on_hovering_changed,
        }
    }

    pub fn on_session_started(&self) {
        (self.on_hovering_changed)(true);
    }

    pub fn on_session_ended(&self) {
        (self.on_hovering_changed)(false);
    }

    /// Handles a drop. Returns whether the drop was accepted.
    ///
    /// Only the first file is used; the rest are ignored.
    pub fn on_drop(&self, event: DropEvent) -> bool {
        let outcome = match event.first_file() {
            Some(file) => {
                info!("Dropped file: {}", file.display());
                DragAndDropOutcome::Success { file }
            }
            None => {
                info!("Drop carried no file");
                DragAndDropOutcome::Failure
            }
        };

        let accepted = matches!(outcome, DragAndDropOutcome::Success { .. });
        (self.on_outcome)(outcome);
        accepted
    }
}

/// File drag events as winit reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformDragEvent {
    Hovered(PathBuf),
    Cancelled,
    Dropped(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Session {
    #[default]
    Idle,
    Hovering,
    Dropped,
}

/// Groups per-file winit events into drag sessions.
///
/// winit has no "drop finished" event, so a gesture only ends when the next
/// one starts hovering. Every `Dropped` after the first one is counted as
/// part of the same gesture until a `Hovered` arrives, including `Dropped`
/// events that were never preceded by a hover.
#[derive(Debug, Default)]
pub struct WinitDropAdapter {
    session: Session,
}

impl WinitDropAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forwards one winit event to the target. Returns whether a drop was accepted.
    pub fn handle<O, H>(
        &mut self,
        event: PlatformDragEvent,
        target: &DragAndDropTarget<O, H>,
    ) -> bool
    where
        O: Fn(DragAndDropOutcome),
        H: Fn(bool),
    {
        match (self.session, event) {
            (Session::Hovering, PlatformDragEvent::Hovered(_)) => false,
            (Session::Idle | Session::Dropped, PlatformDragEvent::Hovered(path)) => {
                debug!("Drag session started over {}", path.display());
                self.session = Session::Hovering;
                target.on_session_started();
                false
            }
            (Session::Hovering, PlatformDragEvent::Cancelled) => {
                self.session = Session::Idle;
                target.on_session_ended();
                false
            }
            (Session::Idle | Session::Dropped, PlatformDragEvent::Cancelled) => false,
            (Session::Hovering | Session::Idle, PlatformDragEvent::Dropped(path)) => {
                self.session = Session::Dropped;
                target.on_session_ended();
                target.on_drop(DropEvent::files(vec![path]))
            }
            (Session::Dropped, PlatformDragEvent::Dropped(path)) => {
                debug!("Ignoring additional dropped file: {}", path.display());
                false
            }
        }
    }
}

//! Input normalization: keyboard and drag-and-drop.

pub mod drag_drop;
pub mod keyboard;

pub use drag_drop::{DragAndDropOutcome, DragAndDropTarget, PlatformDragEvent, WinitDropAdapter};
pub use keyboard::{Key, KeyCommand, KeyInput, Modifiers};

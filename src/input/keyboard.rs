//! Toolkit-independent keyboard input.
//!
//! The UI glue translates toolkit key events into [`KeyInput`]; the controller
//! decides what a key means from this value alone.

use crate::state::Direction;

/// Modifier keys held while a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        control: false,
        meta: false,
        alt: false,
        shift: false,
    };

    /// The platform's shortcut modifier alone (Cmd on macOS, Ctrl elsewhere).
    pub fn shortcut() -> Self {
        if cfg!(target_os = "macos") {
            Modifiers { meta: true, ..Modifiers::NONE }
        } else {
            Modifiers { control: true, ..Modifiers::NONE }
        }
    }

    fn has_shortcut(&self) -> bool {
        if cfg!(target_os = "macos") {
            self.meta
        } else {
            self.control
        }
    }
}

/// Keys the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

/// One key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub modifiers: Modifiers,
    pub key: Key,
}

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Paste,
    Search(Direction),
}

impl KeyInput {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    /// The platform paste shortcut.
    pub fn paste() -> Self {
        Self::new(Modifiers::shortcut(), Key::Char('v'))
    }

    /// Maps the key press to a command, if it is one the controller handles.
    pub fn command(&self) -> Option<KeyCommand> {
        match self.key {
            Key::Char(c) if self.modifiers.has_shortcut() && c.eq_ignore_ascii_case(&'v') => {
                Some(KeyCommand::Paste)
            }
            Key::ArrowDown | Key::Enter => Some(KeyCommand::Search(Direction::Next)),
            Key::ArrowUp => Some(KeyCommand::Search(Direction::Previous)),
            Key::Char(_) | Key::Other => None,
        }
    }
}

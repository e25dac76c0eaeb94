//! Platform-agnostic key events.
//!
//! The host UI maps its native keyboard input to these types. The session
//! never sees raw terminal or browser events.

/// Logical key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    Enter,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
    Escape,
}

/// Modifier flags held while a key was pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Only Ctrl held.
    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
    };
}

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// A key press with Ctrl held.
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }

    /// The logical action this key press maps to.
    pub fn action(&self) -> KeyAction {
        match (self.key, self.modifiers.ctrl) {
            (Key::Char(c), true) if c.eq_ignore_ascii_case(&'l') => KeyAction::ClearScreen,
            (Key::Enter, _) => KeyAction::Submit,
            (Key::Tab, _) => KeyAction::Complete,
            (Key::Up, _) => KeyAction::RecallPrevious,
            (Key::Down, _) => KeyAction::RecallNext,
            _ => KeyAction::Edit,
        }
    }
}

/// What the session does with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    Complete,
    RecallPrevious,
    RecallNext,
    ClearScreen,
    /// Ordinary text editing of the input buffer.
    Edit,
}

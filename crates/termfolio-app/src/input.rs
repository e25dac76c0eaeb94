//! Map crossterm key events to session key events.

use crossterm::event::{KeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyModifiers};
use termfolio_types::input::{Key, KeyEvent, Modifiers};

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Whether the event should end the program: Esc, Ctrl+C or Ctrl+D.
pub fn is_quit(event: &CtKeyEvent) -> bool {
    if event.kind != KeyEventKind::Press {
        return false;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Esc => true,
        KeyCode::Char(c) => ctrl && matches!(c, 'c' | 'C' | 'd' | 'D'),
        _ => false,
    }
}

/// Translate a key press. Releases, repeats and keys the session has no
/// use for map to `None`.
pub fn translate(event: &CtKeyEvent) -> Option<KeyEvent> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(KeyEvent {
        key,
        modifiers: Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        },
    })
}

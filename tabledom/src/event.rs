//! Input events delivered by the terminal adapter.
//!
//! Crossterm events are converted into this crate's own types so that
//! consumers never depend on the backend directly.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};

/// High-level input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key { key: Key, modifiers: Modifiers },
    Click { x: u16, y: u16, button: MouseButton },
    Scroll { x: u16, y: u16, delta_y: i16 },
    Resize { width: u16, height: u16 },
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<KeyModifiers> for Modifiers {
    fn from(m: KeyModifiers) -> Self {
        Self {
            shift: m.contains(KeyModifiers::SHIFT),
            ctrl: m.contains(KeyModifiers::CONTROL),
            alt: m.contains(KeyModifiers::ALT),
        }
    }
}

impl Event {
    /// Convert a crossterm event, dropping anything the table UI has no
    /// use for (key releases, drags, focus changes).
    pub fn from_crossterm(ev: CrosstermEvent) -> Option<Self> {
        match ev {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let mapped = match key.code {
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Backspace => Key::Backspace,
                    KeyCode::Esc => Key::Escape,
                    KeyCode::Tab => Key::Tab,
                    KeyCode::Up => Key::Up,
                    KeyCode::Down => Key::Down,
                    KeyCode::Left => Key::Left,
                    KeyCode::Right => Key::Right,
                    KeyCode::Home => Key::Home,
                    KeyCode::End => Key::End,
                    KeyCode::PageUp => Key::PageUp,
                    KeyCode::PageDown => Key::PageDown,
                    _ => return None,
                };
                Some(Event::Key {
                    key: mapped,
                    modifiers: key.modifiers.into(),
                })
            }
            CrosstermEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(button),
                column,
                row,
                ..
            }) => {
                let button = match button {
                    CtMouseButton::Left => MouseButton::Left,
                    CtMouseButton::Right => MouseButton::Right,
                    CtMouseButton::Middle => MouseButton::Middle,
                };
                Some(Event::Click {
                    x: column,
                    y: row,
                    button,
                })
            }
            CrosstermEvent::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollUp,
                column,
                row,
                ..
            }) => Some(Event::Scroll {
                x: column,
                y: row,
                delta_y: -1,
            }),
            CrosstermEvent::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column,
                row,
                ..
            }) => Some(Event::Scroll {
                x: column,
                y: row,
                delta_y: 1,
            }),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

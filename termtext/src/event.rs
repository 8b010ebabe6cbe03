//! Input events and key bindings.
//!
//! Widgets never read from the terminal themselves. The host converts
//! whatever it receives from crossterm into an [`Event`] and feeds it to the
//! widget's reducer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An input event delivered to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

impl Event {
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key_with(key: Key, modifiers: Modifiers) -> Self {
        Event::Key { key, modifiers }
    }

    /// Convert a crossterm event. Only key presses and resizes are kept;
    /// key releases, mouse and paste events yield `None`.
    pub fn from_crossterm(event: &crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as CtEvent, KeyEventKind};
        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                let key_code = Key::from_crossterm(key.code)?;
                Some(Event::Key {
                    key: key_code,
                    modifiers: key.modifiers.into(),
                })
            }
            CtEvent::Resize(width, height) => Some(Event::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

impl Key {
    /// Map a crossterm key code. Codes with no counterpart here (media keys,
    /// bare modifier presses, ...) yield `None`.
    pub fn from_crossterm(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => f.write_str("space"),
            Key::Char(c) => write!(f, "{c}"),
            Key::Enter => f.write_str("enter"),
            Key::Backspace => f.write_str("backspace"),
            Key::Delete => f.write_str("delete"),
            Key::Tab => f.write_str("tab"),
            Key::BackTab => f.write_str("backtab"),
            Key::Escape => f.write_str("esc"),
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Home => f.write_str("home"),
            Key::End => f.write_str("end"),
            Key::PageUp => f.write_str("pgup"),
            Key::PageDown => f.write_str("pgdown"),
            Key::Insert => f.write_str("insert"),
            Key::F(n) => write!(f, "f{n}"),
        }
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Whether a widget acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key string")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub const fn key(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub const fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub const fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub const fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Character keys already encode shift in the character itself
    /// (`G` vs `g`), and terminals disagree on whether they also report
    /// SHIFT, so shift is ignored for them.
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        if self.key != key || self.modifiers.ctrl != modifiers.ctrl {
            return false;
        }
        if self.modifiers.alt != modifiers.alt {
            return false;
        }
        matches!(key, Key::Char(_)) || self.modifiers.shift == modifiers.shift
    }
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    /// Parse strings like `"ctrl+u"`, `"pgdown"`, `"G"` or `"space"`.
    /// Modifier names are case-insensitive; a single-character key keeps its
    /// case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        // a literal "+" key, possibly with modifiers ("ctrl++")
        let (mods_part, key_part) = match s.strip_suffix("++") {
            Some(prefix) => (Some(prefix), "+"),
            None if s == "+" => (None, "+"),
            None => match s.rsplit_once('+') {
                Some((prefix, key)) => (Some(prefix), key),
                None => (None, s),
            },
        };

        let mut modifiers = Modifiers::NONE;
        if let Some(mods) = mods_part {
            for part in mods.split('+') {
                match part.to_lowercase().as_str() {
                    "ctrl" | "control" => modifiers.ctrl = true,
                    "shift" => modifiers.shift = true,
                    "alt" => modifiers.alt = true,
                    _ => return Err(KeyParseError::UnknownModifier(part.to_string())),
                }
            }
        }

        Ok(KeyCombo::new(parse_single_key(key_part)?, modifiers))
    }
}

fn parse_single_key(s: &str) -> Result<Key, KeyParseError> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c));
    }

    let key = match s.to_lowercase().as_str() {
        "" => return Err(KeyParseError::Empty),
        "enter" | "return" => Key::Enter,
        "escape" | "esc" => Key::Escape,
        "backspace" => Key::Backspace,
        "tab" => Key::Tab,
        "backtab" => Key::BackTab,
        "space" => Key::Char(' '),
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "pgup" => Key::PageUp,
        "pagedown" | "pgdown" | "pgdn" => Key::PageDown,
        "insert" | "ins" => Key::Insert,
        "delete" | "del" => Key::Delete,
        lower => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => Key::F(n),
            _ => return Err(KeyParseError::UnknownKey(s.to_string())),
        },
    };
    Ok(key)
}

/// One action's set of alternative key combos.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Binding {
    pub keys: Vec<KeyCombo>,
}

impl Binding {
    pub fn new(keys: Vec<KeyCombo>) -> Self {
        Self { keys }
    }

    /// Build a binding from key strings, e.g. `Binding::parse(&["u", "ctrl+u"])`.
    pub fn parse(keys: &[&str]) -> Result<Self, KeyParseError> {
        let keys = keys
            .iter()
            .map(|k| k.parse())
            .collect::<Result<Vec<KeyCombo>, _>>()?;
        Ok(Self { keys })
    }

    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        self.keys.iter().any(|combo| combo.matches(key, modifiers))
    }

    pub fn matches_event(&self, event: &Event) -> bool {
        match event {
            Event::Key { key, modifiers } => self.matches(*key, *modifiers),
            Event::Resize { .. } => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

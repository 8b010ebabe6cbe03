use termtext::{Binding, Key, KeyCombo};

/// Navigation bindings for a focused table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub line_up: Binding,
    pub line_down: Binding,
    pub page_up: Binding,
    pub page_down: Binding,
    pub half_page_up: Binding,
    pub half_page_down: Binding,
    pub goto_top: Binding,
    pub goto_bottom: Binding,
}

fn keys(combos: &[KeyCombo]) -> Binding {
    Binding::new(combos.to_vec())
}

const fn ch(c: char) -> KeyCombo {
    KeyCombo::key(Key::Char(c))
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            line_up: keys(&[KeyCombo::key(Key::Up), ch('k')]),
            line_down: keys(&[KeyCombo::key(Key::Down), ch('j')]),
            page_up: keys(&[ch('b'), KeyCombo::key(Key::PageUp)]),
            page_down: keys(&[ch('f'), KeyCombo::key(Key::PageDown), ch(' ')]),
            half_page_up: keys(&[ch('u'), ch('u').ctrl()]),
            half_page_down: keys(&[ch('d'), ch('d').ctrl()]),
            goto_top: keys(&[KeyCombo::key(Key::Home), ch('g')]),
            goto_bottom: keys(&[KeyCombo::key(Key::End), ch('G')]),
        }
    }
}

use termtext::{Binding, KeyParseError};
use xtable::KeyMap;

/// Keys handled by the demo itself, outside the table.
#[derive(Debug, Clone)]
pub struct DemoKeys {
    pub quit: Binding,
    pub delete: Binding,
    pub find: Binding,
    pub find_next: Binding,
}

impl DemoKeys {
    pub fn new() -> Result<Self, KeyParseError> {
        Ok(Self {
            quit: Binding::parse(&["esc", "ctrl+c"])?,
            delete: Binding::parse(&["delete"])?,
            find: Binding::parse(&["/"])?,
            find_next: Binding::parse(&["n"])?,
        })
    }
}

/// Table navigation without the single-letter vi keys, which the demo
/// wants for itself.
pub fn table_key_map() -> Result<KeyMap, KeyParseError> {
    Ok(KeyMap {
        line_up: Binding::parse(&["up"])?,
        line_down: Binding::parse(&["down"])?,
        page_up: Binding::parse(&["pgup"])?,
        page_down: Binding::parse(&["pgdown"])?,
        half_page_up: Binding::parse(&["ctrl+u"])?,
        half_page_down: Binding::parse(&["ctrl+d"])?,
        goto_top: Binding::parse(&["home"])?,
        goto_bottom: Binding::parse(&["end"])?,
    })
}

pub const HELP: &[(&str, &str)] = &[
    ("↑/↓", "move"),
    ("pgup/pgdn", "page"),
    ("^u/^d", "half page"),
    ("home/end", "ends"),
    ("1..0", "sort"),
    ("alt+1..0", "sort desc"),
    ("/", "find"),
    ("n", "next"),
    ("del", "delete"),
    ("esc", "quit"),
];

/// Column addressed by a digit key: `1` is the first column, `0` the tenth.
pub fn digit_column(c: char) -> Option<usize> {
    let d = c.to_digit(10)? as usize;
    Some(if d == 0 { 9 } else { d - 1 })
}

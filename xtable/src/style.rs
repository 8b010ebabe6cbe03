use termtext::{Color, Style};

/// Styles used by [`Table::view`](crate::Table::view).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Styles {
    pub header: Style,
    pub cell: Style,
    pub selected: Style,
    /// Rule drawn under the header, if any.
    pub header_rule: Option<Style>,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            header: Style::new().bold(),
            cell: Style::new(),
            selected: Style::new().bold().foreground(Color::indexed(212)),
            header_rule: None,
        }
    }
}

impl Styles {
    /// No colours or attributes anywhere.
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            cell: Style::new(),
            selected: Style::new(),
            header_rule: None,
        }
    }
}

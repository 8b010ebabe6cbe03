use termtext::{Border, Color, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Styles {
    /// Frame around the box. Its border and border colour are used.
    pub border: Style,
    pub button: Style,
    pub selected_button: Style,
    /// Hotkey letters are drawn in this colour, underlined.
    pub hotkey: Color,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            border: Style::new()
                .border(Border::Single)
                .border_foreground(Color::indexed(63)),
            button: Style::new()
                .foreground(Color::indexed(0))
                .background(Color::indexed(244)),
            selected_button: Style::new()
                .foreground(Color::indexed(0))
                .background(Color::indexed(7)),
            hotkey: Color::indexed(196),
        }
    }
}

use crossterm::style::{Attribute, ContentStyle};

use super::{Border, Color, TextStyle};
use crate::ansi::visible_width;

/// Visual style for a run of text.
///
/// `render` emits ANSI SGR sequences through crossterm, one styled span per
/// line, so the output can be split on `\n` and composited line by line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub border_foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn border_foreground(mut self, color: Color) -> Self {
        self.border_foreground = Some(color);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.text_style.reverse = true;
        self
    }

    /// True when rendering through this style would emit no escape codes.
    pub fn is_plain(&self) -> bool {
        self.background.is_none() && self.foreground.is_none() && self.text_style.is_plain()
    }

    pub fn to_content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.foreground.map(|c| c.to_crossterm());
        style.background_color = self.background.map(|c| c.to_crossterm());
        if self.text_style.bold {
            style.attributes.set(Attribute::Bold);
        }
        if self.text_style.dim {
            style.attributes.set(Attribute::Dim);
        }
        if self.text_style.italic {
            style.attributes.set(Attribute::Italic);
        }
        if self.text_style.underline {
            style.attributes.set(Attribute::Underlined);
        }
        if self.text_style.reverse {
            style.attributes.set(Attribute::Reverse);
        }
        style
    }

    /// Apply colours and attributes to `text`. The border is ignored here;
    /// see [`Style::render_block`].
    pub fn render(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }
        let content_style = self.to_content_style();
        text.split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    content_style.apply(line).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render `text` as a rectangular block: every line padded to the widest
    /// line, styled, and framed by the border if one is set.
    ///
    /// Lines may already carry escape sequences; width is measured on their
    /// visible content.
    pub fn render_block(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0);

        let body: Vec<String> = lines
            .iter()
            .map(|line| {
                let pad = inner_width - visible_width(line);
                let padded = format!("{line}{}", " ".repeat(pad));
                self.render(&padded)
            })
            .collect();

        let Some(glyphs) = self.border.glyphs() else {
            return body.join("\n");
        };

        let edge_style = Style {
            foreground: self.border_foreground,
            background: self.background,
            ..Style::default()
        };
        let horizontal: String = std::iter::repeat(glyphs.horizontal)
            .take(inner_width)
            .collect();
        let vertical = edge_style.render(&glyphs.vertical.to_string());

        let mut out = Vec::with_capacity(body.len() + 2);
        out.push(edge_style.render(&format!(
            "{}{horizontal}{}",
            glyphs.top_left, glyphs.top_right
        )));
        for line in body {
            out.push(format!("{vertical}{line}{vertical}"));
        }
        out.push(edge_style.render(&format!(
            "{}{horizontal}{}",
            glyphs.bottom_left, glyphs.bottom_right
        )));
        out.join("\n")
    }

    /// A horizontal rule `width` cells wide drawn with this style's border
    /// glyph (or `─` when no border is set).
    pub fn render_rule(&self, width: usize) -> String {
        let glyph = self
            .border
            .glyphs()
            .map(|g| g.horizontal)
            .unwrap_or('─');
        let rule: String = std::iter::repeat(glyph).take(width).collect();
        let style = Style {
            foreground: self.border_foreground.or(self.foreground),
            ..*self
        };
        style.render(&rule)
    }
}

use termtext::ansi::visible_width;
use termtext::text::{align_offset, wrap_words};
use termtext::{place_overlay, Event, Key, Modifiers, Style, TextAlign};

use crate::button::{Button, ButtonSet};
use crate::style::Styles;

/// Box width, border included, when none is requested.
pub const DEFAULT_WIDTH: usize = 40;

/// Where and how to draw a message box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Options {
    pub x: usize,
    pub y: usize,
    /// Requested total width. Never narrower than the button bar needs.
    pub width: Option<usize>,
    pub styles: Styles,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-left corner, in cells from the left and lines from the top.
    pub fn position(mut self, x: usize, y: usize) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }
}

/// The dialog currently on screen.
#[derive(Debug, Clone)]
struct ActiveBox {
    lines: Vec<String>,
    buttons: Vec<Button>,
    selected: usize,
    x: usize,
    y: usize,
    width: usize,
    styles: Styles,
}

impl ActiveBox {
    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.buttons.len();
    }

    fn select_previous(&mut self) {
        self.selected = (self.selected + self.buttons.len() - 1) % self.buttons.len();
    }

    /// The button that best means "do nothing".
    fn dismiss_button(&self) -> Button {
        if self.buttons.contains(&Button::Cancel) {
            Button::Cancel
        } else if self.buttons.contains(&Button::No) {
            Button::No
        } else {
            Button::Cancel
        }
    }

    fn render(&self) -> String {
        let inner = self.width.saturating_sub(2);
        let mut body: Vec<String> = self.lines.iter().map(|l| center(l, inner)).collect();
        body.push(" ".repeat(inner));
        body.push(center(
            &render_buttons(&self.buttons, self.selected, &self.styles),
            inner,
        ));
        self.styles.border.render_block(&body.join("\n"))
    }
}

fn center(line: &str, width: usize) -> String {
    let line_width = visible_width(line);
    if line_width >= width {
        return line.to_string();
    }
    let left = align_offset(line_width, width, TextAlign::Center);
    let right = width - line_width - left;
    format!("{}{line}{}", " ".repeat(left), " ".repeat(right))
}

fn render_button(button: Button, styles: &Styles, selected: bool) -> String {
    let style = if selected {
        styles.selected_button
    } else {
        styles.button
    };
    let hotkey_style = Style {
        foreground: Some(styles.hotkey),
        ..style
    }
    .underline();

    let (pre, hot, post) = button.label_parts();
    format!(
        "{}{}{}",
        style.render(&format!(" {pre}")),
        hotkey_style.render(hot),
        style.render(&format!("{post} "))
    )
}

fn render_buttons(buttons: &[Button], selected: usize, styles: &Styles) -> String {
    buttons
        .iter()
        .enumerate()
        .map(|(i, b)| render_button(*b, styles, i == selected))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A modal dialog. Inactive until [`MessageBox::open`] is called, and again
/// once a button has been chosen.
#[derive(Debug, Clone, Default)]
pub struct MessageBox {
    active: Option<ActiveBox>,
}

impl MessageBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` with `buttons`, replacing any box already open.
    ///
    /// The initial selection is the only button, or else Cancel, or else No,
    /// or else the first button.
    pub fn open(&mut self, message: &str, buttons: ButtonSet, options: Options) {
        let buttons = if buttons.is_empty() {
            log::warn!("message box opened without buttons, showing Ok");
            ButtonSet::ok()
        } else {
            buttons
        };
        let buttons: Vec<Button> = buttons.iter().collect();

        let selected = if buttons.len() == 1 {
            0
        } else {
            [Button::Cancel, Button::No]
                .iter()
                .find_map(|wanted| buttons.iter().position(|b| b == wanted))
                .unwrap_or(0)
        };

        let bar_width = visible_width(&render_buttons(&buttons, selected, &options.styles));
        let width = options.width.unwrap_or(DEFAULT_WIDTH).max(bar_width + 2);
        let lines = wrap_words(message.trim(), width - 2);

        log::debug!(
            "message box opened at ({}, {}) width {width} with {buttons:?}",
            options.x,
            options.y
        );
        self.active = Some(ActiveBox {
            lines,
            buttons,
            selected,
            x: options.x,
            y: options.y,
            width,
            styles: options.styles,
        });
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The highlighted button, while a box is open.
    pub fn selected(&self) -> Option<Button> {
        self.active.as_ref().map(|b| b.buttons[b.selected])
    }

    /// Total width of the open box, border included.
    pub fn width(&self) -> Option<usize> {
        self.active.as_ref().map(|b| b.width)
    }

    /// Handle one input event. Returns the chosen button when the event
    /// dismisses the box; everything else returns `None`.
    pub fn update(&mut self, event: &Event) -> Option<Button> {
        let active = self.active.as_mut()?;
        let Event::Key { key, modifiers } = event else {
            return None;
        };

        let chosen = match (*key, *modifiers) {
            (Key::Tab, Modifiers { shift: false, .. }) | (Key::Right, _) => {
                active.select_next();
                None
            }
            (Key::Tab, _) | (Key::BackTab, _) | (Key::Left, _) => {
                active.select_previous();
                None
            }
            (Key::Enter, _) | (Key::Char(' '), _) => Some(active.buttons[active.selected]),
            (Key::Escape, _) => Some(active.dismiss_button()),
            (Key::Char(c), Modifiers { ctrl: false, alt: false, .. }) => active
                .buttons
                .iter()
                .copied()
                .find(|b| b.matches_hotkey(c)),
            _ => None,
        };

        if let Some(button) = chosen {
            log::debug!("message box dismissed with {button:?}");
            self.active = None;
        }
        chosen
    }

    /// The open box on its own, or `None` when inactive.
    pub fn view(&self) -> Option<String> {
        self.active.as_ref().map(ActiveBox::render)
    }

    /// Draw the open box over `base`. Returns `base` unchanged when no box
    /// is open.
    pub fn render(&self, base: &str) -> String {
        match &self.active {
            Some(active) => place_overlay(active.x, active.y, &active.render(), base),
            None => base.to_string(),
        }
    }
}

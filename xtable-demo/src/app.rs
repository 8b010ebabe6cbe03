use std::io;

use messagebox::{Button, ButtonSet, MessageBox, Options};
use termtext::{Border, Color, Event, Key, KeyParseError, Modifiers, Style};
use xtable::{SortHint, SortOrder, Styles, Table, TableConfig};

use crate::keys::{self, DemoKeys};
use crate::terminal::TerminalGuard;
use crate::users::{self, User};

/// Lines around the table: its frame, and the status line with its gap.
const CHROME_HEIGHT: usize = 4;

pub struct App {
    table: Table,
    message_box: MessageBox,
    keys: DemoKeys,
    frame: Style,
    /// Text typed after `/`, while the find prompt is open.
    query: Option<String>,
    last_query: String,
    status: String,
    quit: bool,
}

impl App {
    pub fn new() -> Result<Self, KeyParseError> {
        let styles = Styles {
            header: Style::new(),
            cell: Style::new(),
            selected: Style::new()
                .foreground(Color::indexed(229))
                .background(Color::indexed(57)),
            header_rule: Some(Style::new().foreground(Color::indexed(240))),
        };
        let config = TableConfig::new()
            .identified_records(&users::schema(), &users::users())
            .row_numbers(true)
            .focused(true)
            .styles(styles)
            .key_map(keys::table_key_map()?);

        Ok(Self {
            table: Table::new(config),
            message_box: MessageBox::new(),
            keys: DemoKeys::new()?,
            frame: Style::new()
                .border(Border::Single)
                .border_foreground(Color::indexed(240)),
            query: None,
            last_query: String::new(),
            status: String::new(),
            quit: false,
        })
    }

    pub fn run(&mut self, terminal: &mut TerminalGuard) -> io::Result<()> {
        while !self.quit {
            terminal.draw(&self.view())?;
            let raw = terminal.read()?;
            if let Some(event) = Event::from_crossterm(&raw) {
                self.handle(&event);
            }
        }
        Ok(())
    }

    /// Fit the table to a terminal `rows` lines tall.
    pub fn resize(&mut self, rows: u16) {
        let chrome = CHROME_HEIGHT + self.table.header_height();
        self.table.set_height(usize::from(rows).saturating_sub(chrome));
    }

    fn handle(&mut self, event: &Event) {
        if self.message_box.is_active() {
            if let Some(button) = self.message_box.update(event) {
                self.on_button(button);
            }
            return;
        }

        let (key, modifiers) = match event {
            Event::Resize { height, .. } => {
                self.resize(*height);
                return;
            }
            Event::Key { key, modifiers } => (*key, *modifiers),
        };

        self.status.clear();
        if self.query.is_some() {
            self.on_query_key(key, modifiers);
        } else if self.keys.quit.matches(key, modifiers) {
            self.quit = true;
        } else if self.keys.delete.matches(key, modifiers) {
            self.confirm_delete();
        } else if self.keys.find.matches(key, modifiers) {
            self.query = Some(String::new());
        } else if self.keys.find_next.matches(key, modifiers) {
            self.find(false);
        } else if let Some(column) = sort_column(key, modifiers) {
            self.sort(column, modifiers);
        } else if !self.table.update(event).is_consumed() {
            log::trace!("unhandled key {key}");
        }
    }

    fn on_query_key(&mut self, key: Key, modifiers: Modifiers) {
        let Some(query) = self.query.as_mut() else {
            return;
        };
        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => query.push(c),
            Key::Backspace => {
                query.pop();
            }
            Key::Enter => {
                self.last_query = std::mem::take(query);
                self.query = None;
                self.find(true);
            }
            Key::Escape => self.query = None,
            _ => {}
        }
    }

    fn find(&mut self, from_top: bool) {
        if self.last_query.is_empty() {
            return;
        }
        let found = if from_top {
            self.table.find(&self.last_query, None)
        } else {
            self.table.find_next(&self.last_query)
        };
        self.status = if found {
            String::new()
        } else {
            format!("no more rows matching \"{}\"", self.last_query)
        };
    }

    fn sort(&mut self, column: usize, modifiers: Modifiers) {
        let order = if modifiers.alt {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        if !self.table.sort_by(column, order, SortHint::Unspecified) {
            self.status = format!("no column {}", column + 1);
        }
    }

    fn confirm_delete(&mut self) {
        if self.table.selected_row().is_none() {
            return;
        }
        // the frame's top border sits above the header
        let y = 1 + self.table.header_height() + self.table.selected_row_y_offset() + 1;
        let options = Options::new()
            .position(3, y)
            .styles(messagebox::Styles {
                border: Style::new()
                    .border(Border::Single)
                    .border_foreground(Color::indexed(12)),
                ..Default::default()
            });
        self.message_box
            .open("Delete selected?", ButtonSet::yes_no_all(), options);
    }

    fn on_button(&mut self, button: Button) {
        match button {
            Button::Yes => {
                let name = self
                    .table
                    .selected_row()
                    .and_then(|row| row.metadata::<User>())
                    .map(|user| user.email.clone());
                if self.table.remove_selected() {
                    log::info!("deleted {}", name.as_deref().unwrap_or("row"));
                    self.status = format!("{} rows left", self.table.len());
                }
                if self.table.is_empty() {
                    self.quit = true;
                }
            }
            Button::All => {
                log::info!("delete all chosen, quitting");
                self.quit = true;
            }
            _ => {}
        }
    }

    fn status_line(&self) -> String {
        if let Some(query) = &self.query {
            return format!("/{query}");
        }
        if !self.status.is_empty() {
            return Style::new()
                .foreground(Color::indexed(203))
                .render(&self.status);
        }
        let key_style = Style::new().foreground(Color::indexed(250));
        let desc_style = Style::new().foreground(Color::indexed(241));
        keys::HELP
            .iter()
            .map(|(key, desc)| {
                format!("{} {}", key_style.render(key), desc_style.render(desc))
            })
            .collect::<Vec<_>>()
            .join(desc_style.render(" • ").as_str())
    }

    fn view(&self) -> String {
        let screen = format!(
            "{}\n\n{}",
            self.frame.render_block(&self.table.view()),
            self.status_line()
        );
        self.message_box.render(&screen)
    }
}

/// Digits sort; alt+digit sorts descending. Ctrl combos belong to the table.
fn sort_column(key: Key, modifiers: Modifiers) -> Option<usize> {
    match key {
        Key::Char(c) if !modifiers.ctrl => keys::digit_column(c),
        _ => None,
    }
}

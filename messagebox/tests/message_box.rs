use messagebox::{Button, ButtonSet, MessageBox, Options, Styles, DEFAULT_WIDTH};
use termtext::ansi::{strip_ansi, visible_width};
use termtext::{Event, Key, Modifiers};

fn open(buttons: ButtonSet) -> MessageBox {
    let mut mb = MessageBox::new();
    mb.open("Delete selected?", buttons, Options::new());
    mb
}

fn press(mb: &mut MessageBox, key: Key) -> Option<Button> {
    mb.update(&Event::key(key))
}

// ============================================================================
// Opening
// ============================================================================

#[test]
fn test_initial_selection() {
    assert_eq!(open(ButtonSet::ok()).selected(), Some(Button::Ok));
    assert_eq!(open(ButtonSet::ok_cancel()).selected(), Some(Button::Cancel));
    assert_eq!(open(ButtonSet::yes_no()).selected(), Some(Button::No));
    assert_eq!(open(ButtonSet::yes_no_all()).selected(), Some(Button::No));

    let custom = ButtonSet::new().with(Button::Yes).with(Button::All);
    assert_eq!(open(custom).selected(), Some(Button::Yes));
}

#[test]
fn test_empty_set_falls_back_to_ok() {
    let mut mb = open(ButtonSet::new());
    assert_eq!(mb.selected(), Some(Button::Ok));
    assert_eq!(press(&mut mb, Key::Enter), Some(Button::Ok));
}

#[test]
fn test_open_replaces_previous_box() {
    let mut mb = open(ButtonSet::ok_cancel());
    mb.open("Again?", ButtonSet::yes_no(), Options::new());
    assert!(mb.is_active());
    assert_eq!(mb.selected(), Some(Button::No));
}

#[test]
fn test_inactive_ignores_input() {
    let mut mb = MessageBox::new();
    assert!(!mb.is_active());
    assert_eq!(press(&mut mb, Key::Enter), None);
    assert_eq!(press(&mut mb, Key::Escape), None);
    assert_eq!(mb.selected(), None);
}

// ============================================================================
// Input
// ============================================================================

#[test]
fn test_enter_returns_selection_and_closes() {
    let mut mb = open(ButtonSet::ok());
    assert_eq!(press(&mut mb, Key::Enter), Some(Button::Ok));
    assert!(!mb.is_active());
    assert_eq!(press(&mut mb, Key::Enter), None);
}

#[test]
fn test_space_confirms() {
    let mut mb = open(ButtonSet::yes_no());
    assert_eq!(press(&mut mb, Key::Char(' ')), Some(Button::No));
}

#[test]
fn test_navigation_wraps() {
    let mut mb = open(ButtonSet::yes_no_all());
    assert_eq!(press(&mut mb, Key::Right), None);
    assert_eq!(mb.selected(), Some(Button::All));
    assert_eq!(press(&mut mb, Key::Tab), None);
    assert_eq!(mb.selected(), Some(Button::Yes));
    assert_eq!(press(&mut mb, Key::Left), None);
    assert_eq!(mb.selected(), Some(Button::All));
    assert_eq!(press(&mut mb, Key::BackTab), None);
    assert_eq!(mb.selected(), Some(Button::No));

    let shift_tab = Event::key_with(Key::Tab, Modifiers::shift());
    assert_eq!(mb.update(&shift_tab), None);
    assert_eq!(mb.selected(), Some(Button::Yes));

    assert_eq!(press(&mut mb, Key::Enter), Some(Button::Yes));
}

#[test]
fn test_escape_picks_no_action_button() {
    assert_eq!(
        press(&mut open(ButtonSet::ok_cancel()), Key::Escape),
        Some(Button::Cancel)
    );
    assert_eq!(
        press(&mut open(ButtonSet::yes_no()), Key::Escape),
        Some(Button::No)
    );
    assert_eq!(
        press(&mut open(ButtonSet::ok()), Key::Escape),
        Some(Button::Cancel)
    );
}

#[test]
fn test_hotkeys_either_case() {
    assert_eq!(
        press(&mut open(ButtonSet::yes_no_all()), Key::Char('a')),
        Some(Button::All)
    );
    assert_eq!(
        press(&mut open(ButtonSet::yes_no_all()), Key::Char('Y')),
        Some(Button::Yes)
    );

    let mut mb = open(ButtonSet::yes_no());
    assert_eq!(press(&mut mb, Key::Char('o')), None);
    assert_eq!(press(&mut mb, Key::Char('c')), None);
    assert_eq!(
        mb.update(&Event::key_with(Key::Char('y'), Modifiers::ctrl())),
        None
    );
    assert!(mb.is_active());
}

#[test]
fn test_other_events_ignored() {
    let mut mb = open(ButtonSet::ok());
    assert_eq!(press(&mut mb, Key::Down), None);
    assert_eq!(
        mb.update(&Event::Resize {
            width: 80,
            height: 24
        }),
        None
    );
    assert!(mb.is_active());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_width() {
    assert_eq!(open(ButtonSet::ok()).width(), Some(DEFAULT_WIDTH));

    let mut mb = MessageBox::new();
    mb.open("x", ButtonSet::yes_no_all(), Options::new().width(10));
    // " Yes " + " No " + " All " joined by spaces, plus the border
    assert_eq!(mb.width(), Some(18));

    mb.open("x", ButtonSet::ok(), Options::new().width(60));
    assert_eq!(mb.width(), Some(60));
}

#[test]
fn test_view_layout() {
    let mut mb = MessageBox::new();
    mb.open("  Hi \n", ButtonSet::ok(), Options::new().width(10));

    let view = mb.view().unwrap();
    let expected = [
        "┌────────┐",
        "│   Hi   │",
        "│        │",
        "│   Ok   │",
        "└────────┘",
    ]
    .join("\n");
    assert_eq!(strip_ansi(&view), expected);
}

#[test]
fn test_view_wraps_message() {
    let mut mb = MessageBox::new();
    mb.open(
        "The quick brown fox jumps over the lazy dog",
        ButtonSet::yes_no(),
        Options::new().width(20),
    );
    let view = mb.view().unwrap();
    let lines: Vec<&str> = view.split('\n').collect();

    // border, 3 message lines, blank, buttons, border
    assert_eq!(lines.len(), 7);
    for line in &lines {
        assert_eq!(visible_width(line), 20);
    }
    assert_eq!(strip_ansi(lines[1]), "│ The quick brown  │");
}

#[test]
fn test_plain_styles_render_without_escapes() {
    let plain = Styles {
        border: termtext::Style::new().border(termtext::Border::Rounded),
        button: termtext::Style::new(),
        selected_button: termtext::Style::new(),
        hotkey: termtext::Color::indexed(1),
    };
    let mut mb = MessageBox::new();
    mb.open("ok?", ButtonSet::ok(), Options::new().width(8).styles(plain));
    let view = mb.view().unwrap();
    let lines: Vec<&str> = view.split('\n').collect();
    assert_eq!(lines[0], "╭──────╮");
    assert_eq!(lines[1], "│ ok?  │");
    // only the hotkey carries styling
    assert!(lines.iter().enumerate().all(|(i, l)| (i == 3) == l.contains('\x1b')));
    assert_eq!(strip_ansi(lines[3]), "│  Ok  │");
}

#[test]
fn test_render_inactive_returns_base() {
    let mb = MessageBox::new();
    let base = "one\ntwo";
    assert_eq!(mb.render(base), base);
}

#[test]
fn test_render_overlays_base() {
    let base = vec![".".repeat(50); 10].join("\n");
    let mut mb = MessageBox::new();
    mb.open("Hi", ButtonSet::ok(), Options::new().position(3, 2).width(10));

    let out = mb.render(&base);
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], ".".repeat(50));
    assert_eq!(lines[1], ".".repeat(50));
    assert_eq!(lines[7], ".".repeat(50));
    assert_eq!(
        strip_ansi(lines[2]),
        format!("...┌────────┐{}", ".".repeat(37))
    );
    assert_eq!(strip_ansi(lines[3]), format!("...│   Hi   │{}", ".".repeat(37)));
    for line in &lines {
        assert_eq!(visible_width(line), 50);
    }
}

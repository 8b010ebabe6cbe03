use termtext::ansi::strip_ansi;
use termtext::{Binding, Event, EventResult, Key, Modifiers};
use xtable::{
    Column, Field, KeyMap, Row, RowIdentity, Schema, SortHint, SortKind, SortOrder, Styles,
    Table, TableConfig,
};

// ============================================================================
// Fixtures
// ============================================================================

fn fnv1a(bytes: impl IntoIterator<Item = u8>) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

#[derive(Debug, Clone, PartialEq)]
struct RowData {
    name: String,
    packet_size: i64,
    hash: u64,
}

impl RowData {
    fn new(name: &str, packet_size: i64) -> Self {
        let bytes = name.bytes().chain(packet_size.to_le_bytes());
        Self {
            name: name.to_string(),
            packet_size,
            hash: fnv1a(bytes),
        }
    }
}

impl RowIdentity for RowData {
    fn identity_hash(&self) -> u64 {
        self.hash
    }
}

fn biscuit_data() -> Vec<RowData> {
    vec![
        RowData::new("Chocolate Digestives", 12),
        RowData::new("Tim Tams", 8),
        RowData::new("Hobnobs", 10),
        RowData::new("Peanut Butter Cookie", 8),
    ]
}

fn schema() -> Schema<RowData> {
    Schema::new()
        .field(Field::new("Name", |r: &RowData| r.name.clone()))
        .field(Field::new("PacketSize", |r: &RowData| {
            r.packet_size.to_string()
        }))
}

fn identified_table() -> Table {
    Table::new(TableConfig::new().identified_records(&schema(), &biscuit_data()))
}

fn biscuits() -> Table {
    Table::new(
        TableConfig::new()
            .height(5)
            .columns(vec![
                Column::new("Name", 25),
                Column::new("Country of Origin", 16),
                Column::new("Dunk-able", 12),
            ])
            .rows(vec![
                Row::new(["Chocolate Digestives", "UK", "Yes"]),
                Row::new(["Tim Tams", "Australia", "No"]),
                Row::new(["Hobnobs", "UK", "Yes"]),
                Row::new(["Peanut Butter Cookie", "USA", "Yes"]),
            ]),
    )
}

fn numbered(n: usize, height: usize) -> Table {
    Table::new(
        TableConfig::new()
            .columns(vec![Column::new("n", 5)])
            .rows((0..n).map(|i| Row::new([i.to_string()])).collect())
            .height(height)
            .focused(true),
    )
}

fn first_cells(table: &Table) -> Vec<&str> {
    table.rows().iter().map(|r| r.cell(0)).collect()
}

fn assert_viewport(table: &Table) {
    if table.is_empty() {
        assert_eq!(table.cursor(), 0);
        assert_eq!(table.viewport_top(), 0);
        return;
    }
    let top = table.viewport_top();
    assert!(table.cursor() < table.len());
    assert!(top <= table.cursor());
    assert!(table.cursor() < top + table.height());
    assert!(top <= table.len().saturating_sub(table.height()));
    assert_eq!(table.selected_row_y_offset(), table.cursor() - top);
}

// ============================================================================
// Delimited text
// ============================================================================

#[test]
fn test_from_delimited_text() {
    let mut table = Table::new(
        TableConfig::new().columns(vec![Column::auto("Foo"), Column::auto("Bar")]),
    );
    table.from_delimited_text("foo1,bar1\nfoo2,bar2\nfoo3,bar3", ",");

    assert_eq!(
        table.rows(),
        &[
            Row::new(["foo1", "bar1"]),
            Row::new(["foo2", "bar2"]),
            Row::new(["foo3", "bar3"]),
        ]
    );
}

#[test]
fn test_from_delimited_text_tab_separator() {
    let mut table = Table::default();
    table.from_delimited_text("foo1.\tbar1\nfoo,bar,baz\tbar,2", "\t");

    assert_eq!(
        table.rows(),
        &[
            Row::new(["foo1.", "bar1"]),
            Row::new(["foo,bar,baz", "bar,2"]),
        ]
    );
}

#[test]
fn test_from_delimited_text_crlf_and_reset() {
    let mut table = numbered(30, 5);
    table.goto_bottom();
    table.from_delimited_text("a;b\r\nc;d\r\n", ";");

    assert_eq!(table.rows(), &[Row::new(["a", "b"]), Row::new(["c", "d"])]);
    assert_eq!(table.cursor(), 0);
    assert_eq!(table.viewport_top(), 0);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_by_scenarios() {
    let mut table = Table::new(
        TableConfig::new()
            .height(5)
            .columns(vec![
                Column::new("Strings", 10),
                Column::new("Ints", 10),
                Column::new("Floats", 10),
            ])
            .rows(vec![
                Row::new(["abcdEfgh", "42", "0.72"]),
                Row::new(["qwerTYui", "123", "4.35"]),
                Row::new(["zxcvBNmj", "-4", "34.3"]),
                Row::new(["plmnPOiu", "4543534", "-23456.3"]),
            ]),
    );

    use SortHint::{Numeric, String as Text};
    use SortOrder::{Ascending, Descending};
    let cases = [
        (0, Ascending, Text, ["abcdEfgh", "plmnPOiu", "qwerTYui", "zxcvBNmj"]),
        (0, Descending, Text, ["zxcvBNmj", "qwerTYui", "plmnPOiu", "abcdEfgh"]),
        (1, Ascending, Numeric, ["zxcvBNmj", "abcdEfgh", "qwerTYui", "plmnPOiu"]),
        (1, Descending, Numeric, ["plmnPOiu", "qwerTYui", "abcdEfgh", "zxcvBNmj"]),
        (2, Ascending, Numeric, ["plmnPOiu", "abcdEfgh", "qwerTYui", "zxcvBNmj"]),
        (2, Descending, Numeric, ["zxcvBNmj", "qwerTYui", "abcdEfgh", "plmnPOiu"]),
    ];

    for (column, order, hint, expected) in cases {
        assert!(table.sort_by(column, order, hint));
        assert_eq!(first_cells(&table), expected, "column {column} {order:?}");
        let state = table.sort_state().unwrap();
        assert_eq!((state.column, state.order), (column, order));
    }
}

#[test]
fn test_sort_infers_numeric() {
    let mut table = Table::new(
        TableConfig::new()
            .columns(vec![Column::new("n", 5)])
            .rows(vec![Row::new(["10"]), Row::new(["9"]), Row::new(["100"])]),
    );
    assert!(table.sort_by(0, SortOrder::Ascending, SortHint::Unspecified));
    assert_eq!(first_cells(&table), vec!["9", "10", "100"]);
    assert_eq!(table.sort_state().map(|s| s.kind), Some(SortKind::Numeric));
}

#[test]
fn test_sort_is_stable_both_directions() {
    let rows = vec![
        Row::new(["b", "1"]),
        Row::new(["a", "2"]),
        Row::new(["b", "3"]),
        Row::new(["a", "4"]),
        Row::new(["b", "5"]),
    ];
    let mut table = Table::new(
        TableConfig::new()
            .columns(vec![Column::new("key", 3), Column::new("seq", 3)])
            .rows(rows),
    );

    let seq = |t: &Table| -> Vec<String> {
        t.rows().iter().map(|r| r.cell(1).to_string()).collect()
    };

    table.sort_by(0, SortOrder::Ascending, SortHint::String);
    assert_eq!(seq(&table), vec!["2", "4", "1", "3", "5"]);

    table.sort_by(0, SortOrder::Descending, SortHint::String);
    assert_eq!(seq(&table), vec!["1", "3", "5", "2", "4"]);
}

#[test]
fn test_sort_out_of_range_column() {
    let mut table = biscuits();
    let before = table.rows().to_vec();
    assert!(!table.sort_by(3, SortOrder::Ascending, SortHint::Unspecified));
    assert_eq!(table.rows(), &before[..]);
    assert_eq!(table.sort_state(), None);
}

#[test]
fn test_sort_keeps_cursor_position_and_rebuilds_index() {
    let mut table = identified_table();
    table.set_cursor(1);
    let hobnobs = RowData::new("Hobnobs", 10).hash;
    assert_eq!(table.get_row_by_hash(hobnobs), Some(2));

    table.sort_by(0, SortOrder::Ascending, SortHint::String);
    assert_eq!(table.cursor(), 1);
    assert_eq!(table.selected_row().map(|r| r.cell(0)), Some("Hobnobs"));
    assert_eq!(table.get_row_by_hash(hobnobs), Some(1));
}

// ============================================================================
// Find
// ============================================================================

#[test]
fn test_find_then_find_again() {
    let mut table = biscuits();

    assert!(table.find("Yes", Some(0)));
    assert_eq!(table.cursor(), 2);

    let last = table.cursor();
    assert!(table.find("Yes", Some(last)));
    assert_eq!(table.cursor(), 3);
}

#[test]
fn test_find_from_start_includes_first_row() {
    let mut table = biscuits();
    table.set_cursor(3);
    assert!(table.find("Yes", None));
    assert_eq!(table.cursor(), 0);
}

#[test]
fn test_find_does_not_wrap() {
    let mut table = biscuits();
    table.set_cursor(3);
    assert!(!table.find_next("Yes"));
    assert_eq!(table.cursor(), 3);
    assert!(!table.find("Digestives", Some(0)));
    assert_eq!(table.cursor(), 3);
}

#[test]
fn test_find_is_case_sensitive() {
    let mut table = biscuits();
    assert!(!table.find("yes", None));
    assert!(table.find("Tams", None));
    assert_eq!(table.cursor(), 1);
}

// ============================================================================
// Identity and removal
// ============================================================================

#[test]
fn test_get_row_by_hash() {
    let table = Table::new(
        TableConfig::new()
            .height(5)
            .columns(vec![Column::new("Name", 25), Column::new("PacketSize", 4)])
            .rows(
                biscuit_data()
                    .into_iter()
                    .map(|r| Row::with_metadata([r.name.clone(), r.packet_size.to_string()], r))
                    .collect(),
            ),
    );

    assert_eq!(table.get_row_by_hash(0x40099b03ee546818), Some(0));
    assert_eq!(table.get_row_by_hash(0x73c93c25d05d3b20), Some(1));
    assert_eq!(table.get_row_by_hash(0x328fbeb31d4437e0), Some(2));
    assert_eq!(table.get_row_by_hash(0xca7bd7aa9e6497d4), Some(3));
    assert_eq!(table.get_row_by_hash(0), None);
}

#[test]
fn test_rows_without_metadata_are_not_indexed() {
    let table = biscuits();
    assert_eq!(table.get_row_by_hash(0x40099b03ee546818), None);
}

#[test]
fn test_import_through_schema() {
    let table = identified_table();
    let columns = table.columns();
    assert_eq!(columns.len(), 2);
    assert_eq!(table.len(), 4);
    assert_eq!(columns[0].title, "Name");
    assert_eq!(columns[1].title, "PacketSize");

    for (row, record) in table.rows().iter().zip(biscuit_data()) {
        assert_eq!(row.cell(0), record.name);
        assert_eq!(row.cell(1), record.packet_size.to_string());
        assert_eq!(row.metadata::<RowData>(), Some(&record));
    }
}

#[test]
fn test_import_with_title_override() {
    let tagged = Schema::new()
        .field(Field::new("Name", |r: &RowData| r.name.clone()).title("Biscuit"))
        .field(Field::new("PacketSize", |r: &RowData| {
            r.packet_size.to_string()
        }));
    let table = Table::new(TableConfig::new().records(&tagged, &biscuit_data()));

    assert_eq!(table.columns()[0].title, "Biscuit");
    assert_eq!(table.columns()[1].title, "PacketSize");
    assert_eq!(table.rows()[2].cell(0), "Hobnobs");
    assert!(!table.rows()[2].has_metadata());
}

#[test]
fn test_remove_by_index() {
    let mut table = identified_table();

    assert!(!table.remove_by_index(10));
    assert_eq!(table.len(), 4);

    assert!(table.remove_by_index(0));
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[0].cell(0), "Tim Tams");
    assert_eq!(table.get_row_by_hash(0x73c93c25d05d3b20), Some(0));
    assert_eq!(table.get_row_by_hash(0x40099b03ee546818), None);
}

#[test]
fn test_remove_above_cursor_keeps_selection() {
    let mut table = identified_table();
    table.set_cursor(2);
    assert!(table.remove_by_index(0));
    assert_eq!(table.cursor(), 1);
    assert_eq!(table.selected_row().map(|r| r.cell(0)), Some("Hobnobs"));
}

#[test]
fn test_remove_selected_row() {
    let mut table = identified_table();
    table.set_cursor(3);
    assert!(table.remove_selected());
    assert_eq!(table.len(), 3);
    assert_eq!(table.cursor(), 2);
}

#[test]
fn test_remove_selected_until_empty() {
    let mut table = identified_table();
    assert!(table.remove_selected());
    assert!(table.remove_selected());
    assert!(table.remove_selected());
    assert!(!table.remove_selected());
    assert!(table.is_empty());
    assert!(!table.remove_selected());
    assert_viewport(&table);
}

#[test]
fn test_remove_by_hash() {
    let mut table = identified_table();
    table.set_cursor(3);
    assert!(table.remove_by_hash(0x40099b03ee546818));
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[0].cell(0), "Tim Tams");
    assert_eq!(table.cursor(), 2);

    assert!(!table.remove_by_hash(0x40099b03ee546818));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_remove_by_value() {
    let chocolate = RowData::new("Chocolate Digestives", 12);
    let mut table = identified_table();
    table.set_cursor(3);
    assert!(table.remove_by_value(&chocolate));
    assert_eq!(table.len(), 3);
    assert_eq!(table.rows()[0].cell(0), "Tim Tams");
    assert!(!table.remove_by_value(&RowData::new("Jaffa Cakes", 12)));
}

// ============================================================================
// Cursor and viewport
// ============================================================================

#[test]
fn test_paging() {
    let mut table = numbered(50, 10);

    table.page_down();
    assert_eq!(table.cursor(), 10);
    assert_eq!(table.viewport_top(), 1);

    table.half_page_down();
    assert_eq!(table.cursor(), 15);

    table.goto_bottom();
    assert_eq!(table.cursor(), 49);
    assert_eq!(table.viewport_top(), 40);

    table.half_page_up();
    assert_eq!(table.cursor(), 44);
    assert_eq!(table.viewport_top(), 40);

    table.page_up();
    assert_eq!(table.cursor(), 34);
    assert_eq!(table.viewport_top(), 34);

    table.goto_top();
    assert_eq!((table.cursor(), table.viewport_top()), (0, 0));
}

#[test]
fn test_viewport_invariant_holds() {
    let mut table = numbered(23, 4);
    let ops: [fn(&mut Table); 8] = [
        |t| t.move_down(1),
        |t| t.page_down(),
        |t| t.half_page_down(),
        |t| t.move_up(3),
        |t| t.goto_bottom(),
        |t| t.half_page_up(),
        |t| t.page_up(),
        |t| {
            t.remove_selected();
        },
    ];
    for round in 0..40 {
        ops[round % ops.len()](&mut table);
        assert_viewport(&table);
        ops[(round * 5 + 3) % ops.len()](&mut table);
        assert_viewport(&table);
    }
}

#[test]
fn test_set_cursor_clamps() {
    let mut table = numbered(5, 3);
    table.set_cursor(99);
    assert_eq!(table.cursor(), 4);
    assert_eq!(table.viewport_top(), 2);
    assert_eq!(table.selected_row_y_offset(), 2);
}

#[test]
fn test_update_uses_key_map() {
    let mut table = numbered(10, 3);

    assert_eq!(table.update(&Event::key(Key::Char('j'))), EventResult::Consumed);
    assert_eq!(table.update(&Event::key(Key::Down)), EventResult::Consumed);
    assert_eq!(table.cursor(), 2);

    assert_eq!(
        table.update(&Event::key_with(Key::Char('G'), Modifiers::shift())),
        EventResult::Consumed
    );
    assert_eq!(table.cursor(), 9);

    assert_eq!(
        table.update(&Event::key_with(Key::Char('u'), Modifiers::ctrl())),
        EventResult::Consumed
    );
    assert_eq!(table.cursor(), 8);

    assert_eq!(table.update(&Event::key(Key::Char('x'))), EventResult::Ignored);
    assert_eq!(
        table.update(&Event::Resize {
            width: 80,
            height: 24
        }),
        EventResult::Ignored
    );
}

#[test]
fn test_update_ignored_when_blurred() {
    let mut table = numbered(10, 3);
    table.blur();
    assert!(!table.is_focused());
    assert_eq!(table.update(&Event::key(Key::Down)), EventResult::Ignored);
    assert_eq!(table.cursor(), 0);

    table.focus();
    assert_eq!(table.update(&Event::key(Key::Down)), EventResult::Consumed);
    assert_eq!(table.cursor(), 1);
}

#[test]
fn test_custom_key_map() {
    let mut table = numbered(10, 3);
    let key_map = KeyMap {
        line_down: Binding::parse(&["ctrl+n"]).unwrap(),
        ..KeyMap::default()
    };
    table.set_key_map(key_map);

    assert_eq!(table.update(&Event::key(Key::Down)), EventResult::Ignored);
    assert_eq!(
        table.update(&Event::key_with(Key::Char('n'), Modifiers::ctrl())),
        EventResult::Consumed
    );
    assert_eq!(table.cursor(), 1);
}

// ============================================================================
// View
// ============================================================================

#[test]
fn test_view_plain() {
    let mut table = biscuits();
    table.set_styles(Styles::plain());

    let expected = [
        "Name                     Country of Orig…Dunk-able   ",
        "Chocolate Digestives     UK              Yes         ",
        "Tim Tams                 Australia       No          ",
        "Hobnobs                  UK              Yes         ",
        "Peanut Butter Cookie     USA             Yes         ",
    ]
    .join("\n");
    assert_eq!(table.view(), expected);
}

#[test]
fn test_view_row_numbers_and_rule() {
    let mut table = biscuits();
    table.set_height(2);
    assert!(!table.has_row_numbers());
    table.set_row_numbers(true);
    assert!(table.has_row_numbers());
    table.set_styles(Styles {
        header_rule: Some(termtext::Style::new()),
        ..Styles::plain()
    });
    table.set_cursor(2);

    let expected = [
        "# Name                     Country of Orig…Dunk-able   ",
        "───────────────────────────────────────────────────────",
        "2 Tim Tams                 Australia       No          ",
        "3 Hobnobs                  UK              Yes         ",
    ]
    .join("\n");
    assert_eq!(table.view(), expected);
    assert_eq!(table.header_height(), 2);
}

#[test]
fn test_view_without_header() {
    let table = Table::new(
        TableConfig::new()
            .columns(vec![Column::new("n", 2)])
            .rows(vec![Row::new(["a"]), Row::new(["b"])])
            .show_header(false)
            .styles(Styles::plain()),
    );
    assert_eq!(table.view(), "a \nb ");
}

#[test]
fn test_view_styles_selected_line() {
    let table = biscuits();
    let view = table.view();
    let lines: Vec<&str> = view.split('\n').collect();

    assert_eq!(lines.len(), 5);
    assert_ne!(lines[1], strip_ansi(lines[1]));
    assert_eq!(lines[2], strip_ansi(lines[2]));
    assert!(strip_ansi(lines[1]).starts_with("Chocolate Digestives"));
}

#[test]
fn test_view_is_idempotent() {
    let mut table = numbered(40, 7);
    table.move_down(12);
    assert_eq!(table.view(), table.view());
    assert_eq!(table.view().split('\n').count(), 8);
}

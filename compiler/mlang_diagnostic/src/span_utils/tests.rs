use super::*;

use pretty_assertions::assert_eq;

#[test]
fn single_line() {
    let source = b"program { }";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 8), (1, 9));
    assert_eq!(table.line_start_offset(2), None);
}

#[test]
fn offsets_at_line_starts() {
    let source = b"a\nbb\nccc";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(2), 2);
    assert_eq!(table.line_from_offset(5), 3);
    assert_eq!(table.offset_to_line_col(source, 7), (3, 3));
}

#[test]
fn newline_byte_belongs_to_its_line() {
    let source = b"ab\ncd";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(2), 1);
}

#[test]
fn offset_past_end_clamps() {
    let source = b"x\ny";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 100), (2, 2));
}

#[test]
fn line_start_offsets() {
    let table = LineOffsetTable::build(b"one\ntwo\n");
    assert_eq!(table.line_start_offset(0), None);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), Some(4));
    assert_eq!(table.line_start_offset(3), Some(8));
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn line_text_strips_terminators() {
    let source = b"first\r\nsecond\nthird";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1).as_deref(), Some("first"));
    assert_eq!(table.line_text(source, 2).as_deref(), Some("second"));
    assert_eq!(table.line_text(source, 3).as_deref(), Some("third"));
    assert_eq!(table.line_text(source, 4), None);
}

#[test]
fn multibyte_characters_are_one_column() {
    let source = "x = \"äö\"; y".as_bytes();
    let table = LineOffsetTable::build(source);
    // `y` sits at byte 12 but character 10.
    assert_eq!(table.offset_to_line_col(source, 12), (1, 11));
}

#[test]
fn invalid_bytes_are_one_column_each() {
    let source = b"x = \"\xff\xfe\"; y";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 10), (1, 11));
    assert_eq!(
        table.line_text(source, 1).as_deref(),
        Some("x = \"\u{fffd}\u{fffd}\"; y")
    );
}

use crate::SourceBuffer;

use pretty_assertions::assert_eq;

// === Reading ===

#[test]
fn read_yields_bytes_in_order() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.read(), Some(b'a'));
    assert_eq!(cursor.read(), Some(b'b'));
    assert_eq!(cursor.read(), None);
}

#[test]
fn read_past_end_is_sticky() {
    let buf = SourceBuffer::new("a");
    let mut cursor = buf.cursor();
    cursor.read();
    for _ in 0..5 {
        assert_eq!(cursor.read(), None);
        assert_eq!(cursor.pos(), 1);
    }
}

#[test]
fn empty_source_is_immediately_eof() {
    let buf = SourceBuffer::new("");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.pos(), 0);
}

// === Putback ===

#[test]
fn putback_rereads_last_byte() {
    let buf = SourceBuffer::new("xy");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.read(), Some(b'x'));
    cursor.putback();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.read(), Some(b'x'));
    assert_eq!(cursor.read(), Some(b'y'));
}

#[test]
fn only_one_putback_is_pending() {
    let buf = SourceBuffer::new("xy");
    let mut cursor = buf.cursor();
    cursor.read();
    cursor.read();
    cursor.putback();
    cursor.putback();
    assert_eq!(cursor.read(), Some(b'y'));
}

#[test]
fn putback_after_eof_keeps_eof() {
    let buf = SourceBuffer::new("z");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.read(), Some(b'z'));
    assert_eq!(cursor.read(), None);
    cursor.putback();
    assert_eq!(cursor.read(), None);
}

#[test]
fn putback_before_any_read_is_noop() {
    let buf = SourceBuffer::new("q");
    let mut cursor = buf.cursor();
    cursor.putback();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.read(), Some(b'q'));
}

// === Slicing ===

#[test]
fn slice_returns_range() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(6, 11), b"world");
}

#[test]
fn slice_clamps_out_of_range() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(1, 100), b"bc");
    assert_eq!(cursor.slice(50, 100), b"");
}

// === eat_until ===

#[test]
fn eat_until_stops_before_needle() {
    let buf = SourceBuffer::new("comment text@rest");
    let mut cursor = buf.cursor();
    let newlines = cursor.eat_until(b'@');
    assert_eq!(newlines, 0);
    assert_eq!(cursor.pos(), 12);
    assert_eq!(cursor.read(), Some(b'@'));
}

#[test]
fn eat_until_counts_newlines() {
    let buf = SourceBuffer::new("a\nb\n\nc@");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_until(b'@'), 3);
    assert_eq!(cursor.read(), Some(b'@'));
}

#[test]
fn eat_until_runs_to_eof_without_needle() {
    let buf = SourceBuffer::new("never\nclosed");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_until(b'@'), 1);
    assert_eq!(cursor.pos(), 12);
    assert_eq!(cursor.read(), None);
}

#[test]
fn eat_until_on_needle_does_not_move() {
    let buf = SourceBuffer::new("@x");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.eat_until(b'@'), 0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_until_clears_pending_putback() {
    let buf = SourceBuffer::new("ab@");
    let mut cursor = buf.cursor();
    cursor.read();
    cursor.eat_until(b'@');
    cursor.putback();
    assert_eq!(cursor.pos(), 2);
}

// === Property Tests ===

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptest_cursor {
    use proptest::prelude::*;

    use crate::SourceBuffer;

    proptest! {
        #[test]
        fn reading_everything_reproduces_source(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let buf = SourceBuffer::from_bytes(bytes.clone());
            let mut cursor = buf.cursor();
            let mut out = Vec::new();
            while let Some(b) = cursor.read() {
                out.push(b);
            }
            prop_assert_eq!(out, bytes);
        }

        #[test]
        fn putback_every_byte_reads_it_twice(src in "[a-z@\n]{0,64}") {
            let buf = SourceBuffer::new(&src);
            let mut cursor = buf.cursor();
            let mut out = Vec::new();
            while let Some(b) = cursor.read() {
                cursor.putback();
                let again = cursor.read();
                prop_assert_eq!(again, Some(b));
                out.push(b);
            }
            prop_assert_eq!(out, src.as_bytes().to_vec());
        }

        #[test]
        fn eat_until_newlines_match_scalar_count(src in "[a-z\n]{0,64}(@[a-z\n]{0,16})?") {
            let buf = SourceBuffer::new(&src);
            let mut cursor = buf.cursor();
            let newlines = cursor.eat_until(b'@');
            let prefix = src.split('@').next().unwrap_or("");
            let expected = prefix.bytes().filter(|&b| b == b'\n').count();
            prop_assert_eq!(newlines as usize, expected);
            prop_assert_eq!(cursor.pos() as usize, prefix.len());
        }
    }
}

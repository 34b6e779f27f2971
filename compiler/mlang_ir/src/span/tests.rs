use super::*;

#[test]
fn debug_and_display_agree() {
    assert_eq!(Span::new(3, 9).to_string(), "3..9");
    assert_eq!(format!("{:?}", Span::new(3, 9)), "3..9");
}

#[test]
fn dummy_is_default() {
    assert_eq!(Span::DUMMY, Span::default());
    assert_eq!(Span::DUMMY.to_string(), "0..0");
}

use super::*;

use pretty_assertions::assert_eq;

const CODES: [ErrorCode; 6] = [
    ErrorCode::E0001,
    ErrorCode::E0002,
    ErrorCode::E0003,
    ErrorCode::E0004,
    ErrorCode::E1001,
    ErrorCode::E1002,
];

#[test]
fn display_matches_as_str() {
    for code in CODES {
        assert_eq!(code.to_string(), code.as_str());
    }
}

#[test]
fn codes_are_unique_and_ordered() {
    let strs: Vec<&str> = CODES.iter().map(ErrorCode::as_str).collect();
    let mut sorted = strs.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(strs, sorted);
}

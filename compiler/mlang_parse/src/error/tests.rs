use super::*;

use mlang_ir::{IdentId, StrId};
use pretty_assertions::assert_eq;

fn unexpected(expected: Expected, found: TokenKind, context: Option<ErrorContext>) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found,
        span: Span::new(4, 5),
        line: 2,
        context,
    }
}

fn invalid(found: TokenKind, context: Option<ErrorContext>) -> ParseError {
    ParseError::InvalidConstant {
        found,
        span: Span::new(7, 8),
        line: 3,
        context,
    }
}

#[test]
fn expected_matches_ignore_payloads() {
    assert!(Expected::Identifier.matches(TokenKind::Ident(IdentId::new(0))));
    assert!(Expected::Identifier.matches(TokenKind::Ident(IdentId::new(41))));
    assert!(!Expected::Identifier.matches(TokenKind::Str(StrId::new(0))));
    assert!(Expected::Final.matches(TokenKind::Final));
    assert!(!Expected::Final.matches(TokenKind::Delimiter(Delimiter::End)));
    assert!(Expected::Keyword(Keyword::Else).matches(TokenKind::Keyword(Keyword::Else)));
    assert!(!Expected::Keyword(Keyword::Else).matches(TokenKind::Keyword(Keyword::If)));
    assert!(!Expected::Delimiter(Delimiter::Assign).matches(TokenKind::Delimiter(Delimiter::Equal)));
}

#[test]
fn expected_display() {
    assert_eq!(Expected::Delimiter(Delimiter::Semicolon).to_string(), "`;`");
    assert_eq!(Expected::Keyword(Keyword::Program).to_string(), "`program`");
    assert_eq!(Expected::Identifier.to_string(), "identifier");
    assert_eq!(Expected::Final.to_string(), "end of input");
}

#[test]
fn messages() {
    let err = unexpected(
        Expected::Delimiter(Delimiter::Semicolon),
        TokenKind::Ident(IdentId::new(0)),
        None,
    );
    assert_eq!(err.to_string(), "expected `;`, found identifier");

    let err = invalid(TokenKind::Delimiter(Delimiter::Semicolon), None);
    assert_eq!(err.to_string(), "expected a constant, found `;`");

    let err = invalid(TokenKind::Number(12), None);
    assert_eq!(err.to_string(), "expected a constant, found number `12`");
}

#[test]
fn lex_errors_pass_through() {
    let lex = LexError::unterminated_comment(Span::new(9, 10), 5);
    let err = ParseError::from(lex);
    assert_eq!(err.to_string(), "unterminated comment");
    assert_eq!(err.kind(), ErrorKind::UnterminatedComment);
    assert_eq!(err.code(), ErrorCode::E0003);
    assert_eq!(err.span(), Some(Span::new(9, 10)));
    assert_eq!(err.line(), Some(5));
    assert_eq!(err.context(), None);
}

#[test]
fn kinds_flatten_both_layers() {
    let span = Span::new(0, 1);
    let cases = [
        (
            ParseError::from(LexError::io("a.mlang", std::io::ErrorKind::NotFound.into())),
            ErrorKind::Io,
        ),
        (
            ParseError::from(LexError::unexpected_character(b'#', span, 1)),
            ErrorKind::UnexpectedCharacter,
        ),
        (
            ParseError::from(LexError::unterminated_string(span, 1)),
            ErrorKind::UnterminatedString,
        ),
        (
            unexpected(Expected::Final, TokenKind::Delimiter(Delimiter::End), None),
            ErrorKind::UnexpectedToken,
        ),
        (invalid(TokenKind::Final, None), ErrorKind::InvalidConstant),
    ];
    for (err, kind) in cases {
        assert_eq!(err.kind(), kind, "{err}");
    }
}

#[test]
fn syntax_error_codes_and_positions() {
    let err = unexpected(Expected::Identifier, TokenKind::Final, Some(ErrorContext::ReadStatement));
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(err.span(), Some(Span::new(4, 5)));
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.context(), Some(ErrorContext::ReadStatement));

    let err = invalid(TokenKind::Final, None);
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(err.line(), Some(3));
}

#[test]
fn diagnostic_labels_and_context_note() {
    let diag = unexpected(
        Expected::Delimiter(Delimiter::RightParen),
        TokenKind::Delimiter(Delimiter::Semicolon),
        Some(ErrorContext::WhileStatement),
    )
    .to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "expected `)`, found `;`");
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.labels[0].message, "expected `)`");
    assert_eq!(diag.notes, vec!["while parsing a while statement".to_owned()]);
    assert!(diag.suggestions.is_empty());
}

#[test]
fn diagnostic_without_context_has_no_note() {
    let diag = invalid(TokenKind::Delimiter(Delimiter::Plus), None).to_diagnostic();
    assert_eq!(diag.labels[0].message, "expected a constant");
    assert!(diag.notes.is_empty());
}

#[test]
fn hint_for_late_declaration() {
    let diag = invalid(
        TokenKind::Keyword(Keyword::Int),
        Some(ErrorContext::ExpressionStatement),
    )
    .to_diagnostic();
    assert_eq!(
        diag.suggestions,
        vec!["declarations must come before the first statement".to_owned()]
    );

    // A type keyword at declaration level is a different mistake.
    let diag = unexpected(
        Expected::Identifier,
        TokenKind::Keyword(Keyword::Int),
        Some(ErrorContext::Declaration),
    )
    .to_diagnostic();
    assert!(diag.suggestions.is_empty());
}

#[test]
fn hint_for_missing_else() {
    let diag = unexpected(
        Expected::Keyword(Keyword::Else),
        TokenKind::Delimiter(Delimiter::End),
        Some(ErrorContext::IfStatement),
    )
    .to_diagnostic();
    assert_eq!(diag.suggestions, vec!["every `if` needs an `else` branch".to_owned()]);
}

#[test]
fn hint_for_missing_comma_in_declaration() {
    let diag = unexpected(
        Expected::Delimiter(Delimiter::Semicolon),
        TokenKind::Ident(IdentId::new(1)),
        Some(ErrorContext::Declaration),
    )
    .to_diagnostic();
    assert_eq!(diag.suggestions, vec!["separate declared names with `,`".to_owned()]);
}

#[test]
fn hint_for_missing_close_brace() {
    let diag = unexpected(
        Expected::Delimiter(Delimiter::End),
        TokenKind::Final,
        Some(ErrorContext::Block),
    )
    .to_diagnostic();
    assert_eq!(diag.suggestions, vec!["add the missing `}`".to_owned()]);
}

#[test]
fn hint_for_unsigned_constant_only_on_numbers() {
    let diag = invalid(TokenKind::Number(5), Some(ErrorContext::Declaration)).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(
        diag.suggestions,
        vec!["only signed numbers are accepted as constants in this mode".to_owned()]
    );

    let diag = invalid(TokenKind::Str(StrId::new(0)), Some(ErrorContext::Declaration)).to_diagnostic();
    assert!(diag.suggestions.is_empty());
}

#[test]
fn context_descriptions_are_distinct() {
    let all = [
        ErrorContext::Program,
        ErrorContext::Declaration,
        ErrorContext::ReadStatement,
        ErrorContext::WriteStatement,
        ErrorContext::WhileStatement,
        ErrorContext::IfStatement,
        ErrorContext::LabelStatement,
        ErrorContext::GotoStatement,
        ErrorContext::Block,
        ErrorContext::ExpressionStatement,
        ErrorContext::Parenthesized,
    ];
    let mut seen = std::collections::HashSet::new();
    for ctx in all {
        assert!(seen.insert(ctx.description()), "{ctx:?}");
        assert!(!ctx.label().is_empty());
    }
}

//! The scanner state machine.
//!
//! One call to [`Scanner::next_token`] runs the machine from `Start` until
//! exactly one token is recognized. States that stop one character past the
//! end of their token hand that character back to the cursor, so the next
//! call starts on it.
//!
//! | state               | entered on          | leaves with                     |
//! |---------------------|---------------------|---------------------------------|
//! | `Start`             | every call          | FINAL, delimiter, or a state    |
//! | `InIdentifier`      | letter              | keyword or identifier           |
//! | `InNumber`          | digit               | number                          |
//! | `InString`          | `"`                 | string literal                  |
//! | `InComment`         | `@`                 | back to `Start`                 |
//! | `AfterAngleOrColon` | `<` `>` `:` `=`     | one- or two-character delimiter |
//! | `AfterBang`         | `!`                 | `!=`                            |

use mlang_ir::{Delimiter, Keyword, Span, SymbolTables, Token, TokenKind};
use mlang_lexer_core::{SourceBuffer, SourceCursor};
use tracing::trace;

use crate::LexError;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum State {
    Start,
    InIdentifier,
    InNumber { value: i64 },
    InString,
    InComment,
    /// `first` is one of `<`, `>`, `:` or `=`.
    AfterAngleOrColon { first: u8 },
    AfterBang,
}

/// Lazy tokenizer over one source buffer.
///
/// Identifiers and string literals are interned into the borrowed tables, so
/// token payloads stay valid for as long as the tables live.
pub struct Scanner<'a> {
    cursor: SourceCursor<'a>,
    tables: &'a mut SymbolTables,
    /// 1-based line of the next unread character.
    line: u32,
    /// Set once the iterator has yielded FINAL or an error.
    exhausted: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a SourceBuffer, tables: &'a mut SymbolTables) -> Self {
        Scanner {
            cursor: source.cursor(),
            tables,
            line: 1,
            exhausted: false,
        }
    }

    /// Line the next token would start on (before skipping whitespace).
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn tables(&self) -> &SymbolTables {
        self.tables
    }

    /// Scan one token.
    ///
    /// At end of input this returns FINAL, and keeps returning FINAL on
    /// every later call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let mut state = State::Start;
        let mut start = self.cursor.pos();
        let mut start_line = self.line;

        loop {
            state = match state {
                State::Start => {
                    start = self.cursor.pos();
                    start_line = self.line;
                    match self.cursor.read() {
                        None => return Ok(self.token(TokenKind::Final, start, start_line)),
                        Some(b'\n') => {
                            self.line += 1;
                            State::Start
                        }
                        Some(b' ' | b'\t' | b'\r' | 0x0B | 0x0C) => State::Start,
                        Some(c) if c.is_ascii_alphabetic() => State::InIdentifier,
                        Some(c) if c.is_ascii_digit() => State::InNumber {
                            value: i64::from(c - b'0'),
                        },
                        Some(b'@') => State::InComment,
                        Some(b'"') => State::InString,
                        Some(first @ (b'<' | b'>' | b':' | b'=')) => {
                            State::AfterAngleOrColon { first }
                        }
                        Some(b'!') => State::AfterBang,
                        Some(c) => {
                            let kind = single_delimiter(c).ok_or_else(|| {
                                LexError::unexpected_character(c, self.span_from(start), start_line)
                            })?;
                            return Ok(self.token(TokenKind::Delimiter(kind), start, start_line));
                        }
                    }
                }

                State::InIdentifier => match self.cursor.read() {
                    Some(c) if c.is_ascii_alphanumeric() => State::InIdentifier,
                    _ => {
                        self.cursor.putback();
                        let kind = self.word(start);
                        return Ok(self.token(kind, start, start_line));
                    }
                },

                State::InNumber { value } => match self.cursor.read() {
                    Some(c) if c.is_ascii_digit() => State::InNumber {
                        value: value.wrapping_mul(10).wrapping_add(i64::from(c - b'0')),
                    },
                    _ => {
                        self.cursor.putback();
                        return Ok(self.token(TokenKind::Number(value), start, start_line));
                    }
                },

                State::InComment => {
                    self.line += self.cursor.eat_until(b'@');
                    match self.cursor.read() {
                        Some(_) => State::Start,
                        None => {
                            return Err(LexError::unterminated_comment(
                                Span::new(start, start + 1),
                                start_line,
                            ));
                        }
                    }
                }

                State::InString => match self.cursor.read() {
                    Some(b'"') => {
                        let end = self.cursor.pos() - 1;
                        let text = String::from_utf8_lossy(self.cursor.slice(start + 1, end));
                        let id = self.tables.strings.intern(text);
                        return Ok(self.token(TokenKind::Str(id), start, start_line));
                    }
                    Some(b'\n') => {
                        self.line += 1;
                        State::InString
                    }
                    Some(_) => State::InString,
                    None => {
                        return Err(LexError::unterminated_string(
                            Span::new(start, start + 1),
                            start_line,
                        ));
                    }
                },

                State::AfterAngleOrColon { first } => {
                    if self.cursor.read() == Some(b'=') {
                        let kind = double_delimiter(first).ok_or_else(|| {
                            let span = self.span_from(start);
                            LexError::unexpected_after(first, b'=', span, start_line)
                        })?;
                        return Ok(self.token(TokenKind::Delimiter(kind), start, start_line));
                    }
                    self.cursor.putback();
                    let kind = single_delimiter(first).ok_or_else(|| {
                        LexError::unexpected_character(first, self.span_from(start), start_line)
                    })?;
                    return Ok(self.token(TokenKind::Delimiter(kind), start, start_line));
                }

                State::AfterBang => {
                    if self.cursor.read() == Some(b'=') {
                        return Ok(self.token(
                            TokenKind::Delimiter(Delimiter::NotEqual),
                            start,
                            start_line,
                        ));
                    }
                    return Err(LexError::unexpected_character(
                        b'!',
                        Span::new(start, start + 1),
                        start_line,
                    ));
                }
            };
        }
    }

    /// Keyword if the spelling is reserved, otherwise an interned identifier.
    fn word(&mut self, start: u32) -> TokenKind {
        let bytes = self.cursor.slice(start, self.cursor.pos());
        // Only ASCII alphanumerics reach here.
        let text = std::str::from_utf8(bytes).unwrap_or_default();
        match Keyword::lookup(text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Ident(self.tables.identifiers.intern(text)),
        }
    }

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }

    fn token(&self, kind: TokenKind, start: u32, line: u32) -> Token {
        let token = Token::new(kind, self.span_from(start), line);
        trace!(
            code = token.code(),
            payload = token.payload(),
            line,
            kind = %kind,
            "token"
        );
        token
    }
}

fn single_delimiter(byte: u8) -> Option<Delimiter> {
    std::str::from_utf8(&[byte]).ok().and_then(Delimiter::lookup)
}

fn double_delimiter(first: u8) -> Option<Delimiter> {
    std::str::from_utf8(&[first, b'=']).ok().and_then(Delimiter::lookup)
}

/// Yields tokens up to and including FINAL, or up to the first error.
impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.next_token();
        self.exhausted = match &result {
            Ok(token) => token.is_final(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

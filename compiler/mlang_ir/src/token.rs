//! Token types for the mlang scanner.
//!
//! A token is an immutable `(kind, payload)` pair plus its source position.
//! Keywords and delimiters are resolved through two static tables whose
//! index 0 is a reserved "no match" sentinel; the table index is the token
//! payload. Kinds are a tagged union, so nothing ever does arithmetic on a
//! kind value to find out which delimiter it is.

use std::fmt;

use crate::{IdentId, Span, StrId};

/// Reserved-word table. Index 0 is the sentinel and never matches.
pub const KEYWORD_TABLE: [&str; 15] = [
    "", "int", "string", "bool", "goto", "label", "if", "else", "read", "write", "while", "and",
    "or", "not", "program",
];

/// Delimiter table. Index 0 (`@`) is the sentinel: `@` always opens a
/// comment, so it never reaches a delimiter lookup.
pub const DELIMITER_TABLE: [&str; 20] = [
    "@", ";", ":", ".", ",", "=", "==", "<", ">", "!=", "<=", ">=", "(", ")", "{", "}", "+", "-",
    "*", "/",
];

/// Reserved word. The discriminant is the index into [`KEYWORD_TABLE`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Keyword {
    Int = 1,
    String,
    Bool,
    Goto,
    Label,
    If,
    Else,
    Read,
    Write,
    While,
    And,
    Or,
    Not,
    /// `program`, the START marker of every source file.
    Program,
}

impl Keyword {
    /// All keywords in table order.
    pub const ALL: [Keyword; 14] = [
        Keyword::Int,
        Keyword::String,
        Keyword::Bool,
        Keyword::Goto,
        Keyword::Label,
        Keyword::If,
        Keyword::Else,
        Keyword::Read,
        Keyword::Write,
        Keyword::While,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::Program,
    ];

    /// Look a spelling up in [`KEYWORD_TABLE`].
    ///
    /// The sentinel slot is skipped, so `None` is the only "no match" result.
    pub fn lookup(text: &str) -> Option<Keyword> {
        KEYWORD_TABLE
            .iter()
            .skip(1)
            .position(|spelling| *spelling == text)
            .map(|i| Self::ALL[i])
    }

    /// Index into [`KEYWORD_TABLE`]; never 0.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn spelling(self) -> &'static str {
        KEYWORD_TABLE[self.index()]
    }

    /// Whether this keyword opens a declaration (`int` or `string`).
    #[inline]
    pub fn is_type(self) -> bool {
        matches!(self, Keyword::Int | Keyword::String)
    }
}

/// Punctuation or operator. The discriminant is the index into
/// [`DELIMITER_TABLE`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Delimiter {
    Semicolon = 1,
    Colon,
    Point,
    Comma,
    Assign,
    Equal,
    Less,
    Greater,
    NotEqual,
    LessEqual,
    GreaterEqual,
    LeftParen,
    RightParen,
    /// `{`
    Begin,
    /// `}`
    End,
    Plus,
    Minus,
    Star,
    Slash,
}

impl Delimiter {
    /// All delimiters in table order.
    pub const ALL: [Delimiter; 19] = [
        Delimiter::Semicolon,
        Delimiter::Colon,
        Delimiter::Point,
        Delimiter::Comma,
        Delimiter::Assign,
        Delimiter::Equal,
        Delimiter::Less,
        Delimiter::Greater,
        Delimiter::NotEqual,
        Delimiter::LessEqual,
        Delimiter::GreaterEqual,
        Delimiter::LeftParen,
        Delimiter::RightParen,
        Delimiter::Begin,
        Delimiter::End,
        Delimiter::Plus,
        Delimiter::Minus,
        Delimiter::Star,
        Delimiter::Slash,
    ];

    /// Look a one- or two-character spelling up in [`DELIMITER_TABLE`].
    pub fn lookup(text: &str) -> Option<Delimiter> {
        DELIMITER_TABLE
            .iter()
            .skip(1)
            .position(|spelling| *spelling == text)
            .map(|i| Self::ALL[i])
    }

    /// Index into [`DELIMITER_TABLE`]; never 0.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn spelling(self) -> &'static str {
        DELIMITER_TABLE[self.index()]
    }

    /// Relational operators accepted by the comparison level of the grammar.
    #[inline]
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Delimiter::Equal
                | Delimiter::Less
                | Delimiter::Greater
                | Delimiter::NotEqual
                | Delimiter::LessEqual
                | Delimiter::GreaterEqual
        )
    }

    /// Numeric kind code used in token listings.
    pub const fn code(self) -> u8 {
        match self {
            Delimiter::Semicolon => 16,
            Delimiter::Colon => 17,
            Delimiter::Point => 18,
            Delimiter::Comma => 19,
            Delimiter::Assign => 20,
            Delimiter::Equal => 21,
            Delimiter::Less => 22,
            Delimiter::Greater => 23,
            Delimiter::NotEqual => 24,
            Delimiter::LessEqual => 25,
            Delimiter::GreaterEqual => 26,
            Delimiter::LeftParen => 27,
            Delimiter::RightParen => 28,
            Delimiter::Begin => 29,
            Delimiter::End => 30,
            Delimiter::Plus => 31,
            Delimiter::Minus => 32,
            Delimiter::Star => 33,
            Delimiter::Slash => 34,
        }
    }
}

/// Postfix ("POLIZ") instruction markers.
///
/// Reserved vocabulary: the scanner never produces these and the recognizer
/// never consumes them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PolizOp {
    /// Jump target position.
    Label,
    /// Address of an identifier (assignment / `read` target).
    Address,
    /// Unconditional jump.
    Go,
    /// Jump when the popped condition is false.
    FalseGo,
}

/// Token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Keyword(Keyword),
    Delimiter(Delimiter),
    /// Unsigned decimal literal. Accumulated with wrapping arithmetic.
    Number(i64),
    /// String literal, as an index into the session's string table.
    Str(StrId),
    /// Identifier, as an id in the session's identifier table.
    Ident(IdentId),
    /// End of input (the FINAL marker).
    Final,
    /// Postfix instruction with its operand.
    Poliz(PolizOp, i64),
}

impl TokenKind {
    /// Kind-dependent integer payload.
    ///
    /// Keyword/delimiter → table index, number → value, identifier → id,
    /// string → string table index.
    pub fn payload(self) -> i64 {
        match self {
            TokenKind::Keyword(kw) => i64::from(kw as u8),
            TokenKind::Delimiter(d) => i64::from(d as u8),
            TokenKind::Number(n) | TokenKind::Poliz(_, n) => n,
            TokenKind::Str(id) => i64::from(id.raw()),
            TokenKind::Ident(id) => i64::from(id.raw()),
            TokenKind::Final => 0,
        }
    }

    /// Stable numeric kind code for `(code, payload)` listings.
    pub fn code(self) -> u8 {
        match self {
            TokenKind::Keyword(kw) => kw as u8,
            TokenKind::Final => 15,
            TokenKind::Delimiter(d) => d.code(),
            TokenKind::Number(_) => 35,
            TokenKind::Ident(_) => 36,
            TokenKind::Str(_) => 37,
            TokenKind::Poliz(PolizOp::Label, _) => 38,
            TokenKind::Poliz(PolizOp::Address, _) => 39,
            TokenKind::Poliz(PolizOp::Go, _) => 40,
            TokenKind::Poliz(PolizOp::FalseGo, _) => 41,
        }
    }

    #[inline]
    pub fn is_keyword(self, kw: Keyword) -> bool {
        self == TokenKind::Keyword(kw)
    }

    #[inline]
    pub fn is_delimiter(self, d: Delimiter) -> bool {
        self == TokenKind::Delimiter(d)
    }

    /// Short description for error messages ("expected X, found Y").
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Keyword(kw) => kw.spelling(),
            TokenKind::Delimiter(d) => d.spelling(),
            TokenKind::Number(_) => "number",
            TokenKind::Str(_) => "string literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Final => "end of input",
            TokenKind::Poliz(..) => "postfix instruction",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(_) | TokenKind::Delimiter(_) => {
                write!(f, "`{}`", self.display_name())
            }
            TokenKind::Number(n) => write!(f, "number `{n}`"),
            _ => f.write_str(self.display_name()),
        }
    }
}

/// A token with its position in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based line the token starts on.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }

    #[inline]
    pub fn payload(&self) -> i64 {
        self.kind.payload()
    }

    #[inline]
    pub fn code(&self) -> u8 {
        self.kind.code()
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.kind == TokenKind::Final
    }
}

/// Renders the listing form `(code,payload);`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{});", self.code(), self.payload())
    }
}

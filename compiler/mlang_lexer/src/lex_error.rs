//! Scanner errors.
//!
//! Every error is fatal: the scanner stops at the first one. Each variant
//! except `Io` carries the span of the offending text and the line it starts
//! on, and converts into a [`Diagnostic`] with a stable [`ErrorCode`].

use std::io;
use std::path::PathBuf;

use mlang_diagnostic::{Diagnostic, ErrorCode};
use mlang_ir::Span;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    /// The source file could not be opened or read.
    #[error("cannot read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A character that cannot start (or continue) any token.
    ///
    /// `after` is the character `found` was meant to follow when the two
    /// were read as one lexeme, as in `:=`.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter {
        found: char,
        after: Option<char>,
        span: Span,
        line: u32,
    },

    /// End of input inside an `@ ... @` comment.
    #[error("unterminated comment")]
    UnterminatedComment { span: Span, line: u32 },

    /// End of input inside a `"..."` literal.
    #[error("unterminated string literal")]
    UnterminatedString { span: Span, line: u32 },
}

impl LexError {
    #[cold]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LexError::Io {
            path: path.into(),
            source,
        }
    }

    /// `byte` is shown as its Latin-1 character.
    #[cold]
    pub fn unexpected_character(byte: u8, span: Span, line: u32) -> Self {
        LexError::UnexpectedCharacter {
            found: char::from(byte),
            after: None,
            span,
            line,
        }
    }

    /// `byte` read as the second character of a lexeme begun by `prev`.
    #[cold]
    pub fn unexpected_after(prev: u8, byte: u8, span: Span, line: u32) -> Self {
        LexError::UnexpectedCharacter {
            found: char::from(byte),
            after: Some(char::from(prev)),
            span,
            line,
        }
    }

    #[cold]
    pub fn unterminated_comment(span: Span, line: u32) -> Self {
        LexError::UnterminatedComment { span, line }
    }

    #[cold]
    pub fn unterminated_string(span: Span, line: u32) -> Self {
        LexError::UnterminatedString { span, line }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::Io { .. } => None,
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedComment { span, .. }
            | LexError::UnterminatedString { span, .. } => Some(*span),
        }
    }

    /// 1-based line the offending text starts on.
    pub fn line(&self) -> Option<u32> {
        match self {
            LexError::Io { .. } => None,
            LexError::UnexpectedCharacter { line, .. }
            | LexError::UnterminatedComment { line, .. }
            | LexError::UnterminatedString { line, .. } => Some(*line),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::UnexpectedCharacter { .. } => ErrorCode::E0002,
            LexError::UnterminatedComment { .. } => ErrorCode::E0003,
            LexError::Io { .. } => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::Io { .. } => diag,
            LexError::UnexpectedCharacter {
                found, after, span, ..
            } => {
                let diag = diag.with_label(*span, "not valid here");
                match (*after, *found) {
                    (None, '!') => diag.with_suggestion(
                        "`!` is only valid as part of `!=`; use `not` for negation",
                    ),
                    (Some(':'), '=') => {
                        diag.with_suggestion("`:=` is not an operator; use `=` for assignment")
                    }
                    _ => diag.with_note(
                        "tokens start with a letter, a digit, `\"`, `@` or a delimiter",
                    ),
                }
            }
            LexError::UnterminatedComment { span, .. } => diag
                .with_label(*span, "comment starts here")
                .with_suggestion("close the comment with `@`"),
            LexError::UnterminatedString { span, .. } => diag
                .with_label(*span, "string starts here")
                .with_suggestion("add a closing `\"`")
                .with_note("string literals have no escape sequences"),
        }
    }
}

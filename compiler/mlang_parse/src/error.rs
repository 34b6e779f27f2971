//! Recognizer errors.
//!
//! [`ParseError`] wraps scanner errors and adds the two syntax failures.
//! [`ErrorKind`] flattens both layers into the six kinds callers match on.
//! [`ErrorContext`] records which grammar rule was active, for Elm-style
//! "while parsing X" notes.

use std::fmt;

use mlang_diagnostic::{Diagnostic, ErrorCode};
use mlang_ir::{Delimiter, Keyword, Span, TokenKind};
use mlang_lexer::LexError;
use thiserror::Error;

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Program,
    Declaration,
    ReadStatement,
    WriteStatement,
    WhileStatement,
    IfStatement,
    LabelStatement,
    GotoStatement,
    Block,
    ExpressionStatement,
    /// `( Expression )` inside an expression.
    Parenthesized,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Program => "the program",
            Self::Declaration => "a declaration",
            Self::ReadStatement => "a read statement",
            Self::WriteStatement => "a write statement",
            Self::WhileStatement => "a while statement",
            Self::IfStatement => "an if statement",
            Self::LabelStatement => "a label",
            Self::GotoStatement => "a goto statement",
            Self::Block => "a block",
            Self::ExpressionStatement => "an expression statement",
            Self::Parenthesized => "a parenthesized expression",
        }
    }

    /// Short noun for trace output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Declaration => "declaration",
            Self::ReadStatement => "read",
            Self::WriteStatement => "write",
            Self::WhileStatement => "while",
            Self::IfStatement => "if",
            Self::LabelStatement => "label",
            Self::GotoStatement => "goto",
            Self::Block => "block",
            Self::ExpressionStatement => "expression statement",
            Self::Parenthesized => "parenthesized",
        }
    }
}

/// The token class a grammar rule requires next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    Keyword(Keyword),
    Delimiter(Delimiter),
    Identifier,
    Final,
}

impl Expected {
    /// Payloads are ignored: any identifier matches `Identifier`.
    pub fn matches(self, kind: TokenKind) -> bool {
        match self {
            Expected::Keyword(kw) => kind.is_keyword(kw),
            Expected::Delimiter(d) => kind.is_delimiter(d),
            Expected::Identifier => matches!(kind, TokenKind::Ident(_)),
            Expected::Final => kind == TokenKind::Final,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Keyword(kw) => write!(f, "`{}`", kw.spelling()),
            Expected::Delimiter(d) => write!(f, "`{}`", d.spelling()),
            Expected::Identifier => f.write_str("identifier"),
            Expected::Final => f.write_str("end of input"),
        }
    }
}

/// Flat error classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    UnexpectedCharacter,
    UnterminatedComment,
    UnterminatedString,
    UnexpectedToken,
    InvalidConstant,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        span: Span,
        line: u32,
        context: Option<ErrorContext>,
    },

    #[error("expected a constant, found {found}")]
    InvalidConstant {
        found: TokenKind,
        span: Span,
        line: u32,
        context: Option<ErrorContext>,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Lex(LexError::Io { .. }) => ErrorKind::Io,
            ParseError::Lex(LexError::UnexpectedCharacter { .. }) => ErrorKind::UnexpectedCharacter,
            ParseError::Lex(LexError::UnterminatedComment { .. }) => ErrorKind::UnterminatedComment,
            ParseError::Lex(LexError::UnterminatedString { .. }) => ErrorKind::UnterminatedString,
            ParseError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ParseError::InvalidConstant { .. } => ErrorKind::InvalidConstant,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Lex(err) => err.span(),
            ParseError::UnexpectedToken { span, .. } | ParseError::InvalidConstant { span, .. } => {
                Some(*span)
            }
        }
    }

    /// 1-based line of the offending token or character.
    pub fn line(&self) -> Option<u32> {
        match self {
            ParseError::Lex(err) => err.line(),
            ParseError::UnexpectedToken { line, .. } | ParseError::InvalidConstant { line, .. } => {
                Some(*line)
            }
        }
    }

    /// Innermost grammar rule active when the error was raised.
    pub fn context(&self) -> Option<ErrorContext> {
        match self {
            ParseError::Lex(_) => None,
            ParseError::UnexpectedToken { context, .. }
            | ParseError::InvalidConstant { context, .. } => *context,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::InvalidConstant { .. } => ErrorCode::E1002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (expected, found, span) = match self {
            ParseError::Lex(err) => return err.to_diagnostic(),
            ParseError::UnexpectedToken {
                expected,
                found,
                span,
                ..
            } => (expected.to_string(), *found, *span),
            ParseError::InvalidConstant { found, span, .. } => {
                ("a constant".to_owned(), *found, *span)
            }
        };

        let mut diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(span, format!("expected {expected}"));
        if let Some(ctx) = self.context() {
            diag = diag.with_note(format!("while parsing {}", ctx.description()));
        }
        if let Some(hint) = self.hint(found) {
            diag = diag.with_suggestion(hint);
        }
        diag
    }

    /// Fix-it text for mistakes that are easy to recognize.
    fn hint(&self, found: TokenKind) -> Option<&'static str> {
        let in_statement = !matches!(
            self.context(),
            None | Some(ErrorContext::Program | ErrorContext::Declaration)
        );
        match (self, found) {
            (_, TokenKind::Keyword(kw)) if kw.is_type() && in_statement => {
                Some("declarations must come before the first statement")
            }
            (
                ParseError::UnexpectedToken {
                    expected: Expected::Keyword(Keyword::Else),
                    ..
                },
                _,
            ) => Some("every `if` needs an `else` branch"),
            (
                ParseError::UnexpectedToken {
                    expected: Expected::Delimiter(Delimiter::Semicolon),
                    context: Some(ErrorContext::Declaration),
                    ..
                },
                TokenKind::Ident(_),
            ) => Some("separate declared names with `,`"),
            (
                ParseError::UnexpectedToken {
                    expected: Expected::Delimiter(Delimiter::End),
                    ..
                },
                TokenKind::Final,
            ) => Some("add the missing `}`"),
            (ParseError::InvalidConstant { .. }, TokenKind::Number(_)) => {
                Some("only signed numbers are accepted as constants in this mode")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;

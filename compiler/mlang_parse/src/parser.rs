//! Recognizer state and token handling.
//!
//! The parser holds exactly one token of lookahead, the current token.
//! Grammar rules inspect it with `check_*`, move past it with
//! [`Parser::advance`], and demand a particular class with
//! [`Parser::require`] (current token) or [`Parser::expect`] (next token).

use mlang_ir::{Delimiter, Keyword, Span, Token, TokenKind};
use mlang_lexer::Scanner;
use tracing::trace;

use crate::{ErrorContext, Expected, ParseError, ParseOptions};

/// Recursive-descent recognizer over a lazy token stream.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    /// Placeholder FINAL until [`Parser::analyze`] pulls the first token.
    current: Token,
    options: ParseOptions,
    /// Innermost grammar rule, attached to syntax errors.
    context: Option<ErrorContext>,
}

impl<'a> Parser<'a> {
    pub fn new(scanner: Scanner<'a>, options: ParseOptions) -> Self {
        Parser {
            scanner,
            current: Token::new(TokenKind::Final, Span::DUMMY, 1),
            options,
            context: None,
        }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// The scanner, e.g. to inspect the symbol tables after a run.
    pub fn scanner(&self) -> &Scanner<'a> {
        &self.scanner
    }

    // ─── Token access ───────────────────────────────────────────────────

    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.current
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub(crate) fn check_keyword(&self, kw: Keyword) -> bool {
        self.current.kind.is_keyword(kw)
    }

    #[inline]
    pub(crate) fn check_delimiter(&self, d: Delimiter) -> bool {
        self.current.kind.is_delimiter(d)
    }

    #[inline]
    pub(crate) fn check_ident(&self) -> bool {
        matches!(self.current.kind, TokenKind::Ident(_))
    }

    /// Pull the next token from the scanner into `current`.
    pub(crate) fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.scanner.next_token()?;
        trace!(
            kind = %self.current.kind.display_name(),
            line = self.current.line,
            span_start = self.current.span.start,
            span_end = self.current.span.end,
            "advance"
        );
        Ok(())
    }

    /// Fail unless the current token is of class `expected`.
    pub(crate) fn require(&self, expected: Expected) -> Result<(), ParseError> {
        if expected.matches(self.current.kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Advance, then fail unless the new current token is of class `expected`.
    pub(crate) fn expect(&mut self, expected: Expected) -> Result<(), ParseError> {
        self.advance()?;
        self.require(expected)
    }

    // ─── Errors ─────────────────────────────────────────────────────────

    /// Run `f` with `ctx` as the innermost error context.
    pub(crate) fn in_error_context<T>(
        &mut self,
        ctx: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        trace!(rule = ctx.label(), line = self.current.line, "enter");
        let outer = self.context.replace(ctx);
        let result = f(self);
        self.context = outer;
        result
    }

    #[cold]
    pub(crate) fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current.kind,
            span: self.current.span,
            line: self.current.line,
            context: self.context,
        }
    }

    #[cold]
    pub(crate) fn invalid_constant(&self) -> ParseError {
        ParseError::InvalidConstant {
            found: self.current.kind,
            span: self.current.span,
            line: self.current.line,
            context: self.context,
        }
    }
}

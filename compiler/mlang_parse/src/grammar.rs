//! Grammar rules.
//!
//! Token discipline, shared by every rule: a statement rule is entered with
//! its first token current and returns with its *last* token current (the
//! `;`, the `:`, the closing `}`); the caller advances past it. Expression
//! rules are entered on their first token and return with the first token
//! *after* the expression current.

mod expr;
mod statement;

use mlang_ir::{Delimiter, Keyword, TokenKind};
use tracing::{debug, instrument};

use crate::{ensure_sufficient_stack, ConstantRule, ErrorContext, Expected, ParseError, Parser};

impl Parser<'_> {
    /// Recognize one whole program.
    ///
    /// Consumes the token stream up to and including FINAL. Returns the first
    /// error; nothing after it is scanned.
    #[instrument(level = "debug", skip(self), err(Display))]
    pub fn analyze(mut self) -> Result<(), ParseError> {
        self.in_error_context(ErrorContext::Program, |p| {
            p.expect(Expected::Keyword(Keyword::Program))?;
            p.expect(Expected::Delimiter(Delimiter::Begin))?;
            p.advance()?;
            p.declarations()?;
            p.statements()?;
            // `statements` stops on the closing `}`.
            p.expect(Expected::Final)
        })?;
        debug!(
            identifiers = self.scanner().tables().identifiers.len(),
            strings = self.scanner().tables().strings.len(),
            "program accepted"
        );
        Ok(())
    }

    /// `( (int|string) DeclItem (, DeclItem)* ; )*`
    ///
    /// Ends at the first token that is not a type keyword.
    fn declarations(&mut self) -> Result<(), ParseError> {
        while self.check_keyword(Keyword::Int) || self.check_keyword(Keyword::String) {
            self.in_error_context(ErrorContext::Declaration, |p| {
                loop {
                    p.expect(Expected::Identifier)?;
                    p.advance()?;
                    if p.check_delimiter(Delimiter::Assign) {
                        p.advance()?;
                        p.constant()?;
                        p.advance()?;
                    }
                    if !p.check_delimiter(Delimiter::Comma) {
                        break;
                    }
                }
                p.require(Expected::Delimiter(Delimiter::Semicolon))?;
                p.advance()
            })?;
        }
        Ok(())
    }

    /// `Statement*` up to the closing `}`, which is left current.
    fn statements(&mut self) -> Result<(), ParseError> {
        while !self.check_delimiter(Delimiter::End) {
            if self.current().is_final() {
                return Err(self.unexpected(Expected::Delimiter(Delimiter::End)));
            }
            self.statement()?;
            self.advance()?;
        }
        Ok(())
    }

    /// `(+|-)? NUMBER | STRING_CONST`, per [`ConstantRule`].
    ///
    /// Entered on the first token of the constant; returns with its last
    /// token current.
    fn constant(&mut self) -> Result<(), ParseError> {
        if self.check_delimiter(Delimiter::Plus) || self.check_delimiter(Delimiter::Minus) {
            self.advance()?;
            return if matches!(self.current_kind(), TokenKind::Number(_)) {
                Ok(())
            } else {
                Err(self.invalid_constant())
            };
        }
        match (self.options().constant_rule, self.current_kind()) {
            (ConstantRule::Standard, TokenKind::Number(_) | TokenKind::Str(_)) => Ok(()),
            _ => Err(self.invalid_constant()),
        }
    }

    /// Recursion guard shared by statement and expression rules.
    fn guarded<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        ensure_sufficient_stack(|| f(self))
    }
}

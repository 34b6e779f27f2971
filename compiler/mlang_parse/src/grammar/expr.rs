//! Expression rules, loosest binding first.
//!
//! Assignment is the loosest level and chains left to right like the other
//! binary levels. Comparison allows a single operator, so `a < b < c` is
//! rejected.

use mlang_ir::{Delimiter, Keyword, TokenKind};

use crate::{ErrorContext, Expected, ParseError, Parser};

impl Parser<'_> {
    /// `Disjunction (= Disjunction)*`
    pub(super) fn expression(&mut self) -> Result<(), ParseError> {
        self.guarded(|p| {
            p.disjunction()?;
            while p.check_delimiter(Delimiter::Assign) {
                p.advance()?;
                p.disjunction()?;
            }
            Ok(())
        })
    }

    /// `Conjunction (or Conjunction)*`
    fn disjunction(&mut self) -> Result<(), ParseError> {
        self.conjunction()?;
        while self.check_keyword(Keyword::Or) {
            self.advance()?;
            self.conjunction()?;
        }
        Ok(())
    }

    /// `Comparison (and Comparison)*`
    fn conjunction(&mut self) -> Result<(), ParseError> {
        self.comparison()?;
        while self.check_keyword(Keyword::And) {
            self.advance()?;
            self.comparison()?;
        }
        Ok(())
    }

    /// `Sum (relop Sum)?`
    fn comparison(&mut self) -> Result<(), ParseError> {
        self.sum()?;
        if let TokenKind::Delimiter(d) = self.current_kind() {
            if d.is_relational() {
                self.advance()?;
                self.sum()?;
            }
        }
        Ok(())
    }

    /// `Product ((+|-) Product)*`
    fn sum(&mut self) -> Result<(), ParseError> {
        self.product()?;
        while self.check_delimiter(Delimiter::Plus) || self.check_delimiter(Delimiter::Minus) {
            self.advance()?;
            self.product()?;
        }
        Ok(())
    }

    /// `Factor ((*|/) Factor)*`
    fn product(&mut self) -> Result<(), ParseError> {
        self.factor()?;
        while self.check_delimiter(Delimiter::Star) || self.check_delimiter(Delimiter::Slash) {
            self.advance()?;
            self.factor()?;
        }
        Ok(())
    }

    /// `not* (+|-)* ( ( Expression ) | Value )`
    fn factor(&mut self) -> Result<(), ParseError> {
        while self.check_keyword(Keyword::Not) {
            self.advance()?;
        }
        while self.check_delimiter(Delimiter::Plus) || self.check_delimiter(Delimiter::Minus) {
            self.advance()?;
        }
        if self.check_delimiter(Delimiter::LeftParen) {
            return self.in_error_context(ErrorContext::Parenthesized, |p| {
                p.advance()?;
                p.expression()?;
                p.require(Expected::Delimiter(Delimiter::RightParen))?;
                p.advance()
            });
        }
        self.value()
    }

    /// `IDENTIFIER | Constant`
    fn value(&mut self) -> Result<(), ParseError> {
        if !self.check_ident() {
            self.constant()?;
        }
        self.advance()
    }
}

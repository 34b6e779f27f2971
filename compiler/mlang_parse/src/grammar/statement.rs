//! Statement rules.

use mlang_ir::{Delimiter, Keyword, TokenKind};

use crate::{ErrorContext, Expected, ParseError, Parser};

const LEFT_PAREN: Expected = Expected::Delimiter(Delimiter::LeftParen);
const RIGHT_PAREN: Expected = Expected::Delimiter(Delimiter::RightParen);
const SEMICOLON: Expected = Expected::Delimiter(Delimiter::Semicolon);

impl Parser<'_> {
    /// One statement, dispatched on its first token. Returns with the
    /// statement's last token current.
    pub(super) fn statement(&mut self) -> Result<(), ParseError> {
        self.guarded(|p| match p.current_kind() {
            TokenKind::Keyword(Keyword::Read) => p.read_statement(),
            TokenKind::Keyword(Keyword::Write) => p.write_statement(),
            TokenKind::Keyword(Keyword::While) => p.while_statement(),
            TokenKind::Keyword(Keyword::If) => p.if_statement(),
            TokenKind::Keyword(Keyword::Label) => p.in_error_context(ErrorContext::LabelStatement, |p| {
                p.expect(Expected::Delimiter(Delimiter::Colon))
            }),
            TokenKind::Keyword(Keyword::Goto) => p.in_error_context(ErrorContext::GotoStatement, |p| {
                p.expect(Expected::Keyword(Keyword::Label))?;
                p.expect(SEMICOLON)
            }),
            TokenKind::Delimiter(Delimiter::Begin) => p.in_error_context(ErrorContext::Block, |p| {
                p.advance()?;
                p.statements()
            }),
            _ => p.in_error_context(ErrorContext::ExpressionStatement, |p| {
                p.expression()?;
                p.require(SEMICOLON)
            }),
        })
    }

    /// `read ( IDENTIFIER ) ;`
    fn read_statement(&mut self) -> Result<(), ParseError> {
        self.in_error_context(ErrorContext::ReadStatement, |p| {
            p.expect(LEFT_PAREN)?;
            p.expect(Expected::Identifier)?;
            p.expect(RIGHT_PAREN)?;
            p.expect(SEMICOLON)
        })
    }

    /// `write ( Expression (, Expression)* ) ;`
    fn write_statement(&mut self) -> Result<(), ParseError> {
        self.in_error_context(ErrorContext::WriteStatement, |p| {
            p.expect(LEFT_PAREN)?;
            loop {
                p.advance()?;
                p.expression()?;
                if !p.check_delimiter(Delimiter::Comma) {
                    break;
                }
            }
            p.require(RIGHT_PAREN)?;
            p.expect(SEMICOLON)
        })
    }

    /// `while ( Expression ) Statement`
    fn while_statement(&mut self) -> Result<(), ParseError> {
        self.in_error_context(ErrorContext::WhileStatement, |p| {
            p.condition()?;
            p.advance()?;
            p.statement()
        })
    }

    /// `if ( Expression ) Statement else Statement`
    fn if_statement(&mut self) -> Result<(), ParseError> {
        self.in_error_context(ErrorContext::IfStatement, |p| {
            p.condition()?;
            p.advance()?;
            p.statement()?;
            p.expect(Expected::Keyword(Keyword::Else))?;
            p.advance()?;
            p.statement()
        })
    }

    /// `( Expression )` after `while` or `if`; returns with `)` current.
    fn condition(&mut self) -> Result<(), ParseError> {
        self.expect(LEFT_PAREN)?;
        self.advance()?;
        self.expression()?;
        self.require(RIGHT_PAREN)
    }
}

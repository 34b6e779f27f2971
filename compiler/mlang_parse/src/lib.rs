//! Syntax recognizer for mlang.
//!
//! The recognizer is a pure acceptor: it pulls tokens one at a time from a
//! [`Scanner`](mlang_lexer::Scanner), checks them against the grammar, and
//! answers `Ok(())` or the first error. No tree is built.
//!
//! ```text
//! Program      := START BEGIN Declarations Statements END FINAL
//! Declarations := ( (INT|STRING) DeclItem (COMMA DeclItem)* SEMICOLON )*
//! DeclItem     := IDENTIFIER (ASSIGN Constant)?
//! Statements   := Statement*
//! Statement    := READ ( IDENTIFIER ) ;
//!               | WRITE ( Expression (, Expression)* ) ;
//!               | WHILE ( Expression ) Statement
//!               | IF ( Expression ) Statement ELSE Statement
//!               | LABEL :
//!               | GOTO LABEL ;
//!               | { Statements }
//!               | Expression ;
//! Expression   := Disjunction (= Disjunction)*
//! Disjunction  := Conjunction (OR Conjunction)*
//! Conjunction  := Comparison (AND Comparison)*
//! Comparison   := Sum ((== | < | > | != | <= | >=) Sum)?
//! Sum          := Product ((+ | -) Product)*
//! Product      := Factor ((* | /) Factor)*
//! Factor       := NOT* (+ | -)* ( ( Expression ) | Value )
//! Value        := IDENTIFIER | Constant
//! Constant     := (+ | -)? NUMBER | STRING_CONST
//! ```
//!
//! Most callers go through [`Session`], which owns the source buffer and the
//! symbol tables for one analysis.

mod error;
mod grammar;
mod options;
mod parser;
mod session;
mod stack;

pub use error::{ErrorContext, ErrorKind, Expected, ParseError};
pub use options::{ConstantRule, ParseOptions};
pub use parser::Parser;
pub use session::Session;
pub use stack::ensure_sufficient_stack;

//! Scanner for mlang.
//!
//! [`Scanner`] turns the bytes of a [`SourceBuffer`] into [`Token`]s one at a
//! time, interning identifiers and string literals into the session's
//! [`SymbolTables`] as it goes. The recognizer pulls tokens lazily through
//! [`Scanner::next_token`]; the standalone tokenizer uses [`tokenize`].

mod lex_error;
mod scanner;

use mlang_ir::{SymbolTables, Token};
use mlang_lexer_core::SourceBuffer;

pub use lex_error::LexError;
pub use scanner::Scanner;

/// Scan a whole source into a token vector ending with FINAL.
///
/// Stops at the first error.
pub fn tokenize(source: &SourceBuffer, tables: &mut SymbolTables) -> Result<Vec<Token>, LexError> {
    Scanner::new(source, tables).collect()
}

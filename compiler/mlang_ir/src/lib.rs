//! Shared vocabulary for the mlang front end.
//!
//! - [`Span`]: byte ranges into the source
//! - [`Token`] / [`TokenKind`]: the tagged token union produced by the scanner
//! - [`Keyword`] / [`Delimiter`]: static lookup tables with a reserved
//!   sentinel at index 0
//! - [`SymbolTables`]: per-session identifier and string-literal tables

/// Compile-time size assertion.
///
/// Fails to compile if `size_of::<$ty>() != $size`.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod symbols;
mod token;

pub use span::Span;
pub use symbols::{IdentId, Identifier, IdentifierTable, StrId, StringTable, SymbolTables};
pub use token::{
    Delimiter, Keyword, PolizOp, Token, TokenKind, DELIMITER_TABLE, KEYWORD_TABLE,
};

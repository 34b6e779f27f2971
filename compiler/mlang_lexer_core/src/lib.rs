//! Low-level input for the mlang scanner.
//!
//! [`SourceBuffer`] owns the raw bytes of one source file. [`SourceCursor`]
//! hands them out one at a time and supports a single pending putback,
//! which is all the scanner's state machine needs to stop one character
//! past the end of a token.
//!
//! This crate knows nothing about tokens or diagnostics.

mod cursor;
mod source_buffer;

pub use cursor::SourceCursor;
pub use source_buffer::SourceBuffer;

//! Diagnostics for the mlang front end.
//!
//! Every error the scanner or recognizer can raise converts into a
//! [`Diagnostic`]: a stable [`ErrorCode`], a one-line message, a primary
//! label at the offending span, and optional notes and suggestions.
//! [`emitter::TerminalEmitter`] renders them for humans, with a source
//! snippet when the source text is available.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;

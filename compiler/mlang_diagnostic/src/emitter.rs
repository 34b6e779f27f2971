//! Diagnostic Emitters
//!
//! Only a human-readable terminal format is provided. Emitters implement
//! [`DiagnosticEmitter`] so the driver does not depend on the format.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}

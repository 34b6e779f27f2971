//! Command handlers for the `mlang` CLI.
//!
//! Each handler writes its normal output to `out` and renders diagnostics to
//! `err` through a [`TerminalEmitter`]. The returned flag is `true` when the
//! command succeeded; `Err` only reports a failed write to `out`.

use std::io::Write;

use mlang_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use mlang_diagnostic::Diagnostic;
use mlang_parse::{ParseOptions, Session};
use tracing::debug;

mod check;
mod lex;

pub use check::check_file;
pub use lex::lex_file;

/// Settings for [`lex_file`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LexOptions {
    /// Print the identifier and string tables after the listing.
    pub show_tables: bool,
    pub color: ColorMode,
    /// Whether `err` is a terminal; only consulted for [`ColorMode::Auto`].
    pub is_tty: bool,
}

/// Settings for [`check_file`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckOptions {
    pub parse: ParseOptions,
    pub color: ColorMode,
    /// Whether `err` is a terminal; only consulted for [`ColorMode::Auto`].
    pub is_tty: bool,
}

/// Open `path`, rendering a read failure to `err`.
fn open_session<E: Write>(
    path: &str,
    color: ColorMode,
    is_tty: bool,
    err: &mut E,
) -> Option<Session> {
    match Session::open(path) {
        Ok(session) => Some(session),
        Err(e) => {
            debug!(path, error = %e, "open failed");
            let mut emitter =
                TerminalEmitter::with_color_mode(err, color, is_tty).with_file_path(path);
            report(&mut emitter, &e.to_diagnostic());
            None
        }
    }
}

/// Emit one diagnostic, with the session source attached for the snippet.
fn report_in_source<E: Write>(
    session: &Session,
    path: &str,
    color: ColorMode,
    is_tty: bool,
    err: &mut E,
    diagnostic: &Diagnostic,
) {
    let mut emitter = TerminalEmitter::with_color_mode(err, color, is_tty)
        .with_source(session.source().as_bytes())
        .with_file_path(path);
    report(&mut emitter, diagnostic);
}

fn report(emitter: &mut impl DiagnosticEmitter, diagnostic: &Diagnostic) {
    debug!(code = %diagnostic.code, span = ?diagnostic.primary_span(), "reporting");
    emitter.emit(diagnostic);
    emitter.flush();
}

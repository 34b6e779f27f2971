//! The `check` command: run the recognizer over a file.

use std::io::{self, Write};

use tracing::debug;

use super::{open_session, report_in_source, CheckOptions};

/// Print `OK: <path>` if the program is well formed; otherwise render the
/// first error to `err`.
pub fn check_file<W: Write, E: Write>(
    path: &str,
    options: CheckOptions,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    let Some(session) = open_session(path, options.color, options.is_tty, err) else {
        return Ok(false);
    };
    let mut session = session.with_options(options.parse);

    match session.analyze() {
        Ok(()) => {
            writeln!(out, "OK: {path}")?;
            Ok(true)
        }
        Err(e) => {
            debug!(path, kind = ?e.kind(), line = ?e.line(), "check failed");
            let diagnostic = e.to_diagnostic();
            report_in_source(&session, path, options.color, options.is_tty, err, &diagnostic);
            Ok(false)
        }
    }
}

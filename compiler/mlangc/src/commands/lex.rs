//! The `lex` command: print the token stream of a file.

use std::io::{self, Write};

use mlang_ir::SymbolTables;

use super::{open_session, report_in_source, LexOptions};

/// Print one `(code,payload);` line per token, FINAL included, followed by
/// `End of program.`.
///
/// A scan error stops the listing; tokens printed before it stay printed and
/// the error is rendered to `err`.
pub fn lex_file<W: Write, E: Write>(
    path: &str,
    options: LexOptions,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    let Some(mut session) = open_session(path, options.color, options.is_tty, err) else {
        return Ok(false);
    };

    let scanned = {
        let mut scanner = session.scanner();
        loop {
            match scanner.next_token() {
                Ok(token) => {
                    writeln!(out, "{token}")?;
                    if token.is_final() {
                        break Ok(());
                    }
                }
                Err(e) => break Err(e),
            }
        }
    };

    match scanned {
        Ok(()) => {
            writeln!(out, "End of program.")?;
            if options.show_tables {
                write_tables(out, session.tables())?;
            }
            Ok(true)
        }
        Err(e) => {
            out.flush()?;
            let diagnostic = e.to_diagnostic();
            report_in_source(&session, path, options.color, options.is_tty, err, &diagnostic);
            Ok(false)
        }
    }
}

/// Identifier and string tables, one entry per line, in id order.
fn write_tables<W: Write>(out: &mut W, tables: &SymbolTables) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Identifiers ({}):", tables.identifiers.len())?;
    for ident in tables.identifiers.iter() {
        writeln!(out, "  {:>4}  {}", ident.id().raw(), ident.name())?;
    }
    writeln!(out, "Strings ({}):", tables.strings.len())?;
    for (index, text) in tables.strings.iter().enumerate() {
        writeln!(out, "  {index:>4}  {text:?}")?;
    }
    Ok(())
}

//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! With source attached the output looks like:
//!
//! ```text
//! error[E1001]: expected `;`, found identifier
//!  --> demo.mlang:2:11
//!   |
//! 2 |     int x x = 1;
//!   |           ^ expected `;`
//!    = note: while parsing a declaration
//! ```
//!
//! Source is kept as raw bytes so spans index it directly; invalid UTF-8
//! renders as replacement characters one column wide. Without source,
//! labels fall back to raw byte ranges.

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source bytes plus their precomputed line table.
struct SourceContext {
    bytes: Vec<u8>,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` decides `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source so labels render as `line:col` plus a snippet.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<Vec<u8>>) -> Self {
        let bytes = source.into();
        let lines = LineOffsetTable::build(&bytes);
        self.source = Some(SourceContext { bytes, lines });
        self
    }

    /// Attach the path shown in `-->` lines.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// `--> path:line:col`, the gutter, the source line, and a caret run.
    fn write_snippet_label(&mut self, label: &Label) {
        let Some(ctx) = self.source.as_ref() else {
            return;
        };
        let (line, col) = ctx.lines.offset_to_line_col(&ctx.bytes, label.span.start);
        let line_text = ctx
            .lines
            .line_text(&ctx.bytes, line)
            .map(std::borrow::Cow::into_owned)
            .unwrap_or_default();
        let start = (label.span.start as usize).min(ctx.bytes.len());
        let end = (label.span.end as usize).clamp(start, ctx.bytes.len());
        let span_chars = String::from_utf8_lossy(&ctx.bytes[start..end]).chars().count();
        let path = self.file_path.as_deref().unwrap_or("<input>").to_owned();

        let pad = " ".repeat(line.to_string().len());
        let _ = writeln!(self.writer, "{pad}--> {path}:{line}:{col}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");

        // Carets cover the span, clipped to the rendered line, at least one wide.
        let line_chars = line_text.chars().count();
        let start_col = (col as usize).saturating_sub(1);
        let width = span_chars.max(1).min(line_chars.saturating_sub(start_col).max(1));

        let _ = write!(self.writer, "{pad} | {}", " ".repeat(start_col));
        self.write_colored(&"^".repeat(width), colors::ERROR);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, colors::ERROR);
        }
        let _ = writeln!(self.writer);
    }

    fn write_plain_label(&mut self, label: &Label) {
        let _ = write!(self.writer, "  --> ");
        if let Some(path) = self.file_path.clone() {
            let _ = write!(self.writer, "{path} ");
        }
        let _ = write!(self.writer, "{:?}: ", label.span);
        self.write_colored(&label.message, colors::ERROR);
        let _ = writeln!(self.writer);
    }

    fn write_footer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "   = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if diagnostic.labels.is_empty() {
            if let Some(path) = self.file_path.clone() {
                let _ = writeln!(self.writer, "  --> {path}");
            }
        }

        for label in &diagnostic.labels {
            if self.source.is_some() {
                self.write_snippet_label(label);
            } else {
                self.write_plain_label(label);
            }
        }

        for note in &diagnostic.notes {
            self.write_footer("note", colors::BOLD, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.write_footer("help", colors::HELP, suggestion);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

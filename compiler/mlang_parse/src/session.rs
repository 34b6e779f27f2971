//! One analysis of one source.
//!
//! A [`Session`] owns the source buffer and the symbol tables, so two
//! sessions never share state and may run on different threads. Everything
//! is released when the session is dropped.

use std::path::{Path, PathBuf};

use mlang_ir::{SymbolTables, Token};
use mlang_lexer::{LexError, Scanner};
use mlang_lexer_core::SourceBuffer;
use tracing::debug;

use crate::{ParseError, ParseOptions, Parser};

#[derive(Debug)]
pub struct Session {
    path: Option<PathBuf>,
    source: SourceBuffer,
    tables: SymbolTables,
    options: ParseOptions,
}

impl Session {
    /// Read `path` completely into a new session.
    ///
    /// Fails with [`LexError::Io`] if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LexError> {
        let path = path.as_ref();
        let source = SourceBuffer::open(path).map_err(|e| LexError::io(path, e))?;
        debug!(path = %path.display(), bytes = source.len(), "opened source");
        Ok(Session {
            path: Some(path.to_path_buf()),
            ..Self::from_buffer(source)
        })
    }

    /// Session over an in-memory program.
    pub fn from_source(source: &str) -> Self {
        Self::from_buffer(SourceBuffer::new(source))
    }

    pub fn from_buffer(source: SourceBuffer) -> Self {
        Session {
            path: None,
            source,
            tables: SymbolTables::new(),
            options: ParseOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn tables(&self) -> &SymbolTables {
        &self.tables
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Fresh scanner from the start of the source, interning into this
    /// session's tables.
    pub fn scanner(&mut self) -> Scanner<'_> {
        Scanner::new(&self.source, &mut self.tables)
    }

    /// Scan the whole source, up to and including FINAL.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        mlang_lexer::tokenize(&self.source, &mut self.tables)
    }

    /// Run the recognizer over the whole source.
    pub fn analyze(&mut self) -> Result<(), ParseError> {
        let options = self.options;
        Parser::new(self.scanner(), options).analyze()
    }
}

//! Line and column lookup for diagnostic rendering.
//!
//! Tokens already carry the line they start on, but the emitter also needs
//! the column and the text of that line. [`LineOffsetTable`] precomputes
//! line starts once per source so each lookup is a binary search.

use std::borrow::Cow;

/// Pre-computed line offset table for efficient line/column lookup.
///
/// Works on raw source bytes, the same offsets token spans use. Bytes that
/// are not valid UTF-8 count as one column each.
///
/// # Example
///
/// ```
/// use mlang_diagnostic::span_utils::LineOffsetTable;
///
/// let source = b"program {\n  int x;\n}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 12), (2, 3));
/// assert_eq!(table.line_text(source, 2).as_deref(), Some("  int x;"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source bytes.
    pub fn build(source: &[u8]) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes, from the start of the line.
    pub fn offset_to_line_col(&self, source: &[u8], offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |bytes| String::from_utf8_lossy(bytes).chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text<'s>(&self, source: &'s [u8], line: u32) -> Option<Cow<'s, str>> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize - 1);
        let bytes = source.get(start..end)?;
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
        Some(String::from_utf8_lossy(bytes))
    }
}

#[cfg(test)]
mod tests;

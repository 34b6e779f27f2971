//! Byte cursor with one-character putback.
//!
//! The scanner reads a character, decides whether it still belongs to the
//! token it is building, and if not hands it back. [`SourceCursor::read`]
//! returns `None` at end of input, and keeps returning `None` no matter
//! how often it is called or how often [`SourceCursor::putback`] is called
//! after it.

/// Cursor over the bytes of a [`SourceBuffer`](crate::SourceBuffer).
#[derive(Clone, Debug)]
pub struct SourceCursor<'a> {
    bytes: &'a [u8],
    pos: u32,
    /// Whether the last `read` produced a byte that may be put back.
    can_putback: bool,
}

const _: () = assert!(std::mem::size_of::<SourceCursor<'static>>() <= 24);

impl<'a> SourceCursor<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        debug_assert!(u32::try_from(bytes.len()).is_ok(), "source exceeds u32 range");
        SourceCursor {
            bytes,
            pos: 0,
            can_putback: false,
        }
    }

    /// Next byte, or `None` at end of input.
    #[inline]
    pub fn read(&mut self) -> Option<u8> {
        match self.bytes.get(self.pos as usize) {
            Some(&b) => {
                self.pos += 1;
                self.can_putback = true;
                Some(b)
            }
            None => {
                self.can_putback = false;
                None
            }
        }
    }

    /// Hand the last byte read back, so the next `read` returns it again.
    ///
    /// Only one byte can be pending. Putting back after `read` returned
    /// `None`, or twice in a row, does nothing.
    #[inline]
    pub fn putback(&mut self) {
        if self.can_putback {
            self.pos -= 1;
            self.can_putback = false;
        }
    }

    /// Byte offset of the next byte `read` will return.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Bytes in `start..end`, clamped to the source.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        let end = (end as usize).min(self.bytes.len());
        let start = (start as usize).min(end);
        &self.bytes[start..end]
    }

    /// Skip forward to the next occurrence of `byte` without consuming it,
    /// or to end of input if there is none.
    ///
    /// Returns the number of newlines skipped over so the caller can keep
    /// its line counter in step.
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let start = self.pos as usize;
        let rest = &self.bytes[start.min(self.bytes.len())..];
        let skipped = memchr::memchr(byte, rest).unwrap_or(rest.len());
        let newlines = memchr::memchr_iter(b'\n', &rest[..skipped]).count();
        self.pos += u32::try_from(skipped).unwrap_or(u32::MAX - self.pos);
        self.can_putback = false;
        u32::try_from(newlines).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests;

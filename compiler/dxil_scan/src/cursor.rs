//! Bounds-checked cursor over the bytes of the scanned text.
//!
//! The scanner must stay a pure function of `(text, pos)`, so the cursor
//! borrows the caller's buffer directly instead of copying it into a
//! sentinel-terminated one. Every read is bounds-checked; `current()` at EOF
//! returns `0x00`, which matches no sigil.

use crate::chars::utf8_width;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at `pos`. Positions past the end are clamped to EOF.
    pub(crate) fn new(buf: &'a [u8], pos: usize) -> Self {
        Self {
            buf,
            pos: pos.min(buf.len()),
        }
    }

    /// Byte at the current position, or `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.buf.get(pos).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Advance by one byte. No-op at EOF.
    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance past one full UTF-8 character. No-op at EOF.
    ///
    /// Clamped to the buffer length so a truncated sequence cannot push the
    /// cursor out of bounds.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        if !self.is_eof() {
            let width = utf8_width(self.current());
            self.pos = (self.pos + width).min(self.buf.len());
        }
    }

    /// Advance while `pred` returns `true` for the current byte, stopping at EOF.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Advance past the next `\n`, or to EOF if there is none.
    pub(crate) fn eat_line(&mut self) {
        let remaining = &self.buf[self.pos..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.buf.len(),
        }
    }

    /// Advance to the next `"` without consuming it, or to EOF.
    ///
    /// Returns `true` if a quote was found.
    pub(crate) fn skip_to_quote(&mut self) -> bool {
        let remaining = &self.buf[self.pos..];
        if let Some(offset) = memchr::memchr(b'"', remaining) {
            self.pos += offset;
            true
        } else {
            self.pos = self.buf.len();
            false
        }
    }
}

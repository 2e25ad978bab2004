//! Classified byte ranges produced by the scanner.

use std::ops::Range;

use crate::TokenCategory;

/// A classified, contiguous slice of the scanned text.
///
/// Offsets are byte offsets into the UTF-8 text. Ranges produced by the
/// scanner always have `len >= 1` and fall on character boundaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenRange {
    pub start: usize,
    pub len: usize,
    pub category: TokenCategory,
}

impl TokenRange {
    #[inline]
    pub const fn new(start: usize, len: usize, category: TokenCategory) -> Self {
        TokenRange {
            start,
            len,
            category,
        }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The covered slice of `text`.
    ///
    /// `text` must be the buffer this range was scanned from.
    #[inline]
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.as_range()]
    }
}

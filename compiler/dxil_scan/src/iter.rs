//! Lazy range sequences over a text buffer.
//!
//! [`Ranges`] holds nothing but `(text, position, bound)` and calls
//! [`next_range`] on demand. Because the scanner is pure, a consumer can
//! start a new sequence at any token boundary and get the same ranges a
//! full scan would have produced from that point.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::{next_range, TokenRange};

/// Iterator over the ranges of a text buffer.
#[derive(Clone, Debug)]
pub struct Ranges<'a> {
    text: &'a str,
    pos: usize,
    /// Stop once a range would start at or beyond this offset.
    bound: usize,
}

impl<'a> Ranges<'a> {
    /// Offset the next call to `next()` scans from.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The buffer being scanned, for slicing out range text.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl Iterator for Ranges<'_> {
    type Item = TokenRange;

    fn next(&mut self) -> Option<TokenRange> {
        if self.pos >= self.bound {
            return None;
        }
        let range = next_range(self.text, self.pos)?;
        self.pos = range.end();
        Some(range)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bound.min(self.text.len()).saturating_sub(self.pos);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Ranges<'_> {}

/// Scan the whole buffer from offset 0.
pub fn ranges(text: &str) -> Ranges<'_> {
    ranges_from(text, 0)
}

/// Scan from `offset` to the end of the buffer.
///
/// `offset` should be `0` or a range boundary from an earlier scan (for
/// example a [`line_start`]).
pub fn ranges_from(text: &str, offset: usize) -> Ranges<'_> {
    Ranges {
        text,
        pos: offset,
        bound: text.len(),
    }
}

/// Scan the sub-span `span`.
///
/// Ranges are produced while their start lies before `span.end`. The last
/// range is not clipped and may extend past `span.end` if its token crosses
/// the boundary.
pub fn ranges_in(text: &str, span: Range<usize>) -> Ranges<'_> {
    Ranges {
        text,
        pos: span.start,
        bound: span.end.min(text.len()),
    }
}

/// Start offset of the line containing `offset`.
///
/// The natural place to resume scanning after an edit. Rescanning from a
/// line start matches a full scan except when the previous line ends inside
/// a whitespace run, a string literal or a quoted name.
pub fn line_start(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    memchr::memrchr(b'\n', &text.as_bytes()[..offset]).map_or(0, |nl| nl + 1)
}

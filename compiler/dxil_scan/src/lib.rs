//! Token scanner for DXIL / LLVM assembly text.
//!
//! Segments a text buffer into contiguous, non-overlapping [`TokenRange`]s,
//! each tagged with a [`TokenCategory`], for syntax highlighting. The scanner
//! never fails: malformed or partially-typed text degrades to coarser
//! categories instead of producing errors.
//!
//! # Architecture
//!
//! ```text
//! &str ──► next_range(text, pos) ──► Option<TokenRange>
//!                │
//!                ▼
//!          Ranges iterator (ranges / ranges_from / ranges_in)
//! ```
//!
//! [`next_range`] is a pure function of `(text, pos)`. A consumer can re-enter
//! the scan at any token boundary, which is all the invalidation an editor
//! needs after a buffer edit.

mod category;
pub mod chars;
mod cursor;
mod iter;
pub mod keywords;
mod range;
mod scanner;

pub use category::TokenCategory;
pub use iter::{line_start, ranges, ranges_from, ranges_in, Ranges};
pub use range::TokenRange;
pub use scanner::{classify_identifier, next_range};

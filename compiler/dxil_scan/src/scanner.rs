//! Hand-written range scanner.
//!
//! [`next_range`] classifies the single token starting at a byte offset. It
//! keeps no state between calls: the caller advances by feeding back
//! `range.end()`.
//!
//! # Design
//!
//! Dispatch is on the leading byte, in a fixed priority order. Each arm
//! advances a [`Cursor`] past the token body and returns the category. Every
//! arm consumes at least one byte, so a scan over `n` bytes takes at most
//! `n` steps. There is no error state; unterminated constructs run to the
//! end of the text.
//!
//! A few boundaries are deliberately loose and consumers depend on them:
//! - numbers and attribute groups swallow one trailing character after the
//!   digit run, whatever it is;
//! - a quoted variable name (`@"..."`) stops *before* its closing quote;
//! - `i` followed by a single digit is enough to make an integer type.

use crate::chars::{
    is_label_char, is_metadata_char, is_numeric, is_numeric_lead, is_punctuation, is_whitespace,
};
use crate::cursor::Cursor;
use crate::{keywords, TokenCategory, TokenRange};

/// Scan the token starting at byte offset `start`.
///
/// Returns `None` once `start` reaches (or passes) the end of `text`.
/// `start` should be `0` or the end of a previously returned range.
pub fn next_range(text: &str, start: usize) -> Option<TokenRange> {
    let bytes = text.as_bytes();
    if start >= bytes.len() {
        return None;
    }

    let mut cursor = Cursor::new(bytes, start);
    let category = match cursor.current() {
        b if is_whitespace(b) => whitespace(&mut cursor),
        b';' => comment(&mut cursor),
        b'@' => variable(&mut cursor, TokenCategory::GlobalVariable),
        b'%' => variable(&mut cursor, TokenCategory::LocalVariable),
        b'"' => string(&mut cursor),
        b'!' => metadata(&mut cursor),
        b'#' => attribute_group(&mut cursor),
        b if is_numeric_lead(b) => number(&mut cursor),
        b if is_punctuation(b) => {
            cursor.advance();
            TokenCategory::Punctuation
        }
        _ => identifier(&mut cursor, text, start),
    };

    let end = cursor.pos();
    debug_assert!(end > start, "scanner made no progress at {start}");
    Some(TokenRange::new(start, end - start, category))
}

/// Classify a bare word.
///
/// Priority: trailing `:` (label definition), `i` + digit (integer type),
/// keyword tables, then [`TokenCategory::Other`].
pub fn classify_identifier(word: &str) -> TokenCategory {
    let bytes = word.as_bytes();
    if bytes.last() == Some(&b':') {
        return TokenCategory::Label;
    }
    // Only the first digit is checked, so `i8x` still counts as a type.
    if let [b'i', digit, ..] = bytes {
        if digit.is_ascii_digit() {
            return TokenCategory::TypeName;
        }
    }
    keywords::lookup(word).unwrap_or(TokenCategory::Other)
}

// ─── Arms ──────────────────────────────────────────────────────

fn whitespace(cursor: &mut Cursor<'_>) -> TokenCategory {
    cursor.eat_while(is_whitespace);
    TokenCategory::Whitespace
}

fn comment(cursor: &mut Cursor<'_>) -> TokenCategory {
    cursor.eat_line();
    TokenCategory::Comment
}

/// Shared by `@` and `%`.
///
/// A quoted name stops at its closing quote without consuming it; the quote
/// then starts the next token.
fn variable(cursor: &mut Cursor<'_>, category: TokenCategory) -> TokenCategory {
    cursor.advance(); // sigil
    if cursor.current() == b'"' {
        cursor.advance();
        cursor.skip_to_quote();
    } else {
        cursor.eat_while(is_label_char);
    }
    category
}

/// No escape processing: `\"` ends the literal like any other quote.
fn string(cursor: &mut Cursor<'_>) -> TokenCategory {
    cursor.advance(); // opening quote
    if !cursor.skip_to_quote() {
        return TokenCategory::StringConstant;
    }
    cursor.advance(); // closing quote
    if cursor.current() == b':' {
        cursor.advance();
        return TokenCategory::Label;
    }
    TokenCategory::StringConstant
}

fn metadata(cursor: &mut Cursor<'_>) -> TokenCategory {
    cursor.advance(); // '!'
    cursor.eat_while(is_metadata_char);
    TokenCategory::Metadata
}

fn attribute_group(cursor: &mut Cursor<'_>) -> TokenCategory {
    cursor.advance(); // '#'
    cursor.eat_while(|b| b.is_ascii_digit());
    cursor.advance_char();
    TokenCategory::AttributeGroup
}

fn number(cursor: &mut Cursor<'_>) -> TokenCategory {
    cursor.advance(); // lead digit or sign
    cursor.eat_while(is_numeric);
    cursor.advance_char();
    TokenCategory::Number
}

fn identifier(cursor: &mut Cursor<'_>, text: &str, start: usize) -> TokenCategory {
    cursor.eat_while(|b| !is_whitespace(b) && !is_punctuation(b));
    // `start` inside a multi-byte character cannot be sliced; it is still a
    // valid (if meaningless) token.
    text.get(start..cursor.pos())
        .map_or(TokenCategory::Other, classify_identifier)
}

#[cfg(test)]
mod tests;

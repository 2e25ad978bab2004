use pretty_assertions::assert_eq;

use super::*;
use crate::TokenCategory::{
    AttributeGroup, Comment, GlobalVariable, Instruction, Keyword, Label, LocalVariable, Metadata,
    Number, Other, Punctuation, StringConstant, TypeName, Whitespace,
};

/// Helper: scan from offset 0 to the end, collecting every range.
fn scan(source: &str) -> Vec<TokenRange> {
    let mut ranges = Vec::new();
    let mut pos = 0;
    while let Some(range) = next_range(source, pos) {
        pos = range.end();
        ranges.push(range);
    }
    ranges
}

/// Helper: scan and pair each category with its text.
fn scan_pairs(source: &str) -> Vec<(TokenCategory, &str)> {
    scan(source)
        .into_iter()
        .map(|r| (r.category, r.text(source)))
        .collect()
}

/// Helper: the first range of `source`.
fn first(source: &str) -> TokenRange {
    match next_range(source, 0) {
        Some(range) => range,
        None => panic!("no range for {source:?}"),
    }
}

// ─── End of input ──────────────────────────────────────────────

#[test]
fn empty_text_has_no_ranges() {
    assert_eq!(next_range("", 0), None);
}

#[test]
fn offset_at_or_past_end_is_end_of_input() {
    assert_eq!(next_range("abc", 3), None);
    assert_eq!(next_range("abc", 99), None);
}

// ─── Single tokens ─────────────────────────────────────────────

#[test]
fn whitespace_run() {
    assert_eq!(first("  \n"), TokenRange::new(0, 3, Whitespace));
    assert_eq!(first(" \t\r\nx"), TokenRange::new(0, 4, Whitespace));
}

#[test]
fn comment_consumes_line_terminator() {
    let text = "; comment\n";
    assert_eq!(first(text), TokenRange::new(0, text.len(), Comment));
}

#[test]
fn comment_crlf() {
    assert_eq!(first("; a\r\nx"), TokenRange::new(0, 5, Comment));
}

#[test]
fn comment_to_end_of_text() {
    assert_eq!(first("; no newline"), TokenRange::new(0, 12, Comment));
}

#[test]
fn local_variable() {
    assert_eq!(first("%foo"), TokenRange::new(0, 4, LocalVariable));
    assert_eq!(first("%3 = "), TokenRange::new(0, 2, LocalVariable));
    assert_eq!(first("%struct.Foo$x-1_y,"), TokenRange::new(0, 17, LocalVariable));
}

#[test]
fn global_variable() {
    assert_eq!(first("@main()"), TokenRange::new(0, 5, GlobalVariable));
    assert_eq!(
        first("@dx.op.loadInput.f32("),
        TokenRange::new(0, 20, GlobalVariable)
    );
}

#[test]
fn lone_sigil_is_one_byte() {
    assert_eq!(first("%"), TokenRange::new(0, 1, LocalVariable));
    assert_eq!(first("@ x"), TokenRange::new(0, 1, GlobalVariable));
}

#[test]
fn quoted_global_stops_before_closing_quote() {
    let text = "@\"My Global\"";
    assert_eq!(first(text), TokenRange::new(0, 11, GlobalVariable));
    // The closing quote opens an unterminated string.
    assert_eq!(
        scan_pairs(text),
        vec![(GlobalVariable, "@\"My Global"), (StringConstant, "\"")]
    );
}

#[test]
fn quoted_local_unterminated_runs_to_end() {
    assert_eq!(first("%\"a b"), TokenRange::new(0, 5, LocalVariable));
}

#[test]
fn string_constant() {
    assert_eq!(first("\"hello\" x"), TokenRange::new(0, 7, StringConstant));
}

#[test]
fn string_has_no_escapes() {
    assert_eq!(
        scan_pairs("\"a\\\"b\""),
        vec![(StringConstant, "\"a\\\""), (Other, "b"), (StringConstant, "\"")]
    );
}

#[test]
fn unterminated_string_runs_to_end() {
    assert_eq!(first("\"abc\ndef"), TokenRange::new(0, 8, StringConstant));
}

#[test]
fn quoted_label() {
    assert_eq!(first("\"bb 1\": "), TokenRange::new(0, 7, Label));
}

#[test]
fn metadata_reference() {
    assert_eq!(first("!dx.entryPoints = "), TokenRange::new(0, 15, Metadata));
    assert_eq!(first("!0,"), TokenRange::new(0, 2, Metadata));
    assert_eq!(first("!\\34abc"), TokenRange::new(0, 7, Metadata));
}

#[test]
fn bare_bang_is_metadata() {
    assert_eq!(first("!{"), TokenRange::new(0, 1, Metadata));
}

#[test]
fn attribute_group_takes_one_trailing_character() {
    assert_eq!(first("#42 "), TokenRange::new(0, 4, AttributeGroup));
    assert_eq!(first("#0\n"), TokenRange::new(0, 3, AttributeGroup));
    assert_eq!(first("#"), TokenRange::new(0, 1, AttributeGroup));
    assert_eq!(first("#7"), TokenRange::new(0, 2, AttributeGroup));
}

#[test]
fn number_takes_one_trailing_character() {
    assert_eq!(first("42, "), TokenRange::new(0, 3, Number));
    assert_eq!(first("0)"), TokenRange::new(0, 2, Number));
    assert_eq!(first("7"), TokenRange::new(0, 1, Number));
}

#[test]
fn number_forms() {
    assert_eq!(first("1.0e+5 "), TokenRange::new(0, 7, Number));
    assert_eq!(first("-1"), TokenRange::new(0, 2, Number));
    assert_eq!(first("+"), TokenRange::new(0, 1, Number));
    // Hex float literals stop at `x`, which is swallowed as the trailing character.
    assert_eq!(first("0x3FF0"), TokenRange::new(0, 2, Number));
}

#[test]
fn punctuation_is_single_byte() {
    for p in [".", ",", "(", ")", "{", "}", "\\"] {
        assert_eq!(first(p), TokenRange::new(0, 1, Punctuation), "{p:?}");
    }
    assert_eq!(first("(("), TokenRange::new(0, 1, Punctuation));
}

// ─── Identifier classification ─────────────────────────────────

#[test]
fn integer_types() {
    assert_eq!(first("i32"), TokenRange::new(0, 3, TypeName));
    assert_eq!(first("i1 "), TokenRange::new(0, 2, TypeName));
    assert_eq!(first("i8*"), TokenRange::new(0, 3, TypeName));
}

#[test]
fn integer_type_checks_only_first_digit() {
    assert_eq!(classify_identifier("i128"), TypeName);
    assert_eq!(classify_identifier("i8x"), TypeName);
    assert_eq!(classify_identifier("i"), Other);
    assert_eq!(classify_identifier("ix"), Other);
}

#[test]
fn keyword_categories() {
    assert_eq!(first("add"), TokenRange::new(0, 3, Instruction));
    assert_eq!(first("define"), TokenRange::new(0, 6, Keyword));
    assert_eq!(first("float"), TokenRange::new(0, 5, TypeName));
}

#[test]
fn label_definition() {
    assert_eq!(first("foo:"), TokenRange::new(0, 4, Label));
    assert_eq!(classify_identifier(":"), Label);
    assert_eq!(classify_identifier("add:"), Label);
}

#[test]
fn colon_in_the_middle_is_not_a_label() {
    assert_eq!(classify_identifier("a:b"), Other);
}

#[test]
fn unknown_words_are_other() {
    assert_eq!(first("entry"), TokenRange::new(0, 5, Other));
    assert_eq!(first("="), TokenRange::new(0, 1, Other));
    assert_eq!(first("<4"), TokenRange::new(0, 2, Other));
}

#[test]
fn identifier_runs_through_sigils() {
    // Only whitespace and punctuation end a bare word.
    assert_eq!(first("foo;bar@baz"), TokenRange::new(0, 11, Other));
}

// ─── Unicode ───────────────────────────────────────────────────

#[test]
fn non_ascii_word() {
    assert_eq!(first("héllo "), TokenRange::new(0, 6, Other));
}

#[test]
fn trailing_character_is_whole_char() {
    assert_eq!(first("1é"), TokenRange::new(0, 3, Number));
    assert_eq!(first("#0€"), TokenRange::new(0, 5, AttributeGroup));
}

#[test]
fn start_inside_character_does_not_panic() {
    // Byte 1 is the continuation byte of `é`.
    assert_eq!(next_range("é", 1), Some(TokenRange::new(1, 1, Other)));
}

#[test]
fn nul_byte_is_an_identifier() {
    assert_eq!(first("\0\0 "), TokenRange::new(0, 2, Other));
}

// ─── Whole lines ───────────────────────────────────────────────

#[test]
fn function_header() {
    assert_eq!(
        scan_pairs("define void @main() #0 {"),
        vec![
            (Keyword, "define"),
            (Whitespace, " "),
            (TypeName, "void"),
            (Whitespace, " "),
            (GlobalVariable, "@main"),
            (Punctuation, "("),
            (Punctuation, ")"),
            (Whitespace, " "),
            (AttributeGroup, "#0 "),
            (Punctuation, "{"),
        ]
    );
}

#[test]
fn call_instruction() {
    assert_eq!(
        scan_pairs("%3 = call float @dx.op.loadInput.f32(i32 4, i8 0)"),
        vec![
            (LocalVariable, "%3"),
            (Whitespace, " "),
            (Other, "="),
            (Whitespace, " "),
            (Instruction, "call"),
            (Whitespace, " "),
            (TypeName, "float"),
            (Whitespace, " "),
            (GlobalVariable, "@dx.op.loadInput.f32"),
            (Punctuation, "("),
            (TypeName, "i32"),
            (Whitespace, " "),
            (Number, "4,"),
            (Whitespace, " "),
            (TypeName, "i8"),
            (Whitespace, " "),
            (Number, "0)"),
        ]
    );
}

#[test]
fn named_metadata() {
    assert_eq!(
        scan_pairs("!dx.entryPoints = !{!0}"),
        vec![
            (Metadata, "!dx.entryPoints"),
            (Whitespace, " "),
            (Other, "="),
            (Whitespace, " "),
            (Metadata, "!"),
            (Punctuation, "{"),
            (Metadata, "!0"),
            (Punctuation, "}"),
        ]
    );
}

#[test]
fn attribute_group_definition() {
    assert_eq!(
        scan_pairs("attributes #0 = { nounwind }"),
        vec![
            (Keyword, "attributes"),
            (Whitespace, " "),
            (AttributeGroup, "#0 "),
            (Other, "="),
            (Whitespace, " "),
            (Punctuation, "{"),
            (Whitespace, " "),
            (Keyword, "nounwind"),
            (Whitespace, " "),
            (Punctuation, "}"),
        ]
    );
}

#[test]
fn label_then_comment() {
    assert_eq!(
        scan_pairs("entry:  ; preds = %0\n  ret void"),
        vec![
            (Label, "entry:"),
            (Whitespace, "  "),
            (Comment, "; preds = %0\n"),
            (Whitespace, "  "),
            (Instruction, "ret"),
            (Whitespace, " "),
            (TypeName, "void"),
        ]
    );
}

// ─── Purity ────────────────────────────────────────────────────

#[test]
fn same_input_same_range() {
    let text = "%a = add i32 %b, 1";
    for pos in 0..text.len() {
        assert_eq!(next_range(text, pos), next_range(text, pos), "pos {pos}");
    }
}

#[test]
fn ranges_tile_the_text() {
    let text = "@\"x\" = internal global [4 x float] zeroinitializer, align 4 ; c\n!1 = !{i32 1}";
    let ranges = scan(text);
    let mut expected_start = 0;
    for range in &ranges {
        assert_eq!(range.start, expected_start);
        assert!(range.len >= 1);
        expected_start = range.end();
    }
    assert_eq!(expected_start, text.len());
}

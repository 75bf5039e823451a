//! Highlighter tests
//!
//! Covers the span invariants (coverage, ordering, determinism) and the
//! classification priority rules of the combined pattern.

use codepad::model::EditMode;
use codepad::syntax::{highlight, style_for, HighlightTag, LanguageId, StyleSpans};

fn spans_for(text: &str, lang: LanguageId) -> StyleSpans {
    highlight(text, &lang.profile().pattern)
}

// ========================================================================
// Span invariants
// ========================================================================

#[test]
fn test_span_lengths_cover_text_exactly() {
    let samples = [
        "",
        "x",
        "public static void main(String[] args) { return 42; }",
        "def f(n):\n    return n * 2  # double\n",
        "const s = `tpl ${x}`; // done",
        "/* multi\nline */ class Foo {}",
        "çãé ünïcode // comment",
        "   \n\t\n   ",
    ];
    for lang in [LanguageId::Java, LanguageId::JavaScript, LanguageId::Python] {
        for text in samples {
            let spans = spans_for(text, lang);
            assert_eq!(
                spans.total_len(),
                text.len(),
                "coverage broken for {:?} on {:?}",
                lang,
                text
            );
        }
    }
}

#[test]
fn test_spans_are_position_ordered_and_non_overlapping() {
    // Run-length spans cannot overlap by construction; check that walking
    // them reconstructs every byte boundary in order.
    let text = "if (count >= 10) { emit(\"done\"); }";
    let spans = spans_for(text, LanguageId::Java);
    let mut pos = 0;
    for span in &spans {
        let end = pos + span.len;
        assert!(end <= text.len());
        assert!(text.is_char_boundary(end));
        pos = end;
    }
    assert_eq!(pos, text.len());
}

#[test]
fn test_highlight_is_deterministic() {
    let text = "for (int i = 0; i < n; i++) { sum += data[i]; }";
    let first = spans_for(text, LanguageId::Java);
    let second = spans_for(text, LanguageId::Java);
    assert_eq!(first, second);
}

#[test]
fn test_no_match_yields_single_untagged_span() {
    // Python profile: no C-style punctuation-free text matches at all
    let text = "\u{00a1}\u{00bf}";
    let spans = spans_for(text, LanguageId::Python);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans.as_slice()[0].len, text.len());
    assert_eq!(spans.as_slice()[0].tag, None);
}

// ========================================================================
// Classification priority
// ========================================================================

#[test]
fn test_keyword_before_paren_stays_keyword() {
    // `while (` would also satisfy the function-call lookahead; the
    // keyword alternative must win.
    let spans = spans_for("while (x)", LanguageId::Java);
    assert_eq!(spans.as_slice()[0].len, 5);
    assert_eq!(spans.as_slice()[0].tag, Some(HighlightTag::Keyword));
}

#[test]
fn test_capitalized_call_is_type_not_function() {
    let spans = spans_for("Integer(", LanguageId::Java);
    assert_eq!(spans.as_slice()[0].tag, Some(HighlightTag::Type));
}

#[test]
fn test_lowercase_call_is_function() {
    let spans = spans_for("compute(x)", LanguageId::Java);
    assert_eq!(spans.as_slice()[0].len, 7);
    assert_eq!(spans.as_slice()[0].tag, Some(HighlightTag::Function));
}

#[test]
fn test_plain_word_is_identifier() {
    let spans = spans_for("compute", LanguageId::Java);
    assert_eq!(spans.as_slice()[0].tag, Some(HighlightTag::Identifier));
}

#[test]
fn test_language_specific_keywords() {
    // `def` is a keyword in Python, a plain identifier in Java
    let py = spans_for("def", LanguageId::Python);
    assert_eq!(py.as_slice()[0].tag, Some(HighlightTag::Keyword));

    let java = spans_for("def", LanguageId::Java);
    assert_eq!(java.as_slice()[0].tag, Some(HighlightTag::Identifier));
}

#[test]
fn test_comment_protects_contents() {
    let text = "// if return while";
    let spans = spans_for(text, LanguageId::Java);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans.as_slice()[0].tag, Some(HighlightTag::Comment));
}

// ========================================================================
// Mode switching
// ========================================================================

#[test]
fn test_text_mode_is_single_untagged_run() {
    let text = "int x = 1; // still plain";
    let spans = style_for(text, EditMode::Text, LanguageId::Java);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans.as_slice()[0].len, text.len());
    assert_eq!(spans.as_slice()[0].tag, None);
}

#[test]
fn test_switching_back_to_code_rehighlights_identically() {
    let text = "int x = 1;";
    let before = style_for(text, EditMode::Code, LanguageId::Java);
    let _cleared = style_for(text, EditMode::Text, LanguageId::Java);
    let after = style_for(text, EditMode::Code, LanguageId::Java);
    assert_eq!(before, after);
    assert!(after.len() > 1);
}

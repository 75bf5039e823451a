//! Classification pattern construction
//!
//! Builds one alternation regex per language with a named group per style
//! category. Alternation order is the classification priority: at any
//! position the engine tries alternatives left to right, so a keyword that
//! also looks like an identifier is classified as a keyword. That order is
//! an invariant of the format, mirrored by [`MATCH_PRIORITY`].

use fancy_regex::Regex;

use super::spans::HighlightTag;

/// Named groups in classification priority order
///
/// `classify` walks this list and the first group that participated in a
/// match decides the tag. Must list every named group in the pattern, in
/// the same order as the alternation.
pub const MATCH_PRIORITY: &[(&str, HighlightTag)] = &[
    ("keyword", HighlightTag::Keyword),
    ("ty", HighlightTag::Type),
    ("function", HighlightTag::Function),
    ("ident", HighlightTag::Identifier),
    ("paren", HighlightTag::Paren),
    ("brace", HighlightTag::Brace),
    ("bracket", HighlightTag::Bracket),
    ("semicolon", HighlightTag::Semicolon),
    ("string", HighlightTag::String),
    ("comment", HighlightTag::Comment),
    ("number", HighlightTag::Number),
];

/// A compiled per-language classification pattern
#[derive(Debug)]
pub struct SyntaxPattern {
    regex: Regex,
}

impl SyntaxPattern {
    /// Build the combined alternation for one language
    ///
    /// `comment_pattern` and `string_pattern` are regex sources supplied by
    /// the language profile. Keywords are plain words and are inserted
    /// unquoted. Construction is total: the sources are fixed per language
    /// and the assembled pattern is well-formed by construction.
    pub fn build(
        keywords: &[&str],
        comment_pattern: &str,
        string_pattern: &str,
    ) -> Self {
        let keyword_alt = keywords.join("|");
        let source = format!(
            "(?P<keyword>\\b(?:{keyword_alt})\\b)\
            |(?P<ty>\\b[A-Z]\\w*\\b)\
            |(?P<function>\\b[a-zA-Z_]\\w*(?=\\s*\\())\
            |(?P<ident>\\b[a-zA-Z_]\\w*\\b)\
            |(?P<paren>[()])\
            |(?P<brace>[{{}}])\
            |(?P<bracket>[\\[\\]])\
            |(?P<semicolon>;)\
            |(?P<string>{string_pattern})\
            |(?P<comment>{comment_pattern})\
            |(?P<number>\\b\\d+(?:\\.\\d+)?\\b)"
        );
        let regex = Regex::new(&source).expect("language alternation pattern is well-formed");
        Self { regex }
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

//! Language identification and profiles
//!
//! Maps file extensions to language IDs and owns the per-language keyword
//! sets and compiled classification patterns. "Plain text" is an edit mode,
//! not a language: [`LanguageId::detect_from_path`] returns `None` for
//! extensions that should open without highlighting.

use std::path::Path;
use std::sync::OnceLock;

use super::patterns::SyntaxPattern;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    Java,
    JavaScript,
    Python,
}

const KEYWORDS_JAVA: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while",
];

const KEYWORDS_JS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "export", "extends", "finally", "for", "function", "if",
    "import", "in", "instanceof", "let", "new", "return", "super", "switch", "this",
    "throw", "try", "typeof", "var", "void", "while", "with", "yield", "await",
];

const KEYWORDS_PY: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else",
    "except", "False", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "None", "nonlocal", "not", "or", "pass", "raise", "return", "True",
    "try", "while", "with", "yield",
];

// Line comments everywhere; block comments only where the language has them.
const COMMENTS_C_FAMILY: &str = r"//[^\n]*|/\*(?s:.)*?\*/";
const COMMENTS_HASH: &str = r"#[^\n]*";

const STRINGS_QUOTED: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#;
// Backtick template literals exist only in the JS profile.
const STRINGS_QUOTED_OR_BACKTICK: &str =
    r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#;

/// Per-language bundle of keywords and the compiled classification pattern
#[derive(Debug)]
pub struct LanguageProfile {
    pub id: LanguageId,
    pub keywords: &'static [&'static str],
    pub pattern: SyntaxPattern,
}

impl LanguageId {
    /// Stable id used in the drafts format
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Java => "java",
            LanguageId::JavaScript => "js",
            LanguageId::Python => "py",
        }
    }

    /// Parse a stable id back; `None` for unknown or blank ids
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "java" => Some(LanguageId::Java),
            "js" => Some(LanguageId::JavaScript),
            "py" => Some(LanguageId::Python),
            _ => None,
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Java => "Java",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Python => "Python",
        }
    }

    /// Detect language from file extension
    ///
    /// `None` means the file should open in plain-text mode. Unknown
    /// extensions default to Java, matching the editor's new-tab default.
    pub fn detect_from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "java" => Some(LanguageId::Java),
            "js" | "jsx" | "ts" => Some(LanguageId::JavaScript),
            "py" => Some(LanguageId::Python),
            "html" | "htm" | "css" | "txt" | "md" => None,
            _ => Some(LanguageId::Java),
        }
    }

    /// Detect language from file path; see [`detect_from_extension`]
    ///
    /// [`detect_from_extension`]: LanguageId::detect_from_extension
    pub fn detect_from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::detect_from_extension(ext),
            None => Some(LanguageId::Java),
        }
    }

    /// Ordered keyword set for this language
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Java => KEYWORDS_JAVA,
            LanguageId::JavaScript => KEYWORDS_JS,
            LanguageId::Python => KEYWORDS_PY,
        }
    }

    /// The lazily compiled profile for this language
    pub fn profile(&self) -> &'static LanguageProfile {
        static JAVA: OnceLock<LanguageProfile> = OnceLock::new();
        static JS: OnceLock<LanguageProfile> = OnceLock::new();
        static PY: OnceLock<LanguageProfile> = OnceLock::new();

        let build = |id: LanguageId, comments: &str, strings: &str| LanguageProfile {
            id,
            keywords: id.keywords(),
            pattern: SyntaxPattern::build(id.keywords(), comments, strings),
        };

        match self {
            LanguageId::Java => JAVA.get_or_init(|| {
                build(LanguageId::Java, COMMENTS_C_FAMILY, STRINGS_QUOTED)
            }),
            LanguageId::JavaScript => JS.get_or_init(|| {
                build(
                    LanguageId::JavaScript,
                    COMMENTS_C_FAMILY,
                    STRINGS_QUOTED_OR_BACKTICK,
                )
            }),
            LanguageId::Python => PY.get_or_init(|| {
                build(LanguageId::Python, COMMENTS_HASH, STRINGS_QUOTED)
            }),
        }
    }
}

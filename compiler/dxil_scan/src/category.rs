//! Lexical categories assigned to token ranges.

use std::fmt;

/// Lexical category of a [`TokenRange`](crate::TokenRange).
///
/// Closed set: a renderer maps each variant to a display style. `Other`
/// covers everything the scanner does not recognize and is usually drawn
/// unstyled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    Whitespace,
    /// `;` to end of line.
    Comment,
    /// `i32`, `float`, `void`, ...
    TypeName,
    /// Directives, linkage, attributes, predicates, constants.
    Keyword,
    /// `!0`, `!dx.entryPoints`, ...
    Metadata,
    Punctuation,
    /// Instruction mnemonics (`add`, `load`, `getelementptr`, ...).
    Instruction,
    /// `entry:` or `"quoted name":`.
    Label,
    /// `@name` or `@"quoted name`.
    GlobalVariable,
    /// `%name` or `%"quoted name`.
    LocalVariable,
    Number,
    StringConstant,
    /// `#0` attribute group references.
    AttributeGroup,
    Other,
}

impl TokenCategory {
    /// Every category, in declaration order.
    pub const ALL: [TokenCategory; 14] = [
        TokenCategory::Whitespace,
        TokenCategory::Comment,
        TokenCategory::TypeName,
        TokenCategory::Keyword,
        TokenCategory::Metadata,
        TokenCategory::Punctuation,
        TokenCategory::Instruction,
        TokenCategory::Label,
        TokenCategory::GlobalVariable,
        TokenCategory::LocalVariable,
        TokenCategory::Number,
        TokenCategory::StringConstant,
        TokenCategory::AttributeGroup,
        TokenCategory::Other,
    ];

    /// Stable lowercase name, used in dumps and statistics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "whitespace",
            TokenCategory::Comment => "comment",
            TokenCategory::TypeName => "type_name",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Metadata => "metadata",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::Instruction => "instruction",
            TokenCategory::Label => "label",
            TokenCategory::GlobalVariable => "global_variable",
            TokenCategory::LocalVariable => "local_variable",
            TokenCategory::Number => "number",
            TokenCategory::StringConstant => "string_constant",
            TokenCategory::AttributeGroup => "attribute_group",
            TokenCategory::Other => "other",
        }
    }

    /// Index of this category within [`TokenCategory::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Category-to-style mapping for terminal rendering.
//!
//! Styles are ANSI SGR parameter strings (`"1;34"` is bold blue). A category
//! without a style is written unchanged.

use dxil_scan::{ranges, TokenCategory};

const RESET: &str = "\x1b[0m";

/// Display style for each [`TokenCategory`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    styles: [Option<&'static str>; TokenCategory::ALL.len()],
}

impl Default for Theme {
    fn default() -> Self {
        Theme::plain()
            .with_style(TokenCategory::Comment, Some("32"))
            .with_style(TokenCategory::TypeName, Some("36"))
            .with_style(TokenCategory::Keyword, Some("34"))
            .with_style(TokenCategory::Metadata, Some("35"))
            .with_style(TokenCategory::Instruction, Some("1;34"))
            .with_style(TokenCategory::Label, Some("1"))
            .with_style(TokenCategory::GlobalVariable, Some("33"))
            .with_style(TokenCategory::LocalVariable, Some("93"))
            .with_style(TokenCategory::Number, Some("91"))
            .with_style(TokenCategory::StringConstant, Some("31"))
            .with_style(TokenCategory::AttributeGroup, Some("95"))
    }
}

impl Theme {
    /// Theme with no styles; painting reproduces the input.
    pub const fn plain() -> Self {
        Theme {
            styles: [None; TokenCategory::ALL.len()],
        }
    }

    #[must_use]
    pub fn with_style(mut self, category: TokenCategory, style: Option<&'static str>) -> Self {
        self.styles[category.index()] = style;
        self
    }

    pub const fn style(&self, category: TokenCategory) -> Option<&'static str> {
        self.styles[category.index()]
    }

    /// Scan `text` and wrap every styled range in its escape sequence.
    pub fn paint(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 2);
        for range in ranges(text) {
            let slice = range.text(text);
            match self.style(range.category) {
                Some(style) => {
                    out.push_str("\x1b[");
                    out.push_str(style);
                    out.push('m');
                    out.push_str(slice);
                    out.push_str(RESET);
                }
                None => out.push_str(slice),
            }
        }
        out
    }
}

//! Typeface style flags.

/// Bold/italic style of the widget's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Typeface {
    bold: bool,
    italic: bool,
}

impl Typeface {
    /// Plain text.
    pub const DEFAULT: Self = Self {
        bold: false,
        italic: false,
    };

    /// Bold text.
    pub const BOLD: Self = Self {
        bold: true,
        italic: false,
    };

    /// Italic text.
    pub const ITALIC: Self = Self {
        bold: false,
        italic: true,
    };

    /// Bold italic text.
    pub const BOLD_ITALIC: Self = Self {
        bold: true,
        italic: true,
    };

    /// Returns `true` if the typeface is bold.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// Returns `true` if the typeface is italic.
    pub fn is_italic(&self) -> bool {
        self.italic
    }
}

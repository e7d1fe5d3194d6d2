//! Font selection state and text-metrics providers.
//!
//! Every backend keeps a "selected font" made of a size and an italic flag, cf [`FontMode`].
//! The layout engine always selects the font right before asking for metrics or drawing text,
//! so a provider only ever needs to answer for the currently selected font.
//!
//! Two font-independent providers are defined here:
//!
//!  - [`FixedMetrics`]: every character has the same width, every line the same height.
//!    This is what layout tests use, as results do not depend on any installed font.
//!  - [`ApproxMetrics`]: proportional widths per character class, scaled by the font size.
//!    Good enough to export vector markup without shipping a font file.
//!
//! With the feature `ttfparser-fontparser`, [`backend::ttf_parser::TtfMetrics`] reads real metrics from a font file.

/// Implementations of [`TextMetrics`](crate::render::TextMetrics) for various font parsing crates, like 'ttf-parser'.
#[deny(missing_docs)]
pub mod backend;

use crate::layout::constants::DEFAULT_FONT_SIZE;
use crate::render::TextMetrics;

/// The currently selected font: a size in device units and a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMode {
    /// Font size in device units (cell height)
    pub size:   i32,
    /// Italic when true, upright otherwise
    pub italic: bool,
}

impl Default for FontMode {
    fn default() -> Self {
        Self { size: DEFAULT_FONT_SIZE, italic: false }
    }
}

impl FontMode {
    /// Selects size `size`. Returns true if this changed the selection.
    pub fn set_size(&mut self, size: i32) -> bool {
        let changed = self.size != size;
        self.size = size;
        changed
    }

    /// Selects italic or upright style. Returns true if this changed the selection.
    pub fn set_italic(&mut self, italic: bool) -> bool {
        let changed = self.italic != italic;
        self.italic = italic;
        changed
    }
}


/// Metrics where every character is `char_width` wide and every line `line_height` high,
/// whatever the selected font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMetrics {
    mode: FontMode,
    /// Width of any single character
    pub char_width:  i32,
    /// Value returned by [`TextMetrics::text_height`]
    pub line_height: i32,
}

impl FixedMetrics {
    /// Creates a provider with the given constant character width and line height.
    pub fn new(char_width: i32, line_height: i32) -> Self {
        Self { mode: FontMode::default(), char_width, line_height }
    }

    /// The font selected last
    pub fn mode(&self) -> FontMode {
        self.mode
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(10, 20)
    }
}

impl TextMetrics for FixedMetrics {
    fn set_font_size(&mut self, size: i32) {
        self.mode.set_size(size);
    }

    fn set_font_style(&mut self, italic: bool) {
        self.mode.set_italic(italic);
    }

    fn text_width(&mut self, text: &str) -> i32 {
        self.char_width * text.chars().count() as i32
    }

    fn text_height(&mut self) -> i32 {
        self.line_height
    }
}


/// Proportional metrics modelled on a Times-like serif face.
/// Advances are expressed in em and multiplied by the selected font size;
/// the line height equals the font size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproxMetrics {
    mode: FontMode,
}

impl ApproxMetrics {
    /// Creates a provider with the default font selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The font selected last
    pub fn mode(&self) -> FontMode {
        self.mode
    }

    /// Advance width of `c` in em
    pub fn advance(c: char) -> f64 {
        match c {
            'i' | 'j' | 'l' | '\'' | '.' | ',' | ':' | ';' | '!' | '|' => 0.28,
            'f' | 't' | 'r' | 'I' | 'J' | '(' | ')' | '[' | ']' | '{' | '}' | '/' => 0.33,
            ' ' => 0.25,
            'm' | 'M' | 'W' | '\u{2211}' | '\u{220F}' => 0.89,
            'w' => 0.72,
            '0' ..= '9' => 0.5,
            '+' | '-' | '=' | '<' | '>' | '\u{00B1}' | '\u{2260}' | '\u{2264}' | '\u{2265}' | '\u{2248}' | '\u{2192}' => 0.56,
            '\u{221E}' => 0.71,
            '\u{222B}' => 0.42,
            c if c.is_ascii_uppercase() => 0.67,
            c if c.is_ascii_lowercase() => 0.47,
            _ => 0.5,
        }
    }
}

impl TextMetrics for ApproxMetrics {
    fn set_font_size(&mut self, size: i32) {
        self.mode.set_size(size);
    }

    fn set_font_style(&mut self, italic: bool) {
        self.mode.set_italic(italic);
    }

    fn text_width(&mut self, text: &str) -> i32 {
        let em : f64 = text.chars().map(Self::advance).sum();
        (em * f64::from(self.mode.size)).round() as i32
    }

    fn text_height(&mut self) -> i32 {
        self.mode.size
    }
}

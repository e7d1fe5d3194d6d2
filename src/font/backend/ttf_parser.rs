
use crate::error::FontError;
use crate::font::FontMode;
use crate::render::TextMetrics;


/// A wrapper around 'ttf_parser::Face' which tracks the selected font size and style.
/// This wrapper implements the [`TextMetrics`] trait needed to do the layout.
///
/// A face carries a single style: italic text is measured with the upright advances
/// (backends drawing with this face slant the outlines instead).
pub struct TtfMetrics<'a> {
    font: ttf_parser::Face<'a>,
    mode: FontMode,
}

impl<'a> TtfMetrics<'a> {
    /// Creates a new 'TtfMetrics' from a 'ttf_parser::Face'.
    pub fn new(font: ttf_parser::Face<'a>) -> Self {
        Self {
            font,
            mode: FontMode::default(),
        }
    }

    /// Parses the first face found in a font file.
    pub fn parse(data: &'a [u8]) -> Result<Self, FontError> {
        let font = ttf_parser::Face::parse(data, 0)
            .map_err(|e| FontError::Unparsable(e.to_string()))?;
        Ok(Self::new(font))
    }

    /// Returns a reference to the wrapped 'ttf_parser::Face'
    pub fn font(&self) -> &ttf_parser::Face<'a> {
        &self.font
    }

    /// The font selected last
    pub fn mode(&self) -> FontMode {
        self.mode
    }

    /// Device units per font unit at the selected size
    pub fn scale(&self) -> f64 {
        f64::from(self.mode.size) / f64::from(self.font.units_per_em())
    }

    /// Distance from the top of a line to its baseline at the selected size
    pub fn ascent(&self) -> i32 {
        (f64::from(self.font.ascender()) * self.scale()).round() as i32
    }

    /// Glyph id for `codepoint`, or `None` if the font lacks it
    pub fn glyph_index(&self, codepoint: char) -> Option<ttf_parser::GlyphId> {
        self.font.glyph_index(codepoint)
    }

    /// Advance of `codepoint` in font units ; missing characters use the advance of `.notdef`
    pub fn advance(&self, codepoint: char) -> u16 {
        let gid = self.font.glyph_index(codepoint).unwrap_or(ttf_parser::GlyphId(0));
        self.font.glyph_hor_advance(gid).unwrap_or(0)
    }
}

impl<'a> TextMetrics for TtfMetrics<'a> {
    fn set_font_size(&mut self, size: i32) {
        self.mode.set_size(size);
    }

    fn set_font_style(&mut self, italic: bool) {
        self.mode.set_italic(italic);
    }

    fn text_width(&mut self, text: &str) -> i32 {
        let funits : u32 = text.chars().map(|c| u32::from(self.advance(c))).sum();
        (f64::from(funits) * self.scale()).round() as i32
    }

    fn text_height(&mut self) -> i32 {
        // Line height of the reference string "Tg": from the top of 'T' to the bottom of 'g',
        // which the font's ascender and descender bound.
        let extent = i32::from(self.font.ascender()) - i32::from(self.font.descender());
        (f64::from(extent) * self.scale()).round() as i32
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_unparsable() {
        let result = TtfMetrics::parse(&[0, 1, 2, 3]);
        assert!(matches!(result, Err(FontError::Unparsable(_))));
    }
}

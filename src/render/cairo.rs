//! Provides a [`Backend`](super::Backend) drawing on a cairo [`Context`]: screen, PNG or SVG surfaces alike.
//!
//! Text goes through cairo's "toy" text API with a serif face, so metrics come from whatever font
//! the system substitutes for it. Cairo errors while drawing are logged and otherwise ignored.

use cairo::{Context, FontSlant, FontWeight};

use super::{Cursor, GraphicsBackend, Role, TextMetrics};
use crate::font::FontMode;
use crate::render::svg::FONT_FAMILY;

/// Cairo backend ; the selected font is applied to the context right away.
pub struct CairoBackend {
    context : Context,
    mode    : FontMode,
}

impl CairoBackend {
    /// Wraps `context`, selecting black ink, 1.5 wide strokes and the default font.
    pub fn new(context: Context) -> Self {
        context.set_source_rgba(0., 0., 0., 1.);
        context.set_line_width(1.5);
        let backend = Self {
            context,
            mode: FontMode::default(),
        };
        backend.apply_font();
        backend
    }

    /// Returns the wrapped context
    pub fn context(self) -> Context
    {self.context}

    fn apply_font(&self) {
        let slant = if self.mode.italic { FontSlant::Italic } else { FontSlant::Normal };
        self.context.select_font_face(FONT_FAMILY, slant, FontWeight::Normal);
        self.context.set_font_size(f64::from(self.mode.size));
    }

    fn ascent(&self) -> f64 {
        match self.context.font_extents() {
            Ok(extents) => extents.ascent(),
            Err(e) => {
                warn!("cairo: cannot get font extents: {}", e);
                0.
            },
        }
    }
}


impl TextMetrics for CairoBackend {
    fn set_font_size(&mut self, size: i32) {
        if self.mode.set_size(size) {
            self.apply_font();
        }
    }

    fn set_font_style(&mut self, italic: bool) {
        if self.mode.set_italic(italic) {
            self.apply_font();
        }
    }

    fn text_width(&mut self, text: &str) -> i32 {
        match self.context.text_extents(text) {
            Ok(extents) => extents.x_advance().round() as i32,
            Err(e) => {
                warn!("cairo: cannot measure {:?}: {}", text, e);
                0
            },
        }
    }

    fn text_height(&mut self) -> i32 {
        // ascender to descender of the face, as for TrueType metrics
        match self.context.font_extents() {
            Ok(extents) => (extents.ascent() + extents.descent()).round() as i32,
            Err(e) => {
                warn!("cairo: cannot measure line height: {}", e);
                self.mode.size
            },
        }
    }
}


impl GraphicsBackend for CairoBackend {
    fn bbox(&mut self, pos: Cursor, width: i32, height: i32, role: Role) {
        let context = &self.context;
        if let Err(e) = context.save() {
            warn!("cairo: {}", e);
            return;
        }
        match role {
            Role::Text     => context.set_source_rgb(0., 0.785, 0.),
            Role::Row      => context.set_source_rgb(0.785, 0., 0.),
            Role::Compound => context.set_source_rgb(0., 0., 0.785),
        }
        context.set_line_width(0.5);
        context.rectangle(f64::from(pos.x), f64::from(pos.y), f64::from(width), f64::from(height));
        if let Err(e) = context.stroke() {
            warn!("cairo: cannot outline box: {}", e);
        }
        if let Err(e) = context.restore() {
            warn!("cairo: {}", e);
        }
    }

    fn draw_line(&mut self, from: Cursor, to: Cursor) {
        let context = &self.context;
        context.move_to(f64::from(from.x), f64::from(from.y));
        context.line_to(f64::from(to.x), f64::from(to.y));
        if let Err(e) = context.stroke() {
            warn!("cairo: cannot stroke line: {}", e);
        }
    }

    fn draw_text(&mut self, pos: Cursor, text: &str) {
        if text.is_empty() {
            return;
        }
        let ascent = self.ascent();
        self.context.move_to(f64::from(pos.x), f64::from(pos.y) + ascent);
        if let Err(e) = self.context.show_text(text) {
            warn!("cairo: cannot draw {:?}: {}", text, e);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Format, ImageSurface};

    #[test]
    fn strokes_line_onto_image() {
        let surface = ImageSurface::create(Format::ARgb32, 20, 20).unwrap();
        let context = Context::new(&surface).unwrap();
        let mut backend = CairoBackend::new(context);
        backend.draw_line(Cursor::new(0, 10), Cursor::new(20, 10));
        assert_eq!(backend.text_width(""), 0);
        drop(backend);

        let mut surface = surface;
        surface.flush();
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        // alpha of pixel (10, 10), ARGB32 is native-endian
        let pixel = &data[10 * stride + 10 * 4 .. 10 * stride + 10 * 4 + 4];
        assert!(pixel.iter().any(|&b| b != 0));
    }

    #[test]
    fn line_height_spans_ascender_and_descender() {
        let surface = ImageSurface::create(Format::ARgb32, 20, 20).unwrap();
        let context = Context::new(&surface).unwrap();
        let mut backend = CairoBackend::new(context);
        backend.set_font_size(40);
        backend.set_font_style(false);

        let extents = backend.context.font_extents().unwrap();
        let height = backend.text_height();
        assert_eq!(height, (extents.ascent() + extents.descent()).round() as i32);
        // independent of the text measured
        assert!(height > 0);
        assert_eq!(backend.text_height(), height);
    }
}

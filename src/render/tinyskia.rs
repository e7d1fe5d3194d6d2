//! Provides a [`Backend`](super::Backend) for tiny-skia
//!
//! This allows to render onto a canvas of RGBA pixels ([`TinySkiaBackend::pixmap`]),
//! which can then be used inside a [`tiny_skia`] application,
//! or converted to a PNG image.
//!
//! Glyphs are filled from the outlines of a ttf-parser face ; italic is synthesized by slanting the outlines.

use std::path::Path;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::{Cursor, GraphicsBackend, Role, TextMetrics};
use crate::error::{Error, RenderResult};
use crate::font::backend::ttf_parser::TtfMetrics;
use crate::layout::Layout;

/// Horizontal shift per unit of height applied to italic outlines
const ITALIC_SLANT : f32 = 0.2;

/// Width of stroked lines, in device units
const STROKE_WIDTH : f32 = 1.5;

/// Backend for TinySkia renderer
pub struct TinySkiaBackend<'f> {
    metrics: TtfMetrics<'f>,
    /// A canvas to draw onto
    pixmap: Pixmap,
    /// Transform from device units to pixels on the pixmap
    layout_to_pixmap: Transform,
}

impl<'f> TinySkiaBackend<'f> {
    /// Creates a white canvas of `width x height` device units, `scale` pixels per device unit.
    pub fn new(metrics: TtfMetrics<'f>, width: i32, height: i32, scale: f32) -> RenderResult<Self> {
        let pixmap = white_pixmap(width, height, scale)?;
        Ok(Self { metrics, pixmap, layout_to_pixmap: Transform::from_scale(scale, scale) })
    }

    /// Creates a canvas sized to fit `layout`
    pub fn for_layout(metrics: TtfMetrics<'f>, layout: &Layout, scale: f32) -> RenderResult<Self> {
        Self::new(metrics, layout.width, layout.height, scale)
    }

    /// Returns pixmap being drawn onto after all drawing operations are completed
    pub fn pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Encodes the canvas as PNG into `path`
    pub fn save_png<P : AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let data = self.pixmap.encode_png()
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;
        std::fs::write(path, data)?;
        Ok(())
    }

    fn fill_char(&mut self, pen_x: f32, baseline: f32, c: char) {
        // Make the tiny_skia path builder implement the necessary trait to draw
        // the glyph with ttf-parser
        struct Builder {
            open_path: PathBuilder,
        }

        impl ttf_parser::OutlineBuilder for Builder {
            fn move_to(&mut self, x: f32, y: f32) {
                self.open_path.move_to(x, y);
            }
            fn line_to(&mut self, x: f32, y: f32) {
                self.open_path.line_to(x, y);
            }
            fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
                self.open_path.quad_to(x1, y1, x, y);
            }
            fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
                self.open_path.cubic_to(x1, y1, x2, y2, x, y);
            }
            fn close(&mut self) {
                self.open_path.close();
            }
        }

        let gid = match self.metrics.glyph_index(c) {
            Some(gid) => gid,
            None => {
                warn!("{}", crate::error::FontError::MissingGlyph(c));
                return;
            },
        };

        let scale = self.metrics.scale() as f32;
        let slant = if self.metrics.mode().italic { ITALIC_SLANT * scale } else { 0. };
        // Font units grow upward from the baseline ; device units grow downward from the top
        let transform = Transform::from_row(scale, 0., slant, -scale, pen_x, baseline)
            .post_concat(self.layout_to_pixmap);

        let mut builder = Builder { open_path: PathBuilder::new() };
        self.metrics.font().outline_glyph(gid, &mut builder);
        if let Some(path) = builder.open_path.finish() {
            self.pixmap.fill_path(
                &path,
                &Paint::default(),
                FillRule::Winding,
                transform,
                None,
            );
        }
    }
}

/// Allocates a white pixmap for a canvas of `width x height` device units
fn white_pixmap(width: i32, height: i32, scale: f32) -> RenderResult<Pixmap> {
    let px_width  = (width as f32 * scale).ceil().max(0.) as u32;
    let px_height = (height as f32 * scale).ceil().max(0.) as u32;
    let mut pixmap = Pixmap::new(px_width, px_height)
        .ok_or(Error::Surface { width: px_width, height: px_height })?;
    pixmap.fill(Color::WHITE);
    Ok(pixmap)
}

fn stroke_segment(pixmap: &mut Pixmap, from: Cursor, to: Cursor, paint: &Paint, width: f32, transform: Transform) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.x as f32, from.y as f32);
    pb.line_to(to.x as f32, to.y as f32);
    if let Some(path) = pb.finish() {
        let stroke = Stroke { width, ..Stroke::default() };
        pixmap.stroke_path(&path, paint, &stroke, transform, None);
    }
}

impl<'f> TextMetrics for TinySkiaBackend<'f> {
    fn set_font_size(&mut self, size: i32) {
        self.metrics.set_font_size(size)
    }

    fn set_font_style(&mut self, italic: bool) {
        self.metrics.set_font_style(italic)
    }

    fn text_width(&mut self, text: &str) -> i32 {
        self.metrics.text_width(text)
    }

    fn text_height(&mut self) -> i32 {
        self.metrics.text_height()
    }
}

impl<'f> GraphicsBackend for TinySkiaBackend<'f> {
    fn bbox(&mut self, pos: Cursor, width: i32, height: i32, role: Role) {
        let mut paint = Paint::default();
        match role {
            Role::Text     => paint.set_color_rgba8(0, 200, 0, 255),
            Role::Row      => paint.set_color_rgba8(200, 0, 0, 255),
            Role::Compound => paint.set_color_rgba8(0, 0, 200, 255),
        }
        if let Some(rect) = Rect::from_xywh(pos.x as f32, pos.y as f32, width as f32, height as f32) {
            let path = PathBuilder::from_rect(rect);
            let stroke = Stroke { width: 0.5, ..Stroke::default() };
            self.pixmap.stroke_path(&path, &paint, &stroke, self.layout_to_pixmap, None);
        }
    }

    fn draw_line(&mut self, from: Cursor, to: Cursor) {
        stroke_segment(&mut self.pixmap, from, to, &Paint::default(), STROKE_WIDTH, self.layout_to_pixmap);
    }

    fn draw_text(&mut self, pos: Cursor, text: &str) {
        let baseline = (pos.y + self.metrics.ascent()) as f32;
        let scale = self.metrics.scale() as f32;
        let mut pen_x = pos.x as f32;
        for c in text.chars() {
            self.fill_char(pen_x, baseline, c);
            pen_x += f32::from(self.metrics.advance(c)) * scale;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_canvas_is_rejected() {
        let result = white_pixmap(0, 10, 2.);
        assert!(matches!(result, Err(Error::Surface { width: 0, height: 20 })));
    }

    #[test]
    fn lines_ink_the_canvas() {
        let mut pixmap = white_pixmap(20, 20, 1.).unwrap();
        let white = pixmap.pixel(10, 10).unwrap();
        stroke_segment(&mut pixmap, Cursor::new(0, 10), Cursor::new(20, 10), &Paint::default(), STROKE_WIDTH, Transform::identity());
        assert_ne!(pixmap.pixel(10, 10).unwrap(), white);
        assert_eq!(pixmap.pixel(10, 2).unwrap(), white);
    }
}

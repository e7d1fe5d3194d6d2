//! Provides a [`Backend`](super::Backend) emitting SVG markup.
//!
//! Every line becomes a `<line>` element and every text a `<text>` element in a serif face.
//! No font is embedded: widths are whatever the [`TextMetrics`] provider says,
//! so pick one close to the face the viewer will substitute (e.g. [`ApproxMetrics`](crate::font::ApproxMetrics)).

use std::fmt::Write;
use std::path::Path;

use quick_xml::escape::escape;

use super::{Cursor, GraphicsBackend, Renderer, Role, TextMetrics};
use crate::error::RenderResult;
use crate::font::FontMode;
use crate::geometry::BBox;
use crate::layout::constants::TEXT_ASCENT_RATIO;
use crate::layout::LayoutSettings;

/// Font family written on every `<text>` element
pub const FONT_FAMILY : &str = "Times New Roman";

/// Stroke width of every `<line>` element
pub const STROKE_WIDTH : f64 = 1.5;

/// Accumulates SVG elements ; metrics queries are answered by `M`.
#[derive(Debug, Clone, Default)]
pub struct SvgBackend<M> {
    metrics: M,
    mode:    FontMode,
    body:    String,
}

impl<M : TextMetrics> SvgBackend<M> {
    /// Creates an empty document answering metrics queries with `metrics`
    pub fn new(metrics: M) -> Self {
        Self { metrics, mode: FontMode::default(), body: String::new() }
    }

    /// Elements emitted so far, one per line
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Wraps the elements into a standalone document of the given size, on a white background.
    pub fn finish(self, width: i32, height: i32) -> String {
        let mut doc = String::with_capacity(self.body.len() + 256);
        // writing into a String cannot fail
        let _ = writeln!(doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width, h = height);
        doc.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\" />\n");
        doc.push_str(&self.body);
        doc.push_str("</svg>\n");
        doc
    }
}

impl<M : TextMetrics> TextMetrics for SvgBackend<M> {
    fn set_font_size(&mut self, size: i32) {
        self.mode.set_size(size);
        self.metrics.set_font_size(size);
    }

    fn set_font_style(&mut self, italic: bool) {
        self.mode.set_italic(italic);
        self.metrics.set_font_style(italic);
    }

    fn text_width(&mut self, text: &str) -> i32 {
        self.metrics.text_width(text)
    }

    fn text_height(&mut self) -> i32 {
        self.metrics.text_height()
    }
}

impl<M : TextMetrics> GraphicsBackend for SvgBackend<M> {
    fn bbox(&mut self, pos: Cursor, width: i32, height: i32, role: Role) {
        let color = match role {
            Role::Text     => "green",
            Role::Row      => "red",
            Role::Compound => "blue",
        };
        let rect = BBox::from_dims(pos.x, pos.y, width, height);
        let _ = writeln!(self.body,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="0.5" />"#,
            rect.x_min, rect.y_min, rect.width(), rect.height(), color);
    }

    fn draw_line(&mut self, from: Cursor, to: Cursor) {
        let _ = writeln!(self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="{}" />"#,
            from.x, from.y, to.x, to.y, STROKE_WIDTH);
    }

    fn draw_text(&mut self, pos: Cursor, text: &str) {
        if text.is_empty() {
            return;
        }
        // SVG places text by its baseline
        let baseline = pos.y + (f64::from(self.mode.size) * TEXT_ASCENT_RATIO) as i32;
        let style = if self.mode.italic { "italic" } else { "normal" };
        let _ = writeln!(self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-style="{}" font-size="{}" dominant-baseline="auto">{}</text>"#,
            pos.x, baseline, FONT_FAMILY, style, self.mode.size, escape(text));
    }
}


/// Lays out `formula` and returns it as a standalone SVG document.
pub fn render_svg<M : TextMetrics>(formula: &str, settings: &LayoutSettings, mut metrics: M) -> String {
    let renderer = Renderer::new();
    let layout = renderer.layout(formula, settings, &mut metrics);
    let mut svg = SvgBackend::new(metrics);
    renderer.render(&layout, &mut svg);
    svg.finish(layout.width, layout.height)
}

/// Writes the SVG document of `formula` (cf [`render_svg`]) to `path`.
pub fn save_svg<P, M>(path: P, formula: &str, settings: &LayoutSettings, metrics: M) -> RenderResult<()>
where
    P : AsRef<Path>,
    M : TextMetrics,
{
    let doc = render_svg(formula, settings, metrics);
    std::fs::write(path.as_ref(), doc)?;
    info!("wrote {}", path.as_ref().display());
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FixedMetrics;
    use crate::error::Error;

    #[test]
    fn line_element() {
        let mut svg = SvgBackend::new(FixedMetrics::default());
        svg.draw_line(Cursor::new(1, 2), Cursor::new(3, 4));
        assert_eq!(svg.body(), "<line x1=\"1\" y1=\"2\" x2=\"3\" y2=\"4\" stroke=\"black\" stroke-width=\"1.5\" />\n");
    }

    #[test]
    fn text_is_escaped_and_placed_on_baseline() {
        let mut svg = SvgBackend::new(FixedMetrics::default());
        svg.set_font_size(20);
        svg.set_font_style(true);
        svg.draw_text(Cursor::new(5, 10), "<");
        svg.draw_text(Cursor::new(5, 10), "");
        assert_eq!(svg.body(),
            "<text x=\"5\" y=\"26\" font-family=\"Times New Roman\" font-style=\"italic\" font-size=\"20\" dominant-baseline=\"auto\">&lt;</text>\n");
    }

    #[test]
    fn debug_outlines() {
        let settings = LayoutSettings::new().padding(0);
        let mut metrics = FixedMetrics::default();
        let renderer = Renderer { debug: true };
        let layout = renderer.layout("ab", &settings, &mut metrics);
        let mut svg = SvgBackend::new(metrics);
        renderer.render(&layout, &mut svg);
        // the row and its two letters
        assert_eq!(svg.body().matches("<rect").count(), 3);
        assert!(svg.body().starts_with("<rect x=\"0\" y=\"0\" width=\"20\" height=\"20\" fill=\"none\" stroke=\"red\""));
    }

    #[test]
    fn document_wrapper() {
        let doc = SvgBackend::new(FixedMetrics::default()).finish(120, 80);
        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"120\" height=\"80\" viewBox=\"0 0 120 80\">\n"));
        assert!(doc.contains("<rect width=\"100%\" height=\"100%\" fill=\"white\" />"));
        assert!(doc.ends_with("</svg>\n"));
    }

    #[test]
    fn fraction_document() {
        let settings = LayoutSettings::new().padding(10);
        let doc = render_svg(r"\frac{a}{b}", &settings, FixedMetrics::default());
        // fraction is 20 wide and 44 high, padded by 10 on each side
        assert!(doc.contains("width=\"40\" height=\"64\""));
        assert_eq!(doc.matches("<line").count(), 1);
        assert_eq!(doc.matches("<text").count(), 2);
        assert!(doc.contains("font-style=\"italic\""));
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let result = save_svg("/nonexistent/dir/out.svg", "x", &LayoutSettings::new(), FixedMetrics::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

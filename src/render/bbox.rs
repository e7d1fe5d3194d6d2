//! Defines a backend that does not draw anything but computes the "real bbox", the one that encloses all areas actually drawn to.
//! Scripts, radical signs and integral bounds routinely go beyond the box computed by the layout engine.
//! To determine the real bounding box, render with the backend defined in this module.
//!
//! Text is taken to fill `text_width x text_height` from its top-left corner ; lines enclose both end points.


use crate::geometry::BBox;

use super::{Cursor, GraphicsBackend, TextMetrics};


/// A rendering backend that does not draw but simply records the bounding box being drawn to.
/// Metrics are borrowed from another provider, so that measuring and drawing agree.
#[derive(Debug)]
pub struct BBoxBackend<'m, M> {
    metrics: &'m mut M,
    /// The current bounding box
    /// Is None when nothing has been drawn yet
    bbox: Option<BBox>,
}

impl<'m, M : TextMetrics> BBoxBackend<'m, M> {
    /// Creates a new bbox rendering backend measuring text with `metrics`.
    pub fn new(metrics: &'m mut M) -> Self {
        Self {
            metrics,
            bbox: None,
        }
    }

    /// Returns the bounding box computed by the backend.
    /// Return None when nothing has been drawn
    pub fn finish(self) -> Option<BBox> {
        self.bbox
    }

    fn enclose(&mut self, mut bbox: BBox) {
        if let Some(other) = self.bbox {
            bbox = bbox.union(other);
        }
        self.bbox = Some(bbox)
    }
}

impl<'m, M : TextMetrics> TextMetrics for BBoxBackend<'m, M> {
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

impl<'m, M : TextMetrics> GraphicsBackend for BBoxBackend<'m, M> {
    fn draw_line(&mut self, from: Cursor, to: Cursor) {
        self.enclose(BBox::from_segment(from.x, from.y, to.x, to.y));
    }

    fn draw_text(&mut self, pos: Cursor, text: &str) {
        if text.is_empty() {
            return;
        }
        let width  = self.metrics.text_width(text);
        let height = self.metrics.text_height();
        self.enclose(BBox::from_dims(pos.x, pos.y, width, height));
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FixedMetrics;

    #[test]
    fn nothing_drawn() {
        let mut metrics = FixedMetrics::default();
        let backend = BBoxBackend::new(&mut metrics);
        assert_eq!(backend.finish(), None);
    }

    #[test]
    fn encloses_lines_and_text() {
        let mut metrics = FixedMetrics::new(10, 20);
        let mut backend = BBoxBackend::new(&mut metrics);
        backend.draw_text(Cursor::new(5, 5), "ab");
        backend.draw_line(Cursor::new(0, 30), Cursor::new(-3, 12));
        backend.draw_text(Cursor::new(100, 100), "");
        assert_eq!(backend.finish(), Some(BBox::new(-3, 5, 25, 30)));
    }

    #[test]
    fn forwards_font_selection() {
        let mut metrics = FixedMetrics::default();
        let mut backend = BBoxBackend::new(&mut metrics);
        backend.set_font_size(12);
        backend.set_font_style(true);
        drop(backend);
        assert_eq!(metrics.mode().size, 12);
        assert!(metrics.mode().italic);
    }
}

//! A backend which records every call it receives instead of drawing.
//!
//! Recordings are serializable, which makes them handy as regression data:
//! a formula's expected drawing is the list of [`DrawCmd`]s it produces.

use super::{Cursor, GraphicsBackend, TextMetrics};

/// One call received by a [`RecordingBackend`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// font size selection
    SetFontSize(i32),
    /// style selection, true for italic
    SetFontStyle(bool),
    /// stroked line
    Line {
        /// first end point
        from: Cursor,
        /// second end point
        to:   Cursor,
    },
    /// text drawn with the selected font
    Text {
        /// top-left corner of the text
        pos:  Cursor,
        /// drawn string
        text: String,
    },
}

/// Records font selections and drawing calls ; metrics queries are answered by `M` and not recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend<M> {
    metrics:  M,
    commands: Vec<DrawCmd>,
}

impl<M : TextMetrics> RecordingBackend<M> {
    /// Creates a recorder answering metrics queries with `metrics`
    pub fn new(metrics: M) -> Self {
        Self { metrics, commands: Vec::new() }
    }

    /// Calls received so far, in order
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Only the drawing calls (lines and text), in order
    pub fn drawings(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|cmd| matches!(cmd, DrawCmd::Line { .. } | DrawCmd::Text { .. }))
    }

    /// Consumes the recorder, returning the recorded calls
    pub fn into_commands(self) -> Vec<DrawCmd> {
        self.commands
    }
}

impl<M : TextMetrics> TextMetrics for RecordingBackend<M> {
    fn set_font_size(&mut self, size: i32) {
        self.metrics.set_font_size(size);
        self.commands.push(DrawCmd::SetFontSize(size));
    }

    fn set_font_style(&mut self, italic: bool) {
        self.metrics.set_font_style(italic);
        self.commands.push(DrawCmd::SetFontStyle(italic));
    }

    fn text_width(&mut self, text: &str) -> i32 {
        self.metrics.text_width(text)
    }

    fn text_height(&mut self) -> i32 {
        self.metrics.text_height()
    }
}

impl<M : TextMetrics> GraphicsBackend for RecordingBackend<M> {
    fn draw_line(&mut self, from: Cursor, to: Cursor) {
        self.commands.push(DrawCmd::Line { from, to });
    }

    fn draw_text(&mut self, pos: Cursor, text: &str) {
        self.commands.push(DrawCmd::Text { pos, text: text.to_string() });
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FixedMetrics;
    use crate::layout::{engine::measure, Node};
    use crate::render::draw;

    fn record(mut node: Node, x: i32, y: i32) -> Vec<DrawCmd> {
        let mut out = RecordingBackend::new(FixedMetrics::new(10, 20));
        measure(&mut node, &mut out);
        out.commands.clear();
        draw(&node, &mut out, x, y);
        out.into_commands()
    }

    fn text(x: i32, y: i32, text: &str) -> DrawCmd {
        DrawCmd::Text { pos: Cursor::new(x, y), text: text.to_string() }
    }

    fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> DrawCmd {
        DrawCmd::Line { from: Cursor::new(x1, y1), to: Cursor::new(x2, y2) }
    }

    #[test]
    fn text_selects_font_then_draws() {
        let cmds = record(Node::text("x", true, 28), 3, 4);
        assert_eq!(cmds, vec![
            DrawCmd::SetFontSize(28),
            DrawCmd::SetFontStyle(true),
            text(3, 4, "x"),
        ]);
    }

    #[test]
    fn kern_draws_nothing_visible() {
        let cmds = record(Node::kern(5, 28), 0, 0);
        assert_eq!(cmds.last(), Some(&text(5, 0, "")));
    }

    #[test]
    fn fraction_bar_spans_width() {
        // numerator 10 wide, denominator 30 wide: fraction is 40 wide, bar at 20 + 2
        let node = Node::fraction(Node::text("a", false, 28), Node::text("abc", false, 28), 28);
        let drawings : Vec<_> = record(node, 0, 0).into_iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Line { .. } | DrawCmd::Text { .. }))
            .collect();
        assert_eq!(drawings, vec![
            text(15, 0, "a"),
            line(0, 22, 40, 22),
            text(5, 24, "abc"),
        ]);
    }

    #[test]
    fn fence_strokes_delimiters() {
        let node = Node::fence(Node::text("a", false, 28), Some('('), Some(']'));
        let cmds : Vec<_> = record(node, 0, 0).into_iter().filter(|cmd| matches!(cmd, DrawCmd::Line { .. })).collect();
        // content: 10 x 20, fence 24 x 20
        assert_eq!(cmds, vec![
            line(5, 0, 1, 10),
            line(1, 10, 5, 20),
            line(19, 0, 19, 20),
            line(19, 0, 14, 0),
            line(19, 20, 14, 20),
        ]);
    }

    #[test]
    fn unknown_delimiters_are_blank() {
        let node = Node::fence(Node::text("a", false, 28), Some('<'), None);
        let cmds = record(node, 0, 0);
        assert!(!cmds.iter().any(|cmd| matches!(cmd, DrawCmd::Line { .. })));
    }

    #[test]
    fn commands_serialize() {
        let cmd = line(1, 2, 3, 4);
        let json = serde_json::to_string(&cmd).unwrap();
        let back : DrawCmd = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}

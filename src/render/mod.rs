//! Draw measured nodes (as defined in the [`layout`](crate::layout) module) onto a `Backend`, such as a screen, an SVG file, etc.
//!
//! To do this, a [`Renderer`] must first be created using the `Renderer::new` function,
//! a [`Layout`] obtained with [`Renderer::layout`], and then [`Renderer::render`] must be called on the `Layout` and the desired `Backend`.
//! The lower-level [`draw`] draws an already measured node at a given position.
//!
//! ## Backends
//!
//! The `Backend` trait represents all operations that are needed to lay out and render a formula:
//!
//!   - selecting a font and measuring text: [`TextMetrics`]
//!   - drawing straight lines and text: [`GraphicsBackend`]
//!
//! Backends keep the selected font as state. Nodes always select their font right before measuring or drawing text,
//! so a backend never has to guess which font a call refers to.
//!
//! A number of [`Backend`]s are provided:
//!
//!  - SVG markup : [`svg::SvgBackend`]
//!  - tiny-skia pixmap : `tinyskia-renderer` (render to pixels, png)
//!  - Cairo : `cairo-renderer` (render to screen, png or svg)
//!  - draw-call recording : [`recorder::RecordingBackend`]
//!  - ink bounding box : [`bbox::BBoxBackend`]
//!
//! ## Coordinate system
//!
//! The top is oriented along -Y. The position given to [`draw`] and to [`GraphicsBackend::draw_text`] is the top-left corner of the box.

pub mod bbox;
pub mod recorder;
pub mod svg;
#[cfg(feature="tinyskia-renderer")]
pub mod tinyskia;
#[cfg(feature="cairo-renderer")]
pub mod cairo;

use crate::layout::constants::{
    BIG_OPERATOR_SCALE, FENCE_MARGIN, FRACTION_BAR_GAP, INTEGRAL_LIMIT_GAP, RADICAL_GAP,
    RADICAL_OVERHANG, RADICAL_SIGN_WIDTH, RADICAL_TICK, SUBSCRIPT_DROP, SUPERSCRIPT_RAISE,
};
use crate::layout::{engine, scaled, BigOperator, Fraction, Integral, Layout, LayoutSettings, Node, NodeKind, ScalingFence, Script, Sqrt, Text};
use crate::layout::engine::INTEGRAL_SIGN;
use crate::parser::parse;
use self::bbox::BBoxBackend;

/// Position of the cursor in space, in device units.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// x-coordinate
    pub x: i32,
    /// y-coordinate (NB: `cursor1.y` < `cursor2.y`  means `cursor1` is above `cursor2` on the screen)
    pub y: i32,
}

impl Cursor {
    /// Creates a cursor at the given coordinates
    pub fn new(x: i32, y: i32) -> Cursor {
        Cursor { x, y }
    }

    /// Adds `dx` and `dy` to the x- and y- coordinates resp. of the cursor
    pub fn translate(self, dx: i32, dy: i32) -> Cursor {
        Cursor {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Moves cursor by `dx` in the direction -X
    pub fn left(self, dx: i32) -> Cursor {
        self.translate(-dx, 0)
    }
    /// Moves cursor by `dx` in the direction +X
    pub fn right(self, dx: i32) -> Cursor {
        self.translate(dx, 0)
    }
    /// Moves cursor by `dy` in the direction -Y
    pub fn up(self, dy: i32) -> Cursor {
        self.translate(0, -dy)
    }
    /// Moves cursor by `dy` in the direction +Y
    pub fn down(self, dy: i32) -> Cursor {
        self.translate(0, dy)
    }
}

/// Font selection and text measurement. One of the two traits needed to implement [`Backend`].
/// This is all the layout engine needs (cf [`engine::measure`]).
pub trait TextMetrics {
    /// Selects the font size, in device units. Selecting the current size again is a no-op.
    fn set_font_size(&mut self, size: i32);
    /// Selects italic (`true`) or upright (`false`) style. Selecting the current style again is a no-op.
    fn set_font_style(&mut self, italic: bool);
    /// Width of `text` in the selected font
    fn text_width(&mut self, text: &str) -> i32;
    /// Height of a line of text in the selected font, independent of the actual text
    fn text_height(&mut self) -> i32;
}

/// A surface that can draw straight lines and text. One of the two traits needed to implement [`Backend`].
///
/// Implementing the function [`GraphicsBackend::bbox`] is optional (if not implemented, this function does nothing).
/// This function is only used in the debug mode of [`Renderer`] to draw rectangles around nodes.
pub trait GraphicsBackend {
    /// Only called by [`Renderer`] when [`Renderer::debug`] is true (debug mode).
    /// Outlines the box whose top-left corner is at `_pos`, of the given dimensions.
    /// The parameter `_role` specifies the type of objects the rectangle encloses.
    fn bbox(&mut self, _pos: Cursor, _width: i32, _height: i32, _role: Role) {}
    /// Strokes a straight line from `from` to `to`.
    fn draw_line(&mut self, from: Cursor, to: Cursor);
    /// Draws `text` in the selected font, `pos` being the top-left corner of the text's line.
    fn draw_text(&mut self, pos: Cursor, text: &str);
}

/// A conjunction of [`TextMetrics`] and [`GraphicsBackend`].
/// This is the trait drawing requires ; it is implemented for anything implementing both.
pub trait Backend : TextMetrics + GraphicsBackend {}

impl<B : TextMetrics + GraphicsBackend> Backend for B {}

/// The type of things enclosed by a debug rectangle (cf [`Renderer::debug`] for debug mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// text
    Text,
    /// row of nodes
    Row,
    /// any other node
    Compound,
}


/// Context used for rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    /// When set to true, the renderer additionally calls [`GraphicsBackend::bbox`] to outline
    /// every node.
    pub debug: bool,
}

impl Renderer {
    /// Creates new renderer.
    pub fn new() -> Self {
        Renderer {
            debug: false,
        }
    }

    /// Parses and measures the given string, then frames it for output.
    /// The frame encloses the measured box and everything drawing would ink, plus the padding of `settings`.
    pub fn layout<M : TextMetrics>(&self, tex: &str, settings: &LayoutSettings, metrics: &mut M) -> Layout {
        let mut root = parse(tex, settings.font_size);
        engine::measure(&mut root, metrics);

        let mut ink = BBoxBackend::new(metrics);
        self.render_node(&mut ink, Cursor::default(), &root);
        Layout::frame(root, ink.finish(), settings.padding)
    }

    /// Renders the given layout onto `out`, the provided backend.
    pub fn render<B : Backend>(&self, layout: &Layout, out: &mut B) {
        self.render_node(out, layout.origin, &layout.root);
    }

    /// Draws the measured `node` with its top-left corner at `pos`.
    pub fn render_node<B : Backend>(&self, out: &mut B, pos: Cursor, node: &Node) {
        if self.debug {
            let role = match node.kind {
                NodeKind::Text(_) => Role::Text,
                NodeKind::Row(_)  => Role::Row,
                _                 => Role::Compound,
            };
            out.bbox(pos, node.width, node.height, role);
        }

        match node.kind {
            NodeKind::Row(ref row) => self.render_row(out, pos, node, &row.children),
            NodeKind::Text(ref text) => self.render_text(out, pos, text),
            NodeKind::Fraction(ref frac) => self.render_fraction(out, pos, node, frac),
            NodeKind::Script(ref script) => self.render_script(out, pos, node, script),
            NodeKind::BigOperator(ref op) => self.render_big_operator(out, pos, node, op),
            NodeKind::Integral(ref int) => self.render_integral(out, pos, node, int),
            NodeKind::Sqrt(ref sqrt) => self.render_sqrt(out, pos, node, sqrt),
            NodeKind::ScalingFence(ref fence) => self.render_fence(out, pos, node, fence),
        }
    }

    fn render_row<B : Backend>(&self, out: &mut B, mut pos: Cursor, row: &Node, children: &[Node]) {
        for child in children {
            self.render_node(out, pos.down(row.ascent - child.ascent), child);
            pos.x += child.width;
        }
    }

    fn render_text<B : Backend>(&self, out: &mut B, pos: Cursor, text: &Text) {
        out.set_font_size(text.font_size);
        out.set_font_style(text.italic);
        out.draw_text(pos.right(text.offset), &text.text);
    }

    fn render_fraction<B : Backend>(&self, out: &mut B, pos: Cursor, node: &Node, frac: &Fraction) {
        let mid_x = pos.x + node.width / 2;
        let Fraction { ref numerator, ref denominator, .. } = *frac;

        self.render_node(out, Cursor::new(mid_x - numerator.width / 2, pos.y), numerator);

        let bar_y = pos.y + numerator.height + FRACTION_BAR_GAP;
        out.draw_line(Cursor::new(pos.x, bar_y), Cursor::new(pos.x + node.width, bar_y));

        self.render_node(out, Cursor::new(mid_x - denominator.width / 2, bar_y + FRACTION_BAR_GAP), denominator);
    }

    fn render_script<B : Backend>(&self, out: &mut B, pos: Cursor, node: &Node, script: &Script) {
        let base = &script.base;
        let base_pos = pos.down(node.ascent - base.ascent);
        self.render_node(out, base_pos, base);

        let script_x = pos.x + base.width;
        if let Some(ref sup) = script.superscript {
            let raise = scaled(sup.height, SUPERSCRIPT_RAISE);
            self.render_node(out, Cursor::new(script_x, base_pos.y - raise), sup);
        }
        if let Some(ref sub) = script.subscript {
            let drop = base.descent() + scaled(sub.height, SUBSCRIPT_DROP);
            self.render_node(out, Cursor::new(script_x, base_pos.y + drop), sub);
        }
    }

    fn render_big_operator<B : Backend>(&self, out: &mut B, pos: Cursor, node: &Node, op: &BigOperator) {
        let mid_x = pos.x + node.width / 2;

        if let Some(ref upper) = op.upper {
            self.render_node(out, Cursor::new(mid_x - upper.width / 2, pos.y), upper);
        }

        select_operator_font(out, op);
        let glyph_width  = out.text_width(&op.symbol);
        let glyph_height = out.text_height();

        let glyph_y = pos.y + op.upper.as_ref().map_or(0, |upper| upper.height);
        out.draw_text(Cursor::new(mid_x - glyph_width / 2, glyph_y), &op.symbol);

        if let Some(ref lower) = op.lower {
            self.render_node(out, Cursor::new(mid_x - lower.width / 2, glyph_y + glyph_height), lower);
        }
    }

    fn render_integral<B : Backend>(&self, out: &mut B, pos: Cursor, node: &Node, int: &Integral) {
        out.set_font_size(scaled(int.font_size, BIG_OPERATOR_SCALE));
        out.set_font_style(false);
        let sign_width  = out.text_width(INTEGRAL_SIGN);
        let sign_height = out.text_height();

        let sign_pos = pos.down(node.ascent - sign_height / 2);
        out.draw_text(sign_pos, INTEGRAL_SIGN);

        let limit_x = sign_pos.x + sign_width + INTEGRAL_LIMIT_GAP;
        if let Some(ref upper) = int.upper {
            self.render_node(out, Cursor::new(limit_x, sign_pos.y + INTEGRAL_LIMIT_GAP), upper);
        }
        if let Some(ref lower) = int.lower {
            let lower_y = sign_pos.y + sign_height - lower.height - INTEGRAL_LIMIT_GAP;
            self.render_node(out, Cursor::new(limit_x, lower_y), lower);
        }
    }

    fn render_sqrt<B : Backend>(&self, out: &mut B, pos: Cursor, node: &Node, sqrt: &Sqrt) {
        let radicand = &sqrt.radicand;
        let mut sign_x = pos.x;
        if let Some(ref index) = sqrt.index {
            self.render_node(out, pos, index);
            sign_x += i32::max(RADICAL_TICK, index.width);
        }

        let radicand_y = pos.y + node.ascent - radicand.ascent;
        self.render_node(out, Cursor::new(sign_x + RADICAL_SIGN_WIDTH, radicand_y), radicand);

        let bottom_y = pos.y + node.ascent + radicand.descent();
        let top_y    = radicand_y - RADICAL_GAP;
        let tick     = Cursor::new(sign_x, bottom_y - (bottom_y - top_y) / 2);
        let foot     = Cursor::new(sign_x + RADICAL_TICK, bottom_y);
        let corner   = Cursor::new(sign_x + RADICAL_SIGN_WIDTH, top_y);
        let bar_end  = Cursor::new(sign_x + radicand.width + RADICAL_SIGN_WIDTH + RADICAL_OVERHANG, top_y);

        out.draw_line(tick, foot);
        out.draw_line(foot, corner);
        out.draw_line(corner, bar_end);
    }

    fn render_fence<B : Backend>(&self, out: &mut B, pos: Cursor, node: &Node, fence: &ScalingFence) {
        self.render_node(out, pos.right(FENCE_MARGIN), &fence.content);

        let (x, y, w, h) = (pos.x, pos.y, node.width, node.height);
        let mut line = |x1, y1, x2, y2| out.draw_line(Cursor::new(x1, y1), Cursor::new(x2, y2));

        match fence.left {
            Some('|') => line(x + 2, y, x + 2, y + h),
            Some('(') => {
                line(x + 5, y, x + 1, y + h / 2);
                line(x + 1, y + h / 2, x + 5, y + h);
            },
            Some('[') => {
                line(x + 5, y, x + 5, y + h);
                line(x + 5, y, x + 10, y);
                line(x + 5, y + h, x + 10, y + h);
            },
            other => debug!("no stroke for left delimiter {:?}", other),
        }

        match fence.right {
            Some('|') => line(x + w - 2, y, x + w - 2, y + h),
            Some(')') => {
                line(x + w - 5, y, x + w - 1, y + h / 2);
                line(x + w - 1, y + h / 2, x + w - 5, y + h);
            },
            Some(']') => {
                line(x + w - 5, y, x + w - 5, y + h);
                line(x + w - 5, y, x + w - 10, y);
                line(x + w - 5, y + h, x + w - 10, y + h);
            },
            other => debug!("no stroke for right delimiter {:?}", other),
        }
    }
}

/// Selects the font in which the glyph of `op` is measured and drawn
pub(crate) fn select_operator_font<M : TextMetrics + ?Sized>(out: &mut M, op: &BigOperator) {
    let size = if op.is_text_op { op.font_size } else { scaled(op.font_size, BIG_OPERATOR_SCALE) };
    out.set_font_size(size);
    out.set_font_style(false);
}

/// Draws the measured `node` on `out`, with its top-left corner at (`x`, `y`).
/// `node` must have been measured with [`engine::measure`] using the same metrics as `out`.
pub fn draw<B : Backend>(node: &Node, out: &mut B, x: i32, y: i32) {
    Renderer::new().render_node(out, Cursor::new(x, y), node);
}

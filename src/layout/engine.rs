//! This module computes the box of every node of a tree, given a [`TextMetrics`] provider.
//! The most important function here is [`measure`].
//! The tree returned by the [parser](crate::parser) has all dimensions set to zero ;
//! after `measure`, every node holds its width, height and ascent and can be sent to [`draw`](crate::render::draw).
//!
//! Measuring is bottom-up: children are measured before their parent combines their boxes.
//! It only ever selects fonts and queries metrics ; nothing is drawn.

use super::constants::{
    BIG_OPERATOR_PADDING, FENCE_MARGIN, FRACTION_BAR_GAP, FRACTION_GUTTER, RADICAL_GAP,
    RADICAL_OVERHANG, RADICAL_SIGN_WIDTH, RADICAL_TICK, TEXT_ASCENT_RATIO, BIG_OPERATOR_SCALE,
};
use super::{scaled, BigOperator, Fraction, Integral, Node, NodeKind, ScalingFence, Script, Sqrt, Text};
use crate::render::{select_operator_font, TextMetrics};

/// Glyph drawn for `\int`
pub const INTEGRAL_SIGN : &str = "\u{222B}";

/// Dimensions of a box: (width, height, ascent)
type Dims = (i32, i32, i32);

/// Computes the width, height and ascent of `node` and of all its descendants.
/// Measuring a tree twice with the same metrics gives the same dimensions.
pub fn measure<M : TextMetrics>(node: &mut Node, metrics: &mut M) {
    let (width, height, ascent) = match node.kind {
        NodeKind::Row(ref mut row) => measure_row(&mut row.children, metrics),
        NodeKind::Text(ref text) => measure_text(text, metrics),
        NodeKind::Fraction(ref mut frac) => measure_fraction(frac, metrics),
        NodeKind::Script(ref mut script) => measure_script(script, metrics),
        NodeKind::BigOperator(ref mut op) => measure_big_operator(op, metrics),
        NodeKind::Integral(ref mut int) => measure_integral(int, metrics),
        NodeKind::Sqrt(ref mut sqrt) => measure_sqrt(sqrt, metrics),
        NodeKind::ScalingFence(ref mut fence) => measure_fence(fence, metrics),
    };

    node.width  = width;
    node.height = height;
    node.ascent = ascent;
    trace!("measured {}: width {}, height {}, ascent {}", node.kind_name(), width, height, ascent);
}

fn measure_row<M : TextMetrics>(children: &mut [Node], metrics: &mut M) -> Dims {
    let mut width = 0;
    let mut max_ascent = 0;
    let mut max_descent = 0;
    for child in children.iter_mut() {
        measure(child, metrics);
        width += child.width;
        max_ascent  = max_ascent.max(child.ascent);
        max_descent = max_descent.max(child.descent());
    }
    // negative kerns may outweigh the content, the row itself never goes below zero width
    (width.max(0), max_ascent + max_descent, max_ascent)
}

fn measure_text<M : TextMetrics>(text: &Text, metrics: &mut M) -> Dims {
    metrics.set_font_size(text.font_size);
    metrics.set_font_style(text.italic);
    let width  = metrics.text_width(&text.text) + text.offset;
    let height = metrics.text_height();
    (width, height, scaled(height, TEXT_ASCENT_RATIO))
}

fn measure_fraction<M : TextMetrics>(frac: &mut Fraction, metrics: &mut M) -> Dims {
    measure(&mut frac.numerator, metrics);
    measure(&mut frac.denominator, metrics);
    let (num, den) = (&frac.numerator, &frac.denominator);

    let width  = num.width.max(den.width) + FRACTION_GUTTER;
    let height = num.height + den.height + 2 * FRACTION_BAR_GAP;
    (width, height, num.height + FRACTION_BAR_GAP)
}

fn measure_script<M : TextMetrics>(script: &mut Script, metrics: &mut M) -> Dims {
    measure(&mut script.base, metrics);
    let base = &script.base;
    let (mut width, mut height, mut ascent) = (base.width, base.height, base.ascent);
    let mut script_width = 0;

    if let Some(ref mut sup) = script.superscript {
        measure(sup, metrics);
        ascent = ascent.max(sup.height + base.ascent / 2);
        script_width = script_width.max(sup.width);
    }
    if let Some(ref mut sub) = script.subscript {
        measure(sub, metrics);
        height = height.max(sub.height + ascent);
        script_width = script_width.max(sub.width);
    }

    // a raised superscript pushes the base down
    height = height.max(ascent + base.descent());
    width += script_width;
    (width.max(0), height, ascent)
}

fn measure_big_operator<M : TextMetrics>(op: &mut BigOperator, metrics: &mut M) -> Dims {
    select_operator_font(metrics, op);
    let glyph_width  = metrics.text_width(&op.symbol);
    let glyph_height = metrics.text_height();

    let (lower_width, lower_height) = measure_optional(&mut op.lower, metrics);
    let (upper_width, upper_height) = measure_optional(&mut op.upper, metrics);

    let glyph_ascent = scaled(glyph_height, TEXT_ASCENT_RATIO);
    let width  = glyph_width.max(lower_width).max(upper_width) + BIG_OPERATOR_PADDING;
    let above  = upper_height + glyph_ascent;
    let below  = (glyph_height - glyph_ascent) + lower_height;
    (width, above + below, above)
}

fn measure_integral<M : TextMetrics>(int: &mut Integral, metrics: &mut M) -> Dims {
    metrics.set_font_size(scaled(int.font_size, BIG_OPERATOR_SCALE));
    metrics.set_font_style(false);
    let sign_width  = metrics.text_width(INTEGRAL_SIGN);
    let sign_height = metrics.text_height();

    let (upper_width, upper_height) = measure_optional(&mut int.upper, metrics);
    let (lower_width, lower_height) = measure_optional(&mut int.lower, metrics);

    let width  = sign_width + upper_width.max(lower_width) + BIG_OPERATOR_PADDING;
    let height = sign_height.max(upper_height + lower_height);
    (width, height, sign_height / 2)
}

fn measure_sqrt<M : TextMetrics>(sqrt: &mut Sqrt, metrics: &mut M) -> Dims {
    measure(&mut sqrt.radicand, metrics);
    let radicand = &sqrt.radicand;
    let mut width  = radicand.width + RADICAL_SIGN_WIDTH + RADICAL_OVERHANG;
    let mut height = radicand.height + RADICAL_GAP;
    let mut ascent = radicand.ascent + RADICAL_GAP;

    if let Some(ref mut index) = sqrt.index {
        measure(index, metrics);
        width += (index.width - RADICAL_TICK).max(0);
        ascent = ascent.max(index.height + RADICAL_GAP);
        height = height.max(ascent + radicand.descent());
    }
    (width, height, ascent)
}

fn measure_fence<M : TextMetrics>(fence: &mut ScalingFence, metrics: &mut M) -> Dims {
    measure(&mut fence.content, metrics);
    let content = &fence.content;
    (content.width + 2 * FENCE_MARGIN, content.height, content.ascent)
}

/// Measures a limit if present ; returns its width and height, or zeros.
fn measure_optional<M : TextMetrics>(node: &mut Option<Box<Node>>, metrics: &mut M) -> (i32, i32) {
    match *node {
        Some(ref mut node) => {
            measure(node, metrics);
            (node.width, node.height)
        },
        None => (0, 0),
    }
}

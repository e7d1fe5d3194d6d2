//! The box model: a tree of [`Node`]s, each carrying a width, a height and an ascent.
//!
//! The tree is produced by the [parser](crate::parser) with every dimension set to zero.
//! [`engine::measure`] then computes, bottom-up, the box of every node for a given [`TextMetrics`](crate::render::TextMetrics) provider.
//! Finally, [`draw`](crate::render::draw) walks the measured tree top-down and issues drawing calls to a [`Backend`](crate::render::Backend).
//!
//! ```text
//!              width
//!          ←─────────→
//!          ┌─────────┐ ─┬─         ─┬─
//!          │   ___   │  │ ascent    │
//!          │  |_  |  │  │           │ height
//!  ────────┼────|_|──┼──┴─ baseline │
//!          │      |  │              │
//!          └─────────┘ ────────────  ┴─
//! ```
//!
//! The origin of a node is its top-left corner ; Y grows downward.
//! Nodes composed in a [`Row`] share a baseline: each child is pushed down by `row.ascent - child.ascent`.
//!
//! The set of node types is closed: see [`NodeKind`].

pub mod constants;
pub mod engine;

use crate::geometry::BBox;
use crate::render::Cursor;
use self::constants::{DEFAULT_FONT_SIZE, DEFAULT_PADDING};


/// A node of the box tree. Dimensions are only meaningful once [`engine::measure`] has run.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Type of node
    pub kind:   NodeKind,
    /// Width
    pub width:  i32,
    /// Total height: distance from the top of the node to its bottom
    pub height: i32,
    /// Distance from the top of the node to the baseline
    pub ascent: i32,
}

/// Different types of nodes
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A sequence of nodes laid out left to right on a common baseline
    Row(Row),
    /// A literal string, e.g. a variable, a number or a symbol
    Text(Text),
    /// Numerator over denominator, separated by a bar
    Fraction(Fraction),
    /// A base with a superscript, a subscript or both
    Script(Script),
    /// A large operator with limits stacked above and below, e.g. `\sum` or `\lim`
    BigOperator(BigOperator),
    /// An integral sign with bounds to its right
    Integral(Integral),
    /// A radical, possibly with a degree
    Sqrt(Sqrt),
    /// Content enclosed in delimiters which stretch to the content's height
    ScalingFence(ScalingFence),
}

/// Children laid out horizontally
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    /// Nodes from left to right
    pub children: Vec<Node>,
}

/// A string drawn in a single font
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Content
    pub text:      String,
    /// Italic or upright
    pub italic:    bool,
    /// Font size in device units
    pub font_size: i32,
    /// Horizontal offset added to the width and applied when drawing.
    /// An empty text with a non-zero offset is a kern.
    pub offset:    i32,
}

/// A fraction
#[derive(Debug, Clone, PartialEq)]
pub struct Fraction {
    /// Upper part
    pub numerator:   Box<Node>,
    /// Lower part
    pub denominator: Box<Node>,
    /// Font size at which the fraction was created
    pub font_size:   i32,
}

/// A base with scripts
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    /// The node the scripts attach to
    pub base:        Box<Node>,
    /// Raised script
    pub superscript: Option<Box<Node>>,
    /// Lowered script
    pub subscript:   Option<Box<Node>>,
}

/// A big operator
#[derive(Debug, Clone, PartialEq)]
pub struct BigOperator {
    /// The operator's glyph, or its name for text operators like "lim"
    pub symbol:     String,
    /// Limit drawn under the operator
    pub lower:      Option<Box<Node>>,
    /// Limit drawn over the operator
    pub upper:      Option<Box<Node>>,
    /// Font size of the context the operator appears in
    pub font_size:  i32,
    /// Text operators are drawn upright at the context font size rather than enlarged
    pub is_text_op: bool,
}

/// An integral
#[derive(Debug, Clone, PartialEq)]
pub struct Integral {
    /// Bound drawn next to the bottom of the sign
    pub lower:     Option<Box<Node>>,
    /// Bound drawn next to the top of the sign
    pub upper:     Option<Box<Node>>,
    /// Font size of the context the integral appears in
    pub font_size: i32,
}

/// A radical
#[derive(Debug, Clone, PartialEq)]
pub struct Sqrt {
    /// What is under the radical sign
    pub radicand: Box<Node>,
    /// Degree of the root, drawn left of the radical sign
    pub index:    Option<Box<Node>>,
}

/// A `\left .. \right` pair
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingFence {
    /// What is between the delimiters
    pub content: Box<Node>,
    /// Left delimiter ; `None` if input ended right after `\left`
    pub left:    Option<char>,
    /// Right delimiter ; `None` if no `\right` or nothing after it
    pub right:   Option<char>,
}


impl Node {
    fn unmeasured(kind: NodeKind) -> Self {
        Self { kind, width: 0, height: 0, ascent: 0 }
    }

    /// Row of `children`
    pub fn row(children: Vec<Node>) -> Self {
        Self::unmeasured(NodeKind::Row(Row { children }))
    }

    /// A string in the given font
    pub fn text(text: impl Into<String>, italic: bool, font_size: i32) -> Self {
        Self::unmeasured(NodeKind::Text(Text { text: text.into(), italic, font_size, offset: 0 }))
    }

    /// An empty text which only takes `offset` horizontal room (possibly negative)
    pub fn kern(offset: i32, font_size: i32) -> Self {
        Self::unmeasured(NodeKind::Text(Text { text: String::new(), italic: false, font_size, offset }))
    }

    /// Fraction `numerator` over `denominator`
    pub fn fraction(numerator: Node, denominator: Node, font_size: i32) -> Self {
        Self::unmeasured(NodeKind::Fraction(Fraction {
            numerator:   Box::new(numerator),
            denominator: Box::new(denominator),
            font_size,
        }))
    }

    /// `base` with no script attached yet
    pub fn script(base: Node) -> Self {
        Self::unmeasured(NodeKind::Script(Script { base: Box::new(base), superscript: None, subscript: None }))
    }

    /// A big operator with no limits yet
    pub fn big_operator(symbol: impl Into<String>, font_size: i32, is_text_op: bool) -> Self {
        Self::unmeasured(NodeKind::BigOperator(BigOperator {
            symbol: symbol.into(),
            lower:  None,
            upper:  None,
            font_size,
            is_text_op,
        }))
    }

    /// An integral with no bounds yet
    pub fn integral(font_size: i32) -> Self {
        Self::unmeasured(NodeKind::Integral(Integral { lower: None, upper: None, font_size }))
    }

    /// Radical over `radicand`, with an optional degree
    pub fn sqrt(radicand: Node, index: Option<Node>) -> Self {
        Self::unmeasured(NodeKind::Sqrt(Sqrt { radicand: Box::new(radicand), index: index.map(Box::new) }))
    }

    /// `content` between `left` and `right` delimiters
    pub fn fence(content: Node, left: Option<char>, right: Option<char>) -> Self {
        Self::unmeasured(NodeKind::ScalingFence(ScalingFence { content: Box::new(content), left, right }))
    }

    /// Distance from the baseline to the bottom of the node
    pub fn descent(&self) -> i32 {
        self.height - self.ascent
    }

    /// Returns the text if this node is a [`Text`]
    pub fn as_text(&self) -> Option<&Text> {
        match self.kind {
            NodeKind::Text(ref text) => Some(text),
            _ => None,
        }
    }

    /// True for an empty [`Text`] carrying an offset, as made by [`Node::kern`].
    /// Kerns are the only nodes whose width may be negative.
    pub fn is_kern(&self) -> bool {
        self.as_text().map_or(false, |t| t.text.is_empty() && t.offset != 0)
    }

    /// Returns the children if this node is a [`Row`]
    pub fn as_row(&self) -> Option<&[Node]> {
        match self.kind {
            NodeKind::Row(ref row) => Some(&row.children),
            _ => None,
        }
    }

    /// Name of the node type, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Row(_)          => "Row",
            NodeKind::Text(_)         => "Text",
            NodeKind::Fraction(_)     => "Fraction",
            NodeKind::Script(_)       => "Script",
            NodeKind::BigOperator(_)  => "BigOperator",
            NodeKind::Integral(_)     => "Integral",
            NodeKind::Sqrt(_)         => "Sqrt",
            NodeKind::ScalingFence(_) => "ScalingFence",
        }
    }

    /// Calls `f` on this node and all its descendants, parents first
    pub fn visit<'n>(&'n self, f: &mut impl FnMut(&'n Node)) {
        f(self);
        match self.kind {
            NodeKind::Row(ref row) => row.children.iter().for_each(|child| child.visit(f)),
            NodeKind::Text(_) => (),
            NodeKind::Fraction(ref frac) => {
                frac.numerator.visit(f);
                frac.denominator.visit(f);
            },
            NodeKind::Script(ref script) => {
                script.base.visit(f);
                if let Some(ref sup) = script.superscript { sup.visit(f) }
                if let Some(ref sub) = script.subscript   { sub.visit(f) }
            },
            NodeKind::BigOperator(BigOperator { ref lower, ref upper, .. })
            | NodeKind::Integral(Integral { ref lower, ref upper, .. }) => {
                if let Some(ref upper) = *upper { upper.visit(f) }
                if let Some(ref lower) = *lower { lower.visit(f) }
            },
            NodeKind::Sqrt(ref sqrt) => {
                if let Some(ref index) = sqrt.index { index.visit(f) }
                sqrt.radicand.visit(f);
            },
            NodeKind::ScalingFence(ref fence) => fence.content.visit(f),
        }
    }
}

/// `value * ratio`, truncated toward zero
pub(crate) fn scaled(value: i32, ratio: f64) -> i32 {
    (f64::from(value) * ratio) as i32
}


/// Parameters of the layout: base font size and blank margin around the formula.
///
/// ```
/// let settings = mathbox::layout::LayoutSettings::new().font_size(16).padding(4);
/// assert_eq!(settings.font_size, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Font size of the outermost level, in device units
    pub font_size: i32,
    /// Blank margin added on each side of the formula
    pub padding:   i32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self { font_size: DEFAULT_FONT_SIZE, padding: DEFAULT_PADDING }
    }
}

impl LayoutSettings {
    /// Default settings ; equivalent to [Default::default]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base font size
    pub fn font_size(self, font_size: i32) -> Self {
        Self { font_size, ..self }
    }

    /// Sets the margin
    pub fn padding(self, padding: i32) -> Self {
        Self { padding, ..self }
    }
}


/// A parsed and measured formula, framed for output.
/// It serves as input to [`Renderer::render`](crate::render::Renderer::render).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// The measured tree
    pub root:   Node,
    /// Where the top-left corner of `root` must be drawn on the canvas
    pub origin: Cursor,
    /// Width of the canvas
    pub width:  i32,
    /// Height of the canvas
    pub height: i32,
}

impl Layout {
    /// Frames a measured `root` given `ink`, the area actually drawn to when `root` is drawn at (0, 0).
    /// The canvas encloses both the box of `root` and `ink`, plus `padding` on each side.
    pub fn frame(root: Node, ink: Option<BBox>, padding: i32) -> Self {
        let node_box = BBox::from_dims(0, 0, root.width, root.height);
        let area = ink.map_or(node_box, |ink| node_box.union(ink)).pad(padding);
        Self {
            origin: Cursor { x: -area.x_min, y: -area.y_min },
            width:  area.width(),
            height: area.height(),
            root,
        }
    }

    /// Position of the baseline of the formula on the canvas
    pub fn baseline(&self) -> i32 {
        self.origin.y + self.root.ascent
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_covers_ink_outside_of_box() {
        let mut root = Node::row(Vec::new());
        root.width  = 40;
        root.height = 20;
        root.ascent = 15;

        let layout = Layout::frame(root.clone(), None, 5);
        assert_eq!(layout.origin, Cursor { x: 5, y: 5 });
        assert_eq!((layout.width, layout.height), (50, 30));
        assert_eq!(layout.baseline(), 20);

        // superscript poking 3 units above the box
        let layout = Layout::frame(root, Some(BBox::new(2, -3, 30, 10)), 5);
        assert_eq!(layout.origin, Cursor { x: 5, y: 8 });
        assert_eq!((layout.width, layout.height), (50, 33));
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings : LayoutSettings = serde_yaml::from_str("font_size: 12").unwrap();
        assert_eq!(settings, LayoutSettings::new().font_size(12));
        assert_eq!(settings.padding, 50);
        assert_eq!(LayoutSettings::default().font_size, 28);
    }

    #[test]
    fn scaled_truncates_toward_zero() {
        assert_eq!(scaled(28, 0.7), 19);
        assert_eq!(scaled(28, -0.15), -4);
        assert_eq!(scaled(15, 0.8), 12);
    }
}

//! Parses strings representing LaTeX formulas into a tree of [`Node`]s
//!
//! Defines the [`parse`] function to parse TeX into a renderable (but not yet measured) [`Node`].
//! More fine-grained customization is offered by the more basic [`Parser`] struct, which allows custom symbol tables.
//!
//! Parsing never fails. Unknown commands become a `?` placeholder, unterminated groups run to the end of input,
//! and a `}` or `]` with no opening counterpart ends the formula. Blocks nested deeper than [`MAX_NESTING`]
//! are not parsed and show as `?` too, which bounds the depth of the tree. An editor re-parsing on every keystroke
//! always has something to draw.

#[deny(missing_docs)]
pub mod symbols;
pub mod lexer;

use crate::layout::constants::{KERN_RATIO, RADICAL_INDEX_SCALE, SCRIPT_SCALE};
use crate::layout::{scaled, BigOperator, Integral, Node, NodeKind, Script};
use self::lexer::Lexer;
pub use self::symbols::SymbolTable;

/// Glyph drawn for both `\sum` and `\prod`
pub const SUM_SIGN : &str = "\u{2211}";

/// Deepest nesting of argument blocks and fences which is parsed.
/// Measuring and drawing recurse once per level of the tree.
pub const MAX_NESTING : usize = 200;

/// Commands displayed as their own name in upright letters
pub const FUNCTIONS : &[&str] = &[
    "sin", "cos", "tan", "log", "ln", "lg", "exp", "sinh", "cosh", "asin", "acos",
];


/// Parses `markup` at font size `font_size`, returning the top-level [`Row`](crate::layout::Row).
pub fn parse(markup: &str, font_size: i32) -> Node {
    Parser::new(markup, font_size).parse()
}


/// Recursive-descent parser over one string.
///
/// Argument blocks (`{..}`, `[..]`, scripts) are parsed by a sub-parser over the block's slice,
/// with its own position ; the parent resumes after the block.
#[derive(Debug, Clone)]
pub struct Parser<'i, 's> {
    lexer:     Lexer<'i>,
    font_size: i32,
    symbols:   &'s SymbolTable,
    depth:     usize,
}

impl<'i> Parser<'i, 'static> {
    /// Parser using the [standard](SymbolTable::standard) symbol table
    pub fn new(input: &'i str, font_size: i32) -> Self {
        Self::with_symbols(input, font_size, SymbolTable::standard())
    }
}

impl<'i, 's> Parser<'i, 's> {
    /// Parser resolving symbol commands with `symbols`
    pub fn with_symbols(input: &'i str, font_size: i32, symbols: &'s SymbolTable) -> Self {
        Self { lexer: Lexer::new(input), font_size, symbols, depth: 0 }
    }

    /// Parses items until the end of input, or until a `}` or `]` with no opening counterpart.
    pub fn parse(&mut self) -> Node {
        let mut children = Vec::new();
        while let Some(c) = self.lexer.peek() {
            if c == '}' || c == ']' {
                break;
            }
            if let Some(item) = self.item() {
                children.push(self.scripts(item));
            }
        }
        Node::row(children)
    }

    /// Remaining input
    pub fn remaining(&self) -> &'i str {
        self.lexer.input()
    }

    /// Parses `input` one level down ; past [`MAX_NESTING`] levels the input is skipped.
    fn parse_nested(&self, input: &'i str, font_size: i32) -> Node {
        if self.depth >= MAX_NESTING {
            debug!("nesting deeper than {} levels", MAX_NESTING);
            return Node::row(vec![Node::text("?", false, font_size)]);
        }
        let mut parser = Parser::with_symbols(input, font_size, self.symbols);
        parser.depth = self.depth + 1;
        parser.parse()
    }

    fn parse_block(&mut self, font_size: i32) -> Node {
        let block = self.lexer.block();
        self.parse_nested(block, font_size)
    }

    fn item(&mut self) -> Option<Node> {
        let c = self.lexer.peek()?;
        let node = if c == '\\' {
            self.command()
        } else if c.is_ascii_digit() {
            Node::text(self.lexer.number(), false, self.font_size)
        } else {
            self.lexer.next_char();
            Node::text(c.to_string(), c.is_alphabetic(), self.font_size)
        };
        Some(node)
    }

    fn command(&mut self) -> Node {
        let fs = self.font_size;
        let name = self.lexer.control_sequence().unwrap_or_default();
        match name {
            "left" => self.fence(),
            "frac" => {
                let numerator   = self.parse_block(fs);
                let denominator = self.parse_block(fs);
                Node::fraction(numerator, denominator, fs)
            },
            "sqrt" => {
                let index = match self.lexer.peek() {
                    Some('[') => Some(self.parse_block(scaled(fs, RADICAL_INDEX_SCALE))),
                    _ => None,
                };
                let radicand = self.parse_block(fs);
                Node::sqrt(radicand, index)
            },
            "int" => Node::integral(fs),
            "sum" | "prod" => Node::big_operator(SUM_SIGN, fs, false),
            "lim" => Node::big_operator("lim", fs, true),
            "mathrm" => Node::text(self.lexer.block(), false, fs),
            "!" => Node::kern(scaled(fs, -KERN_RATIO), fs),
            "," => Node::kern(scaled(fs, KERN_RATIO), fs),
            name if FUNCTIONS.contains(&name) => Node::text(name, false, fs),
            name => match self.symbols.lookup(name) {
                Some(replacement) => Node::text(replacement, false, fs),
                None => {
                    debug!("unknown command \\{}", name);
                    Node::text("?", false, fs)
                },
            },
        }
    }

    /// `\left` has been consumed
    fn fence(&mut self) -> Node {
        let left = self.lexer.next_char();
        let (body, matched) = self.lexer.fence_body();
        let content = self.parse_nested(body, self.font_size);

        if !matched {
            debug!("\\left{} has no matching \\right", left.map(String::from).unwrap_or_default());
        }
        self.lexer.eat("\\right");
        let right = self.lexer.next_char();
        Node::fence(content, left, right)
    }

    /// Attaches every `^` and `_` following `base`.
    fn scripts(&mut self, mut base: Node) -> Node {
        loop {
            let superscript = match self.lexer.peek() {
                Some('^') => true,
                Some('_') => false,
                _ => return base,
            };
            self.lexer.next_char();
            let script = self.parse_block(scaled(self.font_size, SCRIPT_SCALE));
            base = attach(base, script, superscript);
        }
    }
}

/// Sets the limit of an operator, or the script of any other node.
/// A script of a kind already present replaces it.
fn attach(base: Node, script: Node, superscript: bool) -> Node {
    let takes_limits = matches!(base.kind, NodeKind::BigOperator(_) | NodeKind::Integral(_) | NodeKind::Script(_));
    let mut base = if takes_limits { base } else { Node::script(base) };

    let slot = match base.kind {
        NodeKind::BigOperator(BigOperator { ref mut upper, ref mut lower, .. })
        | NodeKind::Integral(Integral { ref mut upper, ref mut lower, .. })
        | NodeKind::Script(Script { superscript: ref mut upper, subscript: ref mut lower, .. }) =>
            Some(if superscript { upper } else { lower }),
        _ => None,
    };
    if let Some(slot) = slot {
        *slot = Some(Box::new(script));
    }
    base
}

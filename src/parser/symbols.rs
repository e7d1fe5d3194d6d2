//! Replacement strings for TeX commands naming a symbol, e.g. `\alpha` or `\le`.
//!
//! A [`SymbolTable`] is built once and only read afterwards. The parser reads the process-wide
//! [`SymbolTable::standard`] unless given a table of its own.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Map from command names (without the backslash) to the string they display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<String, String>,
}

impl SymbolTable {
    /// Creates a table holding exactly `entries`
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I : IntoIterator<Item = (K, V)>,
        K : Into<String>,
        V : Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// The table used by [`parse`](crate::parser::parse), built on first use.
    pub fn standard() -> &'static SymbolTable {
        static STANDARD : OnceLock<SymbolTable> = OnceLock::new();
        STANDARD.get_or_init(|| SymbolTable::new(STANDARD_SYMBOLS.iter().copied()))
    }

    /// Given a command name (e.g. "alpha"), returns the string it displays
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const STANDARD_SYMBOLS : &[(&str, &str)] = &[
    ("Alpha",   "\u{391}"),
    ("Beta",    "\u{392}"),
    ("Gamma",   "\u{393}"),
    ("Delta",   "\u{394}"),
    ("Epsilon", "\u{395}"),
    ("Zeta",    "\u{396}"),
    ("Eta",     "\u{397}"),
    ("Theta",   "\u{398}"),
    ("Lambda",  "\u{39B}"),
    ("Xi",      "\u{39E}"),
    ("Pi",      "\u{3A0}"),
    ("Sigma",   "\u{3A3}"),
    ("Phi",     "\u{3A6}"),
    ("Psi",     "\u{3A8}"),
    ("Omega",   "\u{3A9}"),

    ("alpha",   "\u{3B1}"),
    ("beta",    "\u{3B2}"),
    ("gamma",   "\u{3B3}"),
    ("delta",   "\u{3B4}"),
    ("epsilon", "\u{3B5}"),
    ("zeta",    "\u{3B6}"),
    ("eta",     "\u{3B7}"),
    ("theta",   "\u{3B8}"),
    ("lambda",  "\u{3BB}"),
    ("xi",      "\u{3BE}"),
    ("pi",      "\u{3C0}"),
    ("sigma",   "\u{3C3}"),
    ("phi",     "\u{3C6}"),
    ("psi",     "\u{3C8}"),
    ("omega",   "\u{3C9}"),

    ("infty",   "\u{221E}"),
    ("approx",  "\u{2248}"),
    ("neq",     "\u{2260}"),
    ("le",      "\u{2264}"),
    ("ge",      "\u{2265}"),
    ("pm",      "\u{B1}"),
    ("cdot",    "\u{2219}"),
    ("to",      "\u{2192}"),

    // Spacing
    ("thinspace", " "),
    ("quad",      "  "),
    (" ",         " "),
    ("!",         ""),
    (",",         ""),
    ("'",         "'"),

    // Symbol escape shim
    ("{", "{"),
    ("}", "}"),
    ("%", "%"),
    ("&", "&"),
    ("$", "$"),
    ("#", "#"),
];

//! Length constants for layout
//!
//! All lengths are in device units ; ratios are applied to font sizes or to measured heights.

/// Font size used when none is given, in device units.
pub const DEFAULT_FONT_SIZE : i32 = 28;

/// Blank margin around a formula when framing it for output.
pub const DEFAULT_PADDING   : i32 = 50;


/// Fraction of a text line's height which is above the baseline.
/// Fonts are not queried for their ascent ; this approximates a cap-height.
pub const TEXT_ASCENT_RATIO : f64 = 0.8;

/// Magnitude of the kern inserted by `\,` (positive) and `\!` (negative), as a ratio of the font size.
pub const KERN_RATIO        : f64 = 0.15;


/// Super- and subscripts are typeset at this ratio of the enclosing font size.
pub const SCRIPT_SCALE      : f64 = 0.7;

/// A superscript is raised by this fraction of its own height above the top of the base.
pub const SUPERSCRIPT_RAISE : f64 = 0.5;

/// A subscript starts this fraction of its own height below the bottom of the base.
pub const SUBSCRIPT_DROP    : f64 = 0.1;


/// Extra width of a fraction, split evenly on both sides of the wider of numerator and denominator.
pub const FRACTION_GUTTER   : i32 = 10;

/// Space between the fraction bar and the numerator (resp. denominator).
pub const FRACTION_BAR_GAP  : i32 = 2;


/// Glyph of big operators (`\sum`, `\prod`) is drawn at this ratio of the font size.
pub const BIG_OPERATOR_SCALE   : f64 = 1.5;

/// Extra width of big operators and integrals.
pub const BIG_OPERATOR_PADDING : i32 = 4;

/// Space between an integral sign and its bounds, horizontally and vertically.
pub const INTEGRAL_LIMIT_GAP   : i32 = 2;


/// The degree of a radical (e.g. `\sqrt[3]{..}`) is typeset at this ratio of the font size.
pub const RADICAL_INDEX_SCALE : f64 = 0.6;

/// Horizontal room taken by the radical sign in front of its radicand.
pub const RADICAL_SIGN_WIDTH  : i32 = 10;

/// Extra width of the overbar past the radicand.
pub const RADICAL_OVERHANG    : i32 = 5;

/// Vertical space between the overbar and the top of the radicand.
pub const RADICAL_GAP         : i32 = 5;

/// Width of the short rising stroke of the radical sign ; also the least room given to a degree.
pub const RADICAL_TICK        : i32 = 5;


/// Horizontal margin reserved for each delimiter of `\left .. \right`.
pub const FENCE_MARGIN : i32 = 7;

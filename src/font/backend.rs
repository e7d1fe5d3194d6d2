//! Text-metrics providers backed by font parsing crates.

/// Metrics read from a TrueType/OpenType face with the `ttf-parser` crate.
#[cfg(feature="ttfparser-fontparser")]
pub mod ttf_parser;

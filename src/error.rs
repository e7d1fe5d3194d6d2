//! Defines the error types of the crate.
//!
//! Parsing and layout never fail: malformed input degrades to placeholder glyphs (cf [`crate::parser`]).
//! Errors only arise in the glue around them:
//!   - [`FontError`] : errors that have to do with the font file provided (unparsable file, no such glyph).
//!   - [`Error::Io`] : writing an output file failed.
//!   - [`Error::Surface`] : a drawing surface of the requested size could not be created.

use std::fmt;

/// Result type for the [`Error`]
pub type RenderResult<T> = ::std::result::Result<T, Error>;

/// Errors having to do with font file provided
#[derive(Debug, Clone, PartialEq)]
pub enum FontError {
    /// The font file could not be parsed ; holds the parser's description of the problem.
    Unparsable(String),
    /// The font does not contain a glyph for the given char.
    MissingGlyph(char),
}

/// A generic error type covering any error that may happen while producing output.
#[derive(Debug)]
pub enum Error {
    /// a font error
    Font(FontError),
    /// reading or writing a file failed
    Io(std::io::Error),
    /// the backend could not allocate a surface of these dimensions
    Surface {
        /// requested width
        width:  u32,
        /// requested height
        height: u32,
    },
}

impl From<FontError> for Error {
    fn from(e: FontError) -> Self {
        Error::Font(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}


impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::FontError::*;
        match *self {
            Unparsable(ref reason) =>
                write!(f, "could not parse font: {}", reason),
            MissingGlyph(cp) =>
                write!(f, "missing glyph for codepoint '{}'", cp),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Font(ref e) =>
                write!(f, "font error: {}", e),
            Error::Io(ref e) =>
                write!(f, "i/o error: {}", e),
            Error::Surface { width, height } =>
                write!(f, "cannot create a {}x{} drawing surface", width, height),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

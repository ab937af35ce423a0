//! Error types for the domain layer.

use thiserror::Error;

/// Errors from the bounding-box text rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// An empty world has no bounding rectangle to draw.
    #[error("cannot render an empty world: it has no bounding box")]
    EmptyWorld,
}

/// Errors from parsing a text grid into a world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character other than a live or dead glyph.
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        column: usize,
        /// The offending character.
        ch: char,
    },

    /// A row whose width differs from the first row.
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
}

/// An algorithm name that matches no known strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected \"triple\" or \"tally\")")]
pub struct UnknownAlgorithm(pub String);

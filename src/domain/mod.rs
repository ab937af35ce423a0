mod coordinate;
mod cell;
mod world;
mod algorithm;
mod render;
mod parse;
mod patterns;
mod error;

pub use coordinate::Coordinate;
pub use cell::Cell;
pub use world::World;
pub use algorithm::Algorithm;
pub use render::LINE_TERMINATOR;
pub use patterns::{Pattern, presets, random_soup};
pub use error::{ParseError, RenderError, UnknownAlgorithm};

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Coordinate, Pattern, World, presets};
pub use domain::{ParseError, RenderError};
pub use application::Simulation;

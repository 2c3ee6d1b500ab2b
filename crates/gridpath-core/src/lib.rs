//! **gridpath-core** — core types for the grid shortest-path solver.
//!
//! This crate provides the input side of the solver: `(row, col)`
//! coordinates, cell markers, the character encoding used to read and print
//! them, and a validated square [`MarkerGrid`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod glyphs;
pub mod grid;

pub use cell::Marker;
pub use error::ConfigError;
pub use geom::{Bounds, Pos};
pub use glyphs::Glyphs;
pub use grid::MarkerGrid;

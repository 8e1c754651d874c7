//! Spatial data structures for the solver
//!
//! This module contains spatial-related functionality including:
//! - Cardinal directions and neighbour offsets
//! - Grid and cell state
//! - Tile definitions and the resolved tileset

/// Cardinal directions
pub mod direction;
/// Grid and cell state management
pub mod grid;
/// Tile definitions and tileset resolution
pub mod tiles;

pub use direction::Direction;
pub use grid::{Cell, Grid};

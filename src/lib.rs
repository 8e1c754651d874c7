//! Wave function collapse solver for tile grids with weighted collapse and backtracking
//!
//! Every cell starts in superposition over all tiles of a tileset. The solver
//! repeatedly collapses the lowest-entropy cell by weighted choice and
//! propagates directional adjacency rules to its neighbours, reverting and
//! banning choices that lead to contradictions.

#![forbid(unsafe_code)]

/// Core algorithm implementation including selection, collapse, propagation, and backtracking
pub mod algorithm;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Grid, direction, and tile data structures
pub mod spatial;

pub use algorithm::executor::{SolveStats, SolveStatus, Solver};
pub use io::error::{AlgorithmError, ErrorKind, Result};
pub use spatial::tiles::{TileDefinition, TileSet};

/// Fixed-size bitset for candidate tile sets
pub mod bitset;
/// Per-step snapshots for reverting failed steps
pub mod changelog;
/// Weighted collapse of a cell to one tile and the seeded random source
pub mod collapse;
/// Solver orchestration and backtracking
pub mod executor;
/// Constraint propagation and contradiction detection
pub mod propagation;
/// Lowest-entropy cell selection
pub mod selection;

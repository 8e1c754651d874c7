//! Weighted collapse of a cell to a single tile, driven by a seeded random source

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::bitset::TileBitset;
use crate::spatial::grid::Cell;
use crate::spatial::tiles::TileSet;

/// Seeded random source shared by tie-breaking and weighted collapse
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a selector, reproducible when a seed is given
    ///
    /// Without a seed the generator is initialised from the operating
    /// system and runs are not repeatable.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { rng }
    }

    /// Uniform index in `0..len`, 0 for an empty range
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Uniform integer in `0..total`, 0 for an empty range
    pub fn below(&mut self, total: u64) -> u64 {
        if total == 0 {
            return 0;
        }
        self.rng.random_range(0..total)
    }
}

/// Running totals of candidate weights in candidate order
pub fn cumulative_weights(candidates: &TileBitset, tileset: &TileSet) -> Vec<u64> {
    candidates
        .iter()
        .scan(0_u64, |total, tile| {
            *total += u64::from(tileset.weight(tile));
            Some(*total)
        })
        .collect()
}

/// Draw one candidate with probability proportional to its weight
///
/// Draws uniformly in `[0, total)` and takes the first candidate whose
/// running total exceeds the draw. Returns `None` for an empty set.
pub fn weighted_pick(
    candidates: &TileBitset,
    tileset: &TileSet,
    rng: &mut RandomSelector,
) -> Option<usize> {
    let cumulative = cumulative_weights(candidates, tileset);
    let total = cumulative.last().copied().filter(|&total| total > 0)?;
    let draw = rng.below(total);
    let position = cumulative.partition_point(|&weight| weight <= draw);
    candidates.iter().nth(position)
}

/// Collapse `cell` to a weighted choice among its candidates
///
/// Returns the chosen tile, or `None` if the cell had no candidates.
pub fn collapse_cell(cell: &mut Cell, tileset: &TileSet, rng: &mut RandomSelector) -> Option<usize> {
    let tile = weighted_pick(cell.candidates(), tileset, rng)?;
    cell.collapse_to(tile);
    Some(tile)
}

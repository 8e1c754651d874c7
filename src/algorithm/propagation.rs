//! Breadth-first constraint propagation over the four grid directions
//!
//! After a cell changes, each neighbour is restricted to the union of tiles
//! the changed cell's candidates allow in that direction. Narrowed
//! neighbours are queued in turn until nothing changes (fixpoint) or a cell
//! runs out of candidates (contradiction). This is AC-3 restricted to a
//! grid with 4-directional arcs.

use std::collections::VecDeque;
use std::fmt;

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::changelog::ChangeLog;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileSet;

/// A cell lost every candidate during propagation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    /// Column of the emptied cell
    pub x: usize,
    /// Row of the emptied cell
    pub y: usize,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell ({}, {}) has no remaining candidates", self.x, self.y)
    }
}

/// Union of the tiles permitted in `direction` by any of `candidates`
pub fn allowed_neighbors(
    candidates: &TileBitset,
    tileset: &TileSet,
    direction: Direction,
) -> TileBitset {
    let mut allowed = TileBitset::new(tileset.len());
    for tile in candidates.iter() {
        if let Some(permitted) = tileset.allowed(tile, direction) {
            allowed.union_with(permitted);
        }
    }
    allowed
}

/// Propagate the constraints of the cell at `start` across the grid
///
/// Only uncollapsed neighbours are revised, each against the rules of the
/// cell being propagated from, so one-way rules stay one-way. Every cell
/// narrowed is snapshotted into `log` before its first change. Returns the
/// number of revisions made.
///
/// # Errors
///
/// Returns the first cell whose candidates become empty. The queue is
/// abandoned at that point and the grid is left mid-propagation; callers
/// revert through `log`.
pub fn propagate(
    grid: &mut Grid,
    tileset: &TileSet,
    log: &mut ChangeLog,
    start: [usize; 2],
) -> Result<usize, Contradiction> {
    let mut queue = VecDeque::from([start]);
    let mut revisions = 0;

    while let Some([x, y]) = queue.pop_front() {
        let Some(source) = grid.cell(x, y).map(|cell| cell.candidates().clone()) else {
            continue;
        };

        for direction in Direction::ALL {
            let Some([nx, ny]) = grid.neighbor(x, y, direction) else {
                continue;
            };
            let Some(neighbor) = grid.cell_mut(nx, ny) else {
                continue;
            };
            if neighbor.is_collapsed() {
                continue;
            }

            let allowed = allowed_neighbors(&source, tileset, direction);
            let narrowed = neighbor.candidates().intersection(&allowed);

            if narrowed.count() == neighbor.entropy() {
                continue;
            }
            if narrowed.is_empty() {
                return Err(Contradiction { x: nx, y: ny });
            }

            log.record_if_first(neighbor);
            neighbor.set_candidates(narrowed);
            revisions += 1;
            queue.push_back([nx, ny]);
        }
    }

    Ok(revisions)
}

//! Lowest-entropy cell selection
//!
//! Every uncollapsed cell is a candidate for observation. The one with the
//! fewest remaining tiles is chosen, ties broken uniformly at random from
//! the solver's generator so that seeded runs stay reproducible.

use crate::algorithm::collapse::RandomSelector;
use crate::spatial::grid::Grid;

/// Uncollapsed cells sharing the lowest entropy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntropyScan {
    /// Smallest candidate count among uncollapsed cells
    pub entropy: usize,
    /// Every uncollapsed cell with that count, in row-major order
    pub cells: Vec<[usize; 2]>,
}

/// Collect the uncollapsed cells of minimum entropy
///
/// Returns `None` when every cell is collapsed.
pub fn lowest_entropy_cells(grid: &Grid) -> Option<EntropyScan> {
    let mut scan: Option<EntropyScan> = None;

    for cell in grid.cells().filter(|cell| !cell.is_collapsed()) {
        let entropy = cell.entropy();
        debug_assert!(entropy > 0, "contradiction reached the entropy selector");

        if scan.as_ref().is_none_or(|current| entropy < current.entropy) {
            scan = Some(EntropyScan {
                entropy,
                cells: vec![cell.position()],
            });
        } else if let Some(current) = scan.as_mut().filter(|current| current.entropy == entropy) {
            current.cells.push(cell.position());
        }
    }

    scan
}

/// Pick the cell to observe next
///
/// Returns `None` when the grid is fully collapsed.
pub fn select_lowest_entropy(grid: &Grid, rng: &mut RandomSelector) -> Option<[usize; 2]> {
    let scan = lowest_entropy_cells(grid)?;
    match scan.cells.as_slice() {
        [only] => Some(*only),
        cells => cells.get(rng.index(cells.len())).copied(),
    }
}

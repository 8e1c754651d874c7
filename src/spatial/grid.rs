//! Dense grid of cells holding per-cell candidate tiles
//!
//! Cells live in an `ndarray` indexed `[y, x]`, so storage is row-major with
//! x as the fast-varying coordinate. Neighbours are derived from coordinates
//! and a direction offset on demand; cells never point at each other.

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::Direction;

/// A grid position and the tiles it may still become
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    collapsed: bool,
    candidates: TileBitset,
}

impl Cell {
    /// Create a cell in full superposition over `tile_count` tiles
    pub fn new(x: usize, y: usize, tile_count: usize) -> Self {
        Self {
            x,
            y,
            collapsed: tile_count == 1,
            candidates: TileBitset::all(tile_count),
        }
    }

    /// Column of this cell
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Row of this cell
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Position as `[x, y]`
    pub const fn position(&self) -> [usize; 2] {
        [self.x, self.y]
    }

    /// Whether exactly one candidate remains
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Number of remaining candidates
    pub fn entropy(&self) -> usize {
        self.candidates.count()
    }

    /// Remaining candidates in ascending tile order
    pub const fn candidates(&self) -> &TileBitset {
        &self.candidates
    }

    /// Whether `tile` is still a candidate
    pub fn contains(&self, tile: usize) -> bool {
        self.candidates.contains(tile)
    }

    /// The resolved tile, if collapsed
    pub fn tile(&self) -> Option<usize> {
        if self.collapsed {
            self.candidates.first()
        } else {
            None
        }
    }

    /// Fix this cell to a single tile
    pub fn collapse_to(&mut self, tile: usize) {
        self.candidates = TileBitset::singleton(self.candidates.capacity(), tile);
        self.collapsed = true;
    }

    /// Replace the candidates, keeping the collapsed flag in sync
    pub fn set_candidates(&mut self, candidates: TileBitset) {
        self.collapsed = candidates.count() == 1;
        self.candidates = candidates;
    }

    /// Drop one candidate, returning whether it was present
    pub fn remove(&mut self, tile: usize) -> bool {
        let removed = self.candidates.remove(tile);
        self.collapsed = self.candidates.count() == 1;
        removed
    }
}

/// Dense `width × height` array of cells
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<Cell>,
    tile_count: usize,
}

impl Grid {
    /// Create a grid with every cell in full superposition
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize, tile_count: usize) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let cells = Array2::from_shape_fn((height, width), |(y, x)| Cell::new(x, y, tile_count));
        Ok(Self { cells, tile_count })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of tiles each cell ranges over
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Whether `(x, y)` lies inside the grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Cell at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.cells.get([y, x])
    }

    /// Mutable cell at `(x, y)`
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.cells.get_mut([y, x])
    }

    /// Coordinates one step from `(x, y)` in `direction`, if in bounds
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<[usize; 2]> {
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.contains(nx, ny).then_some([nx, ny])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Whether every cell holds a single tile
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Overwrite a cell with a stored copy, matched by its coordinates
    pub fn restore(&mut self, snapshot: &Cell) {
        if let Some(cell) = self.cell_mut(snapshot.x, snapshot.y) {
            cell.clone_from(snapshot);
        }
    }
}

use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    algorithm::changelog::ChangeLog,
    algorithm::collapse::{RandomSelector, collapse_cell},
    algorithm::propagation::propagate,
    algorithm::selection::select_lowest_entropy,
    io::configuration::DEFAULT_MAX_BACKTRACKS,
    io::error::{AlgorithmError, Result},
    spatial::direction::Direction,
    spatial::grid::{Cell, Grid},
    spatial::tiles::TileSet,
};

/// Where a solve stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Cells remain in superposition and the grid is consistent
    InProgress,
    /// Every cell holds exactly one tile
    Collapsed,
    /// A contradiction could not be recovered within the backtrack budget
    Unsolvable,
}

/// Counters accumulated over the life of a solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Observe-collapse-propagate cycles attempted
    pub steps: usize,
    /// Cells collapsed by observation or manual assignment
    pub collapses: usize,
    /// Contradictions hit during propagation
    pub contradictions: usize,
    /// Steps reverted to recover from a contradiction
    pub backtracks: usize,
}

/// A committed observation and the cell states it overwrote
#[derive(Debug, Clone)]
struct StepRecord {
    cell: [usize; 2],
    tile: usize,
    log: ChangeLog,
}

/// Wave function collapse solver over a fixed-size grid
///
/// Each step observes the lowest-entropy cell, collapses it by weighted
/// choice and propagates the result. Successful steps are kept on a history
/// stack so a contradiction can be undone, the offending choice banned, and
/// earlier steps unwound when the ban itself fails.
pub struct Solver {
    tileset: Arc<TileSet>,
    grid: Grid,
    random_selector: RandomSelector,
    change_log: ChangeLog,
    history: Vec<StepRecord>,
    status: SolveStatus,
    backtrack_budget: usize,
    stats: SolveStats,
}

impl Solver {
    /// Create a solver with every cell in full superposition
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are zero or too large
    pub fn initialize(
        width: usize,
        height: usize,
        seed: Option<u64>,
        tileset: Arc<TileSet>,
    ) -> Result<Self> {
        let grid = Grid::new(width, height, tileset.len())?;

        let mut solver = Self {
            tileset,
            grid,
            random_selector: RandomSelector::new(seed),
            change_log: ChangeLog::new(),
            history: Vec::new(),
            status: SolveStatus::InProgress,
            backtrack_budget: DEFAULT_MAX_BACKTRACKS,
            stats: SolveStats::default(),
        };
        solver.status = solver.initial_status();
        Ok(solver)
    }

    /// Discard all progress and start again from full superposition
    ///
    /// The random stream continues, so a reset run differs from the first.
    pub fn reset(&mut self) {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if let Some(cell) = self.grid.cell_mut(x, y) {
                    *cell = Cell::new(x, y, self.tileset.len());
                }
            }
        }
        self.change_log.reset();
        self.history.clear();
        self.stats = SolveStats::default();
        self.status = self.initial_status();
    }

    /// Status of a freshly built grid
    ///
    /// A single-tile set starts fully collapsed, so the tile must accept
    /// itself in every direction that has a neighbour.
    fn initial_status(&self) -> SolveStatus {
        if !self.grid.is_fully_collapsed() {
            return SolveStatus::InProgress;
        }

        let (width, height) = (self.grid.width(), self.grid.height());
        let forbidden = Direction::ALL.into_iter().find(|&direction| {
            let has_neighbor = match direction {
                Direction::North | Direction::South => height > 1,
                Direction::East | Direction::West => width > 1,
            };
            has_neighbor && !self.tileset.permits(0, direction, 0)
        });

        match forbidden {
            Some(direction) => {
                info!("Single tile may not sit next to itself to the {direction}");
                SolveStatus::Unsolvable
            }
            None => SolveStatus::Collapsed,
        }
    }

    /// Current solve status
    pub const fn status(&self) -> SolveStatus {
        self.status
    }

    /// Whether every cell has been resolved
    pub fn is_collapsed(&self) -> bool {
        self.status == SolveStatus::Collapsed
    }

    /// Whether solving has given up
    pub fn has_failed(&self) -> bool {
        self.status == SolveStatus::Unsolvable
    }

    /// Read-only view of the grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.cell(x, y)
    }

    /// Resolved tile at `(x, y)`, if collapsed
    pub fn tile_at(&self, x: usize, y: usize) -> Option<usize> {
        self.grid.cell(x, y).and_then(Cell::tile)
    }

    /// Tileset the solver draws from
    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// Counters for this solver
    pub const fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Contradictions that may still be recovered from
    pub const fn backtracks_remaining(&self) -> usize {
        self.backtrack_budget
    }

    /// Set how many contradictions later steps may recover from
    pub const fn set_backtrack_budget(&mut self, budget: usize) {
        self.backtrack_budget = budget;
    }

    /// Run one observe-collapse-propagate cycle
    ///
    /// Does nothing once the grid is collapsed or unsolvable.
    pub fn step(&mut self) -> SolveStatus {
        if self.status != SolveStatus::InProgress {
            return self.status;
        }

        self.change_log.reset();

        let Some([x, y]) = select_lowest_entropy(&self.grid, &mut self.random_selector) else {
            info!("Grid fully collapsed after {} steps", self.stats.steps);
            self.status = SolveStatus::Collapsed;
            return self.status;
        };

        self.stats.steps += 1;

        let Some(tile) = self.collapse_at(x, y) else {
            return self.status;
        };

        match propagate(&mut self.grid, &self.tileset, &mut self.change_log, [x, y]) {
            Ok(_) => {
                let log = std::mem::take(&mut self.change_log);
                self.history.push(StepRecord {
                    cell: [x, y],
                    tile,
                    log,
                });
                if self.grid.is_fully_collapsed() {
                    info!("Grid fully collapsed after {} steps", self.stats.steps);
                    self.status = SolveStatus::Collapsed;
                }
            }
            Err(contradiction) => {
                self.stats.contradictions += 1;
                debug!("Collapsing ({x}, {y}) to tile {tile} failed: {contradiction}");
                self.change_log.revert(&mut self.grid);
                self.change_log.reset();
                self.backtrack([x, y], tile);
            }
        }

        self.status
    }

    /// Run steps until collapsed, unsolvable, or `max_steps` is reached
    ///
    /// `max_backtracks` replaces the remaining backtrack budget. Returns
    /// `InProgress` when the step limit is hit first.
    pub fn solve(&mut self, max_steps: usize, max_backtracks: usize) -> SolveStatus {
        self.solve_with(max_steps, max_backtracks, |_| {})
    }

    /// Like [`Solver::solve`], calling `observer` after every step
    pub fn solve_with<F>(
        &mut self,
        max_steps: usize,
        max_backtracks: usize,
        mut observer: F,
    ) -> SolveStatus
    where
        F: FnMut(&Self),
    {
        self.backtrack_budget = max_backtracks;

        for _ in 0..max_steps {
            let status = self.step();
            observer(self);
            if status != SolveStatus::InProgress {
                return status;
            }
        }

        if self.status == SolveStatus::InProgress && self.grid.is_fully_collapsed() {
            self.status = SolveStatus::Collapsed;
        }
        self.status
    }

    /// Force an uncollapsed cell to a named tile and propagate
    ///
    /// The assignment is permanent: later backtracking never undoes it. A
    /// contradiction caused by the assignment is reverted and marks the
    /// solver unsolvable.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the grid unchanged, if:
    /// - The solver has already failed
    /// - `(x, y)` is outside the grid
    /// - No tile has the given name
    /// - The cell is already collapsed
    pub fn manual_set_cell(&mut self, x: usize, y: usize, name: &str) -> Result<SolveStatus> {
        if self.has_failed() {
            return Err(AlgorithmError::SolverFailed);
        }

        let tile = self
            .tileset
            .index_of(name)
            .ok_or_else(|| AlgorithmError::UnknownTileName {
                name: name.to_string(),
            })?;

        let cell = self.grid.cell(x, y).ok_or(AlgorithmError::OutOfBounds {
            x,
            y,
            width: self.grid.width(),
            height: self.grid.height(),
        })?;

        if cell.is_collapsed() {
            return Err(AlgorithmError::CellAlreadyCollapsed { x, y });
        }

        if !cell.contains(tile) {
            self.stats.contradictions += 1;
            warn!("Tile '{name}' is not a candidate at ({x}, {y}); grid is unsolvable");
            self.status = SolveStatus::Unsolvable;
            return Ok(self.status);
        }

        self.change_log.reset();
        if let Some(cell) = self.grid.cell_mut(x, y) {
            self.change_log.record_if_first(cell);
            cell.collapse_to(tile);
            self.stats.collapses += 1;
        }

        match propagate(&mut self.grid, &self.tileset, &mut self.change_log, [x, y]) {
            Ok(_) => {
                // Pins are ground truth, earlier steps can no longer be unwound
                self.history.clear();
                if self.grid.is_fully_collapsed() {
                    self.status = SolveStatus::Collapsed;
                }
            }
            Err(contradiction) => {
                self.stats.contradictions += 1;
                warn!("Assigning '{name}' at ({x}, {y}) failed: {contradiction}");
                self.change_log.revert(&mut self.grid);
                self.status = SolveStatus::Unsolvable;
            }
        }
        self.change_log.reset();

        Ok(self.status)
    }

    /// Collapse the cell at `(x, y)`, logging its prior state
    fn collapse_at(&mut self, x: usize, y: usize) -> Option<usize> {
        let cell = self.grid.cell_mut(x, y)?;
        self.change_log.record_if_first(cell);
        let tile = collapse_cell(cell, &self.tileset, &mut self.random_selector)?;
        self.stats.collapses += 1;
        debug!("Collapsed ({x}, {y}) to tile {tile}");
        Some(tile)
    }

    /// Recover from a failed choice of `tile` at `cell`
    ///
    /// The failed step has already been reverted. Each round bans the failed
    /// choice within the state that produced it, recording the ban in that
    /// step's log so that unwinding the step also lifts the ban. When a ban
    /// empties the cell or contradicts, that step is reverted too and its
    /// own choice becomes the next one to ban.
    fn backtrack(&mut self, mut cell: [usize; 2], mut tile: usize) {
        loop {
            if self.backtrack_budget == 0 {
                info!(
                    "Backtrack budget exhausted after {} steps; grid is unsolvable",
                    self.stats.steps
                );
                self.status = SolveStatus::Unsolvable;
                return;
            }
            self.backtrack_budget -= 1;
            self.stats.backtracks += 1;
            warn!(
                "Backtracking: banning tile {tile} at ({}, {}), {} backtracks left",
                cell[0], cell[1], self.backtrack_budget
            );

            let mut parent = self.history.pop();
            let mut scratch = ChangeLog::new();
            let log = parent.as_mut().map_or(&mut scratch, |record| &mut record.log);

            if Self::ban(&mut self.grid, &self.tileset, log, cell, tile) {
                if let Some(record) = parent {
                    self.history.push(record);
                }
                if self.grid.is_fully_collapsed() {
                    self.status = SolveStatus::Collapsed;
                }
                return;
            }

            log.revert(&mut self.grid);
            match parent {
                Some(record) => {
                    cell = record.cell;
                    tile = record.tile;
                }
                None => {
                    info!("Contradiction with no step left to unwind; grid is unsolvable");
                    self.status = SolveStatus::Unsolvable;
                    return;
                }
            }
        }
    }

    /// Remove `tile` from `cell` and propagate, returning whether the grid
    /// is still consistent
    fn ban(
        grid: &mut Grid,
        tileset: &TileSet,
        log: &mut ChangeLog,
        [x, y]: [usize; 2],
        tile: usize,
    ) -> bool {
        let Some(target) = grid.cell_mut(x, y) else {
            return false;
        };
        log.record_if_first(target);
        target.remove(tile);
        if target.entropy() == 0 {
            return false;
        }
        propagate(grid, tileset, log, [x, y]).is_ok()
    }
}

//! Per-step record of cell states for reverting a failed step
//!
//! A cell is snapshotted only the first time it is touched within a step,
//! so the log always holds each cell's true pre-step state and replay order
//! does not matter.

use std::collections::HashSet;

use crate::spatial::grid::{Cell, Grid};

/// A cell's state captured before its first mutation in a step
#[derive(Debug, Clone)]
pub struct ChangeRecord {
    /// Cell column
    pub x: usize,
    /// Cell row
    pub y: usize,
    /// Copy of the cell before mutation
    pub snapshot: Cell,
}

/// Snapshots of every cell mutated during the current step
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    records: Vec<ChangeRecord>,
    logged: HashSet<[usize; 2]>,
}

impl ChangeLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all records, starting a new step
    pub fn reset(&mut self) {
        self.records.clear();
        self.logged.clear();
    }

    /// Snapshot `cell` unless it was already logged this step
    ///
    /// Returns whether a record was added
    pub fn record_if_first(&mut self, cell: &Cell) -> bool {
        let position = cell.position();
        if !self.logged.insert(position) {
            return false;
        }
        self.records.push(ChangeRecord {
            x: position[0],
            y: position[1],
            snapshot: cell.clone(),
        });
        true
    }

    /// Restore every logged cell to its pre-step state
    pub fn revert(&self, grid: &mut Grid) {
        for record in &self.records {
            grid.restore(&record.snapshot);
        }
    }

    /// Whether `(x, y)` has been logged this step
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.logged.contains(&[x, y])
    }

    /// Number of logged cells
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Logged records in the order cells were first touched
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }
}

//! Predetermined tile placements applied before solving

use std::collections::VecDeque;
use std::str::FromStr;

use log::debug;

use crate::algorithm::executor::{SolveStatus, Solver};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};

/// Single tile placement instruction, written `X,Y,NAME`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPin {
    /// Cell column
    pub x: usize,
    /// Cell row
    pub y: usize,
    /// Tile name to place
    pub tile: String,
}

impl FromStr for CellPin {
    type Err = AlgorithmError;

    fn from_str(text: &str) -> Result<Self> {
        let mut parts = text.splitn(3, ',');
        let (Some(x), Some(y), Some(tile)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid_parameter("pin", &text, &"expected X,Y,NAME"));
        };

        let coordinate = |value: &str| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|error| invalid_parameter("pin", &text, &error))
        };

        let tile = tile.trim();
        if tile.is_empty() {
            return Err(invalid_parameter("pin", &text, &"tile name is empty"));
        }

        Ok(Self {
            x: coordinate(x)?,
            y: coordinate(y)?,
            tile: tile.to_string(),
        })
    }
}

/// Queue of pins applied in order
#[derive(Debug, Clone, Default)]
pub struct PrefillData {
    /// Placements not yet applied
    pub placement_queue: VecDeque<CellPin>,
}

impl PrefillData {
    /// Queue the given pins
    pub fn new(pins: impl IntoIterator<Item = CellPin>) -> Self {
        Self {
            placement_queue: pins.into_iter().collect(),
        }
    }

    /// Get the next placement from the queue
    pub fn next_placement(&mut self) -> Option<CellPin> {
        self.placement_queue.pop_front()
    }

    /// Apply every queued pin to the solver
    ///
    /// Stops early once a pin leaves the grid unsolvable.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin is out of bounds, names an unknown tile, or
    /// targets a cell that is already collapsed
    pub fn apply(&mut self, solver: &mut Solver) -> Result<SolveStatus> {
        let mut status = solver.status();
        while let Some(pin) = self.next_placement() {
            debug!("Pinning ({}, {}) to '{}'", pin.x, pin.y, pin.tile);
            status = solver.manual_set_cell(pin.x, pin.y, &pin.tile)?;
            if status == SolveStatus::Unsolvable {
                break;
            }
        }
        Ok(status)
    }
}

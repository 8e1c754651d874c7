//! Error types for tileset loading and solver operations

use crate::spatial::direction::Direction;
use std::fmt;
use std::path::PathBuf;

/// Broad classes of failure a caller may react to differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tileset could not be read or resolved; nothing was solved
    Load,
    /// A request was rejected and the grid left unchanged
    InvalidOperation,
    /// Solving ran out of backtracking budget
    Unsolvable,
}

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Tileset source is not valid JSON or has the wrong shape
    MalformedTileSet {
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Tileset declares no tiles
    EmptyTileSet,

    /// Two tiles share a name
    DuplicateTileName {
        /// The repeated name
        name: String,
    },

    /// An adjacency list names a tile that was never declared
    UnknownTileReference {
        /// Tile whose adjacency list contains the reference
        tile: String,
        /// Direction of the offending list
        direction: Direction,
        /// The unresolved name
        reference: String,
    },

    /// Tile weight is zero, negative, or too large
    InvalidWeight {
        /// Tile with the bad weight
        tile: String,
        /// Declared weight
        weight: i64,
    },

    /// Coordinates fall outside the grid
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Manual assignment targeted a cell that is already resolved
    CellAlreadyCollapsed {
        /// Cell column
        x: usize,
        /// Cell row
        y: usize,
    },

    /// Tile name not present in the tileset
    UnknownTileName {
        /// The requested name
        name: String,
    },

    /// The solver has already reported the grid unsolvable
    SolverFailed,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Backtracking budget exhausted before the grid collapsed
    Unsolvable {
        /// Steps taken before giving up
        steps: usize,
        /// Backtracks spent
        backtracks: usize,
    },
}

impl AlgorithmError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FileSystem { .. }
            | Self::MalformedTileSet { .. }
            | Self::EmptyTileSet
            | Self::DuplicateTileName { .. }
            | Self::UnknownTileReference { .. }
            | Self::InvalidWeight { .. } => ErrorKind::Load,
            Self::OutOfBounds { .. }
            | Self::CellAlreadyCollapsed { .. }
            | Self::UnknownTileName { .. }
            | Self::SolverFailed
            | Self::InvalidParameter { .. } => ErrorKind::InvalidOperation,
            Self::Unsolvable { .. } => ErrorKind::Unsolvable,
        }
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedTileSet { source } => {
                write!(f, "Malformed tileset: {source}")
            }
            Self::EmptyTileSet => write!(f, "Tileset contains no tiles"),
            Self::DuplicateTileName { name } => {
                write!(f, "Tile name '{name}' is declared more than once")
            }
            Self::UnknownTileReference {
                tile,
                direction,
                reference,
            } => {
                write!(
                    f,
                    "Tile '{tile}' lists unknown tile '{reference}' in its {direction} adjacency"
                )
            }
            Self::InvalidWeight { tile, weight } => {
                write!(f, "Tile '{tile}' has invalid weight {weight}: must be positive")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "Cell ({x}, {y}) is outside the {width}x{height} grid")
            }
            Self::CellAlreadyCollapsed { x, y } => {
                write!(f, "Cell ({x}, {y}) is already collapsed")
            }
            Self::UnknownTileName { name } => write!(f, "No tile named '{name}'"),
            Self::SolverFailed => write!(f, "Solver has already failed"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Unsolvable { steps, backtracks } => {
                write!(
                    f,
                    "Grid is unsolvable after {steps} steps and {backtracks} backtracks"
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::MalformedTileSet { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

impl From<serde_json::Error> for AlgorithmError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedTileSet { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

//! Solver constants and runtime configuration defaults

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 8;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 8;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 4_096;

/// Default step limit for a single solve
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Default number of contradictions a solve may recover from
pub const DEFAULT_MAX_BACKTRACKS: usize = 64;

/// Text shown for a cell still in superposition
pub const UNCOLLAPSED_GLYPH: &str = "?";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

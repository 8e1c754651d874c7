/// Command-line argument parsing and run orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Manual cell pins applied before solving
pub mod prefill;
/// Progress bars for solve runs
pub mod progress;
/// Text rendering of grids
pub mod render;
/// JSON tileset loading
pub mod tileset;

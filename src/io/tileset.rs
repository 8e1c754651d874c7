//! JSON tileset loading
//!
//! A tileset file is an array of tile records:
//!
//! ```json
//! [
//!   { "name": "sea", "weight": 4,
//!     "adjacency": { "north": ["sea", "coast"], "east": ["sea", "coast"],
//!                    "south": ["sea", "coast"], "west": ["sea", "coast"] } }
//! ]
//! ```
//!
//! Missing direction keys mean no neighbour is allowed on that side.

use std::fs;
use std::path::Path;

use log::debug;

use crate::io::error::{AlgorithmError, Result};
use crate::spatial::tiles::{TileDefinition, TileSet};

/// Parse tile definitions from JSON without resolving them
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of tile records
pub fn parse_definitions(source: &str) -> Result<Vec<TileDefinition>> {
    Ok(serde_json::from_str(source)?)
}

/// Parse and resolve a tileset from JSON text
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the definitions fail
/// validation (duplicate names, bad weights, unknown references)
pub fn parse_tileset(source: &str) -> Result<TileSet> {
    let definitions = parse_definitions(source)?;
    let tileset = TileSet::from_definitions(&definitions)?;
    debug!("Resolved {} tiles", tileset.len());
    Ok(tileset)
}

/// Read and resolve a tileset file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents fail to
/// parse or validate
pub fn load_tileset(path: &Path) -> Result<TileSet> {
    let source = fs::read_to_string(path).map_err(|source| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tileset",
        source,
    })?;
    debug!("Loading tileset from {}", path.display());
    parse_tileset(&source)
}

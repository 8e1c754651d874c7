//! Tile catalog with weights and directional adjacency rules
//!
//! Tiles are declared by name and resolved to dense indices in two passes:
//! the first assigns every name an index, the second resolves adjacency
//! names through that map. Adjacency lists may therefore reference tiles
//! declared later in the source.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::direction::Direction;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Per-direction neighbour names as written in a tileset source
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdjacencyDefinition {
    /// Tiles allowed above
    #[serde(default)]
    pub north: Vec<String>,
    /// Tiles allowed to the right
    #[serde(default)]
    pub east: Vec<String>,
    /// Tiles allowed below
    #[serde(default)]
    pub south: Vec<String>,
    /// Tiles allowed to the left
    #[serde(default)]
    pub west: Vec<String>,
}

impl AdjacencyDefinition {
    /// Names listed for one direction
    pub fn names(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }

    fn names_mut(&mut self, direction: Direction) -> &mut Vec<String> {
        match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        }
    }
}

/// Unresolved tile record, one entry of a tileset source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TileDefinition {
    /// Unique tile name
    pub name: String,
    /// Relative collapse weight, must be positive
    pub weight: i64,
    /// Neighbour names keyed by direction
    #[serde(default)]
    pub adjacency: AdjacencyDefinition,
}

impl TileDefinition {
    /// Start a definition with no adjacency rules
    pub fn new(name: impl Into<String>, weight: i64) -> Self {
        Self {
            name: name.into(),
            weight,
            adjacency: AdjacencyDefinition::default(),
        }
    }

    /// Allow the named tiles in the given direction
    #[must_use]
    pub fn allow(mut self, direction: Direction, names: &[&str]) -> Self {
        self.adjacency
            .names_mut(direction)
            .extend(names.iter().map(|&name| name.to_string()));
        self
    }

    /// Allow the named tiles in every direction
    #[must_use]
    pub fn allow_all(self, names: &[&str]) -> Self {
        Direction::ALL
            .into_iter()
            .fold(self, |definition, direction| definition.allow(direction, names))
    }
}

/// A resolved tile
#[derive(Debug, Clone)]
pub struct Tile {
    /// Position in the tileset
    pub index: usize,
    /// Unique tile name
    pub name: String,
    /// Relative collapse weight (at least 1)
    pub weight: u32,
    /// Allowed neighbour indices per direction, in declaration order
    pub adjacency: [Vec<usize>; 4],
    allowed: [TileBitset; 4],
}

impl Tile {
    /// Tiles permitted in `direction` from this tile
    pub fn allowed(&self, direction: Direction) -> &TileBitset {
        match direction {
            Direction::North => &self.allowed[0],
            Direction::East => &self.allowed[1],
            Direction::South => &self.allowed[2],
            Direction::West => &self.allowed[3],
        }
    }

    /// Declared neighbour indices for `direction`
    pub fn adjacent(&self, direction: Direction) -> &[usize] {
        self.adjacency
            .get(direction.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Immutable catalog of tiles addressable by index or name
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Vec<Tile>,
    name_to_index: HashMap<String, usize>,
}

impl TileSet {
    /// Resolve tile definitions into a tileset
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No definitions are given
    /// - Two definitions share a name
    /// - A weight is zero or negative
    /// - An adjacency list references an undefined name
    pub fn from_definitions(definitions: &[TileDefinition]) -> Result<Self> {
        if definitions.is_empty() {
            return Err(AlgorithmError::EmptyTileSet);
        }

        // Pass 1: names to indices
        let mut name_to_index = HashMap::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            if name_to_index.insert(definition.name.clone(), index).is_some() {
                return Err(AlgorithmError::DuplicateTileName {
                    name: definition.name.clone(),
                });
            }
        }

        // Pass 2: weights and adjacency
        let tile_count = definitions.len();
        let mut tiles = Vec::with_capacity(tile_count);
        for (index, definition) in definitions.iter().enumerate() {
            let weight = u32::try_from(definition.weight)
                .ok()
                .filter(|&weight| weight > 0)
                .ok_or_else(|| AlgorithmError::InvalidWeight {
                    tile: definition.name.clone(),
                    weight: definition.weight,
                })?;

            let mut adjacency: [Vec<usize>; 4] = Default::default();
            for (direction, indices) in Direction::ALL.into_iter().zip(adjacency.iter_mut()) {
                for reference in definition.adjacency.names(direction) {
                    let resolved = name_to_index.get(reference).copied().ok_or_else(|| {
                        AlgorithmError::UnknownTileReference {
                            tile: definition.name.clone(),
                            direction,
                            reference: reference.clone(),
                        }
                    })?;
                    if !indices.contains(&resolved) {
                        indices.push(resolved);
                    }
                }
            }

            let allowed = adjacency
                .clone()
                .map(|indices| TileBitset::from_indices(&indices, tile_count));

            tiles.push(Tile {
                index,
                name: definition.name.clone(),
                weight,
                adjacency,
                allowed,
            });
        }

        Ok(Self {
            tiles,
            name_to_index,
        })
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the tileset has no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at an index
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Index assigned to a name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Name of the tile at an index
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.tiles.get(index).map(|tile| tile.name.as_str())
    }

    /// Weight of the tile at an index, 0 for unknown indices
    pub fn weight(&self, index: usize) -> u32 {
        self.tiles.get(index).map_or(0, |tile| tile.weight)
    }

    /// Tiles permitted in `direction` from the tile at `index`
    pub fn allowed(&self, index: usize, direction: Direction) -> Option<&TileBitset> {
        self.tiles.get(index).map(|tile| tile.allowed(direction))
    }

    /// Whether `neighbor` may sit in `direction` from `tile`
    pub fn permits(&self, tile: usize, direction: Direction, neighbor: usize) -> bool {
        self.allowed(tile, direction)
            .is_some_and(|allowed| allowed.contains(neighbor))
    }

    /// Iterate tiles in index order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            writeln!(f, "Tile: {} (index {})", tile.name, tile.index)?;
            writeln!(f, "  weight: {}", tile.weight)?;
            for direction in Direction::ALL {
                let names: Vec<&str> = tile
                    .adjacent(direction)
                    .iter()
                    .filter_map(|&index| self.name_of(index))
                    .collect();
                writeln!(f, "  {direction:<5}: {}", names.join(", "))?;
            }
        }
        Ok(())
    }
}

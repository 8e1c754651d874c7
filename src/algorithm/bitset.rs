use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset holding the candidate tiles of a cell
///
/// Tile indices are 0-based and iteration is always in ascending index
/// order, so intersecting never reorders the surviving candidates.
/// Provides O(1) membership testing and word-wise set operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![0; max_tiles],
        }
    }

    /// Create a bitset containing all possible tiles
    pub fn all(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![1; max_tiles],
        }
    }

    /// Create a bitset containing exactly one tile
    pub fn singleton(max_tiles: usize, tile: usize) -> Self {
        let mut bitset = Self::new(max_tiles);
        bitset.insert(tile);
        bitset
    }

    /// Number of tiles this set can describe
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile index
    ///
    /// Indices outside the capacity are ignored
    pub fn insert(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile index, returning whether it was present
    pub fn remove(&mut self, tile: usize) -> bool {
        let present = self.contains(tile);
        if present {
            self.bits.set(tile, false);
        }
        present
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Add every tile of another bitset in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Smallest tile index present
    pub fn first(&self) -> Option<usize> {
        self.bits.first_one()
    }

    /// Iterate tile indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all tile indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Build a bitset from a list of tile indices
    pub fn from_indices(indices: &[usize], max_tiles: usize) -> Self {
        let mut bitset = Self::new(max_tiles);
        for &tile in indices {
            bitset.insert(tile);
        }
        bitset
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}

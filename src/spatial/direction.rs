//! Cardinal directions used by adjacency rules and neighbour lookup

use std::fmt;

/// One of the four grid directions
///
/// The discriminant doubles as the index into a tile's adjacency table.
/// Grid y coordinates grow downward, so `North` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing y
    North = 0,
    /// Toward increasing x
    East = 1,
    /// Toward increasing y
    South = 2,
    /// Toward decreasing x
    West = 3,
}

impl Direction {
    /// All directions in adjacency table order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Index into a four-entry adjacency table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Coordinate delta `(dx, dy)` for one step in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// The direction pointing back
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Lowercase key used in tileset files
    pub const fn key(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

//! Neighbourhood definitions for square and hex grids

use crate::io::error::{GenerationError, Result, invalid_parameter};

const DIRS_4: [[i32; 2]; 4] = [[0, -1], [1, 0], [0, 1], [-1, 0]];

const DIRS_6: [[i32; 2]; 6] = [[-1, -1], [1, -1], [2, 0], [1, 1], [-1, 1], [-2, 0]];

const DIRS_8: [[i32; 2]; 8] = [
    [0, -1],
    [1, -1],
    [1, 0],
    [1, 1],
    [0, 1],
    [-1, 1],
    [-1, 0],
    [-1, -1],
];

/// Adjacency scheme of a grid
///
/// Hex grids use the doubled-column offset layout: a cell `[x, y]` exists
/// only when `x` and `y` share parity, and horizontal neighbours sit two
/// columns apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    /// Orthogonal neighbours only
    Four,
    /// Hex neighbours in the doubled-column layout
    Six,
    /// Orthogonal and diagonal neighbours
    #[default]
    Eight,
}

impl Topology {
    /// Ordered neighbour offsets
    ///
    /// The order is fixed; generators rely on it for reproducible tie-breaking.
    pub const fn directions(self) -> &'static [[i32; 2]] {
        match self {
            Self::Four => &DIRS_4,
            Self::Six => &DIRS_6,
            Self::Eight => &DIRS_8,
        }
    }

    /// Number of neighbours per cell
    pub const fn neighbor_count(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
        }
    }

    /// Offsets used when flood filling free space
    ///
    /// Square grids flood through orthogonal steps only, so regions joined
    /// by a single diagonal still count as separate.
    pub const fn flood_directions(self) -> &'static [[i32; 2]] {
        match self {
            Self::Six => &DIRS_6,
            Self::Four | Self::Eight => &DIRS_4,
        }
    }

    /// First column and column stride of row `y`
    pub const fn row_layout(self, y: i32) -> (i32, usize) {
        match self {
            Self::Six => (y.rem_euclid(2), 2),
            Self::Four | Self::Eight => (0, 1),
        }
    }
}

impl TryFrom<u8> for Topology {
    type Error = GenerationError;

    fn try_from(neighbors: u8) -> Result<Self> {
        match neighbors {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            other => Err(invalid_parameter(
                "topology",
                &other,
                &"supported topologies are 4, 6 and 8",
            )),
        }
    }
}

/// Orthogonal direction on a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`
    North,
    /// Towards larger `x`
    East,
    /// Towards larger `y`
    South,
    /// Towards smaller `x`
    West,
}

impl Direction {
    /// All four directions in neighbour order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit offset `[dx, dy]`
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::North => [0, -1],
            Self::East => [1, 0],
            Self::South => [0, 1],
            Self::West => [-1, 0],
        }
    }

    /// Perpendicular offset `[dy, -dx]`
    pub const fn lateral(self) -> [i32; 2] {
        let [dx, dy] = self.delta();
        [dy, -dx]
    }

    /// Direction pointing the other way
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Parse a unit axis vector
    ///
    /// # Errors
    ///
    /// Returns `InvalidDirection` unless exactly one component is nonzero and
    /// equal to ±1
    pub fn from_delta(dx: i32, dy: i32) -> Result<Self> {
        match (dx, dy) {
            (0, -1) => Ok(Self::North),
            (1, 0) => Ok(Self::East),
            (0, 1) => Ok(Self::South),
            (-1, 0) => Ok(Self::West),
            _ => Err(GenerationError::InvalidDirection { dx, dy }),
        }
    }

    /// Step `distance` cells from `origin`
    pub const fn offset(self, origin: [i32; 2], distance: i32) -> [i32; 2] {
        let [dx, dy] = self.delta();
        [origin[0] + dx * distance, origin[1] + dy * distance]
    }
}

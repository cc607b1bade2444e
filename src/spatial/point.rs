//! Cell coordinates and cardinal adjacency

use std::fmt;

/// Cardinal step offsets in (row, column) order: right, down, left, up
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A grid cell identified by absolute (row, column) coordinates
///
/// Points are plain values: compared, hashed, and copied by coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Absolute row coordinate
    pub row: i32,
    /// Absolute column coordinate
    pub col: i32,
}

impl Point {
    /// Create a point from absolute coordinates
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The point displaced by the given row and column deltas
    #[must_use]
    pub const fn offset(self, delta_row: i32, delta_col: i32) -> Self {
        Self {
            row: self.row + delta_row,
            col: self.col + delta_col,
        }
    }

    /// The four cardinal neighbors, in `DIRECTIONS` order
    #[must_use]
    pub const fn neighbors(self) -> [Self; 4] {
        [
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row - 1, self.col),
        ]
    }

    /// Whether the other point differs by one unit in exactly one coordinate
    pub const fn is_adjacent(self, other: Self) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

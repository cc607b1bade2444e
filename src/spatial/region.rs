//! Rectangular regions with absolute-coordinate bias
//!
//! A region locates a height-by-width block of cells inside a larger
//! coordinate space. The bias is the absolute coordinate of the region's
//! local (0, 0) cell; all public operations take absolute coordinates.

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::point::Point;

/// Boundary side used to constrain where a sampled path may finish
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Topmost row of the region
    Top,
    /// Bottom row of the region
    Bottom,
    /// Leftmost column of the region
    Left,
    /// Rightmost column of the region
    Right,
    /// No constraint: any cell may finish the path
    Any,
}

/// A rectangular block of grid cells at an absolute offset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    height: i32,
    width: i32,
    bias: Point,
}

impl Region {
    /// Create a region of the given shape with its local origin at `bias`
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not positive
    pub fn new(height: i32, width: i32, bias: Point) -> Result<Self> {
        if height <= 0 {
            return Err(invalid_parameter(
                "height",
                &height,
                &"region dimensions must be positive",
            ));
        }
        if width <= 0 {
            return Err(invalid_parameter(
                "width",
                &width,
                &"region dimensions must be positive",
            ));
        }
        Ok(Self {
            height,
            width,
            bias,
        })
    }

    /// Region height in cells
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Region width in cells
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Absolute coordinate of the local (0, 0) cell
    pub const fn bias(&self) -> Point {
        self.bias
    }

    /// Total number of member cells
    pub const fn cell_count(&self) -> usize {
        (self.height as usize) * (self.width as usize)
    }

    /// Whether the point falls within the region after bias subtraction
    pub const fn contains(&self, point: Point) -> bool {
        let local_row = point.row - self.bias.row;
        let local_col = point.col - self.bias.col;
        local_row >= 0 && local_row < self.height && local_col >= 0 && local_col < self.width
    }

    /// Row-major index of the point within the region, if it is a member
    pub const fn local_index(&self, point: Point) -> Option<usize> {
        if self.contains(point) {
            let local_row = (point.row - self.bias.row) as usize;
            let local_col = (point.col - self.bias.col) as usize;
            Some(local_row * self.width as usize + local_col)
        } else {
            None
        }
    }

    /// Iterate over all member cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let bias = self.bias;
        let width = self.width;
        (0..self.height)
            .flat_map(move |row| (0..width).map(move |col| Point::new(bias.row + row, bias.col + col)))
    }

    /// Expand a boundary side to its member cells in absolute coordinates
    ///
    /// `Side::Any` expands to the empty set, the unconstrained convention
    /// used by path sampling.
    pub fn side_cells(&self, side: Side) -> Vec<Point> {
        match side {
            Side::Top => {
                let row = self.bias.row;
                (0..self.width)
                    .map(|offset| Point::new(row, self.bias.col + offset))
                    .collect()
            }
            Side::Bottom => {
                let row = self.bias.row + self.height - 1;
                (0..self.width)
                    .map(|offset| Point::new(row, self.bias.col + offset))
                    .collect()
            }
            Side::Left => {
                let col = self.bias.col;
                (0..self.height)
                    .map(|offset| Point::new(self.bias.row + offset, col))
                    .collect()
            }
            Side::Right => {
                let col = self.bias.col + self.width - 1;
                (0..self.height)
                    .map(|offset| Point::new(self.bias.row + offset, col))
                    .collect()
            }
            Side::Any => Vec::new(),
        }
    }

    /// Whether the path visits every member cell exactly once via unit steps
    ///
    /// Checks the three Hamiltonian invariants together: full coverage,
    /// distinctness, and 4-connectivity between consecutive points.
    pub fn is_hamiltonian(&self, path: &[Point]) -> bool {
        if path.len() != self.cell_count() {
            return false;
        }

        let mut seen = vec![false; self.cell_count()];
        for point in path {
            let Some(index) = self.local_index(*point) else {
                return false;
            };
            if seen.get(index).copied().unwrap_or(true) {
                return false;
            }
            if let Some(slot) = seen.get_mut(index) {
                *slot = true;
            }
        }

        path.windows(2).all(|pair| match pair {
            [first, second] => first.is_adjacent(*second),
            _ => true,
        })
    }
}

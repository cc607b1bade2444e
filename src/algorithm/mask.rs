use crate::spatial::{Point, Region};
use bitvec::prelude::*;

/// Bit-per-cell occupancy table for one sampling attempt
///
/// Tracks which cells of a region currently belong to the in-progress path
/// during backtracking. Created fresh per attempt and discarded when the
/// attempt returns; it never outlives the search that allocated it.
#[derive(Clone, Debug)]
pub struct VisitedMask {
    bits: BitVec,
    region: Region,
}

impl VisitedMask {
    /// Create a mask with every cell unvisited
    pub fn new(region: Region) -> Self {
        Self {
            bits: bitvec![0; region.cell_count()],
            region,
        }
    }

    /// Mark a cell as belonging to the in-progress path
    ///
    /// Points outside the region are ignored.
    pub fn mark(&mut self, point: Point) {
        if let Some(index) = self.region.local_index(point) {
            self.bits.set(index, true);
        }
    }

    /// Remove a cell from the in-progress path
    pub fn clear(&mut self, point: Point) {
        if let Some(index) = self.region.local_index(point) {
            self.bits.set(index, false);
        }
    }

    /// Test whether a cell currently belongs to the in-progress path
    ///
    /// Points outside the region are never members.
    pub fn contains(&self, point: Point) -> bool {
        self.region
            .local_index(point)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count of visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

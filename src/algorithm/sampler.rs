//! Randomized backtracking search for Hamiltonian paths
//!
//! The search commits to a cell, expands its unvisited in-region neighbors
//! in shuffled order, and unwinds on exhaustion. It runs on an explicit
//! frame stack rather than recursing, so search depth (one frame per path
//! cell) cannot overflow the thread stack on large regions. Branching order
//! is identical to the recursive formulation.

use crate::algorithm::mask::VisitedMask;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Point, Region, Side};
use rand::Rng;
use rand::seq::SliceRandom;

/// One search frame: a committed cell and its shuffled untried branches
struct Frame {
    cell: Point,
    branches: Vec<Point>,
    cursor: usize,
}

/// Outcome of committing one cell to the in-progress path
enum Entered {
    /// The path covers the region and ends on an accepted cell
    Complete,
    /// The path covers the region but ends on a rejected cell; the move was
    /// undone so the caller can try a different final step
    Rejected,
    /// The search continues from this new frame
    Expanded(Frame),
}

fn try_enter<R: Rng>(
    region: &Region,
    cell: Point,
    targets: &[Point],
    visited: &mut VisitedMask,
    path: &mut Vec<Point>,
    rng: &mut R,
) -> Entered {
    visited.mark(cell);
    path.push(cell);

    if path.len() == region.cell_count() {
        if targets.is_empty() || targets.contains(&cell) {
            return Entered::Complete;
        }
        visited.clear(cell);
        path.pop();
        return Entered::Rejected;
    }

    let mut branches: Vec<Point> = cell
        .neighbors()
        .into_iter()
        .filter(|neighbor| region.contains(*neighbor) && !visited.contains(*neighbor))
        .collect();
    branches.shuffle(rng);

    Entered::Expanded(Frame {
        cell,
        branches,
        cursor: 0,
    })
}

/// Sample a Hamiltonian path over the region by randomized backtracking
///
/// The path starts at `start` and, when `targets` is non-empty, must finish
/// on one of the target cells; an empty `targets` slice accepts any finishing
/// cell. Neighbor order is shuffled per expansion with the shared PRNG, so
/// one seed determines the whole search.
///
/// Returns `Ok(None)` when no completing path is reachable from `start`
/// under the constraint. That outcome is recoverable: callers retry with a
/// different start or accept that the constraint is unsatisfiable.
///
/// # Errors
///
/// Returns an error if `start` lies outside the region.
pub fn sample_path<R: Rng>(
    region: &Region,
    start: Point,
    targets: &[Point],
    rng: &mut R,
) -> Result<Option<Vec<Point>>> {
    if !region.contains(start) {
        return Err(invalid_parameter(
            "start",
            &start,
            &"start cell must lie within the region",
        ));
    }

    let cell_count = region.cell_count();
    let mut visited = VisitedMask::new(*region);
    let mut path = Vec::with_capacity(cell_count);
    let mut stack: Vec<Frame> = Vec::with_capacity(cell_count);

    match try_enter(region, start, targets, &mut visited, &mut path, rng) {
        Entered::Complete => return Ok(Some(path)),
        Entered::Rejected => return Ok(None),
        Entered::Expanded(frame) => stack.push(frame),
    }

    while let Some(frame) = stack.last_mut() {
        let Some(&next) = frame.branches.get(frame.cursor) else {
            // Branches exhausted: undo this cell and resume the parent frame
            let cell = frame.cell;
            visited.clear(cell);
            path.pop();
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        match try_enter(region, next, targets, &mut visited, &mut path, rng) {
            Entered::Complete => return Ok(Some(path)),
            Entered::Rejected => {}
            Entered::Expanded(child) => stack.push(child),
        }
    }

    Ok(None)
}

/// Sample a path constrained to finish on a boundary side of the region
///
/// Expands the side to its boundary cells and delegates to [`sample_path`];
/// `Side::Any` samples unconstrained.
///
/// # Errors
///
/// Returns an error if `start` lies outside the region.
pub fn sample_path_to_side<R: Rng>(
    region: &Region,
    start: Point,
    side: Side,
    rng: &mut R,
) -> Result<Option<Vec<Point>>> {
    let targets = region.side_cells(side);
    sample_path(region, start, &targets, rng)
}

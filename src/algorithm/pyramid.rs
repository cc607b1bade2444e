//! Pyramid refinement: expand a coarse path into a finer one, cell by cell
//!
//! Each cell of the coarse path is replaced with an independently sampled
//! Hamiltonian sub-path over a subgrid, constrained to exit toward the next
//! coarse cell so that consecutive sub-paths meet across a single grid step.
//! Applied level by level, this yields a self-similar space-filling curve.

use crate::algorithm::sampler;
use crate::io::configuration::MAX_SAMPLE_ATTEMPTS;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Point, Region, Side};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Exit side required of a subregion, from the coarse step direction
const fn exit_side(current: Point, next: Option<Point>) -> Side {
    match next {
        None => Side::Any,
        Some(cell) => {
            if cell.row == current.row + 1 {
                Side::Bottom
            } else if cell.row == current.row - 1 {
                Side::Top
            } else if cell.col == current.col + 1 {
                Side::Right
            } else if cell.col == current.col - 1 {
                Side::Left
            } else {
                Side::Any
            }
        }
    }
}

/// Start cell for a subregion: the previous sub-path's final cell stepped one
/// unit across the shared border, in the direction of the coarse move
const fn entry_cell(last: Point, previous: Point, current: Point) -> Point {
    if previous.row < current.row {
        last.offset(1, 0)
    } else if previous.row > current.row {
        last.offset(-1, 0)
    } else if previous.col < current.col {
        last.offset(0, 1)
    } else if previous.col > current.col {
        last.offset(0, -1)
    } else {
        last
    }
}

fn sample_subregion<R: Rng>(
    subregion: &Region,
    side: Side,
    current: Point,
    previous: Option<Point>,
    full_path: &[Point],
    rng: &mut R,
) -> Result<Vec<Point>> {
    let member_cells: Vec<Point> = subregion.cells().collect();

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let start = match (previous, full_path.last().copied()) {
            (Some(prior), Some(last)) => entry_cell(last, prior, current),
            // First subregion: no predecessor to connect from, start anywhere
            _ => match member_cells.choose(rng) {
                Some(cell) => *cell,
                None => break,
            },
        };

        if let Some(sub_path) = sampler::sample_path_to_side(subregion, start, side, rng)? {
            return Ok(sub_path);
        }
    }

    Err(GenerationError::SearchBudget {
        attempts: MAX_SAMPLE_ATTEMPTS,
        shape: (subregion.height(), subregion.width()),
        bias: (subregion.bias().row, subregion.bias().col),
    })
}

/// Expand a coarse path into a fine path by substituting a subgrid per cell
///
/// Walks `coarse_path` in order, sampling a Hamiltonian sub-path over each
/// cell's subregion. The sub-path must exit toward the next coarse cell;
/// the final subregion finishes unconstrained. The first subregion starts at
/// a uniformly random cell, every later one starts adjacent to where the
/// previous sub-path ended. Failed attempts are retried with fresh
/// randomness up to a diagnostic attempt cap per subregion.
///
/// The result covers `coarse_path.len() * sub_height * sub_width` cells
/// exactly once and is continuous across every subregion boundary.
///
/// # Errors
///
/// Returns an error if either shape has a non-positive dimension, a coarse
/// cell lies outside the coarse region, or a subregion search exhausts its
/// attempt budget (an unsatisfiable side constraint).
pub fn compose<R: Rng>(
    coarse_path: &[Point],
    coarse_shape: (i32, i32),
    subgrid_shape: (i32, i32),
    rng: &mut R,
) -> Result<Vec<Point>> {
    let (coarse_height, coarse_width) = coarse_shape;
    let (sub_height, sub_width) = subgrid_shape;

    let coarse_region = Region::new(coarse_height, coarse_width, Point::new(0, 0))?;
    if let Some(outside) = coarse_path.iter().find(|cell| !coarse_region.contains(**cell)) {
        return Err(invalid_parameter(
            "coarse_path",
            outside,
            &"coarse cell lies outside the coarse region",
        ));
    }

    let cells_per_subregion = Region::new(sub_height, sub_width, Point::new(0, 0))?.cell_count();
    let mut full_path = Vec::with_capacity(coarse_path.len() * cells_per_subregion);

    for (index, &coarse_cell) in coarse_path.iter().enumerate() {
        let subregion = Region::new(
            sub_height,
            sub_width,
            Point::new(coarse_cell.row * sub_height, coarse_cell.col * sub_width),
        )?;
        let side = exit_side(coarse_cell, coarse_path.get(index + 1).copied());
        let previous = index
            .checked_sub(1)
            .and_then(|prior| coarse_path.get(prior))
            .copied();

        let sub_path = sample_subregion(&subregion, side, coarse_cell, previous, &full_path, rng)?;
        full_path.extend(sub_path);
    }

    Ok(full_path)
}

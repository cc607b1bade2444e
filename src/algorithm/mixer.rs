//! Backbite moves: endpoint-relocating rewrites that keep a path Hamiltonian
//!
//! A backbite picks a path endpoint, picks one of its in-bounds grid
//! neighbors, and reverses the path segment between them. The reversal
//! rewires the endpoint onto the chosen neighbor while every cell stays
//! visited exactly once, so iterating the move walks the space of
//! Hamiltonian paths without ever leaving it.

use crate::spatial::{Point, Region};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Apply one backbite move to the path in place
///
/// Chooses the front or back endpoint uniformly, then a uniformly random
/// in-bounds 4-neighbor of it. The neighbor check uses only the grid
/// bounds, not path order. Biting from the front reverses the segment
/// before the neighbor's position; biting from the back reverses the
/// segment after it. A step with no eligible neighbor (a 1x1 grid), or
/// whose neighbor is absent from the path, leaves the path untouched.
pub fn backbite_step<R: Rng>(path: &mut [Point], grid: &Region, rng: &mut R) {
    let from_front = rng.random_bool(0.5);
    let Some(&endpoint) = (if from_front { path.first() } else { path.last() }) else {
        return;
    };

    let neighbors: Vec<Point> = endpoint
        .neighbors()
        .into_iter()
        .filter(|cell| grid.contains(*cell))
        .collect();
    let Some(&bite) = neighbors.choose(rng) else {
        return;
    };

    let Some(position) = path.iter().position(|&cell| cell == bite) else {
        return;
    };

    if from_front {
        if let Some(segment) = path.get_mut(..position) {
            segment.reverse();
        }
    } else if let Some(segment) = path.get_mut(position + 1..) {
        segment.reverse();
    }
}

/// Apply `steps` backbite moves in sequence
///
/// Step counts on the order of `k * ln k` for `k` cells approximate the
/// mixing time of this move on self-avoiding walks; see
/// [`crate::math::mixing::recommended_steps`].
pub fn mix<R: Rng>(path: &mut [Point], grid: &Region, steps: usize, rng: &mut R) {
    for _ in 0..steps {
        backbite_step(path, grid, rng);
    }
}

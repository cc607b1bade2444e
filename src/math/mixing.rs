/// Recommended backbite step count for a grid of `cells` cells
///
/// Uses the `k * ln k` mixing-time heuristic for backbite moves on
/// self-avoiding walks, scaled by `multiplier`. Grids of fewer than two
/// cells need no mixing and yield zero.
pub fn recommended_steps(cells: usize, multiplier: f64) -> usize {
    if cells < 2 {
        return 0;
    }
    let count = cells as f64;
    (multiplier * count * count.ln()).ceil() as usize
}

//! Generation pipeline: base sampling, level refinement, backbite mixing
//!
//! The executor owns the single seeded PRNG threaded through every phase,
//! so one seed reproduces an entire run. Phases are exposed individually
//! (base sample, per-level refinement, bounded mixing chunks) so a driver
//! can interleave progress reporting, with [`CurveGenerator::generate`] as
//! the one-shot pipeline.

use crate::algorithm::{mixer, pyramid, sampler};
use crate::io::configuration::{MAX_GRID_DIMENSION, MAX_SAMPLE_ATTEMPTS};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::math::mixing;
use crate::spatial::{Point, Region};
use rand::{SeedableRng, rngs::StdRng};

/// Parameters controlling a full curve generation run
#[derive(Clone, Debug)]
pub struct CurveConfig {
    /// Grid shape per level: the first entry is sampled directly, each
    /// further entry is the subgrid shape substituted into every cell of
    /// the previous level
    pub levels: Vec<(i32, i32)>,
    /// Explicit backbite step count; `None` derives one from the cell count
    pub backbite_steps: Option<usize>,
    /// Multiplier for the derived backbite step count
    pub step_multiplier: f64,
    /// PRNG seed; one seed reproduces an entire run
    pub seed: u64,
}

impl CurveConfig {
    /// Full-resolution grid shape: the per-level product of heights and widths
    pub fn full_shape(&self) -> (i64, i64) {
        self.levels.iter().fold((1, 1), |(height, width), &(level_h, level_w)| {
            (
                height.saturating_mul(i64::from(level_h)),
                width.saturating_mul(i64::from(level_w)),
            )
        })
    }
}

/// Executes the generation pipeline with a single seeded PRNG
pub struct CurveGenerator {
    config: CurveConfig,
    full_region: Region,
    rng: StdRng,
}

impl CurveGenerator {
    /// Validate the configuration and seed the run
    ///
    /// # Errors
    ///
    /// Returns an error if the level plan is empty, any level shape has a
    /// non-positive dimension, or the full-resolution dimensions exceed the
    /// safety limit
    pub fn new(config: CurveConfig) -> Result<Self> {
        if config.levels.is_empty() {
            return Err(invalid_parameter(
                "levels",
                &"[]",
                &"at least one grid level is required",
            ));
        }
        for &(height, width) in &config.levels {
            if height <= 0 || width <= 0 {
                return Err(invalid_parameter(
                    "levels",
                    &format!("{height}x{width}"),
                    &"level dimensions must be positive",
                ));
            }
        }

        let (full_height, full_width) = config.full_shape();
        if full_height > MAX_GRID_DIMENSION || full_width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "levels",
                &format!("{full_height}x{full_width}"),
                &"full-resolution dimensions exceed the safety limit",
            ));
        }

        let full_region = Region::new(full_height as i32, full_width as i32, Point::new(0, 0))?;
        let rng = StdRng::seed_from_u64(config.seed);

        Ok(Self {
            config,
            full_region,
            rng,
        })
    }

    /// The validated configuration
    pub const fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Full-resolution grid region covered by the finished curve
    pub const fn full_region(&self) -> Region {
        self.full_region
    }

    /// Number of cells in the finished curve
    pub const fn cell_count(&self) -> usize {
        self.full_region.cell_count()
    }

    /// Number of refinement levels beyond the base grid
    pub fn refinement_levels(&self) -> usize {
        self.config.levels.len().saturating_sub(1)
    }

    /// Backbite step count for this run: explicit, or derived from cell count
    pub fn mixing_steps(&self) -> usize {
        self.config.backbite_steps.unwrap_or_else(|| {
            mixing::recommended_steps(self.cell_count(), self.config.step_multiplier)
        })
    }

    /// Sample the base-level path from the grid origin
    ///
    /// An unconstrained search on an open rectangular region from the origin
    /// always admits a Hamiltonian path; failed attempts are still retried
    /// under the same attempt budget the refinement uses.
    ///
    /// # Errors
    ///
    /// Returns an error if the attempt budget is exhausted
    pub fn sample_base(&mut self) -> Result<Vec<Point>> {
        let &(height, width) = self.config.levels.first().ok_or_else(|| {
            invalid_parameter("levels", &"[]", &"at least one grid level is required")
        })?;
        let region = Region::new(height, width, Point::new(0, 0))?;
        let origin = Point::new(0, 0);

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            if let Some(path) = sampler::sample_path(&region, origin, &[], &mut self.rng)? {
                return Ok(path);
            }
        }

        Err(GenerationError::SearchBudget {
            attempts: MAX_SAMPLE_ATTEMPTS,
            shape: (height, width),
            bias: (0, 0),
        })
    }

    /// Refine a path one level: substitute that level's subgrid per cell
    ///
    /// `level` indexes the configured level plan; the coarse shape is the
    /// product of all earlier levels.
    ///
    /// # Errors
    ///
    /// Returns an error if `level` does not address a refinement level or
    /// the composition fails
    pub fn refine(&mut self, path: &[Point], level: usize) -> Result<Vec<Point>> {
        if level == 0 || level >= self.config.levels.len() {
            return Err(invalid_parameter(
                "level",
                &level,
                &"level index must address a refinement level",
            ));
        }

        let coarse_shape = self
            .config
            .levels
            .get(..level)
            .unwrap_or(&[])
            .iter()
            .fold((1_i32, 1_i32), |(height, width), &(level_h, level_w)| {
                (height * level_h, width * level_w)
            });
        let subgrid_shape = self.config.levels.get(level).copied().ok_or_else(|| {
            invalid_parameter("level", &level, &"level index must address a refinement level")
        })?;

        pyramid::compose(path, coarse_shape, subgrid_shape, &mut self.rng)
    }

    /// Apply a bounded chunk of backbite moves to the path
    pub fn mix_steps(&mut self, path: &mut [Point], steps: usize) {
        mixer::mix(path, &self.full_region, steps, &mut self.rng);
    }

    /// Run the full pipeline: base sample, per-level refinement, mixing
    ///
    /// # Errors
    ///
    /// Returns an error if any sampling phase exhausts its attempt budget
    pub fn generate(&mut self) -> Result<Vec<Point>> {
        let mut path = self.sample_base()?;
        for level in 1..self.config.levels.len() {
            path = self.refine(&path, level)?;
        }

        let steps = self.mixing_steps();
        self.mix_steps(&mut path, steps);

        Ok(path)
    }
}

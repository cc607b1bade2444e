//! Command-line interface for curve generation runs

use crate::algorithm::executor::{CurveConfig, CurveGenerator};
use crate::io::configuration::{
    CELL_PIXELS, DEFAULT_REFINEMENT_LEVELS, DEFAULT_SEED, DEFAULT_STEP_MULTIPLIER,
    DEFAULT_SUBGRID_SHAPE, GIF_FRAME_DELAY_MS, MIXING_PROGRESS_CHUNK,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::{export, render};
use clap::Parser;
use std::path::PathBuf;

/// Parse a "HxW" grid shape argument
fn parse_shape(value: &str) -> std::result::Result<(i32, i32), String> {
    let mut fields = value.split('x');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) => {
            let height: i32 = first
                .trim()
                .parse()
                .map_err(|error| format!("invalid height in '{value}': {error}"))?;
            let width: i32 = second
                .trim()
                .parse()
                .map_err(|error| format!("invalid width in '{value}': {error}"))?;
            if height > 0 && width > 0 {
                Ok((height, width))
            } else {
                Err(format!("dimensions in '{value}' must be positive"))
            }
        }
        _ => Err(format!("expected HxW, got '{value}'")),
    }
}

#[derive(Parser)]
#[command(name = "fractalwalk")]
#[command(
    author,
    version,
    about = "Generate randomized Hamiltonian space-filling curves"
)]
/// Command-line arguments for the curve generation tool
pub struct Cli {
    /// Output file for the generated path ("row col" per line)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Base grid shape as HxW
    #[arg(short, long, value_parser = parse_shape, default_value = "2x2")]
    pub base: (i32, i32),

    /// Comma-separated refinement subgrid shapes as HxW (default: five 2x2 levels)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_shape)]
    pub levels: Vec<(i32, i32)>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Explicit backbite step count (overrides the derived k*ln(k) count)
    #[arg(long)]
    pub steps: Option<usize>,

    /// Multiplier for the derived backbite step count
    #[arg(short, long, default_value_t = DEFAULT_STEP_MULTIPLIER)]
    pub multiplier: f64,

    /// Render a PNG snapshot of the finished curve next to the output
    #[arg(short, long)]
    pub render: bool,

    /// Render an animated GIF tracing the finished curve
    #[arg(short, long)]
    pub animate: bool,

    /// Print the index-annotated grid (small grids only)
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Level plan: base shape followed by the refinement subgrid shapes
    pub fn level_plan(&self) -> Vec<(i32, i32)> {
        let mut plan = vec![self.base];
        if self.levels.is_empty() {
            plan.extend(std::iter::repeat_n(
                DEFAULT_SUBGRID_SHAPE,
                DEFAULT_REFINEMENT_LEVELS,
            ));
        } else {
            plan.extend(self.levels.iter().copied());
        }
        plan
    }
}

/// Orchestrates a generation run with progress tracking
pub struct CurveRunner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl CurveRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Execute the configured run
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, sampling exhausts
    /// its retry budget, or any output cannot be written
    pub fn run(&mut self) -> Result<()> {
        let config = CurveConfig {
            levels: self.cli.level_plan(),
            backbite_steps: self.cli.steps,
            step_multiplier: self.cli.multiplier,
            seed: self.cli.seed,
        };
        let mut generator = CurveGenerator::new(config)?;
        let level_count = generator.refinement_levels();

        if self.cli.should_show_progress() {
            self.progress = Some(ProgressManager::new(level_count));
        }

        let mut path = generator.sample_base()?;
        for level in 1..=level_count {
            path = generator.refine(&path, level)?;
            if let Some(ref progress) = self.progress {
                progress.complete_level();
            }
        }

        let total_steps = generator.mixing_steps();
        if let Some(ref mut progress) = self.progress {
            progress.start_mixing(total_steps);
        }

        let mut remaining = total_steps;
        while remaining > 0 {
            let chunk = remaining.min(MIXING_PROGRESS_CHUNK);
            generator.mix_steps(&mut path, chunk);
            remaining -= chunk;
            if let Some(ref progress) = self.progress {
                progress.mixing_progress(chunk as u64);
            }
        }

        if let Some(ref progress) = self.progress {
            progress.finish();
        }

        export::save_path(&path, &self.cli.output)?;

        let region = generator.full_region();
        if self.cli.render {
            render::render_path_png(
                &path,
                &region,
                CELL_PIXELS,
                &self.cli.output.with_extension("png"),
            )?;
        }
        if self.cli.animate {
            render::render_path_gif(
                &path,
                &region,
                CELL_PIXELS,
                GIF_FRAME_DELAY_MS,
                &self.cli.output.with_extension("gif"),
            )?;
        }
        if self.cli.print {
            // Allow print for the explicitly requested grid dump
            #[allow(clippy::print_stdout)]
            {
                println!("{}", render::format_path_grid(&path, &region));
            }
        }

        Ok(())
    }
}

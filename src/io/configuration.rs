//! Algorithm constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed full-resolution grid dimension
pub const MAX_GRID_DIMENSION: i64 = 4096;

// Bounds the retry loop for side-constrained subregion searches
/// Maximum sampling attempts per subregion before reporting failure
pub const MAX_SAMPLE_ATTEMPTS: usize = 1000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of refinement levels beyond the base grid
pub const DEFAULT_REFINEMENT_LEVELS: usize = 5;

/// Default subgrid shape substituted at each refinement level
pub const DEFAULT_SUBGRID_SHAPE: (i32, i32) = (2, 2);

/// Default multiplier for the derived backbite step count
pub const DEFAULT_STEP_MULTIPLIER: f64 = 100.0;

// Progress display settings
/// Number of backbite steps applied between progress updates
pub const MIXING_PROGRESS_CHUNK: usize = 1024;

// Output settings
/// Pixels rendered per grid cell in image exports
pub const CELL_PIXELS: u32 = 8;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames in a GIF trace; longer paths batch cells per frame
pub const GIF_TARGET_FRAMES: usize = 180;

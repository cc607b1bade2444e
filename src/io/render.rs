//! ASCII, PNG, and GIF rendering of finished curves
//!
//! Rendering annotates each grid cell with its 0-based position along the
//! path. The ASCII form is a debugging aid; image exports color cells by
//! path position, early cells cold and late cells warm.

use crate::io::configuration::{GIF_TARGET_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Point, Region};
use image::{Frame, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Table of 0-based path indices for every cell of the region
///
/// Cells the path does not visit hold `None`; path points outside the
/// region are ignored.
pub fn path_index_grid(path: &[Point], region: &Region) -> Array2<Option<usize>> {
    let mut grid = Array2::from_elem((region.height() as usize, region.width() as usize), None);

    for (index, point) in path.iter().enumerate() {
        if !region.contains(*point) {
            continue;
        }
        let local_row = (point.row - region.bias().row) as usize;
        let local_col = (point.col - region.bias().col) as usize;
        if let Some(slot) = grid.get_mut([local_row, local_col]) {
            *slot = Some(index);
        }
    }

    grid
}

/// Render the region with each cell's path index, unvisited cells as dots
///
/// Indices are right-aligned to the widest index so columns line up.
pub fn format_path_grid(path: &[Point], region: &Region) -> String {
    let grid = path_index_grid(path, region);
    let cell_width = path.len().saturating_sub(1).to_string().len().max(2);

    let mut out = String::new();
    for row in grid.rows() {
        for value in row {
            match value {
                Some(index) => out.push_str(&format!("{index:>cell_width$} ")),
                None => out.push_str(&format!("{:>cell_width$} ", ".")),
            }
        }
        out.push('\n');
    }
    out
}

// Cold-to-warm gradient over path position
fn gradient_color(fraction: f64) -> Rgba<u8> {
    let t = fraction.clamp(0.0, 1.0);
    let red = (255.0 * t) as u8;
    let green = (160.0 * (1.0 - (2.0 * t - 1.0).abs())) as u8;
    let blue = (255.0 * (1.0 - t)) as u8;
    Rgba([red, green, blue, 255])
}

fn fill_cell(img: &mut RgbaImage, region: &Region, point: Point, cell_pixels: u32, color: Rgba<u8>) {
    let base_x = (point.col - region.bias().col) as u32 * cell_pixels;
    let base_y = (point.row - region.bias().row) as u32 * cell_pixels;
    for delta_y in 0..cell_pixels {
        for delta_x in 0..cell_pixels {
            img.put_pixel(base_x + delta_x, base_y + delta_y, color);
        }
    }
}

fn ensure_parent_directory(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|error| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: error,
        })?;
    }
    Ok(())
}

/// Export the curve as a PNG with cells colored by path position
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved
pub fn render_path_png(
    path: &[Point],
    region: &Region,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let width = region.width() as u32 * cell_pixels;
    let height = region.height() as u32 * cell_pixels;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));

    let span = path.len().max(2) as f64 - 1.0;
    for (index, point) in path.iter().enumerate() {
        if !region.contains(*point) {
            continue;
        }
        fill_cell(
            &mut img,
            region,
            *point,
            cell_pixels,
            gradient_color(index as f64 / span),
        );
    }

    ensure_parent_directory(output_path)?;

    img.save(output_path).map_err(|error| GenerationError::ImageExport {
        path: output_path.to_path_buf(),
        source: error,
    })
}

/// Export the curve as an animated GIF tracing cells in path order
///
/// Frames batch several cells each so long paths stay within a bounded
/// frame count; the requested delay is raised to the minimum viewers
/// reliably support, and the final frame is held longer for visibility.
///
/// # Errors
///
/// Returns an error if the path is empty, the file cannot be created, or
/// GIF encoding fails
pub fn render_path_gif(
    path: &[Point],
    region: &Region,
    cell_pixels: u32,
    frame_delay_ms: u32,
    output_path: &Path,
) -> Result<()> {
    if path.is_empty() {
        return Err(invalid_parameter(
            "path",
            &"[]",
            &"cannot animate an empty path",
        ));
    }

    let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
    let cells_per_frame = path.len().div_ceil(GIF_TARGET_FRAMES).max(1);

    let width = region.width() as u32 * cell_pixels;
    let height = region.height() as u32 * cell_pixels;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));

    let mut frames = Vec::new();
    let span = path.len().max(2) as f64 - 1.0;

    for (index, point) in path.iter().enumerate() {
        if region.contains(*point) {
            fill_cell(
                &mut canvas,
                region,
                *point,
                cell_pixels,
                gradient_color(index as f64 / span),
            );
        }
        if (index + 1) % cells_per_frame == 0 {
            frames.push(Frame::from_parts(
                canvas.clone(),
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }
    }

    // Final frame displays longer for better visibility
    frames.push(Frame::from_parts(
        canvas,
        0,
        0,
        image::Delay::from_numer_denom_ms(delay_ms * 25, 1),
    ));

    ensure_parent_directory(output_path)?;

    let file = std::fs::File::create(output_path).map_err(|error| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: error,
    })?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|error| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: error,
        })
}

//! Plain-text path persistence
//!
//! The on-disk format is one "row column" pair per line, in path order.

use crate::io::error::{GenerationError, Result};
use crate::spatial::Point;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write the path as one "row column" pair per line
///
/// # Errors
///
/// Returns an error if the destination cannot be created or written
pub fn save_path(path: &[Point], destination: &Path) -> Result<()> {
    let file = File::create(destination).map_err(|error| GenerationError::FileSystem {
        path: destination.to_path_buf(),
        operation: "create file",
        source: error,
    })?;
    let mut writer = BufWriter::new(file);

    for point in path {
        writeln!(writer, "{} {}", point.row, point.col).map_err(|error| {
            GenerationError::FileSystem {
                path: destination.to_path_buf(),
                operation: "write path data",
                source: error,
            }
        })?;
    }

    writer.flush().map_err(|error| GenerationError::FileSystem {
        path: destination.to_path_buf(),
        operation: "flush path data",
        source: error,
    })
}

/// Read a path previously written by [`save_path`]
///
/// Blank lines are skipped; everything else must be two whitespace-separated
/// integers.
///
/// # Errors
///
/// Returns an error if the source cannot be read or a line does not parse
/// as a coordinate pair
pub fn read_path(source: &Path) -> Result<Vec<Point>> {
    let file = File::open(source).map_err(|error| GenerationError::FileSystem {
        path: source.to_path_buf(),
        operation: "open file",
        source: error,
    })?;

    let mut points = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|error| GenerationError::FileSystem {
            path: source.to_path_buf(),
            operation: "read path data",
            source: error,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let parsed = match (fields.next(), fields.next(), fields.next()) {
            (Some(row), Some(col), None) => row.parse::<i32>().ok().zip(col.parse::<i32>().ok()),
            _ => None,
        };
        let (row, col) = parsed.ok_or_else(|| GenerationError::MalformedPathData {
            path: source.to_path_buf(),
            line: index + 1,
        })?;
        points.push(Point::new(row, col));
    }

    Ok(points)
}

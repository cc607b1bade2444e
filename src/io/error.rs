//! Error types for generation and I/O operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A subregion search exceeded its retry budget
    ///
    /// Open rectangular subregions admit a Hamiltonian path from any start,
    /// so exhausting the budget indicates an unsatisfiable side constraint
    /// (for example a parity-blocked start on an odd-by-odd subgrid).
    SearchBudget {
        /// Number of sampling attempts made
        attempts: usize,
        /// Subregion shape (height, width)
        shape: (i32, i32),
        /// Absolute coordinate of the subregion origin
        bias: (i32, i32),
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Persisted path data did not parse as coordinate pairs
    MalformedPathData {
        /// Path to the offending file
        path: PathBuf,
        /// 1-based line number of the first bad line
        line: usize,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SearchBudget {
                attempts,
                shape,
                bias,
            } => {
                write!(
                    f,
                    "No completing path found in {}x{} subregion at ({}, {}) after {attempts} attempts",
                    shape.0, shape.1, bias.0, bias.1
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedPathData { path, line } => {
                write!(
                    f,
                    "Malformed path data in '{}' at line {line}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

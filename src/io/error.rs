//! Error types for generator configuration and map export

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Feature factory given something other than a unit axis vector
    ///
    /// Indicates caller misuse; exactly one of `dx`, `dy` must be ±1 and the
    /// other zero.
    InvalidDirection {
        /// Horizontal component supplied
        dx: i32,
        /// Vertical component supplied
        dy: i32,
    },

    /// Generator option validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Export was requested but there is nothing to write
    NothingToExport {
        /// Description of what is missing
        reason: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection { dx, dy } => {
                write!(
                    f,
                    "Invalid direction ({dx}, {dy}): exactly one of dx or dy must be 1 or -1"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NothingToExport { reason } => {
                write!(f, "Nothing to export: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
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
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

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

/// Create a file system error for `path`
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> GenerationError {
    GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

/// Validate an inclusive `[min, max]` size range
///
/// # Errors
///
/// Returns `InvalidParameter` if `min` is below one or `min` exceeds `max`
pub fn check_range(parameter: &'static str, range: [i32; 2]) -> Result<()> {
    let [min, max] = range;
    if min < 1 {
        return Err(invalid_parameter(
            parameter,
            &format!("[{min}, {max}]"),
            &"minimum must be at least 1",
        ));
    }
    if min > max {
        return Err(invalid_parameter(
            parameter,
            &format!("[{min}, {max}]"),
            &"minimum must not exceed maximum",
        ));
    }
    Ok(())
}

/// Validate a fraction in `[0, 1]`
///
/// # Errors
///
/// Returns `InvalidParameter` for values outside `[0, 1]` or NaN
pub fn check_fraction(parameter: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must lie between 0 and 1",
        ))
    }
}

//! Error types for raster access and filters.

use thiserror::Error;

/// Error type for raster access and filter operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Pixel coordinate outside the raster extent.
    #[error("pixel ({x}, {y}) is outside a {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A user-facing parameter outside its documented domain.
    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Two rasters that must be the same size are not.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A pixel buffer does not hold exactly width × height pixels.
    #[error("pixel buffer has {actual} pixels, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    /// A compositing filter was applied without its overlay images.
    #[error("filter `{0}` requires halo and grain overlays")]
    MissingOverlay(&'static str),
}

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

//! Tintype Core — pixel transforms for the tintype filter toolkit.
//!
//! This crate holds the raster type, RGB↔HSL conversions, luminance, and every
//! filter. No file I/O and no framework dependencies: a caller hands in a
//! [`Raster`] and gets a new one back.

pub mod color;
pub mod error;
pub mod filters;
pub mod raster;
pub mod stats;

// Re-exports for convenience.
pub use error::{FilterError, FilterResult};
pub use filters::Filter;
pub use filters::composite::{BlendWeights, Overlays};
pub use raster::{Raster, Rgb};
pub use stats::RasterStats;

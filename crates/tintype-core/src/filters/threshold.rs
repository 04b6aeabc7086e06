//! Stylized black/white — threshold every pixel at the median luminance.
//!
//! # Algorithm
//! 1. Compute the luminance of every pixel
//! 2. Sort and take the median (mean of the two middle values for even counts)
//! 3. Pixels with `luminance >= median` become white, the rest black
//!
//! The median is a whole-image statistic, so this is the only filter that
//! needs two passes.
//!
//! # Complexity
//! O(N log N) for the sort, O(N) for both passes.

use tracing::{debug, instrument};

use crate::color::luminance;
use crate::raster::{Raster, Rgb};

/// Median luminance of all pixels, or `None` for an empty raster.
pub fn median_luminance(raster: &Raster) -> Option<f64> {
    let mut lums: Vec<f64> = raster.pixels().iter().map(|&px| luminance(px)).collect();
    median(&mut lums)
}

/// Threshold the raster at its median luminance.
///
/// Ties go to white, so a uniform image (or a single pixel) becomes all white.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn black_white(raster: &Raster) -> Raster {
    let Some(threshold) = median_luminance(raster) else {
        return raster.clone();
    };
    debug!(threshold, "median luminance");

    raster.map_pixels(|px| {
        if luminance(px) >= threshold {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    })
}

/// Median of `values`, sorting them in place.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

//! Perceptual luminance.

use crate::raster::Rgb;

/// Channel weights applied to squared channel values.
const WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Perceptual brightness of a pixel on the 0–255 scale.
///
/// ```text
/// L = sqrt(0.299·r² + 0.587·g² + 0.114·b²)
/// ```
#[inline]
pub fn luminance(px: Rgb) -> f64 {
    let r = f64::from(px.r);
    let g = f64::from(px.g);
    let b = f64::from(px.b);
    (WEIGHTS[0] * r * r + WEIGHTS[1] * g * g + WEIGHTS[2] * b * b).sqrt()
}

//! Per-pixel tone filters — grayscale, invert, sepia.
//!
//! Each output pixel depends only on the input pixel at the same position.

use tracing::instrument;

use crate::color::truncate_channel;
use crate::raster::{Raster, Rgb};

/// Sepia mixing matrix, one row per output channel.
///
/// ```text
/// r' = 0.393r + 0.769g + 0.189b
/// g' = 0.349r + 0.686g + 0.168b
/// b' = 0.272r + 0.534g + 0.131b
/// ```
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Replace every pixel by the truncated mean of its channels.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn grayscale(raster: &Raster) -> Raster {
    raster.map_pixels(grayscale_pixel)
}

/// Mean of the three channels, integer division.
pub fn grayscale_pixel(px: Rgb) -> Rgb {
    let avg = ((u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3) as u8;
    Rgb::new(avg, avg, avg)
}

/// Replace every channel `c` by `255 − c`.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn invert(raster: &Raster) -> Raster {
    raster.map_pixels(invert_pixel)
}

/// Channel complement of one pixel.
pub fn invert_pixel(px: Rgb) -> Rgb {
    Rgb::new(255 - px.r, 255 - px.g, 255 - px.b)
}

/// Apply the sepia mixing matrix to every pixel.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn sepia(raster: &Raster) -> Raster {
    raster.map_pixels(sepia_pixel)
}

/// Sepia for one pixel. Bright inputs overflow the matrix, so every channel
/// is truncated and clamped.
pub fn sepia_pixel(px: Rgb) -> Rgb {
    let rgb = [f64::from(px.r), f64::from(px.g), f64::from(px.b)];
    let mix = |row: [f64; 3]| truncate_channel(row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2]);
    Rgb::new(mix(SEPIA[0]), mix(SEPIA[1]), mix(SEPIA[2]))
}

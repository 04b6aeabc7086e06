//! Hue, saturation, and lightness setters.
//!
//! Each setter converts every pixel to HSL, overwrites one component with the
//! caller's value, and converts back. Arguments are validated before any
//! pixel is produced.

use tracing::instrument;

use crate::color::{Hsl, hsl_to_rgb, rgb_to_hsl};
use crate::error::{FilterError, FilterResult};
use crate::raster::Raster;

/// Set every pixel's hue. `degrees` must lie in `0.0..360.0`.
#[instrument(skip(raster), fields(width = raster.width(), height = raster.height()))]
pub fn set_hue(raster: &Raster, degrees: f64) -> FilterResult<Raster> {
    if !degrees.is_finite() || !(0.0..360.0).contains(&degrees) {
        return Err(FilterError::InvalidArgument {
            name: "hue",
            value: degrees,
            expected: "degrees in [0, 360)",
        });
    }
    Ok(remap(raster, |hsl| Hsl { hue: degrees, ..hsl }))
}

/// Set every pixel's saturation. `saturation` must lie in `0.0..=1.0`.
#[instrument(skip(raster), fields(width = raster.width(), height = raster.height()))]
pub fn set_saturation(raster: &Raster, saturation: f64) -> FilterResult<Raster> {
    check_unit("saturation", saturation)?;
    Ok(remap(raster, |hsl| Hsl { saturation, ..hsl }))
}

/// Set every pixel's lightness. `lightness` must lie in `0.0..=1.0`.
#[instrument(skip(raster), fields(width = raster.width(), height = raster.height()))]
pub fn set_lightness(raster: &Raster, lightness: f64) -> FilterResult<Raster> {
    check_unit("lightness", lightness)?;
    Ok(remap(raster, |hsl| Hsl { lightness, ..hsl }))
}

fn check_unit(name: &'static str, value: f64) -> FilterResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FilterError::InvalidArgument {
            name,
            value,
            expected: "a value in [0, 1]",
        })
    }
}

fn remap(raster: &Raster, f: impl Fn(Hsl) -> Hsl) -> Raster {
    raster.map_pixels(|px| hsl_to_rgb(f(rgb_to_hsl(px))))
}

//! Halo and grain overlay resources for the composite filter.

use std::path::Path;

use image::imageops::{self, FilterType};
use tintype_core::{FilterResult, Overlays, Raster};
use tracing::{debug, instrument};

use crate::error::LoadError;
use crate::loader::load;
use crate::saver::raster_to_rgb_image;

/// Vignette mask file name inside a resource directory.
pub const HALO_FILE: &str = "halo.png";
/// Grain texture file name inside a resource directory.
pub const GRAIN_FILE: &str = "decorative_grain.png";

/// Load the halo mask and grain texture from `dir`.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn load_overlays(dir: impl AsRef<Path>) -> Result<Overlays, LoadError> {
    let dir = dir.as_ref();
    let halo = load(dir.join(HALO_FILE))?;
    let grain = load(dir.join(GRAIN_FILE))?;
    debug!(
        halo = ?halo.dimensions(),
        grain = ?grain.dimensions(),
        "Overlays loaded"
    );
    Ok(Overlays { halo, grain })
}

/// Resample both overlays to exactly `width × height` (Lanczos3).
///
/// The composite filter never resizes on its own; callers opt in here.
pub fn fit_overlays(overlays: &Overlays, width: u32, height: u32) -> FilterResult<Overlays> {
    Ok(Overlays {
        halo: fit(&overlays.halo, width, height)?,
        grain: fit(&overlays.grain, width, height)?,
    })
}

fn fit(raster: &Raster, width: u32, height: u32) -> FilterResult<Raster> {
    if raster.dimensions() == (width, height) {
        return Ok(raster.clone());
    }
    // Nothing to sample from, or nothing to sample into.
    if raster.is_empty() || width == 0 || height == 0 {
        return Ok(Raster::new(width, height));
    }

    let resized = imageops::resize(&raster_to_rgb_image(raster), width, height, FilterType::Lanczos3);
    Raster::from_rgb_bytes(width, height, resized.as_raw())
}

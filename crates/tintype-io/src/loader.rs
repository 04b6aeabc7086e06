//! Image decoding into rasters.

use std::path::Path;

use image::{DynamicImage, ImageReader};
use tintype_core::Raster;
use tracing::{debug, info, instrument};

use crate::error::LoadError;

/// Load an image from disk as an 8-bit RGB raster.
///
/// The container format is sniffed from the file contents, so a misnamed
/// extension still decodes. Any color type is converted to RGB8; alpha is
/// dropped.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<Raster, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let raster = raster_from_dynamic(&img)?;
    info!(width = raster.width(), height = raster.height(), "Image loaded");
    Ok(raster)
}

/// Decode an in-memory encoded image (PNG, JPEG, …).
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn load_from_memory(data: &[u8]) -> Result<Raster, LoadError> {
    let img = image::load_from_memory(data).map_err(LoadError::DecodeBytes)?;
    let raster = raster_from_dynamic(&img)?;
    debug!(
        width = raster.width(),
        height = raster.height(),
        "Image decoded from bytes"
    );
    Ok(raster)
}

/// Convert an already-decoded image to a raster.
pub fn raster_from_dynamic(img: &DynamicImage) -> Result<Raster, LoadError> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Raster::from_rgb_bytes(width, height, rgb.as_raw())?)
}

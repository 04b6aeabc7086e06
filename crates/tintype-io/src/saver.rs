//! Raster encoding to image files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::{ImageError, ImageFormat, RgbImage};
use tintype_core::Raster;
use tracing::{info, instrument};

use crate::error::SaveError;

/// Output container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
    Tga,
    /// Binary PPM.
    Pnm,
}

impl SaveFormat {
    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, SaveError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| SaveError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }

    /// The matching `image` crate format.
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Bmp => ImageFormat::Bmp,
            Self::Tiff => ImageFormat::Tiff,
            Self::Tga => ImageFormat::Tga,
            Self::Pnm => ImageFormat::Pnm,
        }
    }
}

impl FromStr for SaveFormat {
    type Err = SaveError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "tif" | "tiff" => Ok(Self::Tiff),
            "tga" => Ok(Self::Tga),
            "pnm" | "ppm" => Ok(Self::Pnm),
            _ => Err(SaveError::UnsupportedFormat(tag.to_string())),
        }
    }
}

impl fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Tga => "tga",
            Self::Pnm => "pnm",
        };
        f.write_str(tag)
    }
}

/// Copy a raster into an `image` RGB8 buffer.
pub fn raster_to_rgb_image(raster: &Raster) -> RgbImage {
    let mut img = RgbImage::new(raster.width(), raster.height());
    img.copy_from_slice(raster.as_rgb_bytes());
    img
}

/// Encode `raster` as `format` and write it to `path`.
#[instrument(skip_all, fields(path = %path.as_ref().display(), format = %format))]
pub fn save(raster: &Raster, format: SaveFormat, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    raster_to_rgb_image(raster)
        .save_with_format(path, format.image_format())
        .map_err(|err| match err {
            ImageError::IoError(source) => SaveError::Io {
                path: path.to_path_buf(),
                source,
            },
            ImageError::Unsupported(_) => SaveError::UnsupportedFormat(format.to_string()),
            source => SaveError::Encode {
                path: path.to_path_buf(),
                source,
            },
        })?;
    info!(width = raster.width(), height = raster.height(), "Image saved");
    Ok(())
}

/// Save with the format inferred from the path's extension.
pub fn save_inferred(raster: &Raster, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    save(raster, SaveFormat::from_path(path)?, path)
}

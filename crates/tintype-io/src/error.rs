use std::path::PathBuf;

use tintype_core::FilterError;

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to decode image bytes: {0}")]
    DecodeBytes(#[source] image::ImageError),
    #[error("decoded pixel data is malformed: {0}")]
    Raster(#[from] FilterError),
}

/// Errors that can occur while saving an image.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

//! File I/O for tintype.
//!
//! Decoding, encoding and the overlay resources the composite filter needs.
//! Everything here converts between files and [`tintype_core::Raster`]; no
//! pixel math lives in this crate.

mod error;
mod loader;
mod overlays;
mod saver;

pub use error::{LoadError, SaveError};
pub use loader::{load, load_from_memory, raster_from_dynamic};
pub use overlays::{GRAIN_FILE, HALO_FILE, fit_overlays, load_overlays};
pub use saver::{SaveFormat, raster_to_rgb_image, save, save_inferred};

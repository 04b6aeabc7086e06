//! Raster representation for the filter pipeline.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FilterError, FilterResult};

/// An 8-bit RGB pixel.
///
/// `#[repr(C)]` with no padding, so a `[Rgb]` slice can be viewed as packed
/// `RGBRGB…` bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fixed-size grid of RGB pixels, stored row-major.
///
/// Every coordinate access is bounds-checked: `get`/`set` outside
/// `0..width` × `0..height` return [`FilterError::OutOfBounds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// A black raster of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// A raster where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; pixel_count(width, height)],
        }
    }

    /// Build a raster by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(pixel_count(width, height));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wrap a row-major pixel buffer. The buffer must hold exactly
    /// `width * height` pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> FilterResult<Self> {
        let expected = pixel_count(width, height);
        if pixels.len() != expected {
            return Err(FilterError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Copy a packed `RGBRGB…` byte buffer into a raster.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> FilterResult<Self> {
        let expected = pixel_count(width, height);
        let pixels: &[Rgb] =
            bytemuck::try_cast_slice(bytes).map_err(|_| FilterError::BufferLength {
                expected,
                actual: bytes.len() / 3,
            })?;
        Self::from_pixels(width, height, pixels.to_vec())
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the raster has no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether `other` has the same width and height.
    pub fn same_dimensions(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> FilterResult<Rgb> {
        let idx = self.index(x, y)?;
        Ok(self.pixels[idx])
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb) -> FilterResult<()> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = pixel;
        Ok(())
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The pixel data as packed `RGBRGB…` bytes.
    pub fn as_rgb_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// A new raster of the same size with `f` applied to every pixel.
    pub fn map_pixels(&self, f: impl FnMut(Rgb) -> Rgb) -> Raster {
        Raster {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// A new raster combining each pixel with the pixel at the same position
    /// in `other`. Fails with [`FilterError::DimensionMismatch`] before
    /// touching any pixel if the sizes differ.
    pub fn zip_pixels(
        &self,
        other: &Raster,
        mut f: impl FnMut(Rgb, Rgb) -> Rgb,
    ) -> FilterResult<Raster> {
        if !self.same_dimensions(other) {
            return Err(FilterError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(Raster {
            width: self.width,
            height: self.height,
            pixels: self
                .pixels
                .iter()
                .zip(&other.pixels)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    fn index(&self, x: u32, y: u32) -> FilterResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(FilterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

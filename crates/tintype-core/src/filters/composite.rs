//! Warm tint, weighted blending, and the composite "Instagram" look.
//!
//! The composite runs three stages on the same image:
//!
//! ```text
//!   Input ──→ warm ──→ blend(halo, 0.65/0.35) ──→ blend(grain, 0.95/0.05) ──→ Output
//! ```
//!
//! Both overlays must match the image size exactly. Size mismatches are
//! reported before any output is produced; overlays are never cropped or
//! tiled.

use tracing::{debug, instrument};

use crate::color::truncate_channel;
use crate::error::{FilterError, FilterResult};
use crate::raster::{Raster, Rgb};

/// Red gain of the warm tint.
const WARM_RED_GAIN: f64 = 1.2;
/// Blue divisor of the warm tint.
const WARM_BLUE_DIVISOR: f64 = 1.5;

/// Tolerance on `base + overlay == 1`.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Added before truncating a blended channel. Weighted sums that are whole
/// numbers can land a few ulps below the integer in binary floating point.
/// Far smaller than the 0.01 granularity of percentage weights.
const BLEND_EPSILON: f64 = 1e-9;

/// A validated pair of blend weights.
///
/// Both weights are non-negative and sum to 1, so a blend is a true weighted
/// average of the two images.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    base: f64,
    overlay: f64,
}

impl BlendWeights {
    /// 65% image, 35% halo mask.
    pub const VIGNETTE: Self = Self {
        base: 0.65,
        overlay: 0.35,
    };

    /// 95% image, 5% grain texture.
    pub const GRAIN: Self = Self {
        base: 0.95,
        overlay: 0.05,
    };

    /// Validate a weight pair. Rejects negative or non-finite weights and
    /// pairs that do not sum to 1 (for example `0.95 / 0.5`).
    pub fn new(base: f64, overlay: f64) -> FilterResult<Self> {
        for (name, value) in [("base weight", base), ("overlay weight", overlay)] {
            if !value.is_finite() || value < 0.0 {
                return Err(FilterError::InvalidArgument {
                    name,
                    value,
                    expected: "a finite weight >= 0",
                });
            }
        }
        let sum = base + overlay;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(FilterError::InvalidArgument {
                name: "blend weight sum",
                value: sum,
                expected: "weights summing to 1",
            });
        }
        Ok(Self { base, overlay })
    }

    /// Weight given to the image being filtered.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Weight given to the overlay.
    pub fn overlay(&self) -> f64 {
        self.overlay
    }

    fn mix(&self, base: Rgb, overlay: Rgb) -> Rgb {
        let mix = |a: u8, b: u8| {
            truncate_channel(self.base * f64::from(a) + self.overlay * f64::from(b) + BLEND_EPSILON)
        };
        Rgb::new(mix(base.r, overlay.r), mix(base.g, overlay.g), mix(base.b, overlay.b))
    }
}

/// The halo mask and grain texture used by [`instagram`].
#[derive(Debug, Clone, PartialEq)]
pub struct Overlays {
    /// Halo-shaped mask producing the vignette.
    pub halo: Raster,
    /// Decorative grain texture.
    pub grain: Raster,
}

impl Overlays {
    /// Fail with [`FilterError::DimensionMismatch`] unless both overlays are
    /// `width × height`.
    pub fn check_dimensions(&self, width: u32, height: u32) -> FilterResult<()> {
        for overlay in [&self.halo, &self.grain] {
            if overlay.dimensions() != (width, height) {
                return Err(FilterError::DimensionMismatch {
                    expected: (width, height),
                    actual: overlay.dimensions(),
                });
            }
        }
        Ok(())
    }
}

/// Warm tint for one pixel: boost red, cut blue.
///
/// ```text
/// r' = r × 1.2     g' = g     b' = b / 1.5
/// ```
pub fn warm_pixel(px: Rgb) -> Rgb {
    Rgb::new(
        truncate_channel(f64::from(px.r) * WARM_RED_GAIN),
        px.g,
        truncate_channel(f64::from(px.b) / WARM_BLUE_DIVISOR),
    )
}

/// Apply the warm tint to every pixel.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn warm(raster: &Raster) -> Raster {
    raster.map_pixels(warm_pixel)
}

/// Weighted per-channel blend of two equally sized rasters.
///
/// ```text
/// c' = base_weight × c_base + overlay_weight × c_overlay
/// ```
pub fn blend(base: &Raster, overlay: &Raster, weights: BlendWeights) -> FilterResult<Raster> {
    base.zip_pixels(overlay, |a, b| weights.mix(a, b))
}

/// Darken the border by blending with a halo mask (65/35).
pub fn vignette(raster: &Raster, halo: &Raster) -> FilterResult<Raster> {
    blend(raster, halo, BlendWeights::VIGNETTE)
}

/// Add texture by blending with a grain image (95/5).
pub fn grain(raster: &Raster, texture: &Raster) -> FilterResult<Raster> {
    blend(raster, texture, BlendWeights::GRAIN)
}

/// Warm tint, then vignette, then grain.
///
/// Overlay sizes are checked up front, so a mismatch never produces a
/// partially filtered image.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn instagram(raster: &Raster, overlays: &Overlays) -> FilterResult<Raster> {
    let (width, height) = raster.dimensions();
    overlays.check_dimensions(width, height)?;

    let warmed = warm(raster);
    let vignetted = vignette(&warmed, &overlays.halo)?;
    let out = grain(&vignetted, &overlays.grain)?;
    debug!("composite applied");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlays(width: u32, height: u32) -> Overlays {
        Overlays {
            halo: Raster::filled(width, height, Rgb::BLACK),
            grain: Raster::filled(width, height, Rgb::WHITE),
        }
    }

    #[test]
    fn test_warm_pixel_formula() {
        // 100 × 1.2 = 120, 90 / 1.5 = 60
        assert_eq!(warm_pixel(Rgb::new(100, 50, 90)), Rgb::new(120, 50, 60));
        // 13 / 1.5 = 8.67 → 8
        assert_eq!(warm_pixel(Rgb::new(0, 0, 13)).b, 8);
    }

    #[test]
    fn test_warm_pixel_clamps_red() {
        assert_eq!(warm_pixel(Rgb::new(250, 0, 0)).r, 255);
    }

    #[test]
    fn test_blend_weights_accept_complementary_pair() {
        let w = BlendWeights::new(0.7, 0.3).unwrap();
        assert_eq!(w.base(), 0.7);
        assert_eq!(w.overlay(), 0.3);
        assert!(BlendWeights::new(1.0, 0.0).is_ok());
    }

    #[test]
    fn test_blend_weights_reject_95_over_50() {
        let err = BlendWeights::new(0.95, 0.5).unwrap_err();
        assert!(matches!(err, FilterError::InvalidArgument { name: "blend weight sum", .. }));
    }

    #[test]
    fn test_blend_weights_reject_negative_and_nan() {
        assert!(BlendWeights::new(1.5, -0.5).is_err());
        assert!(BlendWeights::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_named_weights_sum_to_one() {
        for w in [BlendWeights::VIGNETTE, BlendWeights::GRAIN] {
            assert!(BlendWeights::new(w.base(), w.overlay()).is_ok());
        }
    }

    #[test]
    fn test_vignette_blend_values() {
        let image = Raster::filled(2, 2, Rgb::new(200, 100, 0));
        let halo = Raster::filled(2, 2, Rgb::new(10, 101, 201));
        let out = vignette(&image, &halo).unwrap();
        // 130 + 3.5 = 133.5, 65 + 35.35 = 100.35, 0 + 70.35 = 70.35
        assert_eq!(out.get(1, 1).unwrap(), Rgb::new(133, 100, 70));
    }

    #[test]
    fn test_grain_blend_values() {
        let image = Raster::filled(1, 1, Rgb::new(100, 200, 0));
        let texture = Raster::filled(1, 1, Rgb::new(255, 10, 255));
        let out = grain(&image, &texture).unwrap();
        // 95 + 12.75 = 107.75, 190 + 0.5 = 190.5, 0 + 12.75 = 12.75
        assert_eq!(out.get(0, 0).unwrap(), Rgb::new(107, 190, 12));
    }

    #[test]
    fn test_grain_of_identical_images_is_identity() {
        let image = Raster::from_fn(256, 1, |x, _| {
            let v = x as u8;
            Rgb::new(v, v.wrapping_add(3), v.wrapping_mul(7))
        });
        assert_eq!(grain(&image, &image).unwrap(), image);
        assert_eq!(vignette(&image, &image).unwrap(), image);
    }

    #[test]
    fn test_vignette_whole_number_result_is_not_lost() {
        let image = Raster::filled(1, 1, Rgb::BLACK);
        let halo = Raster::filled(1, 1, Rgb::new(180, 180, 180));
        // 0.35 × 180 = 63 exactly
        assert_eq!(vignette(&image, &halo).unwrap().get(0, 0).unwrap(), Rgb::new(63, 63, 63));
    }

    #[test]
    fn test_named_blends_match_integer_floor() {
        for (weights, base_pct) in [(BlendWeights::VIGNETTE, 65u32), (BlendWeights::GRAIN, 95)] {
            for a in 0..=255u8 {
                for b in 0..=255u8 {
                    let exact = (base_pct * u32::from(a) + (100 - base_pct) * u32::from(b)) / 100;
                    let got = weights.mix(Rgb::new(a, a, a), Rgb::new(b, b, b)).r;
                    assert_eq!(u32::from(got), exact, "{weights:?} a={a} b={b}");
                }
            }
        }
    }

    #[test]
    fn test_instagram_rejects_mismatched_mask() {
        let image = Raster::new(10, 10);
        let overlays = Overlays {
            halo: Raster::new(5, 5),
            grain: Raster::new(10, 10),
        };
        let err = instagram(&image, &overlays).unwrap_err();
        assert_eq!(
            err,
            FilterError::DimensionMismatch {
                expected: (10, 10),
                actual: (5, 5)
            }
        );
    }

    #[test]
    fn test_instagram_rejects_mismatched_grain() {
        let image = Raster::new(4, 3);
        let overlays = Overlays {
            halo: Raster::new(4, 3),
            grain: Raster::new(3, 4),
        };
        assert!(instagram(&image, &overlays).is_err());
    }

    #[test]
    fn test_instagram_pipeline_values() {
        let image = Raster::filled(3, 2, Rgb::new(100, 100, 90));
        let out = instagram(&image, &overlays(3, 2)).unwrap();
        // warm:     (120, 100, 60)
        // vignette: (78, 65, 39)     0.65 × warm + 0.35 × 0
        // grain:    (86, 74, 49)     0.95 × prev + 0.05 × 255
        assert_eq!(out.get(2, 1).unwrap(), Rgb::new(86, 74, 49));
    }

    #[test]
    fn test_instagram_on_empty_raster() {
        let out = instagram(&Raster::new(0, 0), &overlays(0, 0)).unwrap();
        assert!(out.is_empty());
    }
}

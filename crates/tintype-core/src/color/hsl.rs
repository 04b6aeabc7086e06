//! RGB ↔ HSL conversion.
//!
//! # Formula
//! With channels normalized to `0..1`:
//! ```text
//!   max = max(r, g, b)     min = min(r, g, b)     C = max − min
//!   L = (max + min) / 2
//!   S = 0                          if C = 0
//!       C / (1 − |2L − 1|)         otherwise
//!   H = 60° × ((g − b) / C mod 6)  if max = r
//!       60° × ((b − r) / C + 2)    if max = g
//!       60° × ((r − g) / C + 4)    if max = b
//! ```
//!
//! The inverse uses the six-sector chroma construction:
//! ```text
//!   C = (1 − |2L − 1|) × S
//!   X = C × (1 − |(H / 60°) mod 2 − 1|)
//!   m = L − C / 2
//!   (r, g, b) = sector(H) ∈ {(C,X,0), (X,C,0), (0,C,X), (0,X,C), (X,0,C), (C,0,X)} + m
//! ```
//! Converting back rounds to the nearest 8-bit value, so RGB → HSL → RGB
//! reproduces every channel within ±1.

use crate::raster::Rgb;

/// A pixel in hue/saturation/lightness form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `0.0..360.0`.
    pub hue: f64,
    /// Saturation, `0.0..=1.0`.
    pub saturation: f64,
    /// Lightness, `0.0..=1.0`.
    pub lightness: f64,
}

/// Convert an 8-bit RGB pixel to HSL.
///
/// Achromatic pixels (r = g = b) report hue 0 and saturation 0.
pub fn rgb_to_hsl(px: Rgb) -> Hsl {
    let r = f64::from(px.r) / 255.0;
    let g = f64::from(px.g) / 255.0;
    let b = f64::from(px.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let lightness = (max + min) * 0.5;

    if chroma == 0.0 {
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness,
        };
    }

    let saturation = (chroma / (1.0 - (2.0 * lightness - 1.0).abs())).clamp(0.0, 1.0);

    let sector = if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let mut hue = sector * 60.0;
    // rem_euclid of a tiny negative can land exactly on 6.0.
    if hue >= 360.0 {
        hue -= 360.0;
    }

    Hsl {
        hue,
        saturation,
        lightness,
    }
}

/// Convert HSL back to an 8-bit RGB pixel, rounding to nearest.
///
/// Hue is wrapped into `0..360`; saturation and lightness are clamped to
/// `0..=1`.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let hue = hsl.hue.rem_euclid(360.0);
    let saturation = hsl.saturation.clamp(0.0, 1.0);
    let lightness = hsl.lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let m = lightness - chroma * 0.5;

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

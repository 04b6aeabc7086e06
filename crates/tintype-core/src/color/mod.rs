//! Color model conversions — RGB↔HSL, luminance, and channel clamping.

pub mod hsl;
pub mod luminance;

pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use luminance::luminance;

/// Store a computed channel value: truncate toward zero, then clamp to
/// `0..=255`.
///
/// ```text
/// truncate_channel(300.7) == 255
/// truncate_channel(12.9)  == 12
/// truncate_channel(-4.0)  == 0
/// ```
#[inline]
pub fn truncate_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.trunc().clamp(0.0, 255.0) as u8
}

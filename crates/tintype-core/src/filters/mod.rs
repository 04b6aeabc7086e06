//! Filters — every transform maps a borrowed [`Raster`] to a new one.
//!
//! The input is never mutated, so a failed call leaves the caller's image
//! exactly as it was.

pub mod adjust;
pub mod composite;
pub mod geometry;
pub mod threshold;
pub mod tone;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};
use crate::raster::Raster;

pub use adjust::{set_hue, set_lightness, set_saturation};
pub use composite::{BlendWeights, Overlays, blend, grain, instagram, vignette, warm};
pub use geometry::{rotate_clockwise, rotate_quarter_turns};
pub use threshold::{black_white, median_luminance};
pub use tone::{grayscale, invert, sepia};

/// A single filter and its parameters.
///
/// Serialized as `{"filter": "hue", "degrees": 120.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "filter", rename_all = "snake_case")]
pub enum Filter {
    Grayscale,
    Invert,
    Sepia,
    /// Threshold at the median luminance.
    BlackWhite,
    /// Clockwise quarter turns.
    Rotate { quarter_turns: u32 },
    Hue { degrees: f64 },
    Saturation { value: f64 },
    Lightness { value: f64 },
    /// Warm tint only.
    Warm,
    /// Warm tint, halo vignette and grain. Needs [`Overlays`].
    Instagram,
}

impl Filter {
    /// Stable label for logs and CLI output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Invert => "invert",
            Self::Sepia => "sepia",
            Self::BlackWhite => "black_white",
            Self::Rotate { .. } => "rotate",
            Self::Hue { .. } => "hue",
            Self::Saturation { .. } => "saturation",
            Self::Lightness { .. } => "lightness",
            Self::Warm => "warm",
            Self::Instagram => "instagram",
        }
    }

    /// Whether [`apply`](Self::apply) needs overlay images.
    pub const fn needs_overlays(&self) -> bool {
        matches!(self, Self::Instagram)
    }

    /// Run this filter on `raster`.
    ///
    /// `overlays` is only consulted by [`Filter::Instagram`]; passing `None`
    /// for it is a [`FilterError::MissingOverlay`].
    pub fn apply(&self, raster: &Raster, overlays: Option<&Overlays>) -> FilterResult<Raster> {
        match *self {
            Self::Grayscale => Ok(grayscale(raster)),
            Self::Invert => Ok(invert(raster)),
            Self::Sepia => Ok(sepia(raster)),
            Self::BlackWhite => Ok(black_white(raster)),
            Self::Rotate { quarter_turns } => Ok(rotate_quarter_turns(raster, quarter_turns)),
            Self::Hue { degrees } => set_hue(raster, degrees),
            Self::Saturation { value } => set_saturation(raster, value),
            Self::Lightness { value } => set_lightness(raster, value),
            Self::Warm => Ok(warm(raster)),
            Self::Instagram => {
                let overlays = overlays.ok_or(FilterError::MissingOverlay(self.name()))?;
                instagram(raster, overlays)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Rgb;

    #[test]
    fn test_filter_serializes_with_tag() {
        let json = serde_json::to_string(&Filter::Hue { degrees: 120.0 }).unwrap();
        assert_eq!(json, r#"{"filter":"hue","degrees":120.0}"#);

        let parsed: Filter = serde_json::from_str(r#"{"filter":"black_white"}"#).unwrap();
        assert_eq!(parsed, Filter::BlackWhite);
    }

    #[test]
    fn test_name_matches_serde_tag() {
        for filter in [
            Filter::Grayscale,
            Filter::BlackWhite,
            Filter::Rotate { quarter_turns: 1 },
            Filter::Saturation { value: 0.5 },
            Filter::Instagram,
        ] {
            let value = serde_json::to_value(filter).unwrap();
            assert_eq!(value["filter"], filter.name());
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let raster = Raster::filled(2, 1, Rgb::new(10, 20, 30));
        let out = Filter::Invert.apply(&raster, None).unwrap();
        assert_eq!(out.get(0, 0).unwrap(), Rgb::new(245, 235, 225));

        let rotated = Filter::Rotate { quarter_turns: 1 }.apply(&raster, None).unwrap();
        assert_eq!(rotated.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_propagates_invalid_argument() {
        let raster = Raster::new(1, 1);
        let err = Filter::Lightness { value: 2.0 }.apply(&raster, None).unwrap_err();
        assert!(matches!(err, FilterError::InvalidArgument { name: "lightness", .. }));
    }

    #[test]
    fn test_instagram_without_overlays() {
        let raster = Raster::new(1, 1);
        assert!(Filter::Instagram.needs_overlays());
        assert_eq!(
            Filter::Instagram.apply(&raster, None),
            Err(FilterError::MissingOverlay("instagram"))
        );
    }
}

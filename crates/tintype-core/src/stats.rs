//! Whole-image statistics.

use serde::Serialize;

use crate::filters::threshold::median_luminance;
use crate::raster::Raster;

/// Summary statistics for a raster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RasterStats {
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
    /// Mean `[R, G, B]` on the 0–255 scale. Zero for an empty raster.
    pub mean: [f64; 3],
    /// Threshold used by the black/white filter. `None` for an empty raster.
    pub median_luminance: Option<f64>,
}

impl RasterStats {
    pub fn compute(raster: &Raster) -> Self {
        let pixel_count = raster.pixels().len();
        let mut sum = [0u64; 3];
        for px in raster.pixels() {
            sum[0] += u64::from(px.r);
            sum[1] += u64::from(px.g);
            sum[2] += u64::from(px.b);
        }

        let mean = if pixel_count == 0 {
            [0.0; 3]
        } else {
            let n = pixel_count as f64;
            [sum[0] as f64 / n, sum[1] as f64 / n, sum[2] as f64 / n]
        };

        Self {
            width: raster.width(),
            height: raster.height(),
            pixel_count,
            mean,
            median_luminance: median_luminance(raster),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Rgb;

    #[test]
    fn test_stats_empty_raster() {
        let stats = RasterStats::compute(&Raster::new(0, 3));
        assert_eq!(stats.pixel_count, 0);
        assert_eq!(stats.mean, [0.0; 3]);
        assert_eq!(stats.median_luminance, None);
    }

    #[test]
    fn test_stats_mean_per_channel() {
        let raster = Raster::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb::new(10, 0, 255)
            } else {
                Rgb::new(20, 100, 255)
            }
        });
        let stats = RasterStats::compute(&raster);
        assert_eq!(stats.mean, [15.0, 50.0, 255.0]);
        assert_eq!(stats.pixel_count, 2);
        assert!(stats.median_luminance.is_some());
    }

    #[test]
    fn test_stats_serialize_for_reporting() {
        let stats = RasterStats::compute(&Raster::filled(3, 2, Rgb::WHITE));
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["width"], 3);
        assert_eq!(value["pixel_count"], 6);
        assert_eq!(value["mean"][1], 255.0);
    }
}

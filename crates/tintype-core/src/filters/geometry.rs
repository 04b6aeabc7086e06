//! Quarter-turn rotation.

use tracing::instrument;

use crate::raster::Raster;

/// Rotate 90° clockwise.
///
/// A `W×H` source becomes an `H×W` raster; source `(x, y)` lands at
/// `(H − 1 − y, x)`.
///
/// ```text
///   a b c        d a
///   d e f   →    e b
///                f c
/// ```
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn rotate_clockwise(raster: &Raster) -> Raster {
    let (width, height) = raster.dimensions();
    let src = raster.pixels();
    // Destination (dx, dy) reads source (x = dy, y = H − 1 − dx).
    Raster::from_fn(height, width, |dx, dy| {
        let x = dy as usize;
        let y = (height - 1 - dx) as usize;
        src[y * width as usize + x]
    })
}

/// Apply `turns` clockwise quarter turns. `turns` is taken modulo 4.
pub fn rotate_quarter_turns(raster: &Raster, turns: u32) -> Raster {
    let mut out = raster.clone();
    for _ in 0..turns % 4 {
        out = rotate_clockwise(&out);
    }
    out
}

//! Pure-computation RGBA8 expansion of a [`Raster`].
//!
//! Always available (no feature gate) so the `png` snapshot path and any
//! in-memory consumer share the same conversion.

use crate::raster::Raster;
use sapling_core::Srgb;

/// Expands the cell grid to a full-canvas RGBA8 buffer: painted cells fill
/// their `step x step` block with `paint`, everything else is `background`.
/// The buffer length is `width * height * 4` and alpha is always 255.
pub fn raster_to_rgba(
    raster: &Raster,
    width: usize,
    height: usize,
    background: Srgb,
    paint: Srgb,
) -> Vec<u8> {
    let [br, bg, bb] = background.to_rgb8();
    let [pr, pg, pb] = paint.to_rgb8();
    let step = raster.step();

    let mut buf = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let cell = raster.get(x / step, y / step);
            if cell.painted {
                buf.extend_from_slice(&[pr, pg, pb, 255]);
            } else {
                buf.extend_from_slice(&[br, bg, bb, 255]);
            }
        }
    }
    buf
}

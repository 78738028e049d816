//! PNG snapshot of a rendered raster.
//!
//! Feature-gated behind `png` (default on) so embedders that only want the
//! in-memory grid can drop the `image` dependency; the RGBA conversion
//! itself lives in [`crate::pixel`] and is always available.

use crate::pixel::raster_to_rgba;
use crate::raster::Raster;
use sapling_core::{SaplingError, Srgb};
use std::path::Path;

/// Writes the raster as a PNG of the full canvas.
///
/// Returns `SaplingError::InvalidDimensions` if the canvas does not fit
/// `u32`, or `SaplingError::Io` on write failure.
pub fn write_png(
    raster: &Raster,
    width: usize,
    height: usize,
    background: Srgb,
    paint: Srgb,
    path: &Path,
) -> Result<(), SaplingError> {
    let rgba = raster_to_rgba(raster, width, height, background, paint);
    let w = u32::try_from(width).map_err(|_| SaplingError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| SaplingError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SaplingError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SaplingError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Cell;

    #[test]
    fn write_png_round_trip() {
        let mut raster = Raster::new(12, 12, 3).unwrap();
        raster.set(
            2,
            2,
            Cell {
                painted: true,
                progress: None,
            },
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trunk.png");

        write_png(
            &raster,
            12,
            12,
            Srgb::from_hex("#ffffff").unwrap(),
            Srgb::from_u8(34, 139, 34),
            &path,
        )
        .unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 12);
        assert_eq!(img.height(), 12);
        assert_eq!(img.get_pixel(7, 7).0, [34, 139, 34, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }
}

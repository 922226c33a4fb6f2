//! Loading images into pixel grids.

use std::path::Path;

use anyhow::Context;
use image::DynamicImage;

use crate::palette::Rgb;

/// Largest width or height the Easy6502 screen can show.
///
/// Bigger images still convert, but the tail ends up past the visible
/// screen memory.
pub const MAX_DIMENSION: u32 = 32;

/// A read-only, row-major grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build a grid from row-major pixels.
    ///
    /// Panics when the dimensions are zero or don't match `pixels.len()`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<Rgb>) -> Self {
        assert!(width > 0 && height > 0, "empty image");
        assert_eq!(
            width as usize * height as usize,
            pixels.len(),
            "pixel count doesn't match dimensions"
        );

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Rows in scan order, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Whether either dimension exceeds [`MAX_DIMENSION`].
    pub fn oversize(&self) -> bool {
        self.width > MAX_DIMENSION || self.height > MAX_DIMENSION
    }
}

/// Convert a decoded image into a [`PixelGrid`], dropping any alpha channel.
pub fn decode(img: &DynamicImage) -> PixelGrid {
    let rgb = img.to_rgb8();
    let pixels = rgb.pixels().map(|p| Rgb::new(p[0], p[1], p[2])).collect();

    PixelGrid::from_raw(rgb.width(), rgb.height(), pixels)
}

/// Load an image file into a [`PixelGrid`].
pub fn load(path: &Path) -> anyhow::Result<PixelGrid> {
    let img =
        image::open(path).with_context(|| format!("cannot open file: {}", path.display()))?;

    Ok(decode(&img))
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, RgbaImage};

    use super::{decode, PixelGrid, Rgb};

    #[test]
    fn decode_strips_alpha() {
        let raw = vec![
            0xff, 0xff, 0xff, 0x00, // white, fully transparent
            0x88, 0x00, 0x00, 0x80, // red, half transparent
        ];
        let img = DynamicImage::ImageRgba8(RgbaImage::from_raw(2, 1, raw).unwrap());

        let grid = decode(&img);

        assert_eq!(2, grid.width());
        assert_eq!(1, grid.height());
        assert_eq!(
            vec![&[Rgb::new(0xff, 0xff, 0xff), Rgb::new(0x88, 0x00, 0x00)][..]],
            grid.rows().collect::<Vec<_>>()
        );
    }

    #[test]
    fn rows_are_top_first() {
        let grid = PixelGrid::from_raw(
            1,
            2,
            vec![Rgb::new(0x11, 0x11, 0x11), Rgb::new(0x22, 0x22, 0x22)],
        );

        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(Rgb::new(0x11, 0x11, 0x11), rows[0][0]);
        assert_eq!(Rgb::new(0x22, 0x22, 0x22), rows[1][0]);
    }

    #[test]
    fn full_screen_is_not_oversize() {
        let grid = PixelGrid::from_raw(32, 32, vec![Rgb::new(0, 0, 0); 32 * 32]);
        assert!(!grid.oversize());
    }

    #[test]
    fn one_pixel_too_wide_is_oversize() {
        let grid = PixelGrid::from_raw(33, 1, vec![Rgb::new(0, 0, 0); 33]);
        assert!(grid.oversize());
    }

    #[test]
    #[should_panic(expected = "pixel count doesn't match dimensions")]
    fn from_raw_rejects_short_pixel_buffers() {
        PixelGrid::from_raw(2, 2, vec![Rgb::new(0, 0, 0); 3]);
    }
}

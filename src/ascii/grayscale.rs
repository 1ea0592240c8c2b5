//! Pixel brightness sampling using the ITU-R BT.601 luminance formula.

use image::{Luma, LumaA, Rgb, Rgba, RgbaImage};

/// Grayscale view of a pixel.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B, computed with
/// integer coefficients scaled by 1000 (299 + 587 + 114 = 1000).
pub trait Luminance {
    /// Perceptual brightness in `0..=255`.
    fn luminance(&self) -> u8;
}

#[inline]
fn bt601(r: u8, g: u8, b: u8) -> u8 {
    let r = r as u32;
    let g = g as u32;
    let b = b as u32;
    ((299 * r + 587 * g + 114 * b) / 1000) as u8
}

impl Luminance for Rgb<u8> {
    fn luminance(&self) -> u8 {
        let [r, g, b] = self.0;
        bt601(r, g, b)
    }
}

/// Transparent pixels are composited over black.
impl Luminance for Rgba<u8> {
    fn luminance(&self) -> u8 {
        let [r, g, b, a] = self.0;
        let y = bt601(r, g, b) as u32;
        (y * a as u32 / 255) as u8
    }
}

impl Luminance for Luma<u8> {
    fn luminance(&self) -> u8 {
        self.0[0]
    }
}

impl Luminance for LumaA<u8> {
    fn luminance(&self) -> u8 {
        let [y, a] = self.0;
        (y as u32 * a as u32 / 255) as u8
    }
}

/// Brightness of the pixel at `(x, y)`.
///
/// Callers stay within the bitmap bounds; the renderer only iterates over
/// the image's own dimensions.
#[inline]
pub fn brightness_of(bitmap: &RgbaImage, x: u32, y: u32) -> u8 {
    bitmap.get_pixel(x, y).luminance()
}

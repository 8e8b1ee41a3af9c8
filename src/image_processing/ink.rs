use image::{GrayImage, Luma, Rgba, RgbaImage};

use super::ALPHA_CUTOFF;

/// Mask value for ink pixels
pub const INK: u8 = 255;

/// Mask value for background pixels
pub const BACKGROUND: u8 = 0;

/// Compute ITU-R 601 luma of an RGB triple, truncated to 8 bits
///
/// `0.299 * R + 0.587 * G + 0.114 * B`, rounded toward zero.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    y as u8
}

/// A pixel is ink when it is visible and darker than the threshold
#[inline]
pub fn is_ink(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, a] = pixel.0;
    a > ALPHA_CUTOFF && luma(r, g, b) < threshold
}

/// Build the ink mask of an image: 255 where the pixel is ink, 0 elsewhere
pub fn ink_mask(img: &RgbaImage, threshold: u8) -> GrayImage {
    let (width, height) = img.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        if is_ink(img.get_pixel(x, y), threshold) {
            Luma([INK])
        } else {
            Luma([BACKGROUND])
        }
    })
}

/// Number of set pixels in a mask
pub fn count_ink(mask: &GrayImage) -> u64 {
    mask.pixels().filter(|p| p[0] != BACKGROUND).count() as u64
}

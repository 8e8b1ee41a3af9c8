use anyhow::{Context, Result};
use image::{ImageFormat, ImageReader, Rgba, RgbaImage};
use std::path::Path;

use super::dilate::dilate_mask;
use super::ink::{count_ink, ink_mask, BACKGROUND};
use super::{ThickenConfig, ThickenStats};

const SOLID_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Turn every ink pixel into solid black, grown by `config.radius`
///
/// The output has the same dimensions as the input. Dilated ink becomes
/// `(0, 0, 0, 255)`, everything else `(0, 0, 0, 0)`.
pub fn thicken(img: &RgbaImage, config: &ThickenConfig) -> RgbaImage {
    thicken_with_stats(img, config).0
}

/// Same as [`thicken`], also returning pixel counts for reporting
pub fn thicken_with_stats(img: &RgbaImage, config: &ThickenConfig) -> (RgbaImage, ThickenStats) {
    let (width, height) = img.dimensions();

    let mask = ink_mask(img, config.threshold);
    let ink_pixels = count_ink(&mask);
    let grown = dilate_mask(&mask, config.radius);

    let mut output_pixels = 0u64;
    let output = RgbaImage::from_fn(width, height, |x, y| {
        if grown.get_pixel(x, y)[0] != BACKGROUND {
            output_pixels += 1;
            SOLID_BLACK
        } else {
            TRANSPARENT
        }
    });

    let stats = ThickenStats {
        width,
        height,
        ink_pixels,
        output_pixels,
    };

    (output, stats)
}

/// Decode an image file into RGBA, returning the detected encoding format
///
/// The format is guessed from the file contents, falling back to the extension.
pub fn load_image(src: &Path) -> Result<(RgbaImage, ImageFormat)> {
    let reader = ImageReader::open(src)
        .with_context(|| format!("Failed to open image: {}", src.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image header: {}", src.display()))?;

    let format = reader
        .format()
        .ok_or_else(|| anyhow::anyhow!("Unrecognized image format: {}", src.display()))?;

    let img = reader
        .decode()
        .with_context(|| format!("Failed to decode image: {}", src.display()))?
        .to_rgba8();

    Ok((img, format))
}

/// Decode `src`, thicken it and write the result to `dst`
///
/// The output is encoded in the format of the source, so `dst` may be a
/// temporary name like `icons_l.png.tmp`. The source file is never modified.
pub fn thicken_file(src: &Path, dst: &Path, config: &ThickenConfig) -> Result<ThickenStats> {
    let (img, format) = load_image(src)?;
    let (output, stats) = thicken_with_stats(&img, config);

    output
        .save_with_format(dst, format)
        .with_context(|| format!("Failed to write {:?} image: {}", format, dst.display()))?;

    Ok(stats)
}

use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology;

/// Largest radius a single imageproc dilation handles exactly
const MAX_SINGLE_PASS: u8 = 254;

/// Side length of the square structuring element for a radius
pub fn kernel_size(radius: u8) -> u32 {
    2 * radius as u32 + 1
}

/// Grow a binary mask by `radius` pixels using a square kernel
///
/// This is a max filter of size `2 * radius + 1`: a pixel is set when any pixel
/// within Chebyshev distance `radius` is set. Pixels beyond the image border
/// never contribute.
pub fn dilate_mask(mask: &GrayImage, radius: u8) -> GrayImage {
    if radius == 0 || mask.width() == 0 || mask.height() == 0 {
        return mask.clone();
    }
    if radius <= MAX_SINGLE_PASS {
        return morphology::dilate(mask, Norm::LInf, radius);
    }
    // The distance map saturates at 255, so a single pass at 255 marks every pixel.
    // Square dilations add up: r = MAX_SINGLE_PASS followed by the remainder.
    let first = morphology::dilate(mask, Norm::LInf, MAX_SINGLE_PASS);
    morphology::dilate(&first, Norm::LInf, radius - MAX_SINGLE_PASS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_processing::ink::{count_ink, BACKGROUND, INK};
    use image::Luma;

    fn single_dot(width: u32, height: u32, x: u32, y: u32) -> GrayImage {
        let mut mask = GrayImage::new(width, height);
        mask.put_pixel(x, y, Luma([INK]));
        mask
    }

    #[test]
    fn test_kernel_size() {
        assert_eq!(kernel_size(0), 1);
        assert_eq!(kernel_size(1), 3);
        assert_eq!(kernel_size(2), 5);
        assert_eq!(kernel_size(255), 511);
    }

    #[test]
    fn test_radius_one_makes_square() {
        let dilated = dilate_mask(&single_dot(5, 5, 2, 2), 1);
        for y in 0..5 {
            for x in 0..5 {
                let expected = if (1..=3).contains(&x) && (1..=3).contains(&y) {
                    INK
                } else {
                    BACKGROUND
                };
                assert_eq!(dilated.get_pixel(x, y)[0], expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_radius_two() {
        let dilated = dilate_mask(&single_dot(9, 9, 4, 4), 2);
        assert_eq!(count_ink(&dilated), 25);
        assert_eq!(dilated.get_pixel(2, 2)[0], INK);
        assert_eq!(dilated.get_pixel(6, 6)[0], INK);
        assert_eq!(dilated.get_pixel(1, 4)[0], BACKGROUND);
    }

    #[test]
    fn test_clipped_at_border() {
        let dilated = dilate_mask(&single_dot(4, 4, 0, 0), 1);
        assert_eq!(count_ink(&dilated), 4);
        assert_eq!(dilated.get_pixel(1, 1)[0], INK);
    }

    #[test]
    fn test_radius_zero_is_identity() {
        let mask = single_dot(3, 3, 1, 0);
        assert_eq!(dilate_mask(&mask, 0), mask);
    }

    #[test]
    fn test_max_radius_on_empty_mask() {
        let mask = GrayImage::new(6, 4);
        assert_eq!(count_ink(&dilate_mask(&mask, 255)), 0);
    }

    #[test]
    fn test_max_radius_reach() {
        let mask = single_dot(600, 1, 0, 0);

        let grown = dilate_mask(&mask, 255);
        assert_eq!(count_ink(&grown), 256);
        assert_eq!(grown.get_pixel(255, 0)[0], INK);
        assert_eq!(grown.get_pixel(256, 0)[0], BACKGROUND);
        assert_eq!(grown.get_pixel(400, 0)[0], BACKGROUND);

        let grown = dilate_mask(&mask, 254);
        assert_eq!(count_ink(&grown), 255);
    }

    #[test]
    fn test_empty_mask_stays_empty() {
        let mask = GrayImage::new(6, 4);
        assert_eq!(count_ink(&dilate_mask(&mask, 3)), 0);
    }
}

pub mod batch;
pub mod dilate;
pub mod ink;
pub mod thicken;

/// Default dilation radius in pixels (3x3 square kernel)
pub const DEFAULT_RADIUS: u8 = 1;

/// Default luma threshold: anything at or above this is treated as background
pub const DEFAULT_THRESHOLD: u8 = 245;

/// Pixels with alpha at or below this value are never ink
pub const ALPHA_CUTOFF: u8 = 10;

/// Parameters for the thickening transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThickenConfig {
    /// Dilation radius; the square kernel has side `2 * radius + 1`
    pub radius: u8,
    /// Luma values strictly below this count as ink
    pub threshold: u8,
}

impl Default for ThickenConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Pixel counts gathered while thickening a single image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThickenStats {
    pub width: u32,
    pub height: u32,
    /// Ink pixels detected in the source, before dilation
    pub ink_pixels: u64,
    /// Opaque pixels in the output, after dilation
    pub output_pixels: u64,
}

impl ThickenStats {
    pub fn total_pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Pixels added by the dilation pass
    pub fn grown_pixels(&self) -> u64 {
        self.output_pixels.saturating_sub(self.ink_pixels)
    }
}

pub use batch::{BatchOptions, FileOutcome, IconBatch, DEFAULT_ICONS_DIR, DEFAULT_ICON_FILES};
pub use thicken::{thicken, thicken_file, thicken_with_stats};

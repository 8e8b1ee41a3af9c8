use clap::Parser;
use std::path::PathBuf;

use crate::image_processing::{
    BatchOptions, IconBatch, ThickenConfig, DEFAULT_ICONS_DIR, DEFAULT_ICON_FILES,
    DEFAULT_RADIUS, DEFAULT_THRESHOLD,
};

#[derive(Parser, Debug, Default)]
#[command(
    name = "icon-thickener",
    about = "Thicken icon sprite sheets into solid black ink on a transparent background",
    long_about = "
Icon Thickener

Rewrites the icon sprite sheets in place. Every visible pixel that is darker
than the luma threshold is treated as ink; the ink is grown by the dilation
radius and written back as pure black on a fully transparent background.

Files are written to '<name>.tmp' first and then renamed over the original.
If any expected sheet is missing, nothing is processed.

Example Usage:
  # Default run: assets/icons/icons_{l,t,r}.png, radius 1, threshold 245
  icon-thickener

  # Preview pixel counts without touching any file
  icon-thickener --dry-run --verbose

  # Thicker strokes on a single sheet elsewhere
  icon-thickener -d ./build/icons -f toolbar.png --radius 2

  # Load settings from a JSON file (command-line flags still win)
  icon-thickener --config thicken.json"
)]
pub struct Args {
    /// Directory containing the icon sheets, relative to the current working directory
    /// [default: assets/icons]
    #[arg(short = 'd', long = "icons-dir", value_name = "DIR")]
    pub icons_dir: Option<PathBuf>,

    /// Icon sheet file name inside the icons directory (can be specified multiple times)
    /// [default: icons_l.png, icons_t.png, icons_r.png]
    #[arg(short = 'f', long = "file", value_name = "NAME")]
    pub files: Vec<String>,

    /// Dilation radius in pixels; the square kernel is 2*radius+1 wide [default: 1]
    #[arg(short = 'r', long = "radius", value_name = "PIXELS")]
    pub radius: Option<u8>,

    /// Luma threshold (0-255); pixels at or above it are background [default: 245]
    #[arg(short = 't', long = "threshold", value_name = "LUMA")]
    pub threshold: Option<u8>,

    /// JSON configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Transform in memory and report, without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit progress as JSON lines instead of console output
    #[arg(long)]
    pub json_progress: bool,
}

impl Args {
    pub fn icons_dir(&self) -> PathBuf {
        self.icons_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ICONS_DIR))
    }

    pub fn icon_files(&self) -> Vec<String> {
        if self.files.is_empty() {
            DEFAULT_ICON_FILES.iter().map(|s| s.to_string()).collect()
        } else {
            self.files.clone()
        }
    }

    pub fn thicken_config(&self) -> ThickenConfig {
        ThickenConfig {
            radius: self.radius.unwrap_or(DEFAULT_RADIUS),
            threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
        }
    }

    pub fn icon_batch(&self) -> IconBatch {
        IconBatch::with_files(self.icons_dir(), self.icon_files())
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            dry_run: self.dry_run,
        }
    }
}

//! JSON output for tooling integration
//!
//! When --json-progress flag is enabled, all progress and status information
//! is emitted as JSON lines to stdout, suppressing all other output.

use serde::{Deserialize, Serialize};

use crate::image_processing::FileOutcome;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonMessage {
    /// Progress update
    Progress {
        current: usize,
        total: usize,
        message: String,
    },
    /// Icon sheet processed
    FileCompleted {
        path: String,
        width: u32,
        height: u32,
        ink_pixels: u64,
        output_pixels: u64,
        grown_pixels: u64,
        processing_time_ms: u128,
        written: bool,
    },
    /// Run aborted
    Error { message: String },
    /// Processing summary
    Summary {
        total_files: usize,
        processed: usize,
        dry_run: bool,
        duration_secs: f64,
    },
}

impl JsonMessage {
    /// Emit JSON message to stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    pub fn progress(current: usize, total: usize, message: impl Into<String>) {
        Self::Progress {
            current,
            total,
            message: message.into(),
        }
        .emit();
    }

    pub fn file_completed(outcome: &FileOutcome) {
        Self::from(outcome).emit();
    }

    pub fn error(error: &anyhow::Error) {
        Self::Error {
            message: format!("{:#}", error),
        }
        .emit();
    }

    pub fn summary(total_files: usize, processed: usize, dry_run: bool, duration_secs: f64) {
        Self::Summary {
            total_files,
            processed,
            dry_run,
            duration_secs,
        }
        .emit();
    }
}

impl From<&FileOutcome> for JsonMessage {
    fn from(outcome: &FileOutcome) -> Self {
        Self::FileCompleted {
            path: outcome.path.display().to_string(),
            width: outcome.stats.width,
            height: outcome.stats.height,
            ink_pixels: outcome.stats.ink_pixels,
            output_pixels: outcome.stats.output_pixels,
            grown_pixels: outcome.stats.grown_pixels(),
            processing_time_ms: outcome.elapsed.as_millis(),
            written: outcome.written,
        }
    }
}

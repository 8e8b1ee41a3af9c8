// Library exports for the binary and for tests
pub mod cli;
pub mod config_file;
pub mod image_processing;
pub mod json_output;
pub mod utils;

// Re-export commonly used types
pub use cli::Args;
pub use image_processing::{
    thicken, thicken_file, BatchOptions, FileOutcome, IconBatch, ThickenConfig, ThickenStats,
};
pub use json_output::JsonMessage;

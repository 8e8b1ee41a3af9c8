use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::cli::Args;
use crate::image_processing::FileOutcome;

/// Create a styled progress bar
pub fn create_progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Format duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 60 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        format!("{}m {}s", mins, secs)
    } else if total_secs > 0 {
        format!("{}.{:03}s", total_secs, millis)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Validate command line arguments after the config file has been merged
pub fn validate_inputs(args: &Args) -> Result<()> {
    args.icon_batch().validate()?;

    let icons_dir = args.icons_dir();
    if icons_dir.exists() && !icons_dir.is_dir() {
        return Err(anyhow::anyhow!(
            "Icons path is not a directory: {}",
            icons_dir.display()
        ));
    }

    if args.thicken_config().threshold == 0 && !args.json_progress {
        warn_println("Threshold 0 matches no pixels; every sheet will become fully transparent");
    }

    Ok(())
}

/// Print verbose information if verbose mode is enabled
pub fn verbose_println(verbose: bool, message: &str) {
    if verbose {
        println!("{} {}", style("[VERBOSE]").dim(), message);
    }
}

/// Print warning message
pub fn warn_println(message: &str) {
    println!("{} {}", style("[WARNING]").yellow().bold(), message);
}

/// Print error message
pub fn error_println(message: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), message);
}

/// Share of the image covered by ink, in percent
pub fn coverage_percent(pixels: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (pixels as f64 / total as f64) * 100.0
    }
}

/// Per-sheet report line: `Updated <path>`, or `Would update <path>` in dry-run mode
pub fn format_outcome_line(outcome: &FileOutcome) -> String {
    let label = if outcome.written {
        style("Updated").green().bold()
    } else {
        style("Would update").yellow().bold()
    };
    format!("{} {}", label, outcome.path.display())
}

/// Pixel counts for a processed sheet, shown with --verbose
pub fn format_stats_line(outcome: &FileOutcome) -> String {
    let stats = &outcome.stats;
    format!(
        "{}x{}: {} ink pixels -> {} opaque (+{} grown, {:.1}% coverage) in {}",
        stats.width,
        stats.height,
        stats.ink_pixels,
        stats.output_pixels,
        stats.grown_pixels(),
        coverage_percent(stats.output_pixels, stats.total_pixels()),
        format_duration(outcome.elapsed)
    )
}

/// Final summary line
pub fn format_summary(processed: usize, total: usize, dry_run: bool, elapsed: Duration) -> String {
    let verb = if dry_run { "Checked" } else { "Thickened" };
    format!(
        "{} {} {} of {} icon sheets in {}",
        style("✓").green().bold(),
        verb,
        processed,
        total,
        format_duration(elapsed)
    )
}

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::ProgressBar;
use std::time::Instant;

use icon_thickener::cli::Args;
use icon_thickener::image_processing::dilate::kernel_size;
use icon_thickener::image_processing::{BatchOptions, FileOutcome, IconBatch, ThickenConfig};
use icon_thickener::json_output::JsonMessage;
use icon_thickener::utils::{
    create_progress_bar, error_println, format_outcome_line, format_stats_line, format_summary,
    validate_inputs, verbose_println,
};

fn print_configuration(batch: &IconBatch, config: &ThickenConfig, options: &BatchOptions) {
    println!("{}", style("Configuration:").bold());
    println!("  Icons directory: {}", batch.icons_dir().display());
    println!("  Files: {:?}", batch.files());
    println!(
        "  Dilation radius: {} ({}x{} kernel)",
        config.radius,
        kernel_size(config.radius),
        kernel_size(config.radius)
    );
    println!("  Luma threshold: {}", config.threshold);
    if options.dry_run {
        println!("  Dry run mode: enabled (simulation only - no files will be written)");
    }
    println!();
}

fn report_outcome(pb: &ProgressBar, outcome: &FileOutcome, verbose: bool) {
    pb.suspend(|| {
        println!("{}", format_outcome_line(outcome));
        verbose_println(verbose, &format_stats_line(outcome));
    });
}

fn main() -> Result<()> {
    let start_time = Instant::now();
    let mut args = Args::parse();
    args.load_and_merge_config()?;
    validate_inputs(&args)?;

    let json = args.json_progress;
    let verbose = args.verbose && !json;
    let config = args.thicken_config();
    let options = args.batch_options();
    let batch = args.icon_batch();
    let total = batch.files().len();

    if !json {
        println!("{}", style("Icon Thickener").bold().blue());
        println!();
        if verbose {
            print_configuration(&batch, &config, &options);
        }
    }

    let pb = if json {
        ProgressBar::hidden()
    } else {
        create_progress_bar(total as u64)?
    };

    let result = batch.run(&config, &options, |current, total, outcome| {
        if json {
            JsonMessage::file_completed(outcome);
            JsonMessage::progress(current, total, outcome.path.display().to_string());
        } else {
            report_outcome(&pb, outcome, verbose);
            pb.inc(1);
        }
    });

    let outcomes = match result {
        Ok(outcomes) => outcomes,
        Err(err) => {
            pb.abandon();
            if json {
                JsonMessage::error(&err);
            } else {
                error_println(&format!("{:#}", err));
            }
            std::process::exit(1);
        }
    };

    let elapsed = start_time.elapsed();
    if json {
        JsonMessage::summary(total, outcomes.len(), options.dry_run, elapsed.as_secs_f64());
    } else {
        pb.finish_and_clear();
        println!(
            "{}",
            format_summary(outcomes.len(), total, options.dry_run, elapsed)
        );
    }

    Ok(())
}

//! imgdiff CLI - compare two images pixel-by-pixel.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgdiff::{Config, Differ};

/// Compare two images pixel-by-pixel and write a diff image.
#[derive(Parser, Debug)]
#[command(name = "imgdiff")]
#[command(version, about, long_about = None)]
struct Args {
    /// First input image.
    #[arg(value_name = "FIRST")]
    first: PathBuf,

    /// Second input image.
    #[arg(value_name = "SECOND")]
    second: PathBuf,

    /// Minimum per-channel difference (0-255) for a pixel to count as differing.
    #[arg(long, default_value = "1", value_name = "UINT")]
    min: u32,

    /// Mask differences with magenta on black; pass false to keep the second
    /// image's pixel values where they differ.
    #[arg(long, default_value = "true", value_name = "BOOL", action = clap::ArgAction::Set)]
    mask: bool,

    /// Output filename (always PNG-encoded).
    #[arg(short, long, default_value = "diff.png", value_name = "PATH")]
    output: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return handle_parse_error(&err),
    };

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("imgdiff={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Usage errors (wrong argument count, malformed flags) go to stdout with
/// exit code 1; `--help` and `--version` keep their normal behavior.
fn handle_parse_error(err: &clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        let _ = err.print();
        return ExitCode::SUCCESS;
    }

    print!("{err}");
    ExitCode::from(1)
}

fn run(args: &Args) -> Result<()> {
    let config = Config {
        threshold: args.min,
        mask: args.mask,
    };

    // Threshold validation happens here, before any file is opened.
    let differ = Differ::new(config).context("Invalid configuration")?;

    let stats = differ
        .process(&args.first, &args.second, &args.output)
        .context("Failed to compare images")?;

    println!(
        "{} vs {} -> {}: {} of {} pixels differ ({:.2}%)",
        args.first.display(),
        args.second.display(),
        args.output.display(),
        stats.differing,
        stats.total,
        stats.percent()
    );

    Ok(())
}

//! rgbtone - per-channel RGB scaling with histogram output
//!
//! Scales the red, green and blue channels of an image by independent
//! factors and charts the resulting intensity distributions.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::histogram::HistogramArgs;
use commands::process::ProcessArgs;

#[derive(Parser)]
#[command(name = "rgbtone")]
#[command(author, version, about = "Per-channel RGB scaling with histograms")]
#[command(long_about = "
Scales each RGB channel of an image by its own coefficient, clamps the
result to 0..=255 and writes 256-bin histograms of the output channels.

Examples:
  rgbtone process photo.jpg --r-coef 1.2 --b-coef 0.8
  rgbtone process photo.png -o out --json
  rgbtone histogram photo.jpg --json
  RUST_LOG=rgbtone=debug rgbtone process photo.jpg
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale channels, save the result and its histogram charts
    #[command(visible_alias = "p")]
    Process(ProcessArgs),

    /// Print channel histograms of an image as-is
    #[command(visible_alias = "h")]
    Histogram(HistogramArgs),
}

/// Default log directive for a `-v` count when `RUST_LOG` is unset.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "rgbtone=warn",
        1 => "rgbtone=info",
        2 => "rgbtone=debug",
        _ => "rgbtone=trace",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(cli.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Histogram(args) => commands::histogram::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_filter(0), "rgbtone=warn");
        assert_eq!(default_filter(2), "rgbtone=debug");
        assert_eq!(default_filter(9), "rgbtone=trace");
    }

    #[test]
    fn test_parse_process() {
        let cli = Cli::try_parse_from([
            "rgbtone", "-vv", "process", "in.png", "--r-coef", "0.5", "-o", "out", "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.r_coef.as_deref(), Some("0.5"));
                assert_eq!(args.g_coef, None);
                assert_eq!(args.output.to_str(), Some("out"));
                assert!(args.json);
            }
            Commands::Histogram(_) => panic!("expected process"),
        }
    }
}

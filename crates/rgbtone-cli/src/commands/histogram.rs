//! Histogram summary command.

use anyhow::{Context, Result};
use clap::Args;
use rgbtone_core::{ChannelHistograms, Coefficients};
use rgbtone_ops::PixelPipeline;
use std::path::PathBuf;

use super::{DEFAULT_MAX_PIXELS, load_image};

/// Arguments for the `histogram` command.
#[derive(Args)]
pub struct HistogramArgs {
    /// Input image (PNG or JPEG)
    pub input: PathBuf,

    /// Print raw counts as JSON
    #[arg(long)]
    pub json: bool,

    /// Refuse images with more pixels than this (0 = no limit)
    #[arg(long, default_value_t = DEFAULT_MAX_PIXELS)]
    pub max_pixels: usize,
}

/// Run the histogram command.
pub fn run(args: HistogramArgs) -> Result<()> {
    let image = load_image(&args.input, args.max_pixels)?;
    let result = PixelPipeline::new()
        .run_with(&image, &Coefficients::default())
        .context("Histogram computation failed")?;

    if args.json {
        println!("{}", rgbtone_io::histograms_to_json(&result.histograms)?);
    } else {
        let (height, width, _) = image.shape();
        println!("{}: {}x{}", args.input.display(), width, height);
        print!("{}", summary(&result.histograms));
    }
    Ok(())
}

/// One line per channel: sample count, mean level and most common level.
fn summary(histograms: &ChannelHistograms) -> String {
    let mut out = String::new();
    for (channel, hist) in histograms.iter() {
        let mean = hist
            .mean()
            .map(|m| format!("{m:.2}"))
            .unwrap_or_else(|| "-".into());
        let peak = hist
            .mode()
            .map(|level| format!("{level} ({})", hist.count(level)))
            .unwrap_or_else(|| "-".into());
        out.push_str(&format!(
            "  {:<5}  samples {:>10}  mean {:>6}  peak {}\n",
            channel.name(),
            hist.total(),
            mean,
            peak
        ));
    }
    out
}

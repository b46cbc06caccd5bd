//! Channel scaling command.
//!
//! Writes the fixed set of output files: `original.jpg`, `processed.jpg`,
//! one histogram chart per channel and, on request, `histograms.json`.

use anyhow::{Context, Result};
use clap::Args;
use rgbtone_core::{Channel, Coefficients};
use rgbtone_io::{OutputLayout, PlotOptions, layout::DEFAULT_OUTPUT_DIR};
use rgbtone_ops::PixelPipeline;
use std::path::PathBuf;
use tracing::info;

use super::{DEFAULT_MAX_PIXELS, load_image, parse_coefficient, save_image};

/// Arguments for the `process` command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input image (PNG or JPEG)
    pub input: PathBuf,

    /// Red multiplier. Default: 1.0
    #[arg(long, allow_hyphen_values = true)]
    pub r_coef: Option<String>,

    /// Green multiplier. Default: 1.0
    #[arg(long, allow_hyphen_values = true)]
    pub g_coef: Option<String>,

    /// Blue multiplier. Default: 1.0
    #[arg(long, allow_hyphen_values = true)]
    pub b_coef: Option<String>,

    /// Output directory
    #[arg(short, long, env = "RGBTONE_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Skip histogram charts
    #[arg(long)]
    pub no_plots: bool,

    /// Also write histograms.json
    #[arg(long)]
    pub json: bool,

    /// Process channels on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Refuse images with more pixels than this (0 = no limit)
    #[arg(long, default_value_t = DEFAULT_MAX_PIXELS)]
    pub max_pixels: usize,
}

/// Run the process command.
pub fn run(args: ProcessArgs) -> Result<()> {
    let coefficients = Coefficients::new(
        parse_coefficient(Channel::Red, args.r_coef.as_deref()),
        parse_coefficient(Channel::Green, args.g_coef.as_deref()),
        parse_coefficient(Channel::Blue, args.b_coef.as_deref()),
    )
    .context("Invalid coefficients")?;

    let image = load_image(&args.input, args.max_pixels)?;
    let (height, width, _) = image.shape();
    info!(
        input = %args.input.display(),
        height,
        width,
        red = %coefficients.red,
        green = %coefficients.green,
        blue = %coefficients.blue,
        "processing"
    );

    let layout = OutputLayout::new(&args.output);
    layout
        .ensure()
        .with_context(|| format!("Failed to create: {}", layout.root().display()))?;
    save_image(&layout.original(), &image)?;

    let pipeline = if args.sequential {
        PixelPipeline::sequential()
    } else {
        PixelPipeline::new()
    };
    let (processed, histograms) = pipeline
        .run_with(&image, &coefficients)
        .context("Channel scaling failed")?
        .into_parts();

    save_image(&layout.processed(), &processed)?;
    println!("{}", layout.processed().display());

    if !args.no_plots {
        let options = PlotOptions::default();
        for (channel, hist) in histograms.iter() {
            let chart = rgbtone_io::render_histogram(hist, channel, &options)
                .with_context(|| format!("Failed to plot {channel} histogram"))?;
            let path = layout.histogram_plot(channel);
            save_image(&path, &chart)?;
            println!("{}", path.display());
        }
    }

    if args.json {
        let path = layout.histograms_json();
        rgbtone_io::write_histograms_json(&path, &histograms)
            .with_context(|| format!("Failed to save: {}", path.display()))?;
        println!("{}", path.display());
    }

    Ok(())
}

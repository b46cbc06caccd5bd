//! Histogram bar charts.
//!
//! Renders one [`Histogram`] as a raster chart: 256 bars drawn in the
//! channel's color, blended over the background at a fixed opacity, with a
//! left axis, a baseline and tick marks every 50 levels. Bar heights are
//! scaled so the tallest bucket fills the plot area.
//!
//! ```rust
//! use rgbtone_core::{Channel, Histogram};
//! use rgbtone_io::plot::{PlotOptions, render_histogram};
//!
//! let mut hist = Histogram::new();
//! hist.add_all(&[0, 128, 128, 255]);
//! let chart = render_histogram(&hist, Channel::Green, &PlotOptions::default()).unwrap();
//! assert_eq!(chart.shape(), (480, 640, 3));
//! ```

use crate::{IoError, IoResult};
use rgbtone_core::{BINS, Channel, Histogram, PixelBuffer, RGB_CHANNELS};

/// Distance in levels between axis ticks.
const TICK_STEP: usize = 50;
/// Tick length in pixels.
const TICK_LEN: usize = 4;

/// Chart geometry and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Empty border around the plot area, in pixels.
    pub margin: usize,
    /// Bar opacity over the background, `0.0..=1.0`.
    pub opacity: f64,
    /// Canvas color.
    pub background: [u8; 3],
    /// Axis and tick color.
    pub axis: [u8; 3],
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 40,
            opacity: 0.7,
            background: [255, 255, 255],
            axis: [0, 0, 0],
        }
    }
}

impl PlotOptions {
    fn validate(&self) -> IoResult<()> {
        if self.margin == 0 {
            return Err(IoError::InvalidPlot("margin must be at least 1 pixel".into()));
        }
        if self.width < 2 * self.margin + BINS {
            return Err(IoError::InvalidPlot(format!(
                "width {} leaves fewer than {} columns for bars",
                self.width, BINS
            )));
        }
        if self.height <= 2 * self.margin {
            return Err(IoError::InvalidPlot(format!(
                "height {} leaves no room inside a {} pixel margin",
                self.height, self.margin
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(IoError::InvalidPlot(format!(
                "opacity {} outside 0..=1",
                self.opacity
            )));
        }
        Ok(())
    }
}

/// Mixes `fg` over `bg` at `alpha`.
fn blend(fg: [u8; 3], bg: [u8; 3], alpha: f64) -> [u8; 3] {
    let mix = |f: u8, b: u8| (alpha * f as f64 + (1.0 - alpha) * b as f64).round() as u8;
    [mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2])]
}

struct Canvas {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Canvas {
    fn new(width: usize, height: usize, color: [u8; 3]) -> Self {
        Self {
            data: color.repeat(width * height),
            width,
            height,
        }
    }

    fn put(&mut self, x: usize, y: usize, color: [u8; 3]) {
        if x < self.width && y < self.height {
            let i = (y * self.width + x) * RGB_CHANNELS;
            self.data[i..i + RGB_CHANNELS].copy_from_slice(&color);
        }
    }

    fn fill(&mut self, xs: std::ops::Range<usize>, ys: std::ops::Range<usize>, color: [u8; 3]) {
        for y in ys {
            for x in xs.clone() {
                self.put(x, y, color);
            }
        }
    }
}

/// Renders `hist` as a bar chart colored for `channel`.
///
/// An all-zero histogram renders the axes only.
///
/// # Errors
///
/// [`IoError::InvalidPlot`] if the options leave no room for 256 bars.
pub fn render_histogram(
    hist: &Histogram,
    channel: Channel,
    options: &PlotOptions,
) -> IoResult<PixelBuffer> {
    options.validate()?;

    let mut canvas = Canvas::new(options.width, options.height, options.background);
    let left = options.margin;
    let right = options.width - options.margin;
    let top = options.margin;
    let baseline = options.height - options.margin;
    let plot_width = right - left;
    let plot_height = baseline - top;
    let column = |level: usize| left + level * plot_width / BINS;

    let bar_color = blend(channel.display_color(), options.background, options.opacity);
    let peak = hist.peak();
    if peak > 0 {
        for (level, &count) in hist.counts().iter().enumerate() {
            if count == 0 {
                continue;
            }
            let scaled = (count as u128 * plot_height as u128 / peak as u128) as usize;
            let bar = scaled.max(1);
            canvas.fill(column(level)..column(level + 1), baseline - bar..baseline, bar_color);
        }
    }

    canvas.fill(left - 1..right, baseline..baseline + 1, options.axis);
    canvas.fill(left - 1..left, top..baseline + 1, options.axis);
    for level in (0..BINS).step_by(TICK_STEP) {
        let x = (column(level) + column(level + 1)) / 2;
        canvas.fill(x..x + 1, baseline + 1..baseline + 1 + TICK_LEN, options.axis);
    }

    Ok(PixelBuffer::from_raw(
        canvas.height,
        canvas.width,
        RGB_CHANNELS,
        canvas.data,
    )?)
}

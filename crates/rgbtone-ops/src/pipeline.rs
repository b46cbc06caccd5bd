//! The RGB tone pipeline.
//!
//! Splits an image into red, green and blue [`ChannelMatrix`] instances,
//! scales each with its own coefficient, interleaves the results into a new
//! [`PixelBuffer`] and builds a histogram for every *scaled* channel.
//!
//! # Example
//!
//! ```rust
//! use rgbtone_core::PixelBuffer;
//! use rgbtone_ops::PixelPipeline;
//!
//! let img = PixelBuffer::filled(2, 2, [200, 100, 50]).unwrap();
//! let out = PixelPipeline::new().run(&img, 2.0, 1.0, 0.0).unwrap();
//! assert_eq!(out.image.pixel(0, 0), [255, 100, 0]);
//! assert_eq!(out.histograms.red.count(255), 4);
//! ```

use rgbtone_core::{
    Channel, ChannelHistograms, ChannelMatrix, Coefficients, PixelBuffer, Result, TransformResult,
};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::histogram::HistogramBuilder;
use crate::transform::ChannelTransformer;

/// Orchestrates channel scaling and histogram construction.
///
/// Holds no state between runs. The `parallel` flag only selects how the
/// work is scheduled; both modes produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPipeline {
    parallel: bool,
}

impl Default for PixelPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelPipeline {
    /// Pipeline using rayon when the `parallel` feature is enabled.
    pub fn new() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Pipeline that runs everything on the calling thread.
    pub fn sequential() -> Self {
        Self { parallel: false }
    }

    /// Enables or disables parallel execution.
    ///
    /// Without the `parallel` feature this is always sequential.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel && cfg!(feature = "parallel");
        self
    }

    /// Scales `buffer` by the given red, green and blue coefficients.
    ///
    /// # Errors
    ///
    /// [`rgbtone_core::Error::InvalidCoefficient`] if any coefficient is
    /// NaN or infinite. Validation happens before any pixel is touched.
    pub fn run(
        &self,
        buffer: &PixelBuffer,
        red: f64,
        green: f64,
        blue: f64,
    ) -> Result<TransformResult> {
        let coefficients = Coefficients::new(red, green, blue)?;
        self.run_with(buffer, &coefficients)
    }

    /// Like [`run`](Self::run) for raw interleaved samples.
    ///
    /// The shape is validated first, then the coefficients.
    ///
    /// # Errors
    ///
    /// [`rgbtone_core::Error::InvalidDimensions`] if `height` or `width` is
    /// zero, `channels != 3`, or `data` has the wrong length;
    /// [`rgbtone_core::Error::InvalidCoefficient`] as for [`run`](Self::run).
    #[allow(clippy::too_many_arguments)]
    pub fn run_raw(
        &self,
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<u8>,
        red: f64,
        green: f64,
        blue: f64,
    ) -> Result<TransformResult> {
        let buffer = PixelBuffer::from_raw(height, width, channels, data)?;
        self.run(&buffer, red, green, blue)
    }

    /// Scales `buffer` by already-validated coefficients.
    pub fn run_with(
        &self,
        buffer: &PixelBuffer,
        coefficients: &Coefficients,
    ) -> Result<TransformResult> {
        debug!(
            h = buffer.height(),
            w = buffer.width(),
            r = %coefficients.red,
            g = %coefficients.green,
            b = %coefficients.blue,
            parallel = self.parallel,
            "PixelPipeline::run"
        );

        let channels = buffer.split();
        let transformers = Channel::ALL.map(|c| ChannelTransformer::new(coefficients.get(c)));

        let [red, green, blue] = self.transform_channels(channels, &transformers);
        let image = PixelBuffer::from_channels(&red, &green, &blue)?;
        let histograms = self.build_histograms([&red, &green, &blue]);

        trace!(
            red_total = histograms.red.total(),
            green_total = histograms.green.total(),
            blue_total = histograms.blue.total(),
            "histograms built"
        );

        Ok(TransformResult { image, histograms })
    }

    fn transform_channels(
        &self,
        channels: [ChannelMatrix; 3],
        transformers: &[ChannelTransformer; 3],
    ) -> [ChannelMatrix; 3] {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return crate::parallel::transform_channels(channels, transformers);
        }

        let [r, g, b] = channels;
        [
            transformers[0].apply(&r),
            transformers[1].apply(&g),
            transformers[2].apply(&b),
        ]
    }

    fn build_histograms(&self, channels: [&ChannelMatrix; 3]) -> ChannelHistograms {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return crate::parallel::build_histograms(channels).into();
        }

        let builder = HistogramBuilder::new();
        channels.map(|m| builder.build(m)).into()
    }
}

/// Runs the default [`PixelPipeline`].
///
/// # Errors
///
/// See [`PixelPipeline::run`].
pub fn run(buffer: &PixelBuffer, red: f64, green: f64, blue: f64) -> Result<TransformResult> {
    PixelPipeline::new().run(buffer, red, green, blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbtone_core::Error;

    /// 2x2 image with R = [[100,150],[200,250]], G = 255 - R, B = R / 2.
    fn sample() -> PixelBuffer {
        let r = [100u8, 150, 200, 250];
        let data = r.iter().flat_map(|&v| [v, 255 - v, v / 2]).collect();
        PixelBuffer::from_raw(2, 2, 3, data).unwrap()
    }

    fn gradient(h: usize, w: usize) -> PixelBuffer {
        let data = (0..h * w * 3).map(|i| (i * 7 % 256) as u8).collect();
        PixelBuffer::from_raw(h, w, 3, data).unwrap()
    }

    fn modes() -> [PixelPipeline; 2] {
        [PixelPipeline::sequential(), PixelPipeline::new().with_parallel(true)]
    }

    #[test]
    fn test_identity() {
        let img = gradient(9, 11);
        for p in modes() {
            let out = p.run(&img, 1.0, 1.0, 1.0).unwrap();
            assert_eq!(out.image, img);
        }
    }

    #[test]
    fn test_zero_red() {
        let img = gradient(4, 4);
        for p in modes() {
            let out = p.run(&img, 0.0, 1.3, 0.7).unwrap();
            assert!(out.image.channel(Channel::Red).data().iter().all(|&v| v == 0));
            assert_eq!(out.histograms.red.count(0), 16);
        }
    }

    #[test]
    fn test_clamping() {
        let img = PixelBuffer::filled(1, 1, [200, 200, 200]).unwrap();
        let out = run(&img, 2.0, -1.0, 1.0).unwrap();
        assert_eq!(out.image.pixel(0, 0), [255, 0, 200]);
    }

    #[test]
    fn test_end_to_end_example() {
        for p in modes() {
            let out = p.run(&sample(), 0.5, 1.0, 1.0).unwrap();
            let red = out.image.channel(Channel::Red);
            assert_eq!(red.row(0), &[50, 75]);
            assert_eq!(red.row(1), &[100, 125]);
            for level in 0..=255u8 {
                let expected = u64::from(matches!(level, 50 | 75 | 100 | 125));
                assert_eq!(out.histograms.red.count(level), expected);
            }
            // untouched channels pass through
            assert_eq!(out.image.channel(Channel::Green), sample().channel(Channel::Green));
        }
    }

    #[test]
    fn test_histograms_describe_output() {
        let img = sample();
        let out = run(&img, 2.0, 2.0, 2.0).unwrap();
        // 150, 200 and 250 all saturate
        assert_eq!(out.histograms.red.count(255), 3);
        assert_eq!(out.histograms.red.count(200), 1);
        assert_eq!(out.histograms.red.count(250), 0);
    }

    #[test]
    fn test_conservation_and_shape() {
        let img = gradient(13, 7);
        let out = run(&img, 0.3, 1.9, -2.0).unwrap();
        assert_eq!(out.image.shape(), img.shape());
        for (_, h) in out.histograms.iter() {
            assert_eq!(h.total(), 13 * 7);
        }
    }

    #[test]
    fn test_modes_agree() {
        let img = gradient(31, 17);
        let [seq, par] = modes();
        for k in [(0.5, 1.5, 2.5), (1.0, 0.0, -1.0), (0.99, 1.01, 3.0)] {
            let a = seq.run(&img, k.0, k.1, k.2).unwrap();
            let b = par.run(&img, k.0, k.1, k.2).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_nan_rejected() {
        let err = run(&sample(), f64::NAN, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidCoefficient { channel: Channel::Red, .. }));
        let err = run(&sample(), 1.0, 1.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, Error::InvalidCoefficient { channel: Channel::Blue, .. }));
    }

    #[test]
    fn test_raw_zero_height_rejected() {
        let err = PixelPipeline::new()
            .run_raw(0, 2, 3, Vec::new(), 1.0, 1.0, 1.0)
            .unwrap_err();
        assert!(err.is_dimensions_error());
    }

    #[test]
    fn test_raw_bad_channels_rejected() {
        let err = PixelPipeline::new()
            .run_raw(2, 2, 4, vec![0; 16], 1.0, 1.0, 1.0)
            .unwrap_err();
        assert!(err.is_dimensions_error());
    }

    #[test]
    fn test_raw_valid() {
        let out = PixelPipeline::sequential()
            .run_raw(1, 2, 3, vec![10, 20, 30, 40, 50, 60], 2.0, 1.0, 0.5)
            .unwrap();
        assert_eq!(out.image.data(), &[20, 20, 15, 80, 50, 30]);
    }
}

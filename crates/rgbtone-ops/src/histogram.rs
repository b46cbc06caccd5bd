//! Histogram construction over channel matrices.
//!
//! Every sample increments exactly the bucket of its own level, so the
//! total of a histogram equals the element count of the matrix it was
//! built from. Counting is order-independent: histograms of any partition
//! of the samples merge to the same result.

use rgbtone_core::{ChannelMatrix, Histogram};
use tracing::trace;

/// Builds 256-bucket histograms.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistogramBuilder;

impl HistogramBuilder {
    /// Creates a builder.
    pub fn new() -> Self {
        Self
    }

    /// Histogram of every sample in `channel`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rgbtone_core::ChannelMatrix;
    /// use rgbtone_ops::histogram::HistogramBuilder;
    ///
    /// let m = ChannelMatrix::from_rows(&[[100u8, 150], [200, 250]]).unwrap();
    /// let h = HistogramBuilder::new().build(&m);
    /// assert_eq!(h.total(), 4);
    /// assert_eq!(h.count(150), 1);
    /// ```
    pub fn build(&self, channel: &ChannelMatrix) -> Histogram {
        trace!(h = channel.height(), w = channel.width(), "HistogramBuilder::build");
        self.build_slice(channel.data())
    }

    /// Histogram of a planar sample slice.
    pub fn build_slice(&self, samples: &[u8]) -> Histogram {
        let mut hist = Histogram::new();
        hist.add_all(samples);
        hist
    }
}

/// Histogram of `channel`.
///
/// Shorthand for `HistogramBuilder::new().build(channel)`.
pub fn build(channel: &ChannelMatrix) -> Histogram {
    HistogramBuilder::new().build(channel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbtone_core::BINS;

    #[test]
    fn test_known_values() {
        let m = ChannelMatrix::from_rows(&[[100u8, 150], [200, 250]]).unwrap();
        let h = build(&m);
        assert_eq!(h.counts().len(), BINS);
        for level in 0..=255u8 {
            let expected = u64::from(matches!(level, 100 | 150 | 200 | 250));
            assert_eq!(h.count(level), expected, "level {level}");
        }
    }

    #[test]
    fn test_conservation() {
        let data: Vec<u8> = (0..7 * 13).map(|i| (i * 37 % 256) as u8).collect();
        let m = ChannelMatrix::from_vec(7, 13, data).unwrap();
        assert_eq!(build(&m).total(), 7 * 13);
    }

    #[test]
    fn test_order_independent() {
        let data: Vec<u8> = (0..64).map(|i| (i * 5) as u8).collect();
        let mut reversed = data.clone();
        reversed.reverse();
        let a = ChannelMatrix::from_vec(8, 8, data.clone()).unwrap();
        let b = ChannelMatrix::from_vec(8, 8, reversed).unwrap();
        assert_eq!(build(&a), build(&b));

        // partial histograms merge to the whole
        let builder = HistogramBuilder::new();
        let mut merged = builder.build_slice(&data[..20]);
        merged.merge(&builder.build_slice(&data[20..]));
        assert_eq!(merged, build(&a));
    }

    #[test]
    fn test_constant_channel() {
        let m = ChannelMatrix::from_vec(4, 4, vec![7; 16]).unwrap();
        let h = build(&m);
        assert_eq!(h.count(7), 16);
        assert_eq!(h.peak(), 16);
    }
}

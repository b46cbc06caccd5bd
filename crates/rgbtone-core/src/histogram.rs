//! 256-bucket intensity histograms.

use crate::{Channel, Error};
use std::ops::Index;

/// Number of buckets: one per 8-bit intensity level.
pub const BINS: usize = 256;

/// Occupancy counts for intensity levels 0..=255 of one channel.
///
/// Always holds exactly [`BINS`] buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Vec<u64>", try_from = "Vec<u64>"))]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Empty histogram (all zero).
    pub fn new() -> Self {
        Self {
            counts: vec![0; BINS],
        }
    }

    /// Wraps existing counts.
    ///
    /// Returns `None` unless `counts` has exactly [`BINS`] entries.
    pub fn from_counts(counts: Vec<u64>) -> Option<Self> {
        (counts.len() == BINS).then_some(Self { counts })
    }

    /// Counts one occurrence of `level`.
    #[inline]
    pub fn add(&mut self, level: u8) {
        self.counts[level as usize] += 1;
    }

    /// Counts every sample in `samples`.
    pub fn add_all(&mut self, samples: &[u8]) {
        for &v in samples {
            self.counts[v as usize] += 1;
        }
    }

    /// Adds `other`'s counts bucket by bucket.
    pub fn merge(&mut self, other: &Histogram) {
        for (a, b) in self.counts.iter_mut().zip(&other.counts) {
            *a += b;
        }
    }

    /// All 256 counts, indexed by level.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Count at `level`.
    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// Total number of samples counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bucket count.
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Lowest level holding the largest count, or `None` if empty.
    pub fn mode(&self) -> Option<u8> {
        let peak = self.peak();
        if peak == 0 {
            return None;
        }
        self.counts.iter().position(|&c| c == peak).map(|i| i as u8)
    }

    /// Mean intensity, or `None` if empty.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let sum: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(level, &c)| level as f64 * c as f64)
            .sum();
        Some(sum / total as f64)
    }

    /// Probabilities per level; all zero for an empty histogram.
    pub fn normalized(&self) -> Vec<f64> {
        let total = self.total() as f64;
        if total > 0.0 {
            self.counts.iter().map(|&c| c as f64 / total).collect()
        } else {
            vec![0.0; BINS]
        }
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<u64>> for Histogram {
    type Error = Error;

    fn try_from(counts: Vec<u64>) -> Result<Self, Error> {
        let len = counts.len();
        Self::from_counts(counts).ok_or(Error::InvalidHistogram { len })
    }
}

impl From<Histogram> for Vec<u64> {
    fn from(hist: Histogram) -> Self {
        hist.counts
    }
}

impl Index<u8> for Histogram {
    type Output = u64;

    fn index(&self, level: u8) -> &u64 {
        &self.counts[level as usize]
    }
}

/// One histogram per channel, ordered `(red, green, blue)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelHistograms {
    /// Red channel histogram
    pub red: Histogram,
    /// Green channel histogram
    pub green: Histogram,
    /// Blue channel histogram
    pub blue: Histogram,
}

impl ChannelHistograms {
    /// Histogram for `channel`.
    #[inline]
    pub fn get(&self, channel: Channel) -> &Histogram {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    /// `(channel, histogram)` pairs in RGB order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, &Histogram)> {
        Channel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Index<Channel> for ChannelHistograms {
    type Output = Histogram;

    fn index(&self, channel: Channel) -> &Histogram {
        self.get(channel)
    }
}

impl From<[Histogram; 3]> for ChannelHistograms {
    fn from([red, green, blue]: [Histogram; 3]) -> Self {
        Self { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_and_total() {
        let mut h = Histogram::new();
        h.add_all(&[0, 0, 255, 10]);
        assert_eq!(h.counts().len(), BINS);
        assert_eq!(h.count(0), 2);
        assert_eq!(h[255], 1);
        assert_eq!(h.total(), 4);
        assert_eq!(h.peak(), 2);
        assert_eq!(h.mode(), Some(0));
    }

    #[test]
    fn test_merge() {
        let mut a = Histogram::new();
        a.add_all(&[1, 2, 3]);
        let mut b = Histogram::new();
        b.add_all(&[3, 3]);
        a.merge(&b);
        assert_eq!(a.count(3), 3);
        assert_eq!(a.total(), 5);
    }

    #[test]
    fn test_mean_and_normalized() {
        let mut h = Histogram::new();
        h.add_all(&[100, 200]);
        assert_relative_eq!(h.mean().unwrap(), 150.0);
        let p = h.normalized();
        assert_relative_eq!(p[100], 0.5);
        assert_relative_eq!(p.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_empty() {
        let h = Histogram::default();
        assert_eq!(h.total(), 0);
        assert_eq!(h.mode(), None);
        assert_eq!(h.mean(), None);
        assert!(h.normalized().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_from_counts_requires_256() {
        assert!(Histogram::from_counts(vec![0; 255]).is_none());
        assert!(Histogram::from_counts(vec![1; 256]).is_some());
    }

    #[test]
    fn test_try_from_reports_length() {
        let err = Histogram::try_from(vec![0u64; 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidHistogram { len: 3 }));
        let h = Histogram::try_from(vec![2u64; 256]).unwrap();
        assert_eq!(Vec::from(h).len(), 256);
    }

    #[test]
    fn test_channel_histograms_order() {
        let mut red = Histogram::new();
        red.add(1);
        let hs = ChannelHistograms::from([red, Histogram::new(), Histogram::new()]);
        let channels: Vec<_> = hs.iter().map(|(c, _)| c).collect();
        assert_eq!(channels, Channel::ALL);
        assert_eq!(hs[Channel::Red].total(), 1);
    }
}

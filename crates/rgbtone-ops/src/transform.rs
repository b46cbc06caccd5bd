//! Saturating per-channel scaling.
//!
//! Each intensity `v` is mapped to `trunc(clamp(v * k, 0, 255))`, computed
//! in `f64`. The final conversion truncates toward zero rather than
//! rounding, so `151 * 0.5 = 75.5` becomes `75`.
//!
//! # Example
//!
//! ```rust
//! use rgbtone_core::{Channel, ChannelMatrix, Coefficient};
//! use rgbtone_ops::transform::ChannelTransformer;
//!
//! let m = ChannelMatrix::from_rows(&[[100u8, 150], [200, 250]]).unwrap();
//! let half = ChannelTransformer::new(Coefficient::new(Channel::Red, 0.5).unwrap());
//! assert_eq!(half.apply(&m).data(), &[50, 75, 100, 125]);
//! ```

use rgbtone_core::{ChannelMatrix, Coefficient};
use tracing::trace;

/// Upper bound of the output range.
pub const MAX_LEVEL: f64 = 255.0;

/// Scales one intensity with clamp-then-truncate semantics.
#[inline]
pub fn scale_value(value: u8, coefficient: f64) -> u8 {
    // clamp() keeps the product inside [0, 255]; `as` truncates toward zero
    (value as f64 * coefficient).clamp(0.0, MAX_LEVEL) as u8
}

/// Applies one coefficient to every sample of a channel.
///
/// Inputs are 8-bit, so the transformer evaluates [`scale_value`] once per
/// level into a lookup table and maps samples through it.
#[derive(Debug, Clone)]
pub struct ChannelTransformer {
    coefficient: Coefficient,
    lut: [u8; 256],
}

impl ChannelTransformer {
    /// Builds the transformer for `coefficient`.
    pub fn new(coefficient: Coefficient) -> Self {
        let k = coefficient.get();
        let mut lut = [0u8; 256];
        for (level, out) in lut.iter_mut().enumerate() {
            *out = scale_value(level as u8, k);
        }
        Self { coefficient, lut }
    }

    /// The coefficient this transformer applies.
    #[inline]
    pub fn coefficient(&self) -> Coefficient {
        self.coefficient
    }

    /// The 256-entry mapping from input level to output level.
    #[inline]
    pub fn lut(&self) -> &[u8; 256] {
        &self.lut
    }

    /// Returns a scaled copy of `channel`.
    pub fn apply(&self, channel: &ChannelMatrix) -> ChannelMatrix {
        trace!(coefficient = %self.coefficient, h = channel.height(), w = channel.width(), "ChannelTransformer::apply");
        if self.coefficient.is_identity() {
            return channel.clone();
        }
        channel.map_lut(&self.lut)
    }

    /// Scales `samples` in place.
    pub fn apply_slice(&self, samples: &mut [u8]) {
        for v in samples {
            *v = self.lut[*v as usize];
        }
    }
}

/// Scales `channel` by `coefficient`.
///
/// Shorthand for `ChannelTransformer::new(coefficient).apply(channel)`.
pub fn transform(channel: &ChannelMatrix, coefficient: Coefficient) -> ChannelMatrix {
    ChannelTransformer::new(coefficient).apply(channel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbtone_core::Channel;

    fn coef(v: f64) -> Coefficient {
        Coefficient::new(Channel::Red, v).unwrap()
    }

    fn ramp() -> ChannelMatrix {
        ChannelMatrix::from_vec(16, 16, (0..=255u8).collect()).unwrap()
    }

    #[test]
    fn test_identity_is_bit_exact() {
        let m = ramp();
        assert_eq!(transform(&m, coef(1.0)), m);
        // the table itself is also the identity
        let t = ChannelTransformer::new(coef(1.0));
        assert!(t.lut().iter().enumerate().all(|(i, &v)| v as usize == i));
    }

    #[test]
    fn test_zero_blanks_channel() {
        let out = transform(&ramp(), coef(0.0));
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(scale_value(200, 2.0), 255);
        assert_eq!(scale_value(128, 2.0), 255);
        assert_eq!(scale_value(127, 2.0), 254);
        assert_eq!(scale_value(255, 1e12), 255);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        let out = transform(&ramp(), coef(-1.0));
        assert!(out.data().iter().all(|&v| v == 0));
        assert_eq!(scale_value(0, -3.5), 0);
    }

    #[test]
    fn test_truncates_not_rounds() {
        assert_eq!(scale_value(151, 0.5), 75);
        assert_eq!(scale_value(3, 0.99), 2);
        assert_eq!(scale_value(254, 1.0039), 254);
    }

    #[test]
    fn test_half_example() {
        let m = ChannelMatrix::from_rows(&[[100u8, 150], [200, 250]]).unwrap();
        let out = transform(&m, coef(0.5));
        assert_eq!(out.row(0), &[50, 75]);
        assert_eq!(out.row(1), &[100, 125]);
    }

    #[test]
    fn test_apply_matches_scalar_path() {
        let m = ramp();
        for k in [0.3, 0.5, 1.7, 2.0, -0.2] {
            let t = ChannelTransformer::new(coef(k));
            let out = t.apply(&m);
            for (&src, &dst) in m.data().iter().zip(out.data()) {
                assert_eq!(dst, scale_value(src, k), "level {src}, k {k}");
            }
        }
    }

    #[test]
    fn test_apply_slice() {
        let t = ChannelTransformer::new(coef(2.0));
        let mut samples = [0u8, 10, 200];
        t.apply_slice(&mut samples);
        assert_eq!(samples, [0, 20, 255]);
    }

    #[test]
    fn test_shape_preserved() {
        let m = ChannelMatrix::from_vec(3, 5, vec![9; 15]).unwrap();
        assert_eq!(transform(&m, coef(0.1)).shape(), (3, 5));
    }
}

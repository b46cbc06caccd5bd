//! Error types for rgbtone-core operations.
//!
//! Every failure in the core is a caller-input contract violation. There is
//! no I/O and no transient failure mode, so nothing here is retried: errors
//! are reported synchronously and the computation does not proceed.
//!
//! # Usage
//!
//! ```rust
//! use rgbtone_core::{Error, PixelBuffer};
//!
//! let err = PixelBuffer::from_raw(0, 4, 3, Vec::new()).unwrap_err();
//! assert!(err.is_dimensions_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive for [`std::error::Error`] and [`std::fmt::Display`]

use crate::Channel;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by buffer construction and coefficient validation.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer shape is unusable.
    ///
    /// Returned when height or width is zero, the channel count is not 3,
    /// or the sample count does not match `height * width * channels`.
    #[error("invalid dimensions: {height}x{width}x{channels} ({reason})")]
    InvalidDimensions {
        /// Requested height
        height: usize,
        /// Requested width
        width: usize,
        /// Requested channel count
        channels: usize,
        /// Why the shape was rejected
        reason: String,
    },

    /// A scaling coefficient is NaN or infinite.
    #[error("invalid {channel} coefficient: {value} is not a finite number")]
    InvalidCoefficient {
        /// Channel the coefficient was meant for
        channel: Channel,
        /// Offending value
        value: f64,
    },

    /// Bucket list does not have one entry per 8-bit level.
    #[error("invalid histogram: expected 256 buckets, got {len}")]
    InvalidHistogram {
        /// Number of buckets supplied
        len: usize,
    },

    /// Channel matrices being recombined do not share a shape.
    #[error("shape mismatch: {a_height}x{a_width} vs {b_height}x{b_width}")]
    ShapeMismatch {
        /// First matrix height
        a_height: usize,
        /// First matrix width
        a_width: usize,
        /// Second matrix height
        b_height: usize,
        /// Second matrix width
        b_width: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        height: usize,
        width: usize,
        channels: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            height,
            width,
            channels,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidCoefficient`] error.
    #[inline]
    pub fn invalid_coefficient(channel: Channel, value: f64) -> Self {
        Self::InvalidCoefficient { channel, value }
    }

    /// Creates an [`Error::ShapeMismatch`] error from `(height, width)` pairs.
    #[inline]
    pub fn shape_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            a_height: a.0,
            a_width: a.1,
            b_height: b.0,
            b_width: b.1,
        }
    }

    /// Returns `true` if this is an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn is_dimensions_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. })
    }

    /// Returns `true` if this is an [`Error::InvalidCoefficient`] error.
    #[inline]
    pub fn is_coefficient_error(&self) -> bool {
        matches!(self, Self::InvalidCoefficient { .. })
    }
}

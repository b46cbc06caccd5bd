//! Error types for I/O operations.
//!
//! Covers file access, decoding and encoding of the supported formats, and
//! JSON export.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported color type or bit depth.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Image is larger than the encoder or caller allows.
    #[error("image too large: {width}x{height} ({reason})")]
    TooLarge {
        /// Image width
        width: usize,
        /// Image height
        height: usize,
        /// Limit that was exceeded
        reason: String,
    },

    /// Plot parameters cannot produce a chart.
    #[error("invalid plot options: {0}")]
    InvalidPlot(String),

    /// Decoded pixels did not form a valid buffer.
    #[error(transparent)]
    Core(#[from] rgbtone_core::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IoError {
    /// Returns `true` if the input could not be decoded at all.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::DecodeError(_) | Self::UnsupportedFormat(_) | Self::UnsupportedBitDepth(_)
        )
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

//! # rgbtone-core
//!
//! Core types for per-channel RGB tone scaling.
//!
//! This crate provides the data model shared by every rgbtone crate:
//!
//! - [`PixelBuffer`] - validated RGB8 image, immutable once constructed
//! - [`ChannelMatrix`] - one channel of an image as a 2-D grid
//! - [`Coefficient`], [`Coefficients`] - finite per-channel multipliers
//! - [`Histogram`], [`ChannelHistograms`] - 256-bucket intensity counts
//! - [`TransformResult`] - scaled image plus its histograms
//! - [`Error`] - dimension and coefficient validation failures
//!
//! ## Crate Structure
//!
//! ```text
//! rgbtone-core (this crate)
//!    ^
//!    |
//!    +-- rgbtone-ops (transform, histogram, pipeline)
//!    +-- rgbtone-io  (decode/encode, plots, JSON export)
//!    +-- rgbtone-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize` for [`Channel`], [`Coefficient`] and histograms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod channel;
pub mod coefficient;
pub mod error;
pub mod histogram;
pub mod result;

pub use buffer::{ChannelMatrix, PixelBuffer, RGB_CHANNELS};
pub use channel::Channel;
pub use coefficient::{Coefficient, Coefficients};
pub use error::{Error, Result};
pub use histogram::{BINS, ChannelHistograms, Histogram};
pub use result::TransformResult;

/// Prelude module for convenient imports.
///
/// ```
/// use rgbtone_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{ChannelMatrix, PixelBuffer};
    pub use crate::channel::Channel;
    pub use crate::coefficient::{Coefficient, Coefficients};
    pub use crate::error::{Error, Result};
    pub use crate::histogram::{ChannelHistograms, Histogram};
    pub use crate::result::TransformResult;
}

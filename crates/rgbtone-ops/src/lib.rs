//! # rgbtone-ops
//!
//! Per-channel tone scaling and histogram construction.
//!
//! # Modules
//!
//! - [`transform`] - [`ChannelTransformer`]: saturating scale of one channel
//! - [`histogram`] - [`HistogramBuilder`]: 256-bucket intensity counts
//! - [`pipeline`] - [`PixelPipeline`]: split, scale, recombine, count
//! - `parallel` - Rayon scheduling of the above (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use rgbtone_core::{Channel, PixelBuffer};
//! use rgbtone_ops::pipeline;
//!
//! let img = PixelBuffer::filled(4, 4, [100, 150, 200]).unwrap();
//! let out = pipeline::run(&img, 0.5, 1.0, 2.0).unwrap();
//!
//! assert_eq!(out.image.pixel(0, 0), [50, 150, 255]);
//! assert_eq!(out.histograms[Channel::Blue].count(255), 16);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod histogram;
pub mod pipeline;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use histogram::HistogramBuilder;
pub use pipeline::PixelPipeline;
pub use transform::ChannelTransformer;

pub use rgbtone_core::{Error, Result};

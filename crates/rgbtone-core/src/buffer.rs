//! Pixel and channel buffers.
//!
//! - [`PixelBuffer`] - an RGB8 image, immutable once constructed
//! - [`ChannelMatrix`] - one channel of a [`PixelBuffer`] as a 2-D grid
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, with channels
//! interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! A [`ChannelMatrix`] is planar: `height * width` samples, row-major.
//!
//! # Usage
//!
//! ```rust
//! use rgbtone_core::{Channel, PixelBuffer};
//!
//! let img = PixelBuffer::filled(2, 2, [100, 150, 200]).unwrap();
//! let red = img.channel(Channel::Red);
//! assert_eq!(red.get(1, 1), 100);
//!
//! let back = PixelBuffer::from_channels(&red, &img.channel(Channel::Green), &img.channel(Channel::Blue)).unwrap();
//! assert_eq!(back, img);
//! ```

use crate::{Channel, Error, Result};
use std::sync::Arc;

/// Number of interleaved channels in a [`PixelBuffer`].
pub const RGB_CHANNELS: usize = 3;

/// Validated RGB8 image with shape `(height, width, 3)`.
///
/// The sample buffer is stored in an [`Arc`] so clones are cheap and can be
/// shared across threads; there is no mutable access after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Arc<Vec<u8>>,
    height: usize,
    width: usize,
}

impl PixelBuffer {
    /// Wraps interleaved RGB samples.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if `height` or `width` is zero,
    /// `channels != 3`, the size overflows, or `data.len()` is not
    /// `height * width * channels`.
    pub fn from_raw(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::invalid_dimensions(
                height,
                width,
                channels,
                "height and width must be > 0",
            ));
        }
        if channels != RGB_CHANNELS {
            return Err(Error::invalid_dimensions(
                height,
                width,
                channels,
                format!("expected {} channels", RGB_CHANNELS),
            ));
        }
        let expected = height
            .checked_mul(width)
            .and_then(|v| v.checked_mul(channels))
            .ok_or_else(|| Error::invalid_dimensions(height, width, channels, "size overflows"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                height,
                width,
                channels,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            height,
            width,
        })
    }

    /// Creates a buffer where every pixel is `pixel`.
    pub fn filled(height: usize, width: usize, pixel: [u8; 3]) -> Result<Self> {
        let count = height.saturating_mul(width);
        let mut data = Vec::with_capacity(count.saturating_mul(RGB_CHANNELS));
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self::from_raw(height, width, RGB_CHANNELS, data)
    }

    /// Interleaves three channel matrices back into a buffer.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if the matrices differ in shape.
    pub fn from_channels(
        red: &ChannelMatrix,
        green: &ChannelMatrix,
        blue: &ChannelMatrix,
    ) -> Result<Self> {
        for other in [green, blue] {
            if other.shape() != red.shape() {
                return Err(Error::shape_mismatch(red.shape(), other.shape()));
            }
        }
        let mut data = Vec::with_capacity(red.len() * RGB_CHANNELS);
        for ((&r, &g), &b) in red.data().iter().zip(green.data()).zip(blue.data()) {
            data.extend_from_slice(&[r, g, b]);
        }
        Self::from_raw(red.height(), red.width(), RGB_CHANNELS, data)
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Always 3.
    #[inline]
    pub const fn channels(&self) -> usize {
        RGB_CHANNELS
    }

    /// `(height, width, channels)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, RGB_CHANNELS)
    }

    /// Number of pixels (`height * width`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    /// Interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning the samples (copies only if shared).
    pub fn into_vec(self) -> Vec<u8> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Pixel at row `y`, column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `(y, x)` is out of bounds.
    #[inline]
    pub fn pixel(&self, y: usize, x: usize) -> [u8; 3] {
        assert!(y < self.height && x < self.width, "pixel out of bounds");
        let offset = (y * self.width + x) * RGB_CHANNELS;
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }

    /// Interleaved samples of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.width * RGB_CHANNELS;
        &self.data[y * stride..(y + 1) * stride]
    }

    /// Extracts one channel by slicing the last axis.
    pub fn channel(&self, channel: Channel) -> ChannelMatrix {
        let data = self
            .data
            .iter()
            .skip(channel.index())
            .step_by(RGB_CHANNELS)
            .copied()
            .collect();
        ChannelMatrix {
            data,
            height: self.height,
            width: self.width,
        }
    }

    /// Splits into `[red, green, blue]` matrices.
    pub fn split(&self) -> [ChannelMatrix; 3] {
        Channel::ALL.map(|c| self.channel(c))
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("channels", &RGB_CHANNELS)
            .finish()
    }
}

/// One channel of an image: `height * width` intensities, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMatrix {
    data: Vec<u8>,
    height: usize,
    width: usize,
}

impl ChannelMatrix {
    /// Wraps planar samples.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] if either dimension is zero or
    /// `data.len() != height * width`.
    pub fn from_vec(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::invalid_dimensions(height, width, 1, "height and width must be > 0"));
        }
        let expected = height
            .checked_mul(width)
            .ok_or_else(|| Error::invalid_dimensions(height, width, 1, "size overflows"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                height,
                width,
                1,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self { data, height, width })
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimensions`] for empty input or ragged rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::invalid_dimensions(
                    height,
                    width,
                    1,
                    format!("ragged row of length {}", row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(height, width, data)
    }

    /// Returns a matrix with the same shape and new samples.
    ///
    /// Used by transforms; `data` must have `self.len()` elements.
    pub(crate) fn with_data(&self, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            data,
            height: self.height,
            width: self.width,
        }
    }

    /// Matrix height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Matrix width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a validated matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Planar samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable planar samples; the shape stays fixed.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Sample at row `y`, column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `(y, x)` is out of bounds.
    #[inline]
    pub fn get(&self, y: usize, x: usize) -> u8 {
        assert!(y < self.height && x < self.width, "sample out of bounds");
        self.data[y * self.width + x]
    }

    /// Samples of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Maps every sample through `f`, keeping the shape.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        self.with_data(self.data.iter().map(|&v| f(v)).collect())
    }

    /// Maps every sample through a 256-entry lookup table.
    pub fn map_lut(&self, lut: &[u8; 256]) -> Self {
        self.with_data(self.data.iter().map(|&v| lut[v as usize]).collect())
    }
}

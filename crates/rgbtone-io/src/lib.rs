//! # rgbtone-io
//!
//! File-facing side of rgbtone: decoding uploads into [`PixelBuffer`]s,
//! encoding results, rendering histogram charts and exporting counts.
//!
//! - **PNG** - lossless, 8/16-bit gray, gray+alpha, RGB, RGBA and palette
//! - **JPEG** - lossy, RGB, grayscale and CMYK input; RGB output
//!
//! All decoded images are normalized to 8-bit RGB.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rgbtone_io::{read, write};
//!
//! let image = read("upload.png")?;
//! write("original.jpg", &image)?;
//! ```
//!
//! # Modules
//!
//! - [`detect`] - format detection from magic bytes and extensions
//! - [`png`] / [`jpeg`] - codecs
//! - [`plot`] - histogram bar charts
//! - [`export`] - histogram JSON
//! - [`layout`] - output directory file names
//!
//! # Dependencies
//!
//! - [`png`](::png), [`jpeg_decoder`], [`jpeg_encoder`] - codecs
//! - [`serde_json`] - histogram export
//! - [`thiserror`] - [`IoError`]

#![warn(missing_docs)]

pub mod detect;
mod error;
pub mod export;
pub mod jpeg;
pub mod layout;
pub mod plot;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use export::{histograms_from_json, histograms_to_json, write_histograms_json};
pub use layout::OutputLayout;
pub use plot::{PlotOptions, render_histogram};

use rgbtone_core::PixelBuffer;
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Refuses images with more than `max_pixels` pixels.
pub(crate) fn check_limit(width: usize, height: usize, max_pixels: Option<usize>) -> IoResult<()> {
    match max_pixels {
        Some(limit) if width.saturating_mul(height) > limit => Err(IoError::TooLarge {
            width,
            height,
            reason: format!("more than {limit} pixels"),
        }),
        _ => Ok(()),
    }
}

/// Reads an image file, detecting the format automatically.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for anything but PNG or JPEG, or a
/// decoding error for corrupt files.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    read_limited(path, None)
}

/// Like [`read`], but refuses images with more than `max_pixels` pixels
/// before allocating their pixel data.
pub fn read_limited<P: AsRef<Path>>(path: P, max_pixels: Option<usize>) -> IoResult<PixelBuffer> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "reading image");

    decode_as(Format::detect(path, &bytes), &bytes, max_pixels).map_err(|e| match e {
        IoError::UnsupportedFormat(_) => IoError::UnsupportedFormat(describe(path)),
        other => other,
    })
}

/// Decodes an in-memory image, detecting the format from its magic bytes.
pub fn decode(bytes: &[u8], max_pixels: Option<usize>) -> IoResult<PixelBuffer> {
    decode_as(Format::from_bytes(bytes), bytes, max_pixels)
}

fn decode_as(format: Format, bytes: &[u8], max_pixels: Option<usize>) -> IoResult<PixelBuffer> {
    match format {
        Format::Png => png::decode(bytes, max_pixels),
        Format::Jpeg => jpeg::decode(bytes, max_pixels),
        Format::Unknown => Err(IoError::UnsupportedFormat("unrecognized image data".into())),
    }
}

/// Writes an image, choosing the format from the file extension.
///
/// JPEGs are written at [`jpeg::DEFAULT_QUALITY`].
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let path = path.as_ref();
    trace!(path = %path.display(), shape = ?image.shape(), "writing image");

    match Format::from_extension(path) {
        Format::Png => png::write(path, image),
        Format::Jpeg => jpeg::write(path, image),
        Format::Unknown => Err(IoError::UnsupportedFormat(describe(path))),
    }
}

fn describe(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_detects_by_content() {
        let image = PixelBuffer::filled(4, 5, [10, 20, 30]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("really_a_png.jpg");
        std::fs::write(&path, png::encode(&image).unwrap()).unwrap();

        assert_eq!(read(&path).unwrap(), image);
    }

    #[test]
    fn test_write_unknown_extension() {
        let image = PixelBuffer::filled(1, 1, [0, 0, 0]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = write(dir.path().join("x.bmp"), &image).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(ref s) if s == ".bmp"));
    }

    #[test]
    fn test_read_unrecognized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert!(read(&path).unwrap_err().is_decode_error());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }

    #[test]
    fn test_check_limit() {
        assert!(check_limit(10, 10, None).is_ok());
        assert!(check_limit(10, 10, Some(100)).is_ok());
        assert!(check_limit(10, 11, Some(100)).is_err());
    }
}

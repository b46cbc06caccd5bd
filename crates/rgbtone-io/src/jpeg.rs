//! JPEG format support.
//!
//! Reads baseline and progressive JPEGs into 8-bit RGB and writes RGB
//! JPEGs at a configurable quality.

use crate::{IoError, IoResult, check_limit};
use rgbtone_core::{PixelBuffer, RGB_CHANNELS};
use std::io::{BufReader, Cursor};
use std::path::Path;
use tracing::trace;

/// Default encoder quality, matching the usual web-image default.
pub const DEFAULT_QUALITY: u8 = 75;

/// Options for writing JPEG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegWriterOptions {
    /// Quality level 1-100. Higher = better quality, larger files.
    pub quality: u8,
}

impl Default for JpegWriterOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Reads a JPEG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes, None)
}

/// Decodes JPEG bytes, refusing images with more than `max_pixels` pixels.
pub fn decode(bytes: &[u8], max_pixels: Option<usize>) -> IoResult<PixelBuffer> {
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(Cursor::new(bytes)));
    decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;
    check_limit(info.width as usize, info.height as usize, max_pixels)?;

    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let width = info.width as usize;
    let height = info.height as usize;
    trace!(width, height, format = ?info.pixel_format, "decoded jpeg");

    let rgb: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels,
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g]).collect(),
        jpeg_decoder::PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|l16| [l16[0], l16[0], l16[0]])
            .collect(),
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                let k = 1.0 - cmyk[3] as f32 / 255.0;
                let ink = |v: u8| ((1.0 - v as f32 / 255.0) * k * 255.0) as u8;
                [ink(cmyk[0]), ink(cmyk[1]), ink(cmyk[2])]
            })
            .collect(),
    };

    Ok(PixelBuffer::from_raw(height, width, RGB_CHANNELS, rgb)?)
}

/// Writes an image to a JPEG file at [`DEFAULT_QUALITY`].
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    write_with_options(path, image, &JpegWriterOptions::default())
}

/// Writes an image to a JPEG file with explicit options.
pub fn write_with_options<P: AsRef<Path>>(
    path: P,
    image: &PixelBuffer,
    options: &JpegWriterOptions,
) -> IoResult<()> {
    let bytes = encode(image, options)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Encodes an image as RGB JPEG bytes.
pub fn encode(image: &PixelBuffer, options: &JpegWriterOptions) -> IoResult<Vec<u8>> {
    use jpeg_encoder::{ColorType, Encoder};

    let too_large = || IoError::TooLarge {
        width: image.width(),
        height: image.height(),
        reason: "JPEG dimensions are limited to 65535".into(),
    };
    let width = u16::try_from(image.width()).map_err(|_| too_large())?;
    let height = u16::try_from(image.height()).map_err(|_| too_large())?;
    let quality = options.quality.clamp(1, 100);

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, quality);
    encoder
        .encode(image.data(), width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    Ok(buffer)
}

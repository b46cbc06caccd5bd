//! PNG format support.
//!
//! Decodes any PNG to 8-bit RGB: palettes are expanded, 16-bit samples keep
//! their high byte, gray is replicated into all three channels and alpha is
//! dropped. Encoding always writes 8-bit RGB.
//!
//! # Example
//!
//! ```rust,ignore
//! use rgbtone_io::png;
//!
//! let image = png::read("input.png")?;
//! png::write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult, check_limit};
use rgbtone_core::{PixelBuffer, RGB_CHANNELS};
use std::io::Cursor;
use std::path::Path;
use tracing::trace;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let bytes = std::fs::read(path.as_ref())?;
    decode(&bytes, None)
}

/// Decodes PNG bytes, refusing images with more than `max_pixels` pixels.
pub fn decode(bytes: &[u8], max_pixels: Option<usize>) -> IoResult<PixelBuffer> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    {
        let header = reader.info();
        check_limit(header.width as usize, header.height as usize, max_pixels)?;
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width as usize;
    let height = info.height as usize;
    let samples = &buf[..info.buffer_size()];
    trace!(width, height, color = ?info.color_type, "decoded png frame");

    // Rows carry no padding at 8 bits per sample.
    let rgb: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => samples.to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => samples
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            samples.iter().flat_map(|&g| [g, g, g]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => samples
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0]])
            .collect(),
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    Ok(PixelBuffer::from_raw(height, width, RGB_CHANNELS, rgb)?)
}

/// Writes an image to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let bytes = encode(image)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Encodes an image as 8-bit RGB PNG bytes.
pub fn encode(image: &PixelBuffer) -> IoResult<Vec<u8>> {
    let too_large = || IoError::TooLarge {
        width: image.width(),
        height: image.height(),
        reason: "PNG dimensions are limited to u32".into(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::default());
        encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .write_image_data(image.data())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        png_writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_raw(width: u32, height: u32, color: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_roundtrip_rgb_is_lossless() {
        let mut data = Vec::new();
        for y in 0..8u8 {
            for x in 0..8u8 {
                data.extend_from_slice(&[x * 30, y * 30, 128]);
            }
        }
        let image = PixelBuffer::from_raw(8, 8, 3, data).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        write(&path, &image).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn test_rgba_drops_alpha() {
        let bytes = encode_raw(2, 1, png::ColorType::Rgba, &[1, 2, 3, 0, 4, 5, 6, 255]);
        let image = decode(&bytes, None).unwrap();
        assert_eq!(image.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_gray_is_replicated() {
        let bytes = encode_raw(3, 1, png::ColorType::Grayscale, &[0, 100, 255]);
        let image = decode(&bytes, None).unwrap();
        assert_eq!(image.shape(), (1, 3, 3));
        assert_eq!(image.pixel(0, 1), [100, 100, 100]);
    }

    #[test]
    fn test_limit_refuses_large_image() {
        let bytes = encode_raw(4, 4, png::ColorType::Grayscale, &[0; 16]);
        let err = decode(&bytes, Some(15)).unwrap_err();
        assert!(matches!(err, IoError::TooLarge { .. }));
        assert!(decode(&bytes, Some(16)).is_ok());
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = decode(b"not a png at all", None).unwrap_err();
        assert!(err.is_decode_error());
    }
}

//! Format detection utilities.
//!
//! Detects image formats from magic bytes and file extensions.

use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from a file's leading bytes, falling back to the
    /// extension of `path` when the bytes are not recognized.
    pub fn detect<P: AsRef<Path>>(path: P, header: &[u8]) -> Self {
        match Self::from_bytes(header) {
            Format::Unknown => Self::from_extension(path),
            format => format,
        }
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") | Some("jpe") => Format::Jpeg,
            _ => Format::Unknown,
        }
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // PNG: 0x89 P N G \r \n 0x1A \n
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Format::Png;
        }
        // JPEG: SOI followed by a marker
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Format::Jpeg;
        }
        Format::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("a.PNG"), Format::Png);
        assert_eq!(Format::from_extension("dir/b.jpeg"), Format::Jpeg);
        assert_eq!(Format::from_extension("b.jpg"), Format::Jpeg);
        assert_eq!(Format::from_extension("c.tif"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(
            Format::from_bytes(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
            Format::Png
        );
        assert_eq!(Format::from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]), Format::Jpeg);
        assert_eq!(Format::from_bytes(b"GIF89a"), Format::Unknown);
        assert_eq!(Format::from_bytes(&[]), Format::Unknown);
    }

    #[test]
    fn test_magic_wins_over_extension() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xDB, 0, 0];
        assert_eq!(Format::detect("mislabeled.png", &jpeg_header), Format::Jpeg);
        assert_eq!(Format::detect("plain.png", b"????"), Format::Png);
        assert_eq!(Format::detect("plain.txt", b"????"), Format::Unknown);
    }
}

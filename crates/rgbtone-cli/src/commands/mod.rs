//! CLI command implementations

pub mod histogram;
pub mod process;

use anyhow::{Context, Result};
use rgbtone_core::{Channel, PixelBuffer};
use std::path::Path;
use tracing::{debug, warn};

/// Largest image accepted by default, in pixels.
pub const DEFAULT_MAX_PIXELS: usize = 100_000_000;

/// Load image from path, refusing anything above `max_pixels` (0 = no limit)
pub fn load_image(path: &Path, max_pixels: usize) -> Result<PixelBuffer> {
    let limit = (max_pixels > 0).then_some(max_pixels);
    rgbtone_io::read_limited(path, limit)
        .with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &PixelBuffer) -> Result<()> {
    rgbtone_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Reads a coefficient the way form fields are read.
///
/// Missing values mean 1.0. Values that are not numbers also fall back to
/// 1.0, with a warning. `nan` and `inf` parse and are left for the pipeline
/// to reject.
pub fn parse_coefficient(channel: Channel, raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        debug!(%channel, "coefficient not given, using 1.0");
        return 1.0;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(%channel, value = raw, "coefficient is not a number, using 1.0");
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coefficient() {
        assert_eq!(parse_coefficient(Channel::Red, None), 1.0);
        assert_eq!(parse_coefficient(Channel::Red, Some(" 0.25 ")), 0.25);
        assert_eq!(parse_coefficient(Channel::Green, Some("-2")), -2.0);
        assert_eq!(parse_coefficient(Channel::Blue, Some("abc")), 1.0);
        assert_eq!(parse_coefficient(Channel::Blue, Some("")), 1.0);
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert!(parse_coefficient(Channel::Red, Some("nan")).is_nan());
        assert_eq!(parse_coefficient(Channel::Red, Some("inf")), f64::INFINITY);
    }
}

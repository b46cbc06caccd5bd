//! Output of a pipeline run.

use crate::{ChannelHistograms, PixelBuffer};

/// The tone-adjusted image together with its per-channel histograms.
///
/// Histograms always describe `image`, i.e. the post-transform intensities.
/// The value is owned by the caller; nothing else keeps a reference to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    /// Scaled image, same shape as the input
    pub image: PixelBuffer,
    /// Histograms of `image`, ordered red, green, blue
    pub histograms: ChannelHistograms,
}

impl TransformResult {
    /// Splits into `(image, histograms)`.
    pub fn into_parts(self) -> (PixelBuffer, ChannelHistograms) {
        (self.image, self.histograms)
    }
}

//! Fixed file names of a processing run's output directory.
//!
//! Every run overwrites the same set of files:
//!
//! | file                | contents                         |
//! |---------------------|----------------------------------|
//! | `original.jpg`      | the uploaded image, re-encoded   |
//! | `processed.jpg`     | the scaled image                 |
//! | `red_channel.png`   | red histogram chart              |
//! | `green_channel.png` | green histogram chart            |
//! | `blue_channel.png`  | blue histogram chart             |
//! | `histograms.json`   | raw counts (optional)            |

use crate::IoResult;
use rgbtone_core::Channel;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "static/uploads";

/// Paths of all artifacts under one output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    /// File name of the re-encoded input.
    pub const ORIGINAL: &'static str = "original.jpg";
    /// File name of the transformed image.
    pub const PROCESSED: &'static str = "processed.jpg";
    /// File name of the histogram counts.
    pub const HISTOGRAMS_JSON: &'static str = "histograms.json";

    /// Layout rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `original.jpg`.
    pub fn original(&self) -> PathBuf {
        self.root.join(Self::ORIGINAL)
    }

    /// Path of `processed.jpg`.
    pub fn processed(&self) -> PathBuf {
        self.root.join(Self::PROCESSED)
    }

    /// Path of `<channel>_channel.png`.
    pub fn histogram_plot(&self, channel: Channel) -> PathBuf {
        self.root.join(format!("{}_channel.png", channel.name()))
    }

    /// Path of `histograms.json`.
    pub fn histograms_json(&self) -> PathBuf {
        self.root.join(Self::HISTOGRAMS_JSON)
    }

    /// Creates the output directory if missing.
    pub fn ensure(&self) -> IoResult<()> {
        if !self.root.is_dir() {
            debug!(dir = %self.root.display(), "creating output directory");
            std::fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

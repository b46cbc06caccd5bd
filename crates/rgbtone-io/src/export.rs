//! JSON export of channel histograms.
//!
//! The document is an object with one 256-element count array per channel:
//!
//! ```json
//! {"red": [0, 3, ...], "green": [...], "blue": [...]}
//! ```

use crate::IoResult;
use rgbtone_core::ChannelHistograms;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serializes histograms as pretty-printed JSON.
pub fn histograms_to_json(histograms: &ChannelHistograms) -> IoResult<String> {
    Ok(serde_json::to_string_pretty(histograms)?)
}

/// Parses histograms previously written by [`histograms_to_json`].
///
/// Every channel must carry exactly 256 counts.
pub fn histograms_from_json(json: &str) -> IoResult<ChannelHistograms> {
    Ok(serde_json::from_str(json)?)
}

/// Writes histograms as JSON to `path`.
pub fn write_histograms_json<P: AsRef<Path>>(
    path: P,
    histograms: &ChannelHistograms,
) -> IoResult<()> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer_pretty(writer, histograms)?;
    Ok(())
}

//! Parallel scheduling of pipeline stages using Rayon.
//!
//! Channels are independent, and so are the samples within a channel.
//! Scaling runs one task per channel and splits each channel into row
//! blocks; histograms are accumulated per block and merged. Results are
//! identical to the sequential path.
//!
//! # Example
//!
//! ```rust
//! use rgbtone_core::{Channel, ChannelMatrix, Coefficient};
//! use rgbtone_ops::parallel;
//!
//! let m = ChannelMatrix::from_vec(64, 64, vec![200; 64 * 64]).unwrap();
//! let k = Coefficient::new(Channel::Red, 2.0).unwrap();
//! let out = parallel::transform(&m, k);
//! assert!(out.data().iter().all(|&v| v == 255));
//! ```

use rayon::prelude::*;
use rgbtone_core::{ChannelMatrix, Coefficient, Histogram};

use crate::transform::ChannelTransformer;

/// Samples handled per task.
const BLOCK_SAMPLES: usize = 64 * 1024;

/// Rows per block for a matrix of the given width.
fn rows_per_block(width: usize) -> usize {
    (BLOCK_SAMPLES / width.max(1)).max(1)
}

/// Scales `channel` in parallel row blocks.
pub fn transform(channel: &ChannelMatrix, coefficient: Coefficient) -> ChannelMatrix {
    apply(&ChannelTransformer::new(coefficient), channel)
}

fn apply(transformer: &ChannelTransformer, channel: &ChannelMatrix) -> ChannelMatrix {
    if transformer.coefficient().is_identity() {
        return channel.clone();
    }
    let mut out = channel.clone();
    let block = rows_per_block(channel.width()) * channel.width();
    out.data_mut()
        .par_chunks_mut(block)
        .for_each(|chunk| transformer.apply_slice(chunk));
    out
}

/// Scales three channels concurrently, one transformer each.
pub fn transform_channels(
    channels: [ChannelMatrix; 3],
    transformers: &[ChannelTransformer; 3],
) -> [ChannelMatrix; 3] {
    let [r, g, b] = channels;
    let (red, (green, blue)) = rayon::join(
        || apply(&transformers[0], &r),
        || {
            rayon::join(
                || apply(&transformers[1], &g),
                || apply(&transformers[2], &b),
            )
        },
    );
    [red, green, blue]
}

/// Histogram of `channel`, accumulated per row block and merged.
pub fn histogram(channel: &ChannelMatrix) -> Histogram {
    let block = rows_per_block(channel.width()) * channel.width();
    channel
        .data()
        .par_chunks(block)
        .fold(Histogram::new, |mut hist, chunk| {
            hist.add_all(chunk);
            hist
        })
        .reduce(Histogram::new, |mut a, b| {
            a.merge(&b);
            a
        })
}

/// Histograms of three channels concurrently.
pub fn build_histograms(channels: [&ChannelMatrix; 3]) -> [Histogram; 3] {
    let [r, g, b] = channels;
    let (red, (green, blue)) = rayon::join(
        || histogram(r),
        || rayon::join(|| histogram(g), || histogram(b)),
    );
    [red, green, blue]
}

//! Integration tests for rgbtone crates.
//!
//! End-to-end checks that span the core types, the scaling pipeline and the
//! file layer: pipeline properties on realistic buffers, codec roundtrips,
//! histogram charts and JSON export written into an output layout.

pub mod fixtures;
#[cfg(test)]
mod reference;

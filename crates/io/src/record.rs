//! The long-format CSV row shared by the reader and writer.

use serde::{Deserialize, Serialize};

/// One pixel of the long-format layout: one row per pixel, with the segment
/// index and the segment's exposure time repeated on every row.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub(crate) struct PixelRecord {
    pub segment: usize,
    pub wavelength: f64,
    pub flux: f64,
    pub error: f64,
    pub error_lower: f64,
    pub gross: f64,
    pub gcounts: f64,
    pub exptime: f64,
}

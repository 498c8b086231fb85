//! A spectral table: an ordered collection of detector segments.

use crate::error::SpectrumError;
use crate::segment::Segment;

/// An ordered sequence of [`Segment`]s, one per detector segment or grating
/// setting. Segments may have different pixel counts.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralTable {
    segments: Vec<Segment>,
}

impl SpectralTable {
    /// Builds a table from its segments.
    ///
    /// # Errors
    ///
    /// Returns [`SpectrumError::EmptyTable`] if `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> Result<Self, SpectrumError> {
        if segments.is_empty() {
            return Err(SpectrumError::EmptyTable);
        }
        Ok(Self { segments })
    }

    /// Returns the segments in table order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn n_segments(&self) -> usize {
        self.segments.len()
    }

    /// Returns the total number of pixels across all segments.
    pub fn n_pixels(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// Consumes the table and returns its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

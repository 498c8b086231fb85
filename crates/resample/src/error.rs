//! Error types for the helios-resample crate.

/// Error type for all fallible operations in the helios-resample crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResampleError {
    /// Returned when the bin size is 0 or 1.
    #[error("invalid bin size: {bin_size} (binning requires at least 2 pixels per bin)")]
    InvalidBinSize {
        /// The offending bin size.
        bin_size: usize,
    },

    /// Returned when array lengths don't match.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched field.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when the weights of a bin sum to zero.
    #[error("weights in bin {bin} sum to zero")]
    ZeroWeightBin {
        /// Index of the degenerate output bin.
        bin: usize,
    },

    /// Returned when a segment holds fewer pixels than one bin.
    #[error("segment {segment} has {len} pixels, fewer than one bin of {bin_size}")]
    SegmentTooShort {
        /// Index of the segment in the table.
        segment: usize,
        /// Number of pixels in the segment.
        len: usize,
        /// Requested bin size.
        bin_size: usize,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Spectrum data-model error.
    #[error(transparent)]
    Spectrum(#[from] helios_spectrum::SpectrumError),
}

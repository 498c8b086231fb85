//! Error types for the helios-spectrum crate.

/// Error type for all fallible operations in the helios-spectrum crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpectrumError {
    /// Returned when a segment is constructed with no pixels.
    #[error("segment has no pixels")]
    EmptySegment,

    /// Returned when a table is constructed with no segments.
    #[error("table has no segments")]
    EmptyTable,

    /// Returned when column lengths within a segment don't match.
    #[error("{column}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched column.
        column: &'static str,
        /// Expected length (the wavelength column's length).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when the wavelength column contains NaN or infinity.
    #[error("non-finite value in {column}")]
    NonFiniteInput {
        /// Name of the column containing the non-finite value.
        column: &'static str,
    },

    /// Returned when the exposure time is negative or non-finite.
    #[error("invalid exposure time: {exptime} (must be finite and non-negative)")]
    InvalidExptime {
        /// The offending exposure time.
        exptime: f64,
    },
}

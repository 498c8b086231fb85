//! One detector segment of a spectral table.

use crate::error::SpectrumError;

/// Per-pixel data for one detector segment or grating setting.
///
/// All column arrays have the same length, validated once at construction.
/// Wavelengths must be finite (they drive range queries); the remaining
/// columns may carry NaN from upstream pipelines and are passed through.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    wavelength: Vec<f64>,
    flux: Vec<f64>,
    error: Vec<f64>,
    error_lower: Vec<f64>,
    gross: Vec<f64>,
    gcounts: Vec<f64>,
    exptime: f64,
}

impl Segment {
    /// Builds a segment from its column arrays and exposure time.
    ///
    /// # Errors
    ///
    /// Returns [`SpectrumError`] if the segment is empty, column lengths
    /// differ from the wavelength column, the wavelength column contains a
    /// non-finite value, or the exposure time is negative or non-finite.
    pub fn new(
        wavelength: Vec<f64>,
        flux: Vec<f64>,
        error: Vec<f64>,
        error_lower: Vec<f64>,
        gross: Vec<f64>,
        gcounts: Vec<f64>,
        exptime: f64,
    ) -> Result<Self, SpectrumError> {
        let n = wavelength.len();
        if n == 0 {
            return Err(SpectrumError::EmptySegment);
        }
        if flux.len() != n {
            return Err(SpectrumError::LengthMismatch {
                column: "flux",
                expected: n,
                got: flux.len(),
            });
        }
        if error.len() != n {
            return Err(SpectrumError::LengthMismatch {
                column: "error",
                expected: n,
                got: error.len(),
            });
        }
        if error_lower.len() != n {
            return Err(SpectrumError::LengthMismatch {
                column: "error_lower",
                expected: n,
                got: error_lower.len(),
            });
        }
        if gross.len() != n {
            return Err(SpectrumError::LengthMismatch {
                column: "gross",
                expected: n,
                got: gross.len(),
            });
        }
        if gcounts.len() != n {
            return Err(SpectrumError::LengthMismatch {
                column: "gcounts",
                expected: n,
                got: gcounts.len(),
            });
        }
        if wavelength.iter().any(|v| !v.is_finite()) {
            return Err(SpectrumError::NonFiniteInput {
                column: "wavelength",
            });
        }
        if !exptime.is_finite() || exptime < 0.0 {
            return Err(SpectrumError::InvalidExptime { exptime });
        }

        Ok(Self {
            wavelength,
            flux,
            error,
            error_lower,
            gross,
            gcounts,
            exptime,
        })
    }

    /// Returns the wavelength per pixel.
    pub fn wavelength(&self) -> &[f64] {
        &self.wavelength
    }

    /// Returns the calibrated flux per pixel.
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Returns the upper flux error per pixel.
    pub fn error(&self) -> &[f64] {
        &self.error
    }

    /// Returns the lower flux error per pixel.
    pub fn error_lower(&self) -> &[f64] {
        &self.error_lower
    }

    /// Returns the gross count rate per pixel (counts per second).
    pub fn gross(&self) -> &[f64] {
        &self.gross
    }

    /// Returns the raw event counts per pixel.
    pub fn gcounts(&self) -> &[f64] {
        &self.gcounts
    }

    /// Returns the exposure time of this segment in seconds.
    pub fn exptime(&self) -> f64 {
        self.exptime
    }

    /// Returns the number of pixels in this segment.
    pub fn len(&self) -> usize {
        self.wavelength.len()
    }

    /// Returns `true` if the segment holds no pixels. Always `false` for a
    /// validated segment.
    pub fn is_empty(&self) -> bool {
        self.wavelength.is_empty()
    }

    /// Returns the minimum and maximum wavelength covered by this segment.
    pub fn wavelength_bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &w in &self.wavelength {
            lo = lo.min(w);
            hi = hi.max(w);
        }
        (lo, hi)
    }
}

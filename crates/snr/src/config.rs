//! Configuration for SNR estimation.

use crate::error::SnrError;
use crate::range::SnrRange;

/// How per-segment scalar estimates are combined when a window is found on
/// more than one segment (multi-segment grating overlap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SnrAggregation {
    /// The last matching segment's scalar wins. Historical behaviour; the
    /// multi-segment caveat is recorded in the result.
    #[default]
    LastSegment,
    /// Average of the per-segment scalars, weighted by each segment's total
    /// in-window counts.
    CountsWeighted,
}

/// Configuration for [`estimate_snr`](crate::estimate_snr).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use helios_snr::{SnrConfig, SnrRange};
///
/// let config = SnrConfig::new()
///     .with_range(SnrRange::window(1565.0, 1575.0))
///     .with_weighted(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SnrConfig {
    range: SnrRange,
    weighted: bool,
    bin_first: bool,
    bin_size: usize,
    aggregation: SnrAggregation,
}

impl SnrConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `range = Full`, `weighted = false`, `bin_first = false`,
    /// `bin_size = 6` (the FUV resolution element),
    /// `aggregation = LastSegment`.
    pub fn new() -> Self {
        Self {
            range: SnrRange::Full,
            weighted: false,
            bin_first: false,
            bin_size: 6,
            aggregation: SnrAggregation::LastSegment,
        }
    }

    /// Sets the wavelength selection.
    pub fn with_range(mut self, range: SnrRange) -> Self {
        self.range = range;
        self
    }

    /// Enables or disables exposure-time weighting of the scalar summary.
    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Enables or disables binning by the resolution element before
    /// estimating.
    pub fn with_bin_first(mut self, bin_first: bool) -> Self {
        self.bin_first = bin_first;
        self
    }

    /// Sets the bin size used when `bin_first` is enabled.
    pub fn with_bin_size(mut self, bin_size: usize) -> Self {
        self.bin_size = bin_size;
        self
    }

    /// Sets the multi-segment aggregation strategy.
    pub fn with_aggregation(mut self, aggregation: SnrAggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Returns the wavelength selection.
    pub fn range(&self) -> SnrRange {
        self.range
    }

    /// Returns whether the scalar summary is exposure-time weighted.
    pub fn weighted(&self) -> bool {
        self.weighted
    }

    /// Returns whether the table is binned before estimating.
    pub fn bin_first(&self) -> bool {
        self.bin_first
    }

    /// Returns the bin size used when `bin_first` is enabled.
    pub fn bin_size(&self) -> usize {
        self.bin_size
    }

    /// Returns the multi-segment aggregation strategy.
    pub fn aggregation(&self) -> SnrAggregation {
        self.aggregation
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), SnrError> {
        if let SnrRange::Window { start, end } = self.range {
            if !start.is_finite() || !end.is_finite() {
                return Err(SnrError::InvalidConfig {
                    reason: format!("window bounds must be finite, got [{start}, {end}]"),
                });
            }
        }
        if self.bin_first && self.bin_size < 2 {
            return Err(SnrError::InvalidConfig {
                reason: format!("bin_size must be >= 2 when binning first, got {}", self.bin_size),
            });
        }
        Ok(())
    }
}

impl Default for SnrConfig {
    fn default() -> Self {
        Self::new()
    }
}

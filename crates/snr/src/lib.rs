//! Signal-to-noise estimation for the helios toolkit.
//!
//! Far-UV detectors are photon counters, so the noise on a pixel holding
//! `N` raw counts is approximately `sqrt(N)` (Poisson). This crate estimates
//! per-pixel and window-averaged SNR from the count columns of a
//! [`SpectralTable`](helios_spectrum::SpectralTable), cross-checks the
//! estimate against the pipeline's own flux/error arrays, and sweeps bin
//! sizes to show how binning trades resolution for SNR.
//!
//! # Quick start
//!
//! ```ignore
//! use helios_snr::{SnrConfig, SnrRange, estimate_snr};
//!
//! let config = SnrConfig::new().with_range(SnrRange::window(1565.0, 1575.0));
//! let estimate = estimate_snr(&table, &config)?;
//! println!("SNR: {:?}", estimate.summary);
//! ```

mod config;
mod error;
mod estimate;
mod flux_check;
mod range;
mod sweep;

pub use config::{SnrAggregation, SnrConfig};
pub use error::SnrError;
pub use estimate::{SegmentSnr, SnrEstimate, estimate_snr};
pub use flux_check::{ErrorColumn, flux_over_error_snr};
pub use range::SnrRange;
pub use sweep::{SweepPoint, snr_binsize_sweep};

//! Bin-size sweep comparing SNR estimates.

use helios_resample::{ReselConfig, bin_by_resel};
use helios_spectrum::SpectralTable;
use serde::Serialize;
use tracing::debug;

use crate::config::SnrConfig;
use crate::error::SnrError;
use crate::estimate::estimate_snr;
use crate::flux_check::{ErrorColumn, flux_over_error_snr};
use crate::range::SnrRange;

/// One row of a bin-size sweep.
///
/// `bin_size == 1` is the unbinned baseline. Entries are `None` when the
/// window was not found (or binning failed) at that bin size.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    /// Number of pixels per bin (1 = unbinned).
    pub bin_size: usize,
    /// Counts-based SNR summary over the window.
    pub counts_snr: Option<f64>,
    /// Pipeline `flux / error` SNR over the window.
    pub flux_error_snr: Option<f64>,
    /// Pipeline `flux / error_lower` SNR over the window.
    pub flux_error_lower_snr: Option<f64>,
}

/// Sweeps bin sizes from the unbinned baseline up to `max_bin`, computing
/// the counts-based SNR and both pipeline flux/error SNRs at each size.
///
/// Bin sizes at which binning fails (for example a segment shorter than one
/// bin) are recorded with `None` entries rather than dropped, so the output
/// always holds `max_bin` rows.
///
/// # Errors
///
/// Returns [`SnrError::InvalidConfig`] if `max_bin < 2` or `window` is not
/// a concrete wavelength window.
#[tracing::instrument(skip_all, fields(max_bin, weighted))]
pub fn snr_binsize_sweep(
    table: &SpectralTable,
    window: SnrRange,
    max_bin: usize,
    weighted: bool,
) -> Result<Vec<SweepPoint>, SnrError> {
    if max_bin < 2 {
        return Err(SnrError::InvalidConfig {
            reason: format!("max_bin must be >= 2, got {max_bin}"),
        });
    }
    if window == SnrRange::Full {
        return Err(SnrError::InvalidConfig {
            reason: "sweep requires a concrete wavelength window".to_string(),
        });
    }

    let snr_config = SnrConfig::new().with_range(window).with_weighted(weighted);

    let mut points = Vec::with_capacity(max_bin);

    let baseline = estimate_snr(table, &snr_config)?;
    points.push(SweepPoint {
        bin_size: 1,
        counts_snr: baseline.summary,
        flux_error_snr: flux_over_error_snr(table, window, ErrorColumn::Upper),
        flux_error_lower_snr: flux_over_error_snr(table, window, ErrorColumn::Lower),
    });

    for bin_size in 2..=max_bin {
        match bin_by_resel(table, &ReselConfig::new().with_bin_size(bin_size)) {
            Ok(binned) => {
                let estimate = estimate_snr(&binned, &snr_config)?;
                points.push(SweepPoint {
                    bin_size,
                    counts_snr: estimate.summary,
                    flux_error_snr: flux_over_error_snr(&binned, window, ErrorColumn::Upper),
                    flux_error_lower_snr: flux_over_error_snr(
                        &binned,
                        window,
                        ErrorColumn::Lower,
                    ),
                });
            }
            Err(e) => {
                debug!(bin_size, error = %e, "recording empty sweep point: binning failed");
                points.push(SweepPoint {
                    bin_size,
                    counts_snr: None,
                    flux_error_snr: None,
                    flux_error_lower_snr: None,
                });
            }
        }
    }

    Ok(points)
}

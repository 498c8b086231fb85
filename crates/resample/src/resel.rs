//! Resolution-element binning of spectral tables.

use helios_spectrum::{Segment, SpectralTable};
use tracing::debug;

use crate::config::{ErrorCombination, ReselConfig};
use crate::downsample::{
    downsample_mean, downsample_quadrature_sum, downsample_sum, downsample_weighted_mean,
};
use crate::error::ResampleError;

/// Replacement weight for pixels where `gcounts / gross` is NaN (0/0, no
/// recorded events). Small enough to suppress the pixel's contribution, but
/// nonzero so an all-NaN bin still averages instead of dividing by zero.
const NAN_WEIGHT: f64 = 1e-30;

/// Derives per-pixel averaging weights from the count columns.
///
/// `gcounts / gross` recovers the effective exposure time of each pixel.
/// Pixels where the ratio is NaN get a negligible weight of 1e-30 instead.
pub fn exposure_weights(gcounts: &[f64], gross: &[f64]) -> Vec<f64> {
    gcounts
        .iter()
        .zip(gross)
        .map(|(&counts, &rate)| {
            let w = counts / rate;
            if w.is_nan() { NAN_WEIGHT } else { w }
        })
        .collect()
}

/// Bins every segment of a spectral table by the configured bin size.
///
/// Per column:
/// - `wavelength`, `flux`: exposure-time weighted mean (or unweighted mean
///   when weighting is disabled);
/// - `error`, `error_lower`: combined per the configured
///   [`ErrorCombination`] strategy;
/// - `gross`, `gcounts`: summed (additive quantities);
/// - `exptime`: carried through unchanged per segment.
///
/// Segment order is preserved. The trailing `len % bin_size` pixels of each
/// segment are cropped.
///
/// # Errors
///
/// Returns [`ResampleError`] if the configuration is invalid or a segment
/// holds fewer pixels than one bin.
#[tracing::instrument(skip_all, fields(bin_size = config.bin_size(), weighted = config.weighted()))]
pub fn bin_by_resel(
    table: &SpectralTable,
    config: &ReselConfig,
) -> Result<SpectralTable, ResampleError> {
    config.validate()?;
    let bin_size = config.bin_size();

    let mut segments = Vec::with_capacity(table.n_segments());
    for (i, seg) in table.segments().iter().enumerate() {
        if seg.len() < bin_size {
            return Err(ResampleError::SegmentTooShort {
                segment: i,
                len: seg.len(),
                bin_size,
            });
        }

        let (wavelength, flux) = if config.weighted() {
            let weights = exposure_weights(seg.gcounts(), seg.gross());
            (
                downsample_weighted_mean(seg.wavelength(), &weights, bin_size)?,
                downsample_weighted_mean(seg.flux(), &weights, bin_size)?,
            )
        } else {
            (
                downsample_mean(seg.wavelength(), bin_size)?,
                downsample_mean(seg.flux(), bin_size)?,
            )
        };

        let (error, error_lower) = match config.error_combination() {
            ErrorCombination::MeanOverSqrtBin => {
                let scale = (bin_size as f64).sqrt();
                let error: Vec<f64> = downsample_mean(seg.error(), bin_size)?
                    .iter()
                    .map(|e| e / scale)
                    .collect();
                let error_lower: Vec<f64> = downsample_mean(seg.error_lower(), bin_size)?
                    .iter()
                    .map(|e| e / scale)
                    .collect();
                (error, error_lower)
            }
            ErrorCombination::QuadratureSum => (
                downsample_quadrature_sum(seg.error(), bin_size)?,
                downsample_quadrature_sum(seg.error_lower(), bin_size)?,
            ),
        };

        let gross = downsample_sum(seg.gross(), bin_size)?;
        let gcounts = downsample_sum(seg.gcounts(), bin_size)?;

        debug!(
            segment = i,
            n_pixels = seg.len(),
            n_bins = gross.len(),
            "binned segment"
        );

        segments.push(Segment::new(
            wavelength,
            flux,
            error,
            error_lower,
            gross,
            gcounts,
            seg.exptime(),
        )?);
    }

    Ok(SpectralTable::new(segments)?)
}

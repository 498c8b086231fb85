//! Pipeline flux/error cross-check for the counts-based SNR estimate.

use helios_spectrum::SpectralTable;

use crate::range::SnrRange;

/// Which pipeline error column supplies the noise term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorColumn {
    /// The upper flux error (`error`).
    #[default]
    Upper,
    /// The lower flux error (`error_lower`).
    Lower,
}

/// Mean of `flux / error` over all pixels in the window, across all
/// segments, skipping non-finite ratios.
///
/// This is the pipeline's own SNR figure, used to cross-check the
/// counts-based estimate from [`estimate_snr`](crate::estimate_snr). Unlike
/// the counts-based estimator it applies no strict-containment gate per
/// segment; the window simply masks pixels.
///
/// Returns `None` when no finite ratio falls inside the window.
pub fn flux_over_error_snr(
    table: &SpectralTable,
    range: SnrRange,
    column: ErrorColumn,
) -> Option<f64> {
    let bounds = range.bounds();
    let mut ratios = Vec::new();
    for seg in table.segments() {
        let errors = match column {
            ErrorColumn::Upper => seg.error(),
            ErrorColumn::Lower => seg.error_lower(),
        };
        for ((&w, &f), &e) in seg.wavelength().iter().zip(seg.flux()).zip(errors) {
            let in_window = bounds.is_none_or(|(lo, hi)| w > lo && w < hi);
            if in_window {
                ratios.push(f / e);
            }
        }
    }
    helios_stats::nan_mean(&ratios)
}

//! Poisson signal-to-noise estimation over spectral tables.

use helios_resample::{ReselConfig, bin_by_resel, exposure_weights};
use helios_spectrum::SpectralTable;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{SnrAggregation, SnrConfig};
use crate::error::SnrError;

/// Per-segment outcome of an SNR query.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SegmentSnr {
    /// The queried range lies inside this segment's wavelength coverage.
    InRange {
        /// Index of the segment in the input table.
        segment: usize,
        /// Wavelengths of the selected pixels.
        wavelength: Vec<f64>,
        /// Per-pixel SNR, `sqrt(gcounts)`.
        snr: Vec<f64>,
    },
    /// The queried range is not strictly inside this segment's coverage.
    OutOfRange {
        /// Index of the segment in the input table.
        segment: usize,
    },
}

/// Result of [`estimate_snr`].
#[derive(Debug, Clone, Serialize)]
pub struct SnrEstimate {
    /// Scalar summary SNR over the window. `None` for full-spectrum queries
    /// and for windows not found on any segment.
    pub summary: Option<f64>,
    /// Number of segments whose coverage contains the window. More than one
    /// indicates grating overlap; with the last-segment aggregation the
    /// summary then reflects only the last match.
    pub segments_found: usize,
    /// Per-segment details, in table order.
    pub segments: Vec<SegmentSnr>,
}

/// Estimates the signal-to-noise ratio of a spectral table, assuming Poisson
/// noise: per-pixel SNR is `sqrt(gcounts)`.
///
/// With [`SnrRange::Full`](crate::SnrRange::Full) every pixel of every
/// segment is reported and no scalar summary is computed. With a concrete
/// window, a segment contributes only if the window lies strictly inside its
/// wavelength coverage; the scalar summary is the (optionally exposure-time
/// weighted) mean of `sqrt(gcounts)` over the selected pixels, aggregated
/// across matching segments per the configured [`SnrAggregation`].
///
/// Out-of-range windows are non-fatal: unmatched segments are recorded as
/// [`SegmentSnr::OutOfRange`] and the summary stays `None`.
///
/// # Errors
///
/// Returns [`SnrError`] if the configuration is invalid or the optional
/// pre-binning step fails.
#[tracing::instrument(skip_all, fields(range = ?config.range(), weighted = config.weighted(), bin_first = config.bin_first()))]
pub fn estimate_snr(table: &SpectralTable, config: &SnrConfig) -> Result<SnrEstimate, SnrError> {
    config.validate()?;

    let binned;
    let table = if config.bin_first() {
        debug!(bin_size = config.bin_size(), "binning before SNR estimation");
        binned = bin_by_resel(table, &ReselConfig::new().with_bin_size(config.bin_size()))?;
        &binned
    } else {
        table
    };

    let Some((lo, hi)) = config.range().bounds() else {
        debug!("no window specified, estimating over the whole spectrum");
        let segments = table
            .segments()
            .iter()
            .enumerate()
            .map(|(i, seg)| SegmentSnr::InRange {
                segment: i,
                wavelength: seg.wavelength().to_vec(),
                snr: seg.gcounts().iter().map(|&c| c.sqrt()).collect(),
            })
            .collect();
        return Ok(SnrEstimate {
            summary: None,
            segments_found: table.n_segments(),
            segments,
        });
    };

    let mut segments = Vec::with_capacity(table.n_segments());
    // Per matching segment: (scalar estimate, total in-window gcounts).
    let mut matches: Vec<(f64, f64)> = Vec::new();

    for (i, seg) in table.segments().iter().enumerate() {
        let (seg_lo, seg_hi) = seg.wavelength_bounds();
        if !(lo > seg_lo && hi < seg_hi) {
            debug!(
                segment = i,
                low = seg_lo,
                high = seg_hi,
                "window out of range on segment"
            );
            segments.push(SegmentSnr::OutOfRange { segment: i });
            continue;
        }

        let mut wavelength = Vec::new();
        let mut gcounts = Vec::new();
        let mut gross = Vec::new();
        for ((&w, &c), &r) in seg
            .wavelength()
            .iter()
            .zip(seg.gcounts())
            .zip(seg.gross())
        {
            if w > lo && w < hi {
                wavelength.push(w);
                gcounts.push(c);
                gross.push(r);
            }
        }

        let snr: Vec<f64> = gcounts.iter().map(|&c| c.sqrt()).collect();
        let scalar = if snr.is_empty() {
            None
        } else if config.weighted() {
            let weights = exposure_weights(&gcounts, &gross);
            helios_stats::weighted_mean(&snr, &weights)
        } else {
            Some(helios_stats::mean(&snr))
        };

        debug!(
            segment = i,
            low = seg_lo,
            high = seg_hi,
            n_pixels = snr.len(),
            scalar,
            "window in range on segment"
        );

        if let Some(s) = scalar {
            matches.push((s, gcounts.iter().sum()));
        }
        segments.push(SegmentSnr::InRange {
            segment: i,
            wavelength,
            snr,
        });
    }

    let segments_found = segments
        .iter()
        .filter(|s| matches!(s, SegmentSnr::InRange { .. }))
        .count();

    if segments_found == 0 {
        warn!(low = lo, high = hi, "window not found on any segment");
    }
    if segments_found > 1 && config.aggregation() == SnrAggregation::LastSegment {
        warn!(
            segments_found,
            "window found on multiple segments; the summary reflects only the last match"
        );
    }

    let summary = match config.aggregation() {
        SnrAggregation::LastSegment => matches.last().map(|&(scalar, _)| scalar),
        SnrAggregation::CountsWeighted => {
            let scalars: Vec<f64> = matches.iter().map(|&(scalar, _)| scalar).collect();
            let counts: Vec<f64> = matches.iter().map(|&(_, counts)| counts).collect();
            helios_stats::weighted_mean(&scalars, &counts)
        }
    };

    Ok(SnrEstimate {
        summary,
        segments_found,
        segments,
    })
}

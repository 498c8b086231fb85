//! Array downsampling primitives.
//!
//! All functions group consecutive runs of `factor` samples into one output
//! sample, cropping the trailing `len % factor` samples. The output length is
//! therefore always `len / factor` (integer division), never rounded up.

use crate::error::ResampleError;

fn check_bin_size(factor: usize) -> Result<(), ResampleError> {
    if factor < 2 {
        return Err(ResampleError::InvalidBinSize { bin_size: factor });
    }
    Ok(())
}

/// Downsamples by summing each run of `factor` samples.
///
/// Used for additive quantities such as raw counts and gross count rate.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidBinSize`] if `factor` is 0 or 1.
pub fn downsample_sum(values: &[f64], factor: usize) -> Result<Vec<f64>, ResampleError> {
    check_bin_size(factor)?;
    Ok(values
        .chunks_exact(factor)
        .map(|bin| bin.iter().sum())
        .collect())
}

/// Downsamples by taking the unweighted mean of each run of `factor` samples.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidBinSize`] if `factor` is 0 or 1.
pub fn downsample_mean(values: &[f64], factor: usize) -> Result<Vec<f64>, ResampleError> {
    check_bin_size(factor)?;
    Ok(values
        .chunks_exact(factor)
        .map(|bin| bin.iter().sum::<f64>() / factor as f64)
        .collect())
}

/// Downsamples by taking the weighted mean `Σ(v·w) / Σ(w)` of each run of
/// `factor` samples.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidBinSize`] if `factor` is 0 or 1,
/// [`ResampleError::LengthMismatch`] if `weights` differs in length from
/// `values`, or [`ResampleError::ZeroWeightBin`] if the weights of a bin sum
/// to exactly zero.
pub fn downsample_weighted_mean(
    values: &[f64],
    weights: &[f64],
    factor: usize,
) -> Result<Vec<f64>, ResampleError> {
    check_bin_size(factor)?;
    if weights.len() != values.len() {
        return Err(ResampleError::LengthMismatch {
            field: "weights",
            expected: values.len(),
            got: weights.len(),
        });
    }

    let mut out = Vec::with_capacity(values.len() / factor);
    for (bin, (vs, ws)) in values
        .chunks_exact(factor)
        .zip(weights.chunks_exact(factor))
        .enumerate()
    {
        let total: f64 = ws.iter().sum();
        if total == 0.0 {
            return Err(ResampleError::ZeroWeightBin { bin });
        }
        let weighted_sum: f64 = vs.iter().zip(ws).map(|(v, w)| v * w).sum();
        out.push(weighted_sum / total);
    }
    Ok(out)
}

/// Downsamples error-like quantities in quadrature: squares the input, sums
/// each run of `factor` samples, and square-roots the result.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidBinSize`] if `factor` is 0 or 1.
pub fn downsample_quadrature_sum(
    values: &[f64],
    factor: usize,
) -> Result<Vec<f64>, ResampleError> {
    check_bin_size(factor)?;
    Ok(values
        .chunks_exact(factor)
        .map(|bin| bin.iter().map(|v| v * v).sum::<f64>().sqrt())
        .collect())
}

/// Downsamples error-like quantities in quadrature with a mean: squares the
/// input, averages each run of `factor` samples, and square-roots the result.
///
/// For a constant input this returns the constant back.
///
/// # Errors
///
/// Returns [`ResampleError::InvalidBinSize`] if `factor` is 0 or 1.
pub fn downsample_quadrature_mean(
    values: &[f64],
    factor: usize,
) -> Result<Vec<f64>, ResampleError> {
    check_bin_size(factor)?;
    Ok(values
        .chunks_exact(factor)
        .map(|bin| (bin.iter().map(|v| v * v).sum::<f64>() / factor as f64).sqrt())
        .collect())
}

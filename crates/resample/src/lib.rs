//! Array downsampling and resolution-element binning for the helios toolkit.
//!
//! Detector pixels oversample the instrument's line-spread function; a
//! resolution element ("resel", 6 pixels for the FUV channel) is the smallest
//! independent sample. This crate provides the 1-D downsampling primitives
//! and the table-level binner that reduce per-pixel spectra to per-resel
//! spectra.
//!
//! # Quick start
//!
//! ```ignore
//! use helios_resample::{ReselConfig, bin_by_resel};
//!
//! let config = ReselConfig::new().with_bin_size(6);
//! let binned = bin_by_resel(&table, &config)?;
//! ```

mod config;
mod downsample;
mod error;
mod resel;

pub use config::{ErrorCombination, ReselConfig};
pub use downsample::{
    downsample_mean, downsample_quadrature_mean, downsample_quadrature_sum, downsample_sum,
    downsample_weighted_mean,
};
pub use error::ResampleError;
pub use resel::{bin_by_resel, exposure_weights};

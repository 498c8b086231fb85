//! Bin command: resolution-element binning of a spectral table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use helios_io::{read_csv, write_csv};
use helios_resample::bin_by_resel;

use crate::cli::BinArgs;
use crate::config;
use crate::convert;

/// Run the binning pipeline.
pub fn run(args: BinArgs) -> Result<()> {
    let _cmd = info_span!("bin").entered();

    let cfg = config::load(args.config.as_deref())?;
    let resel = convert::build_resel_config(&cfg.bin, &args)?;

    info!(path = %args.input.display(), "reading spectral table");
    let table = read_csv(&args.input)
        .with_context(|| format!("failed to read spectral table: {}", args.input.display()))?;
    info!(
        n_segments = table.n_segments(),
        n_pixels = table.n_pixels(),
        "spectral table loaded"
    );

    let binned = bin_by_resel(&table, &resel).context("binning failed")?;
    info!(
        bin_size = resel.bin_size(),
        n_pixels = binned.n_pixels(),
        "table binned"
    );

    write_csv(&args.output, &binned)
        .with_context(|| format!("failed to write binned table: {}", args.output.display()))?;
    info!(path = %args.output.display(), "binned table written");

    Ok(())
}

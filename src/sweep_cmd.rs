//! Sweep command: SNR comparison across bin sizes.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use helios_io::read_csv;
use helios_snr::snr_binsize_sweep;

use crate::cli::SweepArgs;
use crate::config;
use crate::convert;

/// Run the bin-size sweep pipeline.
pub fn run(args: SweepArgs) -> Result<()> {
    let _cmd = info_span!("sweep").entered();

    let cfg = config::load(args.config.as_deref())?;
    let window = convert::parse_range(&args.range)?;
    let max_bin = args.max_bin.unwrap_or(cfg.sweep.max_bin);
    let weighted = args.weighted || cfg.sweep.weighted;

    info!(path = %args.input.display(), "reading spectral table");
    let table = read_csv(&args.input)
        .with_context(|| format!("failed to read spectral table: {}", args.input.display()))?;
    info!(
        n_segments = table.n_segments(),
        n_pixels = table.n_pixels(),
        "spectral table loaded"
    );

    let points = snr_binsize_sweep(&table, window, max_bin, weighted).context("sweep failed")?;
    info!(n_points = points.len(), max_bin, "sweep complete");

    let json = serde_json::to_string_pretty(&points).context("failed to serialize sweep")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write sweep: {}", path.display()))?;
            info!(path = %path.display(), "sweep written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

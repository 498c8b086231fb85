//! Snr command: signal-to-noise estimation over a wavelength window.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use helios_io::read_csv;
use helios_snr::estimate_snr;

use crate::cli::SnrArgs;
use crate::config;
use crate::convert;

/// Run the SNR estimation pipeline.
pub fn run(args: SnrArgs) -> Result<()> {
    let _cmd = info_span!("snr").entered();

    let cfg = config::load(args.config.as_deref())?;
    let snr_config = convert::build_snr_config(&cfg.snr, &args)?;

    info!(path = %args.input.display(), "reading spectral table");
    let table = read_csv(&args.input)
        .with_context(|| format!("failed to read spectral table: {}", args.input.display()))?;
    info!(
        n_segments = table.n_segments(),
        n_pixels = table.n_pixels(),
        "spectral table loaded"
    );

    let estimate = estimate_snr(&table, &snr_config).context("SNR estimation failed")?;
    match estimate.summary {
        Some(summary) => info!(
            summary,
            segments_found = estimate.segments_found,
            "SNR estimated"
        ),
        None => warn!(
            segments_found = estimate.segments_found,
            "no scalar summary (full-spectrum query or window not found)"
        ),
    }

    let json = serde_json::to_string_pretty(&estimate).context("failed to serialize estimate")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write estimate: {}", path.display()))?;
            info!(path = %path.display(), "estimate written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

//! Mapping from TOML/CLI settings to library configurations.

use anyhow::{Result, bail};

use helios_resample::{ErrorCombination, ReselConfig};
use helios_snr::{SnrAggregation, SnrConfig, SnrRange};

use crate::cli::{BinArgs, SnrArgs};
use crate::config::{BinToml, SnrToml};

/// Build a [`ReselConfig`] from the TOML section with CLI overrides applied.
pub fn build_resel_config(toml: &BinToml, args: &BinArgs) -> Result<ReselConfig> {
    let strategy = args
        .error_combination
        .as_deref()
        .unwrap_or(&toml.error_combination);
    let config = ReselConfig::new()
        .with_bin_size(args.bin_size.unwrap_or(toml.bin_size))
        .with_weighted(if args.unweighted { false } else { toml.weighted })
        .with_error_combination(parse_error_combination(strategy)?);
    config.validate()?;
    Ok(config)
}

/// Build an [`SnrConfig`] from the TOML section with CLI overrides applied.
pub fn build_snr_config(toml: &SnrToml, args: &SnrArgs) -> Result<SnrConfig> {
    let range = match (&args.range, toml.range) {
        (Some(cli_range), _) => parse_range(cli_range)?,
        (None, Some([start, end])) => SnrRange::window(start, end),
        (None, None) => SnrRange::Full,
    };
    let aggregation = args.aggregation.as_deref().unwrap_or(&toml.aggregation);
    let config = SnrConfig::new()
        .with_range(range)
        .with_weighted(args.weighted || toml.weighted)
        .with_bin_first(args.bin_first || toml.bin_first)
        .with_bin_size(args.bin_size.unwrap_or(toml.bin_size))
        .with_aggregation(parse_aggregation(aggregation)?);
    config.validate()?;
    Ok(config)
}

/// Parse a two-element CLI range into a wavelength window.
pub fn parse_range(range: &[f64]) -> Result<SnrRange> {
    match range {
        [start, end] => Ok(SnrRange::window(*start, *end)),
        other => bail!("expected exactly 2 range values, got {}", other.len()),
    }
}

fn parse_error_combination(s: &str) -> Result<ErrorCombination> {
    match s {
        "mean-sqrt" => Ok(ErrorCombination::MeanOverSqrtBin),
        "quadrature" => Ok(ErrorCombination::QuadratureSum),
        other => bail!(
            "unknown error combination '{other}' (expected 'mean-sqrt' or 'quadrature')"
        ),
    }
}

fn parse_aggregation(s: &str) -> Result<SnrAggregation> {
    match s {
        "last-segment" => Ok(SnrAggregation::LastSegment),
        "counts-weighted" => Ok(SnrAggregation::CountsWeighted),
        other => bail!(
            "unknown aggregation '{other}' (expected 'last-segment' or 'counts-weighted')"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_combination_values() {
        assert_eq!(
            parse_error_combination("mean-sqrt").unwrap(),
            ErrorCombination::MeanOverSqrtBin
        );
        assert_eq!(
            parse_error_combination("quadrature").unwrap(),
            ErrorCombination::QuadratureSum
        );
        assert!(parse_error_combination("rms").is_err());
    }

    #[test]
    fn parse_aggregation_values() {
        assert_eq!(
            parse_aggregation("last-segment").unwrap(),
            SnrAggregation::LastSegment
        );
        assert_eq!(
            parse_aggregation("counts-weighted").unwrap(),
            SnrAggregation::CountsWeighted
        );
        assert!(parse_aggregation("mean").is_err());
    }

    #[test]
    fn parse_range_two_values() {
        assert_eq!(
            parse_range(&[1565.0, 1575.0]).unwrap(),
            SnrRange::window(1565.0, 1575.0)
        );
        assert!(parse_range(&[1565.0]).is_err());
    }
}

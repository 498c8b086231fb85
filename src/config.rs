use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level helios configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HeliosConfig {
    /// Binning settings.
    #[serde(default)]
    pub bin: BinToml,

    /// SNR estimation settings.
    #[serde(default)]
    pub snr: SnrToml,

    /// Bin-size sweep settings.
    #[serde(default)]
    pub sweep: SweepToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinToml {
    #[serde(default = "default_bin_size")]
    pub bin_size: usize,
    #[serde(default = "default_true")]
    pub weighted: bool,
    #[serde(default = "default_error_combination")]
    pub error_combination: String,
}

impl Default for BinToml {
    fn default() -> Self {
        Self {
            bin_size: default_bin_size(),
            weighted: true,
            error_combination: default_error_combination(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnrToml {
    #[serde(default)]
    pub range: Option<[f64; 2]>,
    #[serde(default)]
    pub weighted: bool,
    #[serde(default)]
    pub bin_first: bool,
    #[serde(default = "default_bin_size")]
    pub bin_size: usize,
    #[serde(default = "default_aggregation")]
    pub aggregation: String,
}

impl Default for SnrToml {
    fn default() -> Self {
        Self {
            range: None,
            weighted: false,
            bin_first: false,
            bin_size: default_bin_size(),
            aggregation: default_aggregation(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepToml {
    #[serde(default = "default_max_bin")]
    pub max_bin: usize,
    #[serde(default)]
    pub weighted: bool,
}

impl Default for SweepToml {
    fn default() -> Self {
        Self {
            max_bin: default_max_bin(),
            weighted: false,
        }
    }
}

fn default_bin_size() -> usize {
    6
}
fn default_true() -> bool {
    true
}
fn default_error_combination() -> String {
    "mean-sqrt".to_string()
}
fn default_aggregation() -> String {
    "last-segment".to_string()
}
fn default_max_bin() -> usize {
    30
}

/// Load the TOML configuration file, or defaults if no path was given.
pub fn load(path: Option<&Path>) -> Result<HeliosConfig> {
    let Some(path) = path else {
        return Ok(HeliosConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = HeliosConfig::default();
        assert_eq!(cfg.bin.bin_size, 6);
        assert!(cfg.bin.weighted);
        assert_eq!(cfg.bin.error_combination, "mean-sqrt");
        assert!(cfg.snr.range.is_none());
        assert!(!cfg.snr.weighted);
        assert_eq!(cfg.snr.aggregation, "last-segment");
        assert_eq!(cfg.sweep.max_bin, 30);
    }

    #[test]
    fn parses_partial_toml() {
        let cfg: HeliosConfig = toml::from_str(
            r#"
            [bin]
            bin_size = 3

            [snr]
            range = [1565.0, 1575.0]
            weighted = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.bin.bin_size, 3);
        assert!(cfg.bin.weighted);
        assert_eq!(cfg.snr.range, Some([1565.0, 1575.0]));
        assert!(cfg.snr.weighted);
        assert_eq!(cfg.sweep.max_bin, 30);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: std::result::Result<HeliosConfig, _> = toml::from_str(
            r#"
            [bin]
            binsize = 3
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_without_path_gives_defaults() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg.bin.bin_size, 6);
    }
}

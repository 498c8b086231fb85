use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Helios far-UV spectral reduction toolkit.
#[derive(Parser)]
#[command(
    name = "helios",
    version,
    about = "Resolution-element binning and SNR estimation for far-UV spectra"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Bin a spectral table by the resolution element.
    Bin(BinArgs),
    /// Estimate signal-to-noise over a wavelength window.
    Snr(SnrArgs),
    /// Sweep bin sizes and compare SNR estimates.
    Sweep(SweepArgs),
}

/// Arguments for the `bin` subcommand.
#[derive(clap::Args)]
pub struct BinArgs {
    /// Path to input spectral CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for binned output CSV file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the bin size from config.
    #[arg(long)]
    pub bin_size: Option<usize>,

    /// Disable exposure-time weighting of wavelength and flux.
    #[arg(long)]
    pub unweighted: bool,

    /// Override the error combination strategy ("mean-sqrt" or "quadrature").
    #[arg(long)]
    pub error_combination: Option<String>,
}

/// Arguments for the `snr` subcommand.
#[derive(clap::Args)]
pub struct SnrArgs {
    /// Path to input spectral CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wavelength window as two values: start end. Omit for the whole spectrum.
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    pub range: Option<Vec<f64>>,

    /// Weight the summary by per-pixel effective exposure time.
    #[arg(long)]
    pub weighted: bool,

    /// Bin by the resolution element before estimating.
    #[arg(long)]
    pub bin_first: bool,

    /// Override the bin size used with --bin-first.
    #[arg(long)]
    pub bin_size: Option<usize>,

    /// Override the multi-segment aggregation ("last-segment" or "counts-weighted").
    #[arg(long)]
    pub aggregation: Option<String>,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `sweep` subcommand.
#[derive(clap::Args)]
pub struct SweepArgs {
    /// Path to input spectral CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wavelength window as two values: start end.
    #[arg(long, num_args = 2, value_names = ["START", "END"], required = true)]
    pub range: Vec<f64>,

    /// Override the largest bin size from config.
    #[arg(long)]
    pub max_bin: Option<usize>,

    /// Weight the counts-based summary by effective exposure time.
    #[arg(long)]
    pub weighted: bool,

    /// Path for JSON output (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

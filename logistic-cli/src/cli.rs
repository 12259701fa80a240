use clap::{ArgAction, Args, Parser, Subcommand};
use logistic_map::BifurcationConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "logistic",
    about = "Logistic map time series, bifurcation diagrams and model fits",
    version
)]
pub struct Cli {
    /// Raise log verbosity, repeat for more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory to write figures to
    #[arg(short, long, value_name = "DIR", default_value = "figures", global = true)]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log level filter for the given number of `-v` flags, `RUST_LOG` is used if there are none
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(log::LevelFilter::Info),
            2 => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plot x[n] against n for several growth rates
    TimeSeries(TimeSeriesArgs),
    /// Sample and plot the bifurcation diagram
    Bifurcation(BifurcationArgs),
    /// Fit stopping voltage against frequency and estimate the Planck constant
    Millikan(MillikanArgs),
    /// Plot bacterial response curves, optionally fitting W(t) to data
    Bacteria(BacteriaArgs),
    /// Plot viral load curves, optionally fitting the model to data
    Hiv(HivArgs),
}

#[derive(Debug, Args)]
pub struct TimeSeriesArgs {
    /// Growth rate, repeat for several figures
    #[arg(short, long = "r", value_name = "R", default_values_t = [2.0, 3.2, 3.45, 3.6])]
    pub r: Vec<f64>,

    #[arg(long, default_value_t = 0.5)]
    pub x0: f64,

    /// Number of points including x0
    #[arg(short, default_value_t = 100)]
    pub n: usize,
}

/// Every flag overrides the corresponding value of the config file
#[derive(Debug, Default, Args)]
pub struct BifurcationArgs {
    /// TOML file with bifurcation settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub r_min: Option<f64>,

    #[arg(long)]
    pub r_max: Option<f64>,

    /// Number of growth rates
    #[arg(long)]
    pub n_r: Option<usize>,

    #[arg(long)]
    pub n_iterations: Option<usize>,

    /// Number of transient iterations dropped for every growth rate
    #[arg(long)]
    pub n_discard: Option<usize>,

    #[arg(long)]
    pub initial_value: Option<f64>,

    /// Number of threads, 0 uses all available cores
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

impl BifurcationArgs {
    pub fn apply(&self, config: BifurcationConfig) -> BifurcationConfig {
        BifurcationConfig {
            r_min: self.r_min.unwrap_or(config.r_min),
            r_max: self.r_max.unwrap_or(config.r_max),
            n_r: self.n_r.unwrap_or(config.n_r),
            n_iterations: self.n_iterations.unwrap_or(config.n_iterations),
            n_discard: self.n_discard.unwrap_or(config.n_discard),
            initial_value: self.initial_value.unwrap_or(config.initial_value),
            n_jobs: self.jobs.unwrap_or(config.n_jobs),
        }
    }
}

#[derive(Debug, Args)]
pub struct MillikanArgs {
    /// Two whitespace or comma separated columns: frequency (Hz) and voltage (V)
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct BacteriaArgs {
    /// Two columns: time (h) and response
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Only points with t <= t-max are fitted
    #[arg(long, default_value_t = 10.0)]
    pub t_max: f64,

    /// Initial amplitude of the fit
    #[arg(long, default_value_t = 1.2)]
    pub a: f64,

    /// Initial time constant of the fit
    #[arg(long, default_value_t = 1.5)]
    pub tau: f64,
}

#[derive(Debug, Args)]
pub struct HivArgs {
    /// Two columns: time (days) and viral load
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

use logistic_fit::{DataError, FitError};
use logistic_map::{BifurcationError, TrajectoryError};
use logistic_plot::PlotError;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MainError {
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    #[error(transparent)]
    Bifurcation(#[from] BifurcationError),

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("cannot read config file {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot initialise logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

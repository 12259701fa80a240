use std::path::PathBuf;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FitError {
    #[error("input data cannot be empty")]
    EmptyInput,

    #[error("x and y arrays must have the same length, got {x} and {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("cannot calculate parameters: all x values are equal")]
    ZeroDenominator,

    #[error("slope must be positive, got {0}")]
    NonPositiveSlope(f64),

    #[error("fit parameters are not finite: {0:?}")]
    NonFiniteParameters(Vec<f64>),
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported data format of {}, only delimited text files can be loaded", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: cannot parse {value:?} as a number")]
    ParseFloat {
        line: usize,
        value: String,
        source: std::num::ParseFloatError,
    },

    #[error("line {line}: two columns required, {found} found")]
    NotEnoughColumns { line: usize, found: usize },

    #[error("no data rows found in {}", .0.display())]
    Empty(PathBuf),
}

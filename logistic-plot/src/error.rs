use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("x and y of a series must have the same length, got {x} and {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("figure {0:?} has no finite points to draw")]
    EmptyFigure(String),

    #[error("cannot create output directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("drawing error: {0}")]
    Drawing(String),
}

//! Plain-data figures of logistic map and fitting results and their PNG rendering

mod builders;
pub use builders::{
    bifurcation_figure, data_series, model_curve, straight_line_figure, time_series_figure,
};

mod error;
pub use error::PlotError;

mod figure;
pub use figure::{finite_range, Figure, Series, SeriesStyle};

mod render;
pub use render::{PngRenderer, Renderer};

use crate::figure::{Figure, Series, SeriesStyle};

use logistic_fit::{Columns, ParametricModel, StraightLineFit};
use logistic_map::{BifurcationCloud, Float, Trajectory};
use num_traits::ToPrimitive;

const BLACK: (u8, u8, u8) = (0, 0, 0);

fn to_f64<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// `x[i]` against the iteration number `i`
pub fn time_series_figure<T: Float>(trajectory: &Trajectory<T>) -> Figure {
    let r = to_f64(trajectory.r());
    let series = Series::from_pairs(
        trajectory
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, &x)| (i as f64, to_f64(x))),
        SeriesStyle::Line,
    )
    .with_label(format!("r = {:?}", r));
    Figure::new(
        format!("Logistic Map Time Series (r = {:?})", r),
        "Iteration",
        "x",
    )
    .with_series(series)
}

pub fn bifurcation_figure<T: Float>(cloud: &BifurcationCloud<T>) -> Figure {
    let series = Series::from_pairs(
        cloud.points().map(|(r, x)| (to_f64(r), to_f64(x))),
        SeriesStyle::Points { size: 1 },
    )
    .with_color(BLACK);
    Figure::new("Logistic Map Bifurcation Diagram", "r", "x").with_series(series)
}

/// Measured points and the fitted line evaluated at the same frequencies
pub fn straight_line_figure(x: &[f64], y: &[f64], fit: &StraightLineFit) -> Figure {
    let data = Series::from_pairs(
        x.iter().copied().zip(y.iter().copied()),
        SeriesStyle::Points { size: 3 },
    )
    .with_label("Experimental Data");
    let line = Series::curve(x, |x| fit.eval(x)).with_label("Fitted Line");
    Figure::new(
        "Millikan Photoelectric Experiment",
        "Frequency (Hz)",
        "Voltage (V)",
    )
    .with_series(data)
    .with_series(line)
}

pub fn model_curve<M, const NPARAMS: usize>(label: &str, model: &M, t: &[f64]) -> Series
where
    M: ParametricModel<NPARAMS>,
{
    Series::curve(t, |t| model.eval(t)).with_label(label)
}

pub fn data_series(columns: &Columns) -> Series {
    Series::from_pairs(
        columns.x.iter().copied().zip(columns.y.iter().copied()),
        SeriesStyle::Points { size: 3 },
    )
    .with_label("Experimental Data")
    .with_color(BLACK)
}

use crate::error::PlotError;

use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeriesStyle {
    /// Scatter of filled circles with the given radius in pixels
    Points { size: u32 },
    Line,
}

/// One data series of a figure, colour is picked from a palette if not set
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: SeriesStyle,
    pub color: Option<(u8, u8, u8)>,
}

impl Series {
    fn new(x: Vec<f64>, y: Vec<f64>, style: SeriesStyle) -> Result<Self, PlotError> {
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self {
            label: None,
            x,
            y,
            style,
            color: None,
        })
    }

    pub fn points(x: Vec<f64>, y: Vec<f64>, size: u32) -> Result<Self, PlotError> {
        Self::new(x, y, SeriesStyle::Points { size })
    }

    pub fn line(x: Vec<f64>, y: Vec<f64>) -> Result<Self, PlotError> {
        Self::new(x, y, SeriesStyle::Line)
    }

    pub fn from_pairs<I>(pairs: I, style: SeriesStyle) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y) = pairs.into_iter().unzip();
        Self {
            label: None,
            x,
            y,
            style,
            color: None,
        }
    }

    /// Line through `(t, f(t))`
    pub fn curve<F>(t: &[f64], f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self::from_pairs(t.iter().map(|&t| (t, f(t))), SeriesStyle::Line)
    }

    pub fn with_label<S: Into<String>>(self, label: S) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    pub fn with_color(self, color: (u8, u8, u8)) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points with both coordinates finite, others are never drawn
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x
            .iter()
            .copied()
            .zip(self.y.iter().copied())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

/// Smallest range covering all finite values with a small margin on both sides
///
/// `None` if there are no finite values.
pub fn finite_range<I>(values: I) -> Option<Range<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|x| x.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, x| match acc {
            None => Some((x, x)),
            Some((min, max)) => Some((min.min(x), max.max(x))),
        })?;
    let margin = if max > min {
        0.02 * (max - min)
    } else {
        f64::max(0.5 * min.abs(), 0.5)
    };
    Some(min - margin..max + margin)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Width and height in pixels
    pub size: (u32, u32),
}

impl Figure {
    pub fn new<S1, S2, S3>(title: S1, x_label: S2, y_label: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: vec![],
            size: (1000, 600),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..self
        }
    }

    pub fn x_range(&self) -> Result<Range<f64>, PlotError> {
        finite_range(
            self.series
                .iter()
                .flat_map(|s| s.finite_points().map(|(x, _)| x)),
        )
        .ok_or_else(|| PlotError::EmptyFigure(self.title.clone()))
    }

    pub fn y_range(&self) -> Result<Range<f64>, PlotError> {
        finite_range(
            self.series
                .iter()
                .flat_map(|s| s.finite_points().map(|(_, y)| y)),
        )
        .ok_or_else(|| PlotError::EmptyFigure(self.title.clone()))
    }
}

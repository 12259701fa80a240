use crate::error::PlotError;
use crate::figure::{Figure, SeriesStyle};

use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Consumer of figures, owns every display or export side effect
pub trait Renderer {
    fn render(&mut self, name: &str, figure: &Figure) -> Result<(), PlotError>;
}

fn drawing<E: std::error::Error>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}

/// Writes every figure to `<dir>/<name>.png`
#[derive(Clone, Debug)]
pub struct PngRenderer {
    dir: PathBuf,
}

impl PngRenderer {
    /// Creates the output directory if it does not exist
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self, PlotError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| PlotError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", name))
    }

    fn draw(path: &Path, figure: &Figure) -> Result<(), PlotError> {
        let x_range = figure.x_range()?;
        let y_range = figure.y_range()?;

        let root = BitMapBackend::new(path, figure.size).into_drawing_area();
        root.fill(&WHITE).map_err(drawing)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40);
        if !figure.title.is_empty() {
            builder.caption(&figure.title, ("sans-serif", 20));
        }
        let mut chart = builder.build_cartesian_2d(x_range, y_range).map_err(drawing)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .draw()
            .map_err(drawing)?;

        let mut has_labels = false;
        for (i, series) in figure.series.iter().enumerate() {
            let color = match series.color {
                Some((r, g, b)) => RGBColor(r, g, b).to_rgba(),
                None => Palette99::pick(i).to_rgba(),
            };
            let annotation = match series.style {
                SeriesStyle::Points { size } => chart.draw_series(
                    series
                        .finite_points()
                        .map(|point| Circle::new(point, size, color.filled())),
                ),
                SeriesStyle::Line => {
                    chart.draw_series(LineSeries::new(series.finite_points(), &color))
                }
            }
            .map_err(drawing)?;
            if let Some(label) = &series.label {
                has_labels = true;
                annotation
                    .label(label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
            }
        }

        if has_labels {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(drawing)?;
        }

        root.present().map_err(drawing)?;
        Ok(())
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, name: &str, figure: &Figure) -> Result<(), PlotError> {
        let path = self.path(name);
        Self::draw(&path, figure)?;
        log::info!("figure {:?} saved to {}", figure.title, path.display());
        Ok(())
    }
}

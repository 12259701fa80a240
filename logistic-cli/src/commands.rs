use crate::cli::{BacteriaArgs, BifurcationArgs, HivArgs, MillikanArgs, TimeSeriesArgs};
use crate::error::MainError;

use logistic_common::linspace;
use logistic_fit::{
    fit_model, fit_straight_line, load_columns, planck_constant, BacteriaModel, Columns, HivModel,
    ModelFit, NelderMead, PlanckEstimate, StraightLineFit,
};
use logistic_map::{BifurcationCloud, BifurcationConfig, LogisticMap};
use logistic_plot::{
    bifurcation_figure, data_series, finite_range, model_curve, straight_line_figure,
    time_series_figure, Figure, Renderer,
};
use std::path::Path;

const BACTERIA_REFERENCE_MODELS: [(f64, f64); 3] = [(1.0, 1.0), (2.0, 1.0), (1.0, 2.0)];

const HIV_REFERENCE_MODELS: [(f64, f64, f64, f64); 4] = [
    (1.0, 1.0, 0.0, 0.0),
    (1.0, 2.0, 0.0, 0.0),
    (1.0, 1.0, 0.5, 0.5),
    (1.0, 1.0, 0.5, 2.0),
];

const HIV_INITIAL_GUESS: HivModel = HivModel {
    a: 1.0,
    alpha: 1.0,
    b: 0.5,
    beta: 0.5,
};

/// Figure name of a time series, `logistic_r3.45`
pub fn time_series_name(r: f64) -> String {
    format!("logistic_r{:?}", r)
}

pub fn time_series<R: Renderer>(
    args: &TimeSeriesArgs,
    renderer: &mut R,
) -> Result<(), MainError> {
    for &r in args.r.iter() {
        let trajectory = LogisticMap::new(r).trajectory(args.x0, args.n)?;
        log::debug!("r = {}: x[{}] = {}", r, args.n - 1, trajectory.last());
        renderer.render(&time_series_name(r), &time_series_figure(&trajectory))?;
    }
    Ok(())
}

/// Defaults, then the TOML file, if any
pub fn load_config(path: Option<&Path>) -> Result<BifurcationConfig, MainError> {
    let path = match path {
        Some(path) => path,
        None => return Ok(BifurcationConfig::default()),
    };
    let content = std::fs::read_to_string(path).map_err(|source| MainError::ConfigIo {
        path: path.to_owned(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| MainError::Config {
        path: path.to_owned(),
        source,
    })
}

pub fn bifurcation<R: Renderer>(
    args: &BifurcationArgs,
    renderer: &mut R,
) -> Result<BifurcationCloud<f64>, MainError> {
    let config = args.apply(load_config(args.config.as_deref())?);
    log::info!("bifurcation settings: {:?}", config);
    let bifurcation = config.build()?;
    let cloud = match config.n_jobs {
        1 => bifurcation.sample(),
        n_jobs => bifurcation.sample_parallel(n_jobs)?,
    };
    if cloud.is_empty() {
        log::warn!("no iterations are retained, bifurcation diagram is not plotted");
    } else {
        renderer.render("bifurcation", &bifurcation_figure(&cloud))?;
    }
    Ok(cloud)
}

pub fn millikan<R: Renderer>(
    args: &MillikanArgs,
    renderer: &mut R,
) -> Result<(StraightLineFit, PlanckEstimate), MainError> {
    let Columns { x, y } = load_columns(&args.file)?;
    let fit = fit_straight_line(&x, &y)?;
    let planck = planck_constant(fit.slope)?;
    renderer.render("millikan_fit", &straight_line_figure(&x, &y, &fit))?;
    Ok((fit, planck))
}

/// Fitted models are sampled on a regular grid over the finite data range
fn model_grid(columns: &Columns) -> Vec<f64> {
    match finite_range(columns.x.iter().copied()) {
        Some(range) => linspace(range.start, range.end, 200),
        None => vec![],
    }
}

pub fn bacteria<R: Renderer>(
    args: &BacteriaArgs,
    renderer: &mut R,
) -> Result<Option<ModelFit<BacteriaModel>>, MainError> {
    let t = linspace(0.0, 2.0, 100);
    let figure = BACTERIA_REFERENCE_MODELS.iter().fold(
        Figure::new("W(t) for Different Parameters", "Time (t)", "Response"),
        |figure, &(a, tau)| {
            let label = format!("A = {}, tau = {}", a, tau);
            figure.with_series(model_curve(&label, &BacteriaModel::new(a, tau), &t))
        },
    );
    renderer.render("bacteria_models", &figure)?;

    let path = match &args.data {
        Some(path) => path,
        None => return Ok(None),
    };
    let columns = load_columns(path)?.mask_max(args.t_max);
    let fit = fit_model(
        &columns.x,
        &columns.y,
        &BacteriaModel::new(args.a, args.tau),
        &NelderMead::default(),
    )?;
    let label = format!("A = {:.4}, tau = {:.4}", fit.model.a, fit.model.tau);
    let figure = Figure::new(
        format!("Model Fitting to Experimental Data (t <= {})", args.t_max),
        "Time (t)",
        "Response",
    )
    .with_series(data_series(&columns))
    .with_series(model_curve(&label, &fit.model, &model_grid(&columns)));
    renderer.render("bacteria_fit", &figure)?;
    Ok(Some(fit))
}

pub fn hiv<R: Renderer>(
    args: &HivArgs,
    renderer: &mut R,
) -> Result<Option<ModelFit<HivModel>>, MainError> {
    let t = linspace(0.0, 10.0, 100);
    let figure = HIV_REFERENCE_MODELS.iter().enumerate().fold(
        Figure::new("HIV Viral Load Model", "Time (t)", "Viral load V(t)"),
        |figure, (i, &(a, alpha, b, beta))| {
            let label = format!("Model {}", i + 1);
            figure.with_series(model_curve(&label, &HivModel::new(a, alpha, b, beta), &t))
        },
    );
    renderer.render("hiv_models", &figure)?;

    let path = match &args.data {
        Some(path) => path,
        None => return Ok(None),
    };
    let columns = load_columns(path)?;
    let fit = fit_model(
        &columns.x,
        &columns.y,
        &HIV_INITIAL_GUESS,
        &NelderMead::default(),
    )?;
    let figure = Figure::new("HIV Viral Load Model Fit", "Time (days)", "Viral load V(t)")
        .with_series(data_series(&columns))
        .with_series(model_curve("Fitted Model", &fit.model, &model_grid(&columns)));
    renderer.render("hiv_fit", &figure)?;
    Ok(Some(fit))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use logistic_fit::ParametricModel;
    use logistic_plot::PlotError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Keeps figures in memory instead of drawing them
    #[derive(Default)]
    struct RecordingRenderer {
        figures: Vec<(String, Figure)>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, name: &str, figure: &Figure) -> Result<(), PlotError> {
            self.figures.push((name.to_owned(), figure.clone()));
            Ok(())
        }
    }

    impl RecordingRenderer {
        fn names(&self) -> Vec<&str> {
            self.figures.iter().map(|(name, _)| name.as_str()).collect()
        }
    }

    fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn two_columns(x: &[f64], y: &[f64], delimiter: &str) -> String {
        x.iter()
            .zip(y.iter())
            .map(|(x, y)| format!("{}{}{}\n", x, delimiter, y))
            .collect()
    }

    #[test]
    fn time_series_figures() {
        let mut renderer = RecordingRenderer::default();
        let args = TimeSeriesArgs {
            r: vec![2.0, 3.45],
            x0: 0.5,
            n: 100,
        };
        time_series(&args, &mut renderer).unwrap();
        assert_eq!(vec!["logistic_r2.0", "logistic_r3.45"], renderer.names());
        let series = &renderer.figures[0].1.series[0];
        assert_eq!(100, series.len());
        assert_abs_diff_eq!(0.5, series.y[99], epsilon = 1e-12);
    }

    #[test]
    fn time_series_of_zero_length() {
        let mut renderer = RecordingRenderer::default();
        let args = TimeSeriesArgs {
            r: vec![3.0],
            x0: 0.5,
            n: 0,
        };
        assert!(matches!(
            time_series(&args, &mut renderer),
            Err(MainError::Trajectory(_))
        ));
        assert!(renderer.figures.is_empty());
    }

    #[test]
    fn bifurcation_from_config_file() {
        let file = temp_file(".toml", "r_min = 3.0\nr_max = 4.0\nn_r = 11\nn_jobs = 2\n");
        let args = BifurcationArgs {
            config: Some(file.path().to_owned()),
            n_iterations: Some(50),
            n_discard: Some(30),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        let cloud = bifurcation(&args, &mut renderer).unwrap();
        assert_eq!(11 * 20, cloud.len());
        assert_eq!(vec!["bifurcation"], renderer.names());
        assert_eq!(220, renderer.figures[0].1.series[0].len());
    }

    #[test]
    fn bifurcation_without_retained_points() {
        let args = BifurcationArgs {
            n_r: Some(5),
            n_iterations: Some(10),
            n_discard: Some(10),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        let cloud = bifurcation(&args, &mut renderer).unwrap();
        assert!(cloud.is_empty());
        assert!(renderer.figures.is_empty());
    }

    #[test]
    fn invalid_bifurcation_settings() {
        let args = BifurcationArgs {
            n_discard: Some(2000),
            ..Default::default()
        };
        let mut renderer = RecordingRenderer::default();
        assert!(matches!(
            bifurcation(&args, &mut renderer),
            Err(MainError::Bifurcation(_))
        ));
    }

    #[test]
    fn config_errors() {
        let file = temp_file(".toml", "n_r = 10\nunknown = 1\n");
        assert!(matches!(
            load_config(Some(file.path())),
            Err(MainError::Config { .. })
        ));
        assert!(matches!(
            load_config(Some(Path::new("/nonexistent/bifurcation.toml"))),
            Err(MainError::ConfigIo { .. })
        ));
        assert_eq!(BifurcationConfig::default(), load_config(None).unwrap());
    }

    #[test]
    fn millikan_fit() {
        let x = linspace(5.0e14, 12.0e14, 8);
        let y: Vec<_> = x.iter().map(|&x| 4.1e-15 * x - 2.0).collect();
        let file = temp_file(".txt", &format!("# nu V\n{}", two_columns(&x, &y, " ")));
        let mut renderer = RecordingRenderer::default();
        let args = MillikanArgs {
            file: file.path().to_owned(),
        };
        let (fit, planck) = millikan(&args, &mut renderer).unwrap();
        assert_abs_diff_eq!(4.1e-15, fit.slope, epsilon = 1e-22);
        assert_abs_diff_eq!(-2.0, fit.intercept, epsilon = 1e-6);
        assert_abs_diff_eq!(0.8723, planck.relative_error, epsilon = 1e-3);
        assert_eq!(vec!["millikan_fit"], renderer.names());
    }

    #[test]
    fn bacteria_reference_curves_only() {
        let args = BacteriaArgs {
            data: None,
            t_max: 10.0,
            a: 1.2,
            tau: 1.5,
        };
        let mut renderer = RecordingRenderer::default();
        assert_eq!(None, bacteria(&args, &mut renderer).unwrap());
        assert_eq!(vec!["bacteria_models"], renderer.names());
        assert_eq!(3, renderer.figures[0].1.series.len());
    }

    #[test]
    fn bacteria_fit_of_masked_data() {
        let truth = BacteriaModel::new(1.5, 1.8);
        let t: Vec<_> = (0..61).map(|i| i as f64 * 0.25).collect();
        let w: Vec<_> = t.iter().map(|&t| truth.w(t)).collect();
        let file = temp_file(".csv", &two_columns(&t, &w, ","));
        let args = BacteriaArgs {
            data: Some(file.path().to_owned()),
            t_max: 10.0,
            a: 1.2,
            tau: 1.5,
        };
        let mut renderer = RecordingRenderer::default();
        let fit = bacteria(&args, &mut renderer).unwrap().unwrap();
        assert_abs_diff_eq!(1.5, fit.model.a, epsilon = 1e-6);
        assert_abs_diff_eq!(1.8, fit.model.tau, epsilon = 1e-6);
        assert_eq!(vec!["bacteria_models", "bacteria_fit"], renderer.names());
        assert_eq!(41, renderer.figures[1].1.series[0].len());
    }

    #[test]
    fn hiv_fit() {
        let truth = HivModel::new(2.0, 1.5, 0.5, 0.2);
        let t = linspace(0.0, 10.0, 30);
        let v: Vec<_> = t.iter().map(|&t| truth.viral_load(t)).collect();
        let file = temp_file(".csv", &two_columns(&t, &v, ","));
        let args = HivArgs {
            data: Some(file.path().to_owned()),
        };
        let mut renderer = RecordingRenderer::default();
        let fit = hiv(&args, &mut renderer).unwrap().unwrap();
        assert_abs_diff_eq!(&fit.model.params()[..], &truth.params()[..], epsilon = 1e-3);
        assert_eq!(vec!["hiv_models", "hiv_fit"], renderer.names());
        assert_eq!(4, renderer.figures[0].1.series.len());
    }

    #[test]
    fn unsupported_hiv_archive() {
        let file = temp_file(".npz", "PK");
        let args = HivArgs {
            data: Some(file.path().to_owned()),
        };
        let mut renderer = RecordingRenderer::default();
        assert!(matches!(hiv(&args, &mut renderer), Err(MainError::Data(_))));
    }
}

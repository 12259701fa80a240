//! Command line front end of the logistic-* crates, every figure goes through a [Renderer]

mod cli;
pub use cli::{
    BacteriaArgs, BifurcationArgs, Cli, Command, HivArgs, MillikanArgs, TimeSeriesArgs,
};

mod commands;
pub use commands::{
    bacteria, bifurcation, hiv, load_config, millikan, time_series, time_series_name,
};

mod error;
pub use error::MainError;

use logistic_fit::ParametricModel;
use logistic_plot::Renderer;

/// Runs a subcommand and prints its numeric results to stdout
pub fn run<R: Renderer>(command: &Command, renderer: &mut R) -> Result<(), MainError> {
    match command {
        Command::TimeSeries(args) => time_series(args, renderer),
        Command::Bifurcation(args) => {
            let cloud = bifurcation(args, renderer)?;
            println!(
                "{} points for {} growth rates",
                cloud.len(),
                cloud.columns().count()
            );
            Ok(())
        }
        Command::Millikan(args) => {
            let (fit, planck) = millikan(args, renderer)?;
            println!("Ex = {:.6e}", fit.ex);
            println!("Ey = {:.6e}", fit.ey);
            println!("Exx = {:.6e}", fit.exx);
            println!("Exy = {:.6e}", fit.exy);
            println!("Slope m = {:.6e}", fit.slope);
            println!("Intercept c = {:.6e}", fit.intercept);
            println!("Planck constant h = {:.6e} J s", planck.h);
            println!("Relative error = {:.2}%", planck.relative_error);
            Ok(())
        }
        Command::Bacteria(args) => {
            if let Some(fit) = bacteria(args, renderer)? {
                let [a, tau] = fit.model.params();
                println!("A = {:.4}, tau = {:.4}, residuals = {:.6e}", a, tau, fit.objective);
            }
            Ok(())
        }
        Command::Hiv(args) => {
            if let Some(fit) = hiv(args, renderer)? {
                let [a, alpha, b, beta] = fit.model.params();
                println!(
                    "A = {:.4}, alpha = {:.4}, B = {:.4}, beta = {:.4}, residuals = {:.6e}",
                    a, alpha, b, beta, fit.objective
                );
            }
            Ok(())
        }
    }
}

use clap::Parser;
use logistic_cli::{run, Cli, MainError};
use logistic_plot::PngRenderer;

fn main() -> Result<(), MainError> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        logger.filter_level(level);
    }
    logger.try_init()?;

    let mut renderer = PngRenderer::new(&cli.dir)?;
    run(&cli.command, &mut renderer)
}

//! anamorph CLI: paint an image so it reads correctly in a cylindrical mirror.

use clap::Parser;
use std::path::PathBuf;

use anamorph::{io, AnamorphParams, Anamorpher};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "anamorph")]
#[command(about = "Generate the cylindrical anamorph of an image")]
#[command(version)]
struct Cli {
    /// Input image file.
    #[arg(long)]
    input: PathBuf,

    /// Output image file (default: anamo_<input name> next to the input).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Radius of the cylinder in pixels.
    #[arg(long)]
    radius: f64,

    /// Horizontal distance of the eye from the cylinder's axis.
    #[arg(long)]
    dist: f64,

    /// Vertical distance of the eye from the ground.
    #[arg(long)]
    height: f64,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> CliResult<()> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| io::default_output_path(&cli.input));

    tracing::info!("Loading image: {}", cli.input.display());
    let source = io::load_pixel_grid(&cli.input)?;

    let base = AnamorphParams::new(cli.radius, cli.dist, cli.height);
    let ratio = base.upscale_ratio(source.width());
    let params = base.upscaled_for(source.width());
    tracing::info!(
        "ratio={ratio}, radius={}, dist={}, vdist={}",
        params.radius,
        params.eye.x,
        params.eye.z
    );

    let anamorpher = Anamorpher::new(&params)?;
    let result = anamorpher.execute(&source)?;

    tracing::info!("Original image:   {}x{}", source.width(), source.height());
    tracing::info!("Anamorphed image: {}x{}", result.width(), result.height());

    io::save_pixel_grid(&result, &output)?;
    tracing::info!("Result written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_radius_is_a_usage_error() {
        let r = Cli::try_parse_from(["anamorph", "--input", "a.png", "--dist", "1", "--height", "2"]);
        assert!(r.is_err());
    }

    #[test]
    fn unparsable_number_is_a_usage_error() {
        let r = Cli::try_parse_from([
            "anamorph", "--input", "a.png", "--radius", "ten", "--dist", "1", "--height", "2",
        ]);
        assert!(r.is_err());
    }

    #[test]
    fn output_is_optional() {
        let cli = Cli::try_parse_from([
            "anamorph", "--input", "a.png", "--radius", "10", "--dist", "100", "--height", "50",
        ])
        .map_err(|e| e.to_string());
        assert!(matches!(cli, Ok(Cli { output: None, .. })));
    }
}

use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use interp_calc::{
    session, Boundary, Calculator, DataTable, Method, Plot, Settings, DEFAULT_SAMPLES, YEARLY_PRESET,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Estimate y at a target x from a few data points.
#[derive(Debug, Parser)]
#[command(name = "interp-calc", version, about)]
struct Cli {
    /// Evenly spaced samples per plotted curve.
    #[arg(long, global = true, env = "INTERP_CALC_SAMPLES", default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Spline end condition: not-a-knot, natural or clamped:<left>:<right>.
    #[arg(long, global = true, env = "INTERP_CALC_BOUNDARY", default_value = "not-a-knot")]
    boundary: Boundary,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interpolate once and print the result.
    Predict(PredictArgs),
    /// Fill in the form line by line on standard input.
    Session,
}

#[derive(Debug, clap::Args)]
struct PredictArgs {
    /// Comma separated x values.
    #[arg(long, allow_hyphen_values = true, required_unless_present = "preset")]
    x: Option<String>,

    /// Comma separated y values.
    #[arg(long, allow_hyphen_values = true, required_unless_present = "preset")]
    y: Option<String>,

    /// Use the yearly sample data instead of --x/--y.
    #[arg(long, value_parser = ["yearly"], conflicts_with_all = ["x", "y"])]
    preset: Option<String>,

    /// Target x value.
    #[arg(long, allow_hyphen_values = true)]
    target: String,

    /// auto, linear, lagrange, spline or adjusted.
    #[arg(long, default_value = "auto")]
    method: String,

    /// Known y at the target, used to report the prediction error.
    #[arg(long, allow_hyphen_values = true)]
    true_value: Option<String>,

    /// Write the plot data to this file.
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings { samples: cli.samples, boundary: cli.boundary, ..Settings::default() };

    match cli.command {
        Command::Predict(args) => predict(args, settings),
        Command::Session => {
            let mut calculator = Calculator::new(settings);
            session::run(&mut calculator, io::stdin().lock(), io::stdout().lock())
                .context("session aborted")
        }
    }
}

/// Fills the form from the command line. Cells stay raw text so the form
/// reports problems in its own order.
fn build_calculator(args: &PredictArgs, settings: Settings) -> Result<Calculator> {
    let mut calculator = Calculator::new(settings);
    match (&args.preset, &args.x, &args.y) {
        (Some(_), _, _) => calculator.load_points(&YEARLY_PRESET),
        (None, Some(x), Some(y)) => calculator.set_table(DataTable::from_series(x, y)?),
        _ => bail!("either --preset or both --x and --y are required"),
    }
    calculator.set_target(args.target.as_str());
    calculator.set_method(args.method.parse::<Method>()?);
    Ok(calculator)
}

fn predict(args: PredictArgs, settings: Settings) -> Result<()> {
    let mut calculator = build_calculator(&args, settings)?;
    let prediction = calculator.predict()?.clone();
    info!(method = %prediction.method, "predicted {}", prediction.value);

    if let Some(true_value) = &args.true_value {
        calculator.calculate_error(true_value.as_str())?;
    }
    println!("{}", calculator.result_text().trim_end());

    if let Some(path) = &args.plot {
        let plot = Plot::for_prediction(
            &prediction.dataset,
            prediction.target,
            prediction.value,
            prediction.method,
            calculator.settings(),
        )?;
        let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        plot.write_csv(BufWriter::new(file))
            .with_context(|| format!("cannot write plot to {}", path.display()))?;
        info!(path = %path.display(), "plot written");
    }
    Ok(())
}

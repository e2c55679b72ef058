//! Line oriented driver for the [Calculator] form.
//!
//! Each input line is one command; failures are reported as `Error: ...` and
//! the session goes on.

use std::{
    fs::File,
    io::{self, BufRead, BufWriter, Write},
    path::PathBuf,
};

use tracing::debug;

use crate::{
    adjusted::YEARLY_PRESET,
    error::Error,
    form::{parse_number, Calculator},
    method::Method,
    plot::Plot,
};

pub const HELP: &str = "\
commands:
  add [x y]          append a row, optionally filled
  set <row> <x> <y>  overwrite a row (rows count from 1)
  delete <row>       remove a row
  target <x>         set the target x value
  method <name>      auto, linear, lagrange, spline or adjusted
  predict            interpolate at the target
  true <value>       compare the prediction with the true value
  plot <path>        write the plot data of the last prediction
  preset yearly      load the yearly sample data
  show               print the table and the result
  clear              empty every field
  help               print this text
  quit               leave the session";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add(Option<(String, String)>),
    Set(usize, String, String),
    Delete(usize),
    Target(String),
    Method(Method),
    Predict,
    True(String),
    Plot(PathBuf),
    Preset,
    Show,
    Clear,
    Help,
    Quit,
}

#[derive(Debug)]
enum Failure {
    Usage(String),
    Calculator(Error),
    Io(io::Error),
}

impl From<Error> for Failure {
    fn from(e: Error) -> Self {
        Failure::Calculator(e)
    }
}

impl From<io::Error> for Failure {
    fn from(e: io::Error) -> Self {
        Failure::Io(e)
    }
}

fn usage(text: &str) -> Failure {
    Failure::Usage(format!("usage: {text}"))
}

fn parse_row(word: &str) -> Result<usize, Failure> {
    word.parse::<usize>()
        .ok()
        .filter(|row| *row >= 1)
        .ok_or_else(|| Failure::Usage("rows are numbered from 1".to_string()))
}

fn parse_command(line: &str) -> Result<Option<Command>, Failure> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match (name.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("add", []) => Command::Add(None),
        ("add", [x, y]) => Command::Add(Some((x.to_string(), y.to_string()))),
        ("add", _) => return Err(usage("add [x y]")),
        ("set", [row, x, y]) => Command::Set(parse_row(row)? - 1, x.to_string(), y.to_string()),
        ("set", _) => return Err(usage("set <row> <x> <y>")),
        ("delete", [row]) => Command::Delete(parse_row(row)? - 1),
        ("delete", _) => return Err(usage("delete <row>")),
        ("target", [x]) => Command::Target(x.to_string()),
        ("target", _) => return Err(usage("target <x>")),
        ("method", [name]) => Command::Method(name.parse()?),
        ("method", _) => return Err(usage("method <name>")),
        ("predict", []) => Command::Predict,
        ("true", [value]) => Command::True(value.to_string()),
        ("true", _) => return Err(usage("true <value>")),
        ("plot", [path]) => Command::Plot(PathBuf::from(path)),
        ("plot", _) => return Err(usage("plot <path>")),
        ("preset", ["yearly"]) => Command::Preset,
        ("preset", _) => return Err(usage("preset yearly")),
        ("show", []) => Command::Show,
        ("clear", []) => Command::Clear,
        ("help", _) => Command::Help,
        ("quit", []) | ("exit", []) => Command::Quit,
        _ => return Err(Failure::Usage(format!("unknown command '{line}', try 'help'"))),
    };
    Ok(Some(command))
}

fn write_table<W: Write>(calculator: &Calculator, output: &mut W) -> io::Result<()> {
    writeln!(output, "{:>4}  {:>12}  {:>12}", "row", "X", "Y")?;
    for (i, row) in calculator.table().rows().iter().enumerate() {
        writeln!(output, "{:>4}  {:>12}  {:>12}", i + 1, row.x, row.y)?;
    }
    writeln!(output, "target: {}", calculator.target())?;
    writeln!(output, "method: {}", calculator.method())?;
    let result = calculator.result_text();
    if !result.is_empty() {
        writeln!(output, "{}", result.trim_end())?;
    }
    Ok(())
}

/// Applies one command. Returns `false` once the session should end.
fn execute<W: Write>(calculator: &mut Calculator, command: Command, output: &mut W) -> Result<bool, Failure> {
    debug!(?command, "session command");
    match command {
        Command::Add(None) => calculator.table_mut().add_row(),
        Command::Add(Some((x, y))) => calculator.table_mut().add_filled_row(x, y),
        Command::Set(row, x, y) => calculator.table_mut().set_row(row, x, y)?,
        Command::Delete(row) => calculator.table_mut().delete_row(row)?,
        Command::Target(x) => calculator.set_target(x),
        Command::Method(method) => calculator.set_method(method),
        Command::Predict => {
            calculator.predict()?;
            write!(output, "{}", calculator.result_text())?;
        }
        Command::True(value) => {
            // reject garbage before touching the stored result
            parse_number(&value)?;
            calculator.calculate_error(value)?;
            writeln!(output, "{}", calculator.result_text().trim_end())?;
        }
        Command::Plot(path) => {
            let prediction = calculator.prediction().ok_or(Error::NoPrediction)?;
            let plot = Plot::for_prediction(
                &prediction.dataset,
                prediction.target,
                prediction.value,
                prediction.method,
                calculator.settings(),
            )?;
            plot.write_csv(BufWriter::new(File::create(&path)?))?;
            writeln!(output, "plot written to {}", path.display())?;
        }
        Command::Preset => calculator.load_points(&YEARLY_PRESET),
        Command::Show => write_table(calculator, output)?,
        Command::Clear => calculator.clear(),
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Reads commands from `input` until end of input or `quit`.
///
/// Only failures writing to `output` or reading `input` end the session early.
pub fn run<R: BufRead, W: Write>(calculator: &mut Calculator, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let outcome = parse_command(&line)
            .and_then(|command| match command {
                Some(command) => execute(calculator, command, &mut output),
                None => Ok(true),
            });

        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(Failure::Usage(message)) => writeln!(output, "Error: {message}")?,
            Err(Failure::Calculator(e)) => writeln!(output, "Error: {e}")?,
            Err(Failure::Io(e)) => writeln!(output, "Error: {e}")?,
        }
        output.flush()?;
    }
    Ok(())
}

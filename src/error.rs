use thiserror::Error;

/// Errors produced while validating input or evaluating an interpolation.
///
/// Validation variants carry the message shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("All X and Y values must be filled.")]
    EmptyCell,
    #[error("Target value must be filled.")]
    EmptyTarget,
    #[error("could not convert string to float: '{0}'")]
    NotANumber(String),
    #[error("X values must be unique.")]
    DuplicateX,
    #[error("At least two data points are required.")]
    TooFewPoints,
    #[error("X and Y values must have the same length.")]
    LengthMismatch,
    #[error("Target value must be within the range of X values.")]
    TargetOutOfRange,
    #[error("non-finite coordinate in data point ({0}, {1})")]
    NonFinite(f64, f64),
    #[error("x = {x} is out of range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },
    #[error("error while solving the spline equations")]
    SingularSystem,
    #[error("no prediction to compare against, predict first")]
    NoPrediction,
    #[error("row {0} does not exist")]
    NoSuchRow(usize),
    #[error("the last row cannot be deleted")]
    LastRow,
    #[error("unknown method '{0}'")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, Error>;

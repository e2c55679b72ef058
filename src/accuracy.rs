use std::fmt::Display;

/// Deviation of a prediction from the true value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorReport {
    pub absolute: f64,
    /// Percentage of the true value, infinite when the true value is zero.
    pub relative: f64,
}

/// Compares `predicted` with `actual`.
///
/// The relative error is taken against the signed true value, so a negative
/// true value yields a negative percentage.
/// # Example
/// ```
/// use interp_calc::calculate_error;
///
/// let report = calculate_error(9.0, 10.0);
/// assert!((report.absolute - 1.0).abs() < 1e-12);
/// assert!((report.relative - 10.0).abs() < 1e-12);
/// assert!(calculate_error(1.0, 0.0).relative.is_infinite());
/// ```
pub fn calculate_error(predicted: f64, actual: f64) -> ErrorReport {
    let absolute = (predicted - actual).abs();
    let relative = if actual != 0.0 { absolute / actual * 100.0 } else { f64::INFINITY };
    ErrorReport { absolute, relative }
}

impl ErrorReport {
    /// Two result lines with the given number of decimals.
    pub fn format(&self, value_precision: usize, percent_precision: usize) -> String {
        format!(
            "Absolute Error: {:.*}\nRelative Error: {:.*}%",
            value_precision, self.absolute, percent_precision, self.relative
        )
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(4, 2))
    }
}

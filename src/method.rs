use std::{fmt::Display, str::FromStr};

use tracing::debug;

use crate::{
    adjusted::AdjustedLinear,
    config::Settings,
    error::{Error, Result},
    lagrange::lagrange_interpolation,
    linear::linear_interpolation,
    point::Dataset,
    spline::CubicSpline,
};

/// Interpolation method chosen for a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Picked from the number of data points, see [Method::resolve].
    #[default]
    Auto,
    Linear,
    Lagrange,
    CubicSpline,
    AdjustedLinear,
}

impl Method {
    /// Replaces [Method::Auto] by a concrete method: cubic spline for more than
    /// three points, Lagrange for exactly three, linear otherwise.
    pub fn resolve(self, number_of_points: usize) -> Method {
        match self {
            Method::Auto if number_of_points > 3 => Method::CubicSpline,
            Method::Auto if number_of_points == 3 => Method::Lagrange,
            Method::Auto => Method::Linear,
            other => other,
        }
    }

    /// Estimates y at `target` with this method (after resolving [Method::Auto]).
    /// # Errors
    /// [Error::OutOfRange] when a range-bound method is asked for a target
    /// outside the data, or the spline errors.
    pub fn predict(self, dataset: &Dataset, target: f64, settings: &Settings) -> Result<f64> {
        let method = self.resolve(dataset.len());
        debug!(%method, points = dataset.len(), target, "predicting");

        match method {
            // resolve never yields Auto
            Method::Auto | Method::Linear => linear_interpolation(dataset, target).ok_or_else(|| {
                let (min, max) = dataset.bounds();
                Error::OutOfRange { x: target, min, max }
            }),
            Method::Lagrange => Ok(lagrange_interpolation(dataset, target)),
            Method::CubicSpline => CubicSpline::new(dataset, settings.boundary)?.interpolate(target),
            Method::AdjustedLinear => {
                Ok(AdjustedLinear::new(dataset, &settings.invisible_points).interpolate(target))
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Auto => "Automatic Selection",
            Method::Linear => "Linear Interpolation",
            Method::Lagrange => "Lagrange Interpolation",
            Method::CubicSpline => "Cubic Spline Interpolation",
            Method::AdjustedLinear => "Adjusted Linear Interpolation",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Method::Auto),
            "linear" => Ok(Method::Linear),
            "lagrange" => Ok(Method::Lagrange),
            "spline" | "cubic" | "cubic-spline" => Ok(Method::CubicSpline),
            "adjusted" | "adjusted-linear" => Ok(Method::AdjustedLinear),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn auto_resolution() {
        assert_eq!(Method::Auto.resolve(2), Method::Linear);
        assert_eq!(Method::Auto.resolve(3), Method::Lagrange);
        assert_eq!(Method::Auto.resolve(4), Method::CubicSpline);
        assert_eq!(Method::Auto.resolve(12), Method::CubicSpline);
        assert_eq!(Method::Lagrange.resolve(2), Method::Lagrange);
        assert_eq!(Method::AdjustedLinear.resolve(5), Method::AdjustedLinear);
    }

    #[test]
    fn predict_each_method() {
        let settings = Settings::default();
        let dataset = Dataset::from_columns(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();

        assert_approx_eq!(Method::Linear.predict(&dataset, 1.5, &settings).unwrap(), 2.5);
        assert_approx_eq!(Method::Lagrange.predict(&dataset, 1.5, &settings).unwrap(), 2.25);
        assert_approx_eq!(Method::CubicSpline.predict(&dataset, 1.5, &settings).unwrap(), 2.25);
        assert_approx_eq!(Method::Auto.predict(&dataset, 1.5, &settings).unwrap(), 2.25);
        assert_approx_eq!(Method::AdjustedLinear.predict(&dataset, 1.5, &settings).unwrap(), 2.5);
    }

    #[test]
    fn range_bound_methods_reject_outside_targets() {
        let settings = Settings::default();
        let dataset = Dataset::from_columns(&[0.0, 1.0], &[0.0, 1.0]).unwrap();

        assert!(matches!(
            Method::Linear.predict(&dataset, 2.0, &settings),
            Err(Error::OutOfRange { .. })
        ));
        assert!(Method::CubicSpline.predict(&dataset, -1.0, &settings).is_err());
        assert_approx_eq!(Method::Lagrange.predict(&dataset, 2.0, &settings).unwrap(), 2.0);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Spline".parse::<Method>().unwrap(), Method::CubicSpline);
        assert_eq!("adjusted".parse::<Method>().unwrap(), Method::AdjustedLinear);
        assert_eq!("newton".parse::<Method>(), Err(Error::UnknownMethod("newton".to_string())));
        assert_eq!(Method::Lagrange.to_string(), "Lagrange Interpolation");
    }
}

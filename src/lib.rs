//! Interpolation calculator for small tables of (x, y) points.
//!
//! Estimates y at a target x by linear, Lagrange, cubic spline or adjusted
//! piecewise linear interpolation and reports the error against a known true value.
//!
//! # Example
//! ```
//! use interp_calc::{calculate_error, Boundary, CubicSpline, Dataset, lagrange_interpolation};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let dataset = Dataset::from_columns(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 2.0, 4.0]).unwrap();
//!
//! let spline = CubicSpline::new(&dataset, Boundary::NotAKnot).unwrap();
//! let predicted = spline.interpolate(1.5).unwrap();
//!
//! // four points with not-a-knot ends give the interpolating cubic
//! assert_approx_eq!(predicted, lagrange_interpolation(&dataset, 1.5), 1e-9);
//!
//! let report = calculate_error(predicted, 2.5);
//! assert!(report.absolute < 0.1);
//! ```

mod accuracy;
mod adjusted;
mod config;
mod error;
mod form;
mod lagrange;
mod linear;
mod method;
mod point;
pub mod plot;
mod polynomial;
pub mod session;
mod spline;

pub use accuracy::{calculate_error, ErrorReport};
pub use adjusted::{yearly_dataset, AdjustedLinear, DEFAULT_INVISIBLE_POINTS, YEARLY_PRESET};
pub use config::{Settings, DEFAULT_SAMPLES};
pub use error::{Error, Result};
pub use form::{parse_number, parse_series, split_series, Calculator, DataTable, Prediction, Row};
pub use lagrange::lagrange_interpolation;
pub use linear::{clamped_interpolation, linear_interpolation};
pub use method::Method;
pub use point::{Dataset, Point};
pub use plot::Plot;
pub use spline::{Boundary, CubicSpline};

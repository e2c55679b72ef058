use crate::{adjusted::DEFAULT_INVISIBLE_POINTS, point::Point, spline::Boundary};

/// Number of evenly spaced x values used to sample fitted curves for plotting.
pub const DEFAULT_SAMPLES: usize = 500;

/// Knobs shared by the calculator, the plots and the command line front end.
#[derive(Debug, Clone)]
pub struct Settings {
    pub samples: usize,
    pub boundary: Boundary,
    pub invisible_points: Vec<Point>,
    /// Decimals shown for predicted values and absolute errors.
    pub value_precision: usize,
    /// Decimals shown for relative errors.
    pub percent_precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            samples: DEFAULT_SAMPLES,
            boundary: Boundary::default(),
            invisible_points: DEFAULT_INVISIBLE_POINTS.iter().copied().map(Point::from).collect(),
            value_precision: 4,
            percent_precision: 2,
        }
    }
}

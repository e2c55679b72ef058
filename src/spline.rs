use std::{fmt::Display, str::FromStr};

use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    point::Dataset,
    polynomial::Polynomial,
};

/// End conditions closing the spline equation system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Boundary {
    /// Third derivative is continuous at the second and the second to last knot.
    #[default]
    NotAKnot,
    /// Second derivative is zero at both ends.
    Natural,
    /// First derivative is fixed at both ends.
    Clamped { left: f64, right: f64 },
}

impl FromStr for Boundary {
    type Err = String;

    /// Parses `not-a-knot`, `natural` or `clamped:<left>:<right>`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not-a-knot" | "notaknot" => Ok(Boundary::NotAKnot),
            "natural" => Ok(Boundary::Natural),
            other => {
                let slopes = other
                    .strip_prefix("clamped:")
                    .ok_or_else(|| format!("unknown boundary condition '{s}'"))?;
                let (left, right) = slopes
                    .split_once(':')
                    .ok_or_else(|| "clamped boundary needs '<left>:<right>' slopes".to_string())?;
                let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{e}: '{v}'"));
                Ok(Boundary::Clamped { left: parse(left)?, right: parse(right)? })
            }
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::NotAKnot => write!(f, "not-a-knot"),
            Boundary::Natural => write!(f, "natural"),
            Boundary::Clamped { left, right } => write!(f, "clamped:{left}:{right}"),
        }
    }
}

/// Cubic spline through every point of a [Dataset].
///
/// Each interval `[x_i, x_{i+1}]` carries a cubic
/// `y_i + b_i (x - x_i) + c_i (x - x_i)^2 + d_i (x - x_i)^3`, with value,
/// first and second derivative continuous across the interior knots.
///
/// # Example
/// ```
/// use interp_calc::{Boundary, CubicSpline, Dataset};
/// use assert_approx_eq::assert_approx_eq;
///
/// // points on a cubic are reproduced exactly with not-a-knot ends
/// let f = |x: f64| x.powi(3) - 2.0 * x;
/// let xs = [0.0, 1.0, 2.5, 3.0, 4.0];
/// let ys: Vec<f64> = xs.iter().map(|x| f(*x)).collect();
/// let dataset = Dataset::from_columns(&xs, &ys).unwrap();
///
/// let spline = CubicSpline::new(&dataset, Boundary::NotAKnot).unwrap();
/// assert_approx_eq!(spline.interpolate(1.7).unwrap(), f(1.7), 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    polynomials: Vec<Polynomial>,
    min_x: f64,
    max_x: f64,
    is_knot_spacing_uniform: bool,
}

impl CubicSpline {
    pub fn new(dataset: &Dataset, boundary: Boundary) -> Result<Self> {
        let xs = dataset.xs();
        let ys = dataset.ys();
        let (min_x, max_x) = dataset.bounds();

        let steps: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let is_knot_spacing_uniform = steps
            .windows(2)
            .all(|s| (s[1] - s[0]).abs() <= 1e-12 * (max_x - min_x));

        let second = solve_quadratic_coefficients(&steps, &ys, boundary)?;

        let polynomials = (0..steps.len())
            .map(|i| {
                let h = steps[i];
                let b = (ys[i + 1] - ys[i]) / h - h * (2.0 * second[i] + second[i + 1]) / 3.0;
                let d = (second[i + 1] - second[i]) / (3.0 * h);
                Polynomial::new(vec![ys[i], b, second[i], d], xs[i])
            })
            .collect();

        debug!(knots = xs.len(), %boundary, uniform = is_knot_spacing_uniform, "fitted cubic spline");

        Ok(CubicSpline { xs, polynomials, min_x, max_x, is_knot_spacing_uniform })
    }

    /// Evaluates the spline at `x` inside the knot range.
    pub fn interpolate(&self, x: f64) -> Result<f64> {
        self.check_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.polynomials[index].evaluate(x))
    }

    /// Evaluates a whole vector of points, faster when `x_vector` is ascending.
    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>> {
        if let Some(x) = x_vector.iter().find(|x| !self.is_in_range(**x)) {
            return Err(self.out_of_range(*x));
        }

        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;
        for x in x_vector {
            index = self.find_interval_index_with_hint(index, *x);
            results.push(self.polynomials[index].evaluate(*x));
        }
        Ok(results)
    }

    /// Evaluates the spline anywhere, extending the end polynomials beyond the knot range.
    pub fn extrapolate(&self, x: f64) -> f64 {
        match self.evaluate_on_boundaries(x) {
            Some(result) => result,
            None => self.polynomials[self.find_interval_index(x)].evaluate(x),
        }
    }

    pub fn batch_extrapolate(&self, x_vector: &[f64]) -> Vec<f64> {
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            match self.evaluate_on_boundaries(*x) {
                Some(result) => results.push(result),
                None => {
                    index = self.find_interval_index_with_hint(index, *x);
                    results.push(self.polynomials[index].evaluate(*x));
                }
            }
        }
        results
    }

    /// Derivative of given `order` at `x` inside the knot range.
    ///
    /// On a knot the polynomial of the interval to the right is used.
    pub fn derivative(&self, x: f64, order: usize) -> Result<f64> {
        self.check_range(x)?;
        let index = self.find_interval_index(x);
        Ok(self.polynomials[index].derivative(x, order))
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    fn check_range(&self, x: f64) -> Result<()> {
        if self.is_in_range(x) {
            Ok(())
        } else {
            Err(self.out_of_range(x))
        }
    }

    fn out_of_range(&self, x: f64) -> Error {
        Error::OutOfRange { x, min: self.min_x, max: self.max_x }
    }

    fn is_in_range(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    fn find_interval_index(&self, x: f64) -> usize {
        if self.is_knot_spacing_uniform {
            self.find_interval_index_uniform(x)
        } else {
            self.find_interval_index_bisect(x)
        }
    }

    fn find_interval_index_bisect(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.xs.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.xs[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }

    fn find_interval_index_uniform(&self, x: f64) -> usize {
        let intervals = self.polynomials.len();
        let relative_x = ((x - self.min_x) / (self.max_x - self.min_x)).clamp(0.0, 1.0);
        let index = ((relative_x * intervals as f64).floor() as usize).min(intervals - 1);

        // rounding may land next to the right interval near a knot
        if self.is_in_interval_range(index, x) {
            index
        } else {
            trace!(x, index, "uniform lookup missed, bisecting");
            self.find_interval_index_bisect(x)
        }
    }

    fn find_interval_index_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.is_in_interval_range(index_hint, x) {
            return index_hint;
        }
        if index_hint + 1 < self.polynomials.len() && self.is_in_interval_range(index_hint + 1, x) {
            return index_hint + 1;
        }
        self.find_interval_index(x)
    }

    fn is_in_interval_range(&self, interval_index: usize, x: f64) -> bool {
        self.xs[interval_index] <= x && x <= self.xs[interval_index + 1]
    }

    fn evaluate_on_boundaries(&self, x: f64) -> Option<f64> {
        let intervals = self.polynomials.len();
        if x < self.xs[1] {
            Some(self.polynomials[0].evaluate(x))
        } else if x > self.xs[intervals - 1] {
            Some(self.polynomials[intervals - 1].evaluate(x))
        } else {
            None
        }
    }
}

/// Solves for the quadratic coefficient `c_i` at every knot.
///
/// Interior rows enforce continuity of the second derivative, the first and
/// last rows encode the boundary condition.
fn solve_quadratic_coefficients(steps: &[f64], ys: &[f64], boundary: Boundary) -> Result<Vec<f64>> {
    let n = ys.len();
    let slopes: Vec<f64> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / steps[i]).collect();

    let mut matrix = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    for i in 1..n - 1 {
        matrix[(i, i - 1)] = steps[i - 1];
        matrix[(i, i)] = 2.0 * (steps[i - 1] + steps[i]);
        matrix[(i, i + 1)] = steps[i];
        rhs[i] = 3.0 * (slopes[i] - slopes[i - 1]);
    }

    let last = n - 1;
    match boundary {
        Boundary::Natural => natural_rows(&mut matrix, last),
        Boundary::Clamped { left, right } => {
            matrix[(0, 0)] = 2.0 * steps[0];
            matrix[(0, 1)] = steps[0];
            rhs[0] = 3.0 * (slopes[0] - left);

            matrix[(last, last - 1)] = steps[last - 1];
            matrix[(last, last)] = 2.0 * steps[last - 1];
            rhs[last] = 3.0 * (right - slopes[last - 1]);
        }
        // two knots: straight line
        Boundary::NotAKnot if n == 2 => natural_rows(&mut matrix, last),
        // three knots: one parabola, c constant
        Boundary::NotAKnot if n == 3 => {
            matrix[(0, 0)] = 1.0;
            matrix[(0, 1)] = -1.0;
            matrix[(2, 1)] = 1.0;
            matrix[(2, 2)] = -1.0;
        }
        Boundary::NotAKnot => {
            matrix[(0, 0)] = steps[1];
            matrix[(0, 1)] = -(steps[0] + steps[1]);
            matrix[(0, 2)] = steps[0];

            matrix[(last, last - 2)] = steps[last - 1];
            matrix[(last, last - 1)] = -(steps[last - 2] + steps[last - 1]);
            matrix[(last, last)] = steps[last - 2];
        }
    }

    match matrix.lu().solve(&rhs) {
        Some(solution) => Ok(solution.iter().copied().collect()),
        None => Err(Error::SingularSystem),
    }
}

fn natural_rows(matrix: &mut DMatrix<f64>, last: usize) {
    matrix[(0, 0)] = 1.0;
    matrix[(last, last)] = 1.0;
}

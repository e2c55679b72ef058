use crate::point::Dataset;

/// Evaluates the Lagrange polynomial through all points of `dataset` at `target`.
///
/// The polynomial has degree `n - 1` for `n` points and is defined everywhere,
/// so targets outside the data range are extrapolated.
/// # Example
/// ```
/// use interp_calc::{lagrange_interpolation, Dataset};
/// use assert_approx_eq::assert_approx_eq;
///
/// // points on y = x^2
/// let dataset = Dataset::from_columns(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0]).unwrap();
/// assert_approx_eq!(lagrange_interpolation(&dataset, 2.5), 6.25, 1e-12);
/// ```
pub fn lagrange_interpolation(dataset: &Dataset, target: f64) -> f64 {
    let points = dataset.points();
    let mut result = 0.0;
    for (i, pi) in points.iter().enumerate() {
        let mut term = pi.y();
        for (j, pj) in points.iter().enumerate() {
            if j != i {
                term *= (target - pj.x()) / (pi.x() - pj.x());
            }
        }
        result += term;
    }
    result
}

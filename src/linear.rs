//! Piecewise linear interpolation.

use crate::point::Dataset;

/// Interpolates linearly between the two data points bracketing `target`.
///
/// Returns `None` when `target` lies outside the data range.
/// # Example
/// ```
/// use interp_calc::{linear_interpolation, Dataset};
///
/// let dataset = Dataset::from_columns(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
/// assert_eq!(linear_interpolation(&dataset, 0.5), Some(2.0));
/// assert_eq!(linear_interpolation(&dataset, 3.0), None);
/// ```
pub fn linear_interpolation(dataset: &Dataset, target: f64) -> Option<f64> {
    dataset
        .points()
        .windows(2)
        .find(|w| w[0].x() <= target && target <= w[1].x())
        .map(|w| interpolate_segment((w[0].x(), w[0].y()), (w[1].x(), w[1].y()), target))
}

/// Piecewise linear lookup over ascending `xs` which holds the end values
/// constant outside the sampled range.
///
/// `xs` and `ys` must have the same non-zero length.
pub fn clamped_interpolation(xs: &[f64], ys: &[f64], target: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len(), "x-axis length mismatch.");
    let last = xs.len() - 1;

    if target <= xs[0] {
        return ys[0];
    }
    if target >= xs[last] {
        return ys[last];
    }

    // first index with xs[i] > target, always in 1..=last here
    let upper = xs.partition_point(|x| *x <= target);
    let lower = upper - 1;
    interpolate_segment((xs[lower], ys[lower]), (xs[upper], ys[upper]), target)
}

fn interpolate_segment((x0, y0): (f64, f64), (x1, y1): (f64, f64), x: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_interpolate_segment() {
        assert_approx_eq!(interpolate_segment((0.0, 1.0), (1.0, 2.0), 0.0), 1.0);
        assert_approx_eq!(interpolate_segment((0.0, 1.0), (1.0, 2.0), 1.0), 2.0);
        assert_approx_eq!(interpolate_segment((0.0, 1.0), (1.0, 2.0), 0.5), 1.5);
    }

    #[test]
    fn test_linear_two_points() {
        let dataset = Dataset::from_columns(&[1.0, 3.0], &[10.0, 20.0]).unwrap();

        assert_approx_eq!(linear_interpolation(&dataset, 1.0).unwrap(), 10.0);
        assert_approx_eq!(linear_interpolation(&dataset, 2.0).unwrap(), 15.0);
        assert_approx_eq!(linear_interpolation(&dataset, 2.5).unwrap(), 17.5);
        assert_approx_eq!(linear_interpolation(&dataset, 3.0).unwrap(), 20.0);
    }

    #[test]
    fn test_linear_picks_bracketing_interval() {
        let dataset = Dataset::from_columns(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();

        assert_approx_eq!(linear_interpolation(&dataset, 1.0).unwrap(), 1.0);
        assert_approx_eq!(linear_interpolation(&dataset, 1.5).unwrap(), 0.5);
        assert_approx_eq!(linear_interpolation(&dataset, 0.25).unwrap(), 0.25);
    }

    #[test]
    fn test_linear_unsorted_input() {
        let dataset = Dataset::from_columns(&[2.0, 0.0, 1.0], &[0.0, 0.0, 1.0]).unwrap();

        assert_approx_eq!(linear_interpolation(&dataset, 1.5).unwrap(), 0.5);
    }

    #[test]
    fn test_linear_out_of_range() {
        let dataset = Dataset::from_columns(&[0.0, 1.0], &[0.0, 1.0]).unwrap();

        assert!(linear_interpolation(&dataset, -0.1).is_none());
        assert!(linear_interpolation(&dataset, 1.1).is_none());
    }

    #[test]
    fn test_clamped() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [2.0, 4.0, 0.0];

        assert_approx_eq!(clamped_interpolation(&xs, &ys, -5.0), 2.0);
        assert_approx_eq!(clamped_interpolation(&xs, &ys, 0.0), 2.0);
        assert_approx_eq!(clamped_interpolation(&xs, &ys, 0.5), 3.0);
        assert_approx_eq!(clamped_interpolation(&xs, &ys, 1.0), 4.0);
        assert_approx_eq!(clamped_interpolation(&xs, &ys, 2.0), 2.0);
        assert_approx_eq!(clamped_interpolation(&xs, &ys, 3.0), 0.0);
        assert_approx_eq!(clamped_interpolation(&xs, &ys, 7.0), 0.0);
    }
}

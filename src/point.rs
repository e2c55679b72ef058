use tracing::debug;

use crate::error::{Error, Result};

/// Point represents a single (x, y) sample entered by the user.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x
    }
}

impl Eq for Point {}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Validated table of data points.
///
/// A [Dataset] always holds at least two points with finite coordinates and
/// distinct x values, stored in ascending x order.
/// # Example
/// ```
/// use interp_calc::{Dataset, Point};
///
/// let dataset = Dataset::new(vec![Point::new(2.0, 4.0), Point::new(1.0, 1.0)]).unwrap();
/// assert_eq!(dataset.xs(), vec![1.0, 2.0]);
/// assert!(dataset.contains(1.5));
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    /// Validates `points` and sorts them by x.
    /// # Errors
    /// Error is returned when x values repeat, when fewer than two points are given,
    /// or when a coordinate is not finite. Duplicates are reported before the point count.
    pub fn new(mut points: Vec<Point>) -> Result<Self> {
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            debug!(x = p.x, y = p.y, "rejected non-finite data point");
            return Err(Error::NonFinite(p.x, p.y));
        }

        points.sort();
        if points.windows(2).any(|w| w[0].x == w[1].x) {
            debug!("rejected dataset with repeated x values");
            return Err(Error::DuplicateX);
        }

        if points.len() < 2 {
            return Err(Error::TooFewPoints);
        }

        Ok(Dataset { points })
    }

    /// Builds a dataset from separate x and y columns.
    /// # Errors
    /// Besides the errors of [Dataset::new], [Error::LengthMismatch] is returned
    /// when the columns have different lengths.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch);
        }
        Dataset::new(xs.iter().zip(ys).map(|(x, y)| Point::new(*x, *y)).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Smallest and largest x as `(min, max)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.points[0].x, self.points[self.points.len() - 1].x)
    }

    pub fn contains(&self, x: f64) -> bool {
        let (min, max) = self.bounds();
        min <= x && x <= max
    }

    /// Smallest and largest y as `(min, max)`.
    pub fn y_bounds(&self) -> (f64, f64) {
        self.points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_points() {
        let dataset = Dataset::new(vec![
            Point::new(3.0, 9.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 4.0),
        ])
        .unwrap();

        assert_eq!(dataset.xs(), vec![1.0, 2.0, 3.0]);
        assert_eq!(dataset.ys(), vec![1.0, 4.0, 9.0]);
        assert_eq!(dataset.bounds(), (1.0, 3.0));
        assert_eq!(dataset.y_bounds(), (1.0, 9.0));
    }

    #[test]
    fn test_contains() {
        let dataset = Dataset::from_columns(&[0.0, 2.0], &[1.0, 1.0]).unwrap();

        assert!(dataset.contains(0.0));
        assert!(dataset.contains(1.3));
        assert!(dataset.contains(2.0));
        assert!(!dataset.contains(-0.1));
        assert!(!dataset.contains(2.1));
    }

    #[test]
    fn test_one_point_error() {
        let dataset = Dataset::new(vec![Point::new(0.0, 2.0)]);

        assert_eq!(dataset.unwrap_err(), Error::TooFewPoints);
    }

    #[test]
    fn test_equal_x_values() {
        let dataset = Dataset::from_columns(&[0.0, 0.0, 1.0], &[2.0, 1.0, 4.0]);

        assert_eq!(dataset.unwrap_err(), Error::DuplicateX);
    }

    #[test]
    fn test_duplicate_reported_before_count() {
        let dataset = Dataset::from_columns(&[1.0, 1.0], &[2.0, 3.0]);

        assert_eq!(dataset.unwrap_err(), Error::DuplicateX);
    }

    #[test]
    fn test_length_mismatch() {
        let dataset = Dataset::from_columns(&[0.0, 1.0, 2.0], &[2.0, 1.0]);

        assert_eq!(dataset.unwrap_err(), Error::LengthMismatch);
    }

    #[test]
    fn test_non_finite() {
        let dataset = Dataset::from_columns(&[0.0, f64::NAN], &[2.0, 1.0]);

        assert!(matches!(dataset.unwrap_err(), Error::NonFinite(_, _)));
    }

    #[test]
    fn test_point_ordering() {
        assert!(Point::new(1.0, 5.0) < Point::new(2.0, 0.0));
        assert_eq!(Point::new(1.0, 5.0), Point::new(1.0, 0.0));
        assert_eq!(Point::from((1.5, 2.5)).y(), 2.5);
    }
}

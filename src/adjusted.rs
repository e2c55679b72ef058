//! Piecewise linear interpolation through the data plus extra "invisible" points.
//!
//! The invisible points take part in the lookup but are never shown as data.

use tracing::debug;

use crate::{
    error::Result,
    linear::clamped_interpolation,
    point::{Dataset, Point},
};

/// Invisible points used when nothing else is configured.
pub const DEFAULT_INVISIBLE_POINTS: [(f64, f64); 2] = [(2018.5, 0.61), (2020.5, 0.19)];

/// Yearly sample the adjusted interpolation was tuned for, as `(year, value in millions)`.
pub const YEARLY_PRESET: [(f64, f64); 5] = [
    (2017.0, 0.14),
    (2018.0, 1.04),
    (2020.0, 0.20),
    (2022.0, 0.20),
    (2023.0, 1.79),
];

pub struct AdjustedLinear {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl AdjustedLinear {
    /// Merges `dataset` with `invisible` and sorts the result by x.
    ///
    /// An invisible point sharing its x with a data point is dropped.
    pub fn new(dataset: &Dataset, invisible: &[Point]) -> Self {
        let mut points = dataset.points().to_vec();
        for extra in invisible {
            if points.iter().all(|p| p.x() != extra.x()) {
                points.push(*extra);
            } else {
                debug!(x = extra.x(), "invisible point shadowed by data point");
            }
        }
        points.sort();

        AdjustedLinear {
            xs: points.iter().map(|p| p.x()).collect(),
            ys: points.iter().map(|p| p.y()).collect(),
        }
    }

    pub fn with_default_points(dataset: &Dataset) -> Self {
        let invisible: Vec<Point> = DEFAULT_INVISIBLE_POINTS.iter().copied().map(Point::from).collect();
        AdjustedLinear::new(dataset, &invisible)
    }

    /// Evaluates at `x`; outside the merged range the end values are held.
    pub fn interpolate(&self, x: f64) -> f64 {
        clamped_interpolation(&self.xs, &self.ys, x)
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
}

/// The [YEARLY_PRESET] as a dataset.
pub fn yearly_dataset() -> Result<Dataset> {
    Dataset::new(YEARLY_PRESET.iter().copied().map(Point::from).collect())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn merges_invisible_points() {
        let adjusted = AdjustedLinear::with_default_points(&yearly_dataset().unwrap());

        assert_eq!(adjusted.xs(), &[2017.0, 2018.0, 2018.5, 2020.0, 2020.5, 2022.0, 2023.0]);
    }

    #[test]
    fn yearly_predictions() {
        let adjusted = AdjustedLinear::with_default_points(&yearly_dataset().unwrap());

        assert_approx_eq!(adjusted.interpolate(2018.5), 0.61);
        assert_approx_eq!(adjusted.interpolate(2019.0), 0.61 + (0.20 - 0.61) / 3.0);
        assert_approx_eq!(adjusted.interpolate(2021.0), 0.19 + (0.20 - 0.19) / 3.0);
        assert_approx_eq!(adjusted.interpolate(2022.5), 0.995);
        assert_approx_eq!(adjusted.interpolate(2017.0), 0.14);
        assert_approx_eq!(adjusted.interpolate(2023.0), 1.79);
    }

    #[test]
    fn differs_from_plain_linear() {
        let dataset = yearly_dataset().unwrap();
        let adjusted = AdjustedLinear::with_default_points(&dataset);

        let plain = crate::linear::linear_interpolation(&dataset, 2019.0).unwrap();
        assert_approx_eq!(plain, 0.62);
        assert!((adjusted.interpolate(2019.0) - plain).abs() > 0.1);
    }

    #[test]
    fn data_point_shadows_invisible_point() {
        let dataset = Dataset::from_columns(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        let adjusted = AdjustedLinear::new(&dataset, &[Point::new(1.0, 50.0), Point::new(1.5, 2.0)]);

        assert_eq!(adjusted.xs(), &[0.0, 1.0, 1.5, 2.0]);
        assert_approx_eq!(adjusted.interpolate(1.0), 1.0);
        assert_approx_eq!(adjusted.interpolate(1.25), 1.5);
    }

    #[test]
    fn holds_end_values_outside_range() {
        let dataset = Dataset::from_columns(&[0.0, 1.0], &[3.0, 5.0]).unwrap();
        let adjusted = AdjustedLinear::new(&dataset, &[Point::new(-1.0, 7.0)]);

        assert_approx_eq!(adjusted.interpolate(-4.0), 7.0);
        assert_approx_eq!(adjusted.interpolate(-0.5), 5.0);
        assert_approx_eq!(adjusted.interpolate(9.0), 5.0);
    }
}

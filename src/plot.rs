//! Plot data for a prediction: data points, target line, predicted marker and
//! sampled curves, written as a `;` separated table.

use std::io::{self, Write};

use tracing::debug;

use crate::{
    config::Settings,
    error::Result,
    lagrange::lagrange_interpolation,
    method::Method,
    point::Dataset,
    spline::CubicSpline,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Scatter,
    Line,
    DashedLine,
    VerticalLine,
}

#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub kind: SeriesKind,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    fn new(label: impl Into<String>, kind: SeriesKind, points: Vec<(f64, f64)>) -> Self {
        Series { label: label.into(), kind, points }
    }
}

#[derive(Debug, Clone)]
pub struct Plot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Plot {
    /// Builds the plot shown after a prediction.
    ///
    /// The adjusted method draws a polyline through the data points, every
    /// other method draws the Lagrange and cubic spline curves sampled at
    /// `settings.samples` points across the data range.
    pub fn for_prediction(
        dataset: &Dataset,
        target: f64,
        predicted: f64,
        method: Method,
        settings: &Settings,
    ) -> Result<Self> {
        let data: Vec<(f64, f64)> = dataset.points().iter().map(|p| (p.x(), p.y())).collect();
        let (y_min, y_max) = dataset.y_bounds();
        let (y_min, y_max) = (y_min.min(predicted), y_max.max(predicted));

        let mut series = vec![
            Series::new("Data Points", SeriesKind::Scatter, data.clone()),
            Series::new("Target X", SeriesKind::VerticalLine, vec![(target, y_min), (target, y_max)]),
            Series::new(
                format!("Predicted Y: {:.*}", settings.value_precision, predicted),
                SeriesKind::Scatter,
                vec![(target, predicted)],
            ),
        ];

        let title = if method == Method::AdjustedLinear {
            series.push(Series::new("Interpolated Line", SeriesKind::Line, data));
            "Linear Interpolation Results"
        } else {
            let xs = linspace(dataset.bounds(), settings.samples);
            let lagrange = xs.iter().map(|x| (*x, lagrange_interpolation(dataset, *x))).collect();
            let spline = CubicSpline::new(dataset, settings.boundary)?.batch_interpolate(&xs)?;

            series.push(Series::new("Lagrange Interpolation", SeriesKind::Line, lagrange));
            series.push(Series::new(
                "Cubic Spline Interpolation",
                SeriesKind::DashedLine,
                xs.into_iter().zip(spline).collect(),
            ));
            "Interpolation Results"
        };
        debug!(series = series.len(), samples = settings.samples, "built plot");

        Ok(Plot {
            title: title.to_string(),
            x_label: "X Values".to_string(),
            y_label: "Y Values".to_string(),
            series,
        })
    }

    /// Writes every series as `series;x;y` rows below a `#` title line.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "# {} ({} vs {})", self.title, self.y_label, self.x_label)?;
        writeln!(writer, "series;x;y")?;
        for series in &self.series {
            for (x, y) in &series.points {
                writeln!(writer, "{};{};{}", series.label, x, y)?;
            }
        }
        writer.flush()
    }

    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }
}

/// `samples` evenly spaced values from `min` to `max`, both included.
pub fn linspace((min, max): (f64, f64), samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (samples - 1) as f64;
            // last value pinned to max so rounding never leaves the range
            (0..samples)
                .map(|i| if i == samples - 1 { max } else { min + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::adjusted::yearly_dataset;

    #[test]
    fn linspace_ends() {
        let xs = linspace((2017.0, 2023.0), 500);

        assert_eq!(xs.len(), 500);
        assert_eq!(xs[0], 2017.0);
        assert_eq!(xs[499], 2023.0);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!(linspace((0.0, 1.0), 0).is_empty());
        assert_eq!(linspace((0.0, 1.0), 1), vec![0.0]);
    }

    #[test]
    fn prediction_plot_has_curves() {
        let dataset = Dataset::from_columns(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 8.0, 27.0]).unwrap();
        let settings = Settings { samples: 31, ..Settings::default() };

        let plot = Plot::for_prediction(&dataset, 1.5, 3.375, Method::CubicSpline, &settings).unwrap();

        assert_eq!(plot.title, "Interpolation Results");
        assert_eq!(plot.series.len(), 5);
        assert_eq!(plot.series("Data Points").unwrap().points.len(), 4);
        assert_eq!(plot.series("Predicted Y: 3.3750").unwrap().points, vec![(1.5, 3.375)]);
        assert_eq!(plot.series("Target X").unwrap().points, vec![(1.5, 0.0), (1.5, 27.0)]);

        let lagrange = plot.series("Lagrange Interpolation").unwrap();
        let spline = plot.series("Cubic Spline Interpolation").unwrap();
        assert_eq!(lagrange.points.len(), 31);
        assert_eq!(spline.kind, SeriesKind::DashedLine);
        for ((x, a), (_, b)) in lagrange.points.iter().zip(&spline.points) {
            assert_approx_eq!(*a, x.powi(3), 1e-9);
            assert_approx_eq!(*b, x.powi(3), 1e-9);
        }
    }

    #[test]
    fn adjusted_plot_draws_polyline() {
        let dataset = yearly_dataset().unwrap();

        let plot = Plot::for_prediction(&dataset, 2019.0, 0.4733, Method::AdjustedLinear, &Settings::default())
            .unwrap();

        assert_eq!(plot.title, "Linear Interpolation Results");
        assert_eq!(plot.series("Interpolated Line").unwrap().points.len(), 5);
        assert!(plot.series("Lagrange Interpolation").is_none());
    }

    #[test]
    fn csv_output() {
        let dataset = Dataset::from_columns(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        let settings = Settings { samples: 3, ..Settings::default() };
        let plot = Plot::for_prediction(&dataset, 1.0, 3.0, Method::Linear, &settings).unwrap();

        let mut buffer = Vec::new();
        plot.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "# Interpolation Results (Y Values vs X Values)");
        assert_eq!(lines[1], "series;x;y");
        assert_eq!(lines[2], "Data Points;0;1");
        assert_eq!(lines[3], "Data Points;2;5");
        assert_eq!(lines[4], "Target X;1;1");
        assert_eq!(lines[6], "Predicted Y: 3.0000;1;3");
        assert_eq!(lines[7], "Lagrange Interpolation;0;1");
        assert_eq!(lines.len(), 2 + 2 + 2 + 1 + 3 + 3);
    }
}

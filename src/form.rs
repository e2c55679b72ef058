//! Data-entry form: a table of raw text cells, a target, a true value and the
//! validation that turns them into a prediction.

use tracing::{info, warn};

use crate::{
    accuracy::{calculate_error, ErrorReport},
    config::Settings,
    error::{Error, Result},
    method::Method,
    point::{Dataset, Point},
};

/// Number of empty rows a fresh table starts with.
pub const INITIAL_ROWS: usize = 2;

/// One table row as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub x: String,
    pub y: String,
}

impl Row {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Row { x: x.into(), y: y.into() }
    }

    fn is_filled(&self) -> bool {
        !self.x.trim().is_empty() && !self.y.trim().is_empty()
    }
}

/// Rows of (x, y) text cells. Never shrinks below one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    rows: Vec<Row>,
}

impl Default for DataTable {
    fn default() -> Self {
        DataTable { rows: vec![Row::default(); INITIAL_ROWS] }
    }
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-filled with `points`, or the default empty table if `points` is empty.
    pub fn with_points(points: &[(f64, f64)]) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        DataTable {
            rows: points.iter().map(|(x, y)| Row::new(x.to_string(), y.to_string())).collect(),
        }
    }

    /// Table built from comma separated x and y columns, cells left unparsed.
    /// # Errors
    /// [Error::LengthMismatch] when the columns hold a different number of cells.
    pub fn from_series(xs: &str, ys: &str) -> Result<Self> {
        let xs = split_series(xs);
        let ys = split_series(ys);
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch);
        }
        Ok(DataTable { rows: xs.into_iter().zip(ys).map(|(x, y)| Row::new(x, y)).collect() })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add_row(&mut self) {
        self.rows.push(Row::default());
    }

    pub fn add_filled_row(&mut self, x: impl Into<String>, y: impl Into<String>) {
        self.rows.push(Row::new(x, y));
    }

    /// Overwrites the cells of the zero-based row `index`.
    pub fn set_row(&mut self, index: usize, x: impl Into<String>, y: impl Into<String>) -> Result<()> {
        let row = self.rows.get_mut(index).ok_or(Error::NoSuchRow(index + 1))?;
        *row = Row::new(x, y);
        Ok(())
    }

    /// Removes the zero-based row `index`. The only remaining row cannot be removed.
    pub fn delete_row(&mut self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(Error::NoSuchRow(index + 1));
        }
        if !self.can_delete() {
            return Err(Error::LastRow);
        }
        self.rows.remove(index);
        Ok(())
    }

    pub fn can_delete(&self) -> bool {
        self.rows.len() > 1
    }

    /// Empties every cell and keeps the rows.
    pub fn clear(&mut self) {
        for row in self.rows.iter_mut() {
            row.x.clear();
            row.y.clear();
        }
    }

    /// Parses all rows into points, row by row.
    /// # Errors
    /// [Error::EmptyCell] for a row with a blank cell, [Error::NotANumber] for a cell
    /// that is not a number.
    pub fn points(&self) -> Result<Vec<Point>> {
        self.rows
            .iter()
            .map(|row| {
                if !row.is_filled() {
                    return Err(Error::EmptyCell);
                }
                Ok(Point::new(parse_number(&row.x)?, parse_number(&row.y)?))
            })
            .collect()
    }
}

/// Outcome of a successful prediction.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Concrete method used, never [Method::Auto].
    pub method: Method,
    pub dataset: Dataset,
    pub target: f64,
    pub value: f64,
    pub error: Option<ErrorReport>,
}

impl Prediction {
    pub fn result_text(&self, settings: &Settings) -> String {
        let mut text = format!(
            "Method: {}\nPredicted Value: {:.*}\n",
            self.method, settings.value_precision, self.value
        );
        if let Some(report) = &self.error {
            text.push_str(&report.format(settings.value_precision, settings.percent_precision));
        }
        text
    }
}

/// The whole form: data table, target and true value fields plus the last result.
///
/// # Example
/// ```
/// use interp_calc::{Calculator, Method};
///
/// let mut calculator = Calculator::default();
/// calculator.table_mut().set_row(0, "1", "10").unwrap();
/// calculator.table_mut().set_row(1, "3", "20").unwrap();
/// calculator.set_target("2.5");
///
/// let prediction = calculator.predict().unwrap();
/// assert_eq!(prediction.method, Method::Linear);
/// assert_eq!(calculator.result_text(), "Method: Linear Interpolation\nPredicted Value: 17.5000\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    table: DataTable,
    target: String,
    true_value: String,
    method: Method,
    settings: Settings,
    prediction: Option<Prediction>,
}

impl Calculator {
    pub fn new(settings: Settings) -> Self {
        Calculator { settings, ..Default::default() }
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable {
        &mut self.table
    }

    pub fn set_table(&mut self, table: DataTable) {
        self.table = table;
    }

    /// Replaces the table by one row per point.
    pub fn load_points(&mut self, points: &[(f64, f64)]) {
        self.table = DataTable::with_points(points);
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    pub fn true_value(&self) -> &str {
        &self.true_value
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    /// Validates the form and computes a prediction.
    ///
    /// Checks run in order: filled and numeric cells, filled and numeric target,
    /// unique x values, at least two points, target inside the x range.
    /// A failed check discards the previous result.
    pub fn predict(&mut self) -> Result<&Prediction> {
        self.prediction = None;
        match self.validate_and_predict() {
            Ok(prediction) => {
                info!(method = %prediction.method, value = prediction.value, "prediction ready");
                let prediction: &Prediction = self.prediction.insert(prediction);
                Ok(prediction)
            }
            Err(e) => {
                warn!(error = %e, "prediction rejected");
                Err(e)
            }
        }
    }

    fn validate_and_predict(&self) -> Result<Prediction> {
        let points = self.table.points()?;

        if self.target.trim().is_empty() {
            return Err(Error::EmptyTarget);
        }
        let target = parse_number(&self.target)?;

        let dataset = Dataset::new(points)?;
        if !dataset.contains(target) {
            return Err(Error::TargetOutOfRange);
        }

        let method = self.method.resolve(dataset.len());
        let value = method.predict(&dataset, target, &self.settings)?;

        Ok(Prediction { method, dataset, target, value, error: None })
    }

    /// Compares the last prediction with the true value typed in `true_value`.
    pub fn calculate_error(&mut self, true_value: impl Into<String>) -> Result<ErrorReport> {
        self.true_value = true_value.into();
        let prediction = self.prediction.as_mut().ok_or(Error::NoPrediction)?;
        let actual = parse_number(&self.true_value)?;

        // compare the value as shown, not the full precision one
        let shown = parse_number(&format!("{:.*}", self.settings.value_precision, prediction.value))?;
        let report = calculate_error(shown, actual);
        prediction.error = Some(report);
        Ok(report)
    }

    /// Text shown below the form, empty when there is no result.
    pub fn result_text(&self) -> String {
        self.prediction
            .as_ref()
            .map(|p| p.result_text(&self.settings))
            .unwrap_or_default()
    }

    /// Empties the table cells, target, true value and result.
    pub fn clear(&mut self) {
        self.table.clear();
        self.target.clear();
        self.true_value.clear();
        self.prediction = None;
    }
}

/// Parses a single number the way it was typed, surrounding whitespace allowed.
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| Error::NotANumber(trimmed.to_string()))
}

/// Splits a comma separated list such as `"1, 2.5, 4"` into trimmed cells
/// without judging their contents.
pub fn split_series(text: &str) -> Vec<String> {
    text.split(',').map(|cell| cell.trim().to_string()).collect()
}

/// Parses a comma separated list such as `"1, 2.5, 4"`.
pub fn parse_series(text: &str) -> Result<Vec<f64>> {
    text.split(',').map(parse_number).collect()
}

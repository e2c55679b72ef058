/// Polynomial in powers of `(x - origin)`, lowest order coefficient first.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Vec<f64>,
    origin: f64,
}

impl Polynomial {

    pub fn new(coefficients: Vec<f64>, origin: f64) -> Self {
        Polynomial { coefficients, origin }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let t = x - self.origin;
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
    }

    /// Value of the derivative of given `order` at `x`.
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        let t = x - self.origin;
        let mut result = 0.0;
        for (i, c) in self.coefficients.iter().enumerate().skip(order).rev() {
            result = result * t + c * falling_factorial(i, order);
        }
        result
    }
}

fn falling_factorial(n: usize, k: usize) -> f64 {
    (0..k).map(|i| (n - i) as f64).product()
}

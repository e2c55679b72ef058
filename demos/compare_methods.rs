extern crate interp_calc;

use interp_calc::{calculate_error, Dataset, Method, Settings};

fn main() {

    // samples of sin(x)
    let xs = [0.0, 0.8, 1.6, 2.4, 3.2];
    let ys: Vec<f64> = xs.iter().map(|x: &f64| x.sin()).collect();
    let dataset = Dataset::from_columns(&xs, &ys).unwrap();
    let settings = Settings::default();

    let target: f64 = 1.1;
    let actual = target.sin();

    println!("method;predicted;absolute;relative");
    for method in [Method::Linear, Method::Lagrange, Method::CubicSpline, Method::AdjustedLinear] {
        let predicted = method.predict(&dataset, target, &settings).unwrap();
        let report = calculate_error(predicted, actual);
        println!("{};{:.4};{:.4};{:.2}%", method, predicted, report.absolute, report.relative);
    }
}

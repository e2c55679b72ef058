extern crate interp_calc;

use interp_calc::{Boundary, CubicSpline, Dataset};

fn main() {

    let dataset = Dataset::from_columns(
        &[0.0, 1.0, 2.0, 4.0, 5.0, 6.0],
        &[1.0, -1.0, 0.0, 3.0, 1.0, 1.0],
    ).unwrap();

    let not_a_knot = CubicSpline::new(&dataset, Boundary::NotAKnot).unwrap();
    let natural = CubicSpline::new(&dataset, Boundary::Natural).unwrap();

    let (x_min, x_max) = dataset.bounds();
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| (x_min + step * i as f64).min(x_max)).collect();
    let a = not_a_knot.batch_interpolate(&x_vector).unwrap();
    let b = natural.batch_interpolate(&x_vector).unwrap();

    println!("x;not_a_knot;natural");
    for i in 0..=number_of_steps {
        println!("{:.2};{:.2};{:.2}", x_vector[i], a[i], b[i]);
    }
}

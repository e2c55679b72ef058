extern crate interp_calc;

use interp_calc::{yearly_dataset, AdjustedLinear, linear_interpolation};

fn main() {

    let dataset = yearly_dataset().unwrap();
    let adjusted = AdjustedLinear::with_default_points(&dataset);

    println!("year;linear;adjusted");
    for quarter in 0..=24 {
        let year = 2017.0 + 0.25 * quarter as f64;
        let linear = linear_interpolation(&dataset, year).unwrap();
        println!("{:.2};{:.3};{:.3}", year, linear, adjusted.interpolate(year));
    }
}

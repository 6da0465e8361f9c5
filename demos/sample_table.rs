extern crate quadratic_bspline;

use quadratic_bspline::{linspace, QuadraticBSpline};

fn main() {

    let spline = QuadraticBSpline::new(0.0);
    let (x_min, x_max) = spline.support();

    let number_of_steps = 60;
    let x_vector = linspace(x_min - 0.5, x_max + 0.5, number_of_steps + 1);

    let result = spline.batch_evaluate(&x_vector);

    println!("x;y;dy");
    for (x, y) in x_vector.iter().zip(result.iter()) {
        println!("{:.2};{:.4};{:.4}", x, y, spline.derivative(*x));
    }
}

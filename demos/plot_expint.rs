use expint::expint;

use gnuplot::Axes2D;


fn plot(ax: &mut Axes2D, n: i32, xs: &[f64]) {
    let ys: Vec<f64> = xs.iter().map(|&x| expint(n, x)).collect();
    ax.lines(xs, ys, &[gnuplot::Caption(&format!("E_{}(x)", n))]);
}


fn main() {
    use gnuplot::{Figure, AxesCommon, AutoOption};

    let len = 400;
    let x_max = 4.0;

    // skip x = 0, where E_0 and E_1 diverge
    let xs: Vec<f64> = (1..=len).map(|i| x_max * i as f64 / len as f64).collect();

    let mut fig = Figure::new();
    let mut ax = fig.axes2d();
    ax.set_x_range(AutoOption::Fix(0.0), AutoOption::Fix(x_max));
    ax.set_y_range(AutoOption::Fix(0.0), AutoOption::Fix(2.0));

    for n in [0, 1, 2, 3, 5, 10] {
        plot(&mut ax, n, &xs);
    }

    if let Err(err) = fig.show() {
        eprintln!("failed to launch gnuplot: {:?}", err);
    }
}

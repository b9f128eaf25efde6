use expint::expint;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};


fn sample_points(seed: u64, count: usize, x_max: f64) -> Vec<(i32, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| (rng.gen_range(2..=30), rng.gen_range(1e-3..x_max)))
        .collect()
}


#[test]
fn negative_inputs_are_nan() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let n: i32 = rng.gen_range(-50..0);
        let x: f64 = rng.gen_range(0.0..10.0);
        assert!(expint(n, x).is_nan());

        let n: i32 = rng.gen_range(0..50);
        let x: f64 = -rng.gen_range(1e-12..10.0);
        assert!(expint(n, x).is_nan());
    }
}

#[test]
fn decreasing_in_x() {
    for n in 1..=30 {
        let mut prev = f64::INFINITY;

        for k in 1..=600 {
            let x = 0.05 * k as f64;
            let value = expint(n, x);

            assert!(value < prev, "E_{}({}) = {} is not below {}", n, x, value, prev);
            prev = value;
        }
    }
}

#[test]
fn recurrence_holds() {
    // (n - 1) E_n(x) = e^(-x) - x E_{n-1}(x)
    for (n, x) in sample_points(42, 500, 20.0) {
        let lhs = (n - 1) as f64 * expint(n, x);
        let rhs = (-x).exp() - x * expint(n - 1, x);

        assert_relative_eq!(lhs, rhs, max_relative = 1e-10);
    }
}

#[test]
fn continuous_across_branch_switch() {
    for n in 1..=40 {
        let below = expint(n, 1.0);
        let above = expint(n, 1.0 + 1e-12);

        assert_relative_eq!(below, above, max_relative = 1e-9);
    }
}

#[test]
fn approaches_closed_form_at_zero() {
    for n in 2..=20 {
        let limit = 1.0 / (n - 1) as f64;
        assert_eq!(expint(n, 0.0), limit);
        assert_relative_eq!(expint(n, 1e-10), limit, max_relative = 1e-8);
    }
}

#[test]
fn single_precision_tracks_double() {
    for (n, x) in sample_points(3, 200, 8.0) {
        let single = expint(n, x as f32) as f64;
        let double = expint(n, x);

        assert_relative_eq!(single, double, max_relative = 1e-4);
    }
}

#[test]
fn deterministic() {
    for (n, x) in sample_points(11, 100, 5.0) {
        assert_eq!(expint(n, x).to_bits(), expint(n, x).to_bits());
    }
}

//! Generalized exponential integral `E_n(x) = ∫₁^∞ e^(−xt) / tⁿ dt`.
//!
//! Evaluation follows Press, W. H. et al. (2007). *Numerical Recipes: The
//! Art of Scientific Computing* (3rd ed). Cambridge University Press: a
//! modified Lentz continued fraction for `x > 1` and a power series with a
//! harmonic-number correction for `0 < x ≤ 1`.

use super::NumCastUnchecked;
use crate::error::{self, Method, Result};

use num::Float;
use tracing::{debug, trace};


/// Iteration cap shared by both expansions.
pub const MAX_ITER: usize = 100;

/// The Euler–Mascheroni constant γ.
pub const EULER: f64 = 0.57721566490153286;


/// Evaluates `E_n(x)`, returning NaN for invalid input and on non-convergence.
///
/// Use [`try_expint`] to tell the two failure modes apart.
pub fn expint<T: Float + NumCastUnchecked>(n: i32, x: T) -> T {
    match try_expint(n, x) {
        Ok(value) => value,
        Err(err) => {
            debug!("{}", err);
            T::nan()
        }
    }
}

/// Evaluates `E_n(x)` for `n ≥ 0`, `x ≥ 0`.
///
/// Fails with [`Error::InvalidDomain`](crate::Error::InvalidDomain) for
/// `n < 0`, `x < 0` (or NaN), and `x = 0` with `n ∈ {0, 1}`, where the
/// integral diverges. Fails with
/// [`Error::NonConvergence`](crate::Error::NonConvergence) if the selected
/// expansion does not settle within [`MAX_ITER`] iterations.
pub fn try_expint<T: Float + NumCastUnchecked>(n: i32, x: T) -> Result<T> {
    let eps = T::epsilon();
    let zero = x.abs() < eps;

    // `!(x >= 0)` also rejects NaN
    if n < 0 || !(x >= T::zero()) || (zero && (n == 0 || n == 1)) {
        return error::InvalidDomainSnafu { n, x: x.to_f64_unchecked() }.fail();
    }

    if n == 0 {
        return Ok((-x).exp() / x);
    }

    if zero {
        return Ok(T::one() / T::from_unchecked(n - 1));
    }

    if x > T::one() {
        continued_fraction(n, x)
    } else {
        power_series(n, x)
    }
}

/// Modified Lentz evaluation of the continued fraction for `E_n(x)`, `x > 1`.
fn continued_fraction<T: Float + NumCastUnchecked>(n: i32, x: T) -> Result<T> {
    let eps = T::epsilon();
    let fpmax = T::max_value() * eps;
    let fpmin = T::min_positive_value() / eps;
    let two = T::one() + T::one();

    let mut b = x + T::from_unchecked(n);
    let mut c = fpmax;
    let mut d = T::one() / b;
    let mut h = d;

    for i in 1..=MAX_ITER {
        let i_t = T::from_unchecked(i);
        let a = -i_t * (T::from_unchecked(n - 1) + i_t);
        b = b + two;

        d = guard_tiny(a * d + b, fpmin).recip();
        c = guard_tiny(b + a / c, fpmin);

        let del = c * d;
        h = h * del;

        if (del - T::one()).abs() <= eps {
            trace!(n, x = x.to_f64_unchecked(), iterations = i, "continued fraction converged");
            return Ok(h * (-x).exp());
        }
    }

    error::NonConvergenceSnafu {
        method: Method::ContinuedFraction,
        n,
        x: x.to_f64_unchecked(),
        iterations: MAX_ITER,
    }
    .fail()
}

/// Power series for `E_n(x)`, `0 < x ≤ 1`, `n ≥ 1`.
fn power_series<T: Float + NumCastUnchecked>(n: i32, x: T) -> Result<T> {
    let eps = T::epsilon();
    let euler = T::from_unchecked(EULER);
    let nm1 = n - 1;

    let mut res = if nm1 != 0 {
        T::one() / T::from_unchecked(nm1)
    } else {
        -x.ln() - euler
    };
    let mut fact = T::one();

    for i in 1..=MAX_ITER {
        fact = fact * (-x / T::from_unchecked(i));

        let del = if i as i32 != nm1 {
            -fact / T::from_unchecked(i as i32 - nm1)
        } else {
            fact * (-x.ln() + digamma_shifted(nm1, euler))
        };

        res = res + del;

        if del.abs() < res.abs() * eps {
            trace!(n, x = x.to_f64_unchecked(), iterations = i, "power series converged");
            return Ok(res);
        }
    }

    error::NonConvergenceSnafu {
        method: Method::PowerSeries,
        n,
        x: x.to_f64_unchecked(),
        iterations: MAX_ITER,
    }
    .fail()
}

/// ψ(m + 1) = −γ + Σ_{j=1}^{m} 1/j.
fn digamma_shifted<T: Float + NumCastUnchecked>(m: i32, euler: T) -> T {
    (1..=m).fold(-euler, |psi, j| psi + T::from_unchecked(j).recip())
}

#[inline]
fn guard_tiny<T: Float>(v: T, tiny: T) -> T {
    if v.abs() < tiny { tiny } else { v }
}

use snafu::Snafu;

use std::fmt;


/// The numerical method used to evaluate `E_n(x)` away from its closed forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    ContinuedFraction,
    PowerSeries,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::ContinuedFraction => write!(f, "continued-fraction"),
            Method::PowerSeries => write!(f, "power-series"),
        }
    }
}


#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("invalid domain for E_n(x): n = {}, x = {}", n, x))]
    InvalidDomain { n: i32, x: f64 },

    #[snafu(display("{} for E_{}({}) did not converge after {} iterations", method, n, x, iterations))]
    NonConvergence {
        method: Method,
        n: i32,
        x: f64,
        iterations: usize,
    },
}

impl Error {
    pub fn is_invalid_domain(&self) -> bool {
        matches!(self, Error::InvalidDomain { .. })
    }

    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Error::NonConvergence { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_method() {
        let err = Error::NonConvergence {
            method: Method::PowerSeries,
            n: 3,
            x: 0.5,
            iterations: 100,
        };

        assert_eq!(err.to_string(), "power-series for E_3(0.5) did not converge after 100 iterations");
        assert!(err.is_non_convergence());
        assert!(!err.is_invalid_domain());
    }

    #[test]
    fn display_invalid_domain() {
        let err = Error::InvalidDomain { n: -1, x: 1.0 };
        assert_eq!(err.to_string(), "invalid domain for E_n(x): n = -1, x = 1");
        assert!(err.is_invalid_domain());
    }
}

//! Tabulated values of `E_n(x)` used to validate the implementation.

use std::fmt;


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expected {
    /// The input lies outside the domain of `E_n(x)`.
    Nan,
    Value(f64),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Nan => write!(f, "NaN"),
            Expected::Value(v) => write!(f, "{:.17}", v),
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    pub n: i32,
    pub x: f64,
    pub expected: Expected,
    pub group: Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Illegal,
    Special,
    General,
}

impl Group {
    pub fn describe(&self) -> &'static str {
        match self {
            Group::Illegal => "illegal cases (should all be NaN)",
            Group::Special => "special cases",
            Group::General => "general cases",
        }
    }
}

impl Case {
    const fn nan(n: i32, x: f64) -> Self {
        Case { n, x, expected: Expected::Nan, group: Group::Illegal }
    }

    const fn special(n: i32, x: f64, value: f64) -> Self {
        Case { n, x, expected: Expected::Value(value), group: Group::Special }
    }

    const fn general(n: i32, x: f64, value: f64) -> Self {
        Case { n, x, expected: Expected::Value(value), group: Group::General }
    }

    /// Whether `value` matches the expected result within `max_relative`.
    pub fn check(&self, value: f64, max_relative: f64) -> bool {
        match self.expected {
            Expected::Nan => value.is_nan(),
            Expected::Value(expected) => {
                let diff = (value - expected).abs();
                let scale = value.abs().max(expected.abs());
                diff <= scale * max_relative
            }
        }
    }
}


pub const CASES: &[Case] = &[
    Case::nan(-1, 1.0),
    Case::nan(1, -1.0),
    Case::nan(0, 0.0),
    Case::nan(1, 0.0),
    Case::nan(0, -1.0),

    Case::special(0, 1.0, 0.36787944117144233),     // 1/e
    Case::special(2, 0.0, 1.0),                     // 1/(n-1)
    Case::special(3, 0.0, 0.5),

    Case::general(1, 1.0, 0.21938393439552027),
    Case::general(1, 2.0, 0.04890051070806112),
    Case::general(1, 0.5, 0.55977359477616084),
    Case::general(10, 1.0, 0.0363939940314164),
    Case::general(10, 2.0, 0.0120920851364003),
];


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_handles_nan() {
        let case = Case::nan(0, 0.0);
        assert!(case.check(f64::NAN, 1e-12));
        assert!(!case.check(0.0, 1e-12));
    }

    #[test]
    fn check_is_relative() {
        let case = Case::general(1, 1.0, 0.21938393439552027);
        assert!(case.check(0.21938393439552029, 1e-12));
        assert!(!case.check(0.2193839, 1e-12));
        assert!(!case.check(f64::NAN, 1e-12));
    }

    #[test]
    fn groups_are_contiguous() {
        let groups: Vec<Group> = CASES.iter().map(|c| c.group).collect();
        let mut sorted = groups.clone();
        sorted.dedup();
        assert_eq!(sorted, vec![Group::Illegal, Group::Special, Group::General]);
    }
}

use expint::reference::{Expected, CASES};
use expint::{expint, try_expint};


#[test]
fn reference_table_matches() {
    for case in CASES {
        let value = expint(case.n, case.x);
        assert!(case.check(value, 1e-12), "expint({}, {}) = {}, expected {}", case.n, case.x, value, case.expected);
    }
}

#[test]
fn nan_cases_are_domain_errors() {
    for case in CASES.iter().filter(|c| c.expected == Expected::Nan) {
        let err = try_expint(case.n, case.x).unwrap_err();
        assert!(err.is_invalid_domain(), "expint({}, {}): {}", case.n, case.x, err);
    }
}

#[test]
fn value_cases_evaluate() {
    for case in CASES.iter().filter(|c| c.expected != Expected::Nan) {
        assert!(try_expint(case.n, case.x).is_ok(), "expint({}, {})", case.n, case.x);
    }
}

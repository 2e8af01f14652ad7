use float_cmp::{approx_eq, F64Margin};

/// Margin used when comparing computed values against closed-form results.
pub fn margin() -> F64Margin {
    F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    }
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

/// Compare two `(real, imaginary)` pairs component by component
pub fn comp_cartesian(
    exemplar: (f64, f64),
    calc: (f64, f64),
    precision: F64Margin,
    test: &str,
    idx: &str,
) {
    comp_f64(&exemplar.0, &calc.0, precision, test, &format!("re({})", idx));
    comp_f64(&exemplar.1, &calc.1, precision, test, &format!("im({})", idx));
}

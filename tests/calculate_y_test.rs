use expcomplex::prelude::*;
use expcomplex::shell;
use expcomplex::util::{comp_cartesian, margin};
use std::f64::consts::{FRAC_PI_2, PI};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_y_at_zero() {
    init();
    let res = calculate_y(&ExpComplex::new(0.0, 0.0)).unwrap();
    comp_cartesian((1.0_f64.cosh(), 0.0), res.to_cartesian(), margin(), "test_y_at_zero", "0");
}

#[test]
fn test_y_at_minus_one() {
    init();
    let res = calculate_y(&ExpComplex::new(1.0, PI)).unwrap();
    comp_cartesian((0.5, 0.0), res.to_cartesian(), margin(), "test_y_at_minus_one", "-1");
}

#[test]
fn test_y_complex_value() {
    init();
    let res = calculate_y(&ExpComplex::new(PI, FRAC_PI_2)).unwrap();
    comp_cartesian(
        (-1.0_f64.cosh(), FRAC_PI_2),
        res.to_cartesian(),
        margin(),
        "test_y_complex_value",
        "i*pi",
    );
}

#[test]
fn test_y_by_parts() {
    init();
    let z = ExpComplex::new(1.0, 1.0);
    let expected = (z / 2.0).unwrap() + HyperbolicCosine.call(&(z + 1.0));
    let res = calculate_y(&z).unwrap();
    comp_cartesian(expected.to_cartesian(), res.to_cartesian(), margin(), "test_y_by_parts", "e^i");
}

#[test]
fn test_division_errors_are_distinguishable() {
    init();
    let err = (ExpComplex::new(1.0, 0.0) / ExpComplex::new(0.0, 0.0)).unwrap_err();
    assert_eq!(err, ExpComplexError::DivisionByZero);
    assert!(matches!(
        ShellError::from(err),
        ShellError::Arithmetic(ExpComplexError::DivisionByZero)
    ));
}

#[test]
fn test_shell_transcript() {
    init();
    let mut out: Vec<u8> = vec![];
    shell::run("1\n3.141592653589793\n".as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Created number z: 1.0000 * e^( i * 3.1416 )"));
    assert!(out.contains("y (cartesian): (0.5000, "));
    assert!(out.contains("z / 2  = 0.5000 * e^( i * 3.1416 )"));
}

#[test]
fn test_shell_rejects_text() {
    init();
    let mut out: Vec<u8> = vec![];
    shell::run("one\ntwo\n".as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Error: enter valid numeric values."));
    assert!(!out.contains("Division error"));
}

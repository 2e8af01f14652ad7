use crate::expcomplex::ExpComplex;

/// A function of one complex argument, called like an object.
pub trait ComplexFunction {
    fn call(&self, z: &ExpComplex) -> ExpComplex;
}

/// Hyperbolic cosine of an exponential-form complex number.
///
/// Uses `cosh(z) = (e^z + e^-z) / 2`, where for `z = x + iy` each exponential
/// is built from Euler's formula as `e^x * (1 * e^(iy))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HyperbolicCosine;

impl HyperbolicCosine {
    pub fn new() -> Self {
        HyperbolicCosine
    }
}

impl ComplexFunction for HyperbolicCosine {
    fn call(&self, z: &ExpComplex) -> ExpComplex {
        let (x, y) = z.to_cartesian();

        let term_plus = x.exp() * ExpComplex::new(1.0, y);
        let term_minus = (-x).exp() * ExpComplex::new(1.0, -y);

        // 2 is well clear of the zero-modulus guard
        (term_plus + term_minus).div_polar(&ExpComplex::from(2.0))
    }
}

#[cfg(test)]
mod functions_tests {
    use super::*;
    use crate::util::{comp_cartesian, margin};
    use num::complex::Complex64;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_cosh_zero() {
        let res = HyperbolicCosine::new().call(&ExpComplex::new(0.0, 0.0));
        comp_cartesian((1.0, 0.0), res.to_cartesian(), margin(), "test_cosh_zero", "0");
    }

    #[test]
    fn test_cosh_real() {
        let res = HyperbolicCosine.call(&ExpComplex::new(1.0, 0.0));
        comp_cartesian((1.0_f64.cosh(), 0.0), res.to_cartesian(), margin(), "test_cosh_real", "1");

        let res = HyperbolicCosine.call(&ExpComplex::new(2.5, PI));
        comp_cartesian((2.5_f64.cosh(), 0.0), res.to_cartesian(), margin(), "test_cosh_real", "-2.5");
    }

    #[test]
    fn test_cosh_pure_imaginary() {
        let res = HyperbolicCosine.call(&ExpComplex::new(PI, FRAC_PI_2));
        comp_cartesian((-1.0, 0.0), res.to_cartesian(), margin(), "test_cosh_pure_imaginary", "i*pi");

        let res = HyperbolicCosine.call(&ExpComplex::new(0.3, -FRAC_PI_2));
        comp_cartesian((0.3_f64.cos(), 0.0), res.to_cartesian(), margin(), "test_cosh_pure_imaginary", "-0.3i");
    }

    #[test]
    fn test_cosh_complex_value() {
        let z = ExpComplex::from_cartesian(1.0, FRAC_PI_4);
        let res = HyperbolicCosine.call(&z);
        let expected = (
            1.0_f64.cosh() * FRAC_PI_4.cos(),
            1.0_f64.sinh() * FRAC_PI_4.sin(),
        );
        comp_cartesian(expected, res.to_cartesian(), margin(), "test_cosh_complex_value", "1 + i*pi/4");
    }

    #[test]
    fn test_cosh_matches_complex64() {
        let cosh = HyperbolicCosine::default();
        for &(re, im) in &[(0.5, -1.2), (-1.7, 0.4), (2.0, 3.0), (0.0, 0.0)] {
            let expected = Complex64::new(re, im).cosh();
            let res = cosh.call(&ExpComplex::from_cartesian(re, im));
            comp_cartesian(
                (expected.re, expected.im),
                res.to_cartesian(),
                margin(),
                "test_cosh_matches_complex64",
                &format!("({}, {})", re, im),
            );
        }
    }

    #[test]
    fn test_cosh_symmetry() {
        let z = ExpComplex::new(2.0, 0.5);
        let z_neg = ExpComplex::new(2.0, 0.5 + PI);
        comp_cartesian(
            HyperbolicCosine.call(&z).to_cartesian(),
            HyperbolicCosine.call(&z_neg).to_cartesian(),
            margin(),
            "test_cosh_symmetry",
            "2 e^(0.5i)",
        );
    }
}

use crate::consts::{DISPLAY_DECIMALS, ZERO_PRECISION};
use crate::error::ExpComplexError;
use log::warn;
use num::complex::Complex64;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A complex number stored in exponential form, `modulus * e^(i * angle)`.
///
/// Values are never mutated; every operation returns a new number. The angle
/// is kept as given and only lands in (-pi, pi] when a value is rebuilt from
/// Cartesian coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpComplex {
    modulus: f64,
    angle: f64,
}

/// Operand accepted by the arithmetic of [`ExpComplex`]: either another
/// exponential-form number or a plain real scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ComplexOrReal {
    Complex(ExpComplex),
    Real(f64),
}

impl ComplexOrReal {
    /// Coerce the operand to an exponential-form number. A real `s` becomes the
    /// point `(s, 0)` in the Cartesian plane.
    pub fn as_complex(self) -> ExpComplex {
        match self {
            ComplexOrReal::Complex(z) => z,
            ComplexOrReal::Real(s) => ExpComplex::from_cartesian(s, 0.0),
        }
    }
}

impl From<f64> for ComplexOrReal {
    fn from(val: f64) -> Self {
        ComplexOrReal::Real(val)
    }
}

impl From<&f64> for ComplexOrReal {
    fn from(val: &f64) -> Self {
        ComplexOrReal::Real(*val)
    }
}

impl From<ExpComplex> for ComplexOrReal {
    fn from(val: ExpComplex) -> Self {
        ComplexOrReal::Complex(val)
    }
}

impl From<&ExpComplex> for ComplexOrReal {
    fn from(val: &ExpComplex) -> Self {
        ComplexOrReal::Complex(*val)
    }
}

impl ExpComplex {
    /// Create a new complex number from a modulus and an angle in radians.
    /// Both are stored verbatim.
    pub fn new(modulus: f64, angle: f64) -> Self {
        ExpComplex { modulus, angle }
    }

    /// Create a new complex number from real and imaginary parts
    pub fn from_cartesian(re: f64, im: f64) -> Self {
        ExpComplex {
            modulus: (re * re + im * im).sqrt(),
            angle: im.atan2(re),
        }
    }

    /// Get the modulus
    pub fn modulus(&self) -> f64 {
        self.modulus
    }

    /// Get the angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Get the real part
    pub fn re(&self) -> f64 {
        self.modulus * self.angle.cos()
    }

    /// Get the imaginary part
    pub fn im(&self) -> f64 {
        self.modulus * self.angle.sin()
    }

    /// Convert to `(real, imaginary)`
    pub fn to_cartesian(&self) -> (f64, f64) {
        (self.re(), self.im())
    }

    /// Multiply in the polar domain: moduli multiply, angles add.
    pub fn multiply(&self, other: impl Into<ComplexOrReal>) -> ExpComplex {
        let other = other.into().as_complex();
        ExpComplex::new(self.modulus * other.modulus, self.angle + other.angle)
    }

    /// Divide in the polar domain: moduli divide, angles subtract.
    ///
    /// Fails with [`ExpComplexError::DivisionByZero`] when the divisor's modulus
    /// is within [`ZERO_PRECISION`] of zero.
    pub fn divide(&self, other: impl Into<ComplexOrReal>) -> Result<ExpComplex, ExpComplexError> {
        let other = other.into().as_complex();
        if other.modulus.abs() < ZERO_PRECISION {
            warn!("refusing to divide {} by near-zero modulus {:e}", self, other.modulus);
            return Err(ExpComplexError::DivisionByZero);
        }
        Ok(self.div_polar(&other))
    }

    /// Polar division without the zero-modulus guard. Callers must know the
    /// divisor is nonzero.
    pub(crate) fn div_polar(&self, other: &ExpComplex) -> ExpComplex {
        ExpComplex::new(self.modulus / other.modulus, self.angle - other.angle)
    }

    /// Add through the Cartesian form.
    pub fn plus(&self, other: impl Into<ComplexOrReal>) -> ExpComplex {
        let (x1, y1) = self.to_cartesian();
        let (x2, y2) = other.into().as_complex().to_cartesian();
        ExpComplex::from_cartesian(x1 + x2, y1 + y2)
    }

    /// Subtract `other` from `self` through the Cartesian form.
    pub fn minus(&self, other: impl Into<ComplexOrReal>) -> ExpComplex {
        let (x1, y1) = self.to_cartesian();
        let (x2, y2) = other.into().as_complex().to_cartesian();
        ExpComplex::from_cartesian(x1 - x2, y1 - y2)
    }
}

impl fmt::Display for ExpComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.prec$} * e^( i * {:.prec$} )",
            self.modulus,
            self.angle,
            prec = DISPLAY_DECIMALS
        )
    }
}

impl From<f64> for ExpComplex {
    fn from(real: f64) -> Self {
        ComplexOrReal::Real(real).as_complex()
    }
}

// Conversion from Complex64
impl From<Complex64> for ExpComplex {
    fn from(num: Complex64) -> Self {
        ExpComplex::from_cartesian(num.re, num.im)
    }
}

// Conversion from ExpComplex
impl From<ExpComplex> for Complex64 {
    fn from(value: ExpComplex) -> Complex64 {
        Complex64::from_polar(value.modulus, value.angle)
    }
}

impl From<&ExpComplex> for Complex64 {
    fn from(value: &ExpComplex) -> Complex64 {
        Complex64::from_polar(value.modulus, value.angle)
    }
}

// Implement the infallible operators for every owned/borrowed/scalar pairing,
// scalar-first included.
macro_rules! impl_binop {
    ($trait: ident, $method: ident, $op: ident) => {
        impl<T: Into<ComplexOrReal>> $trait<T> for ExpComplex {
            type Output = ExpComplex;

            fn $method(self, other: T) -> ExpComplex {
                self.$op(other)
            }
        }

        impl<T: Into<ComplexOrReal>> $trait<T> for &ExpComplex {
            type Output = ExpComplex;

            fn $method(self, other: T) -> ExpComplex {
                self.$op(other)
            }
        }

        impl $trait<ExpComplex> for f64 {
            type Output = ExpComplex;

            fn $method(self, other: ExpComplex) -> ExpComplex {
                ExpComplex::from(self).$op(other)
            }
        }

        impl $trait<&ExpComplex> for f64 {
            type Output = ExpComplex;

            fn $method(self, other: &ExpComplex) -> ExpComplex {
                ExpComplex::from(self).$op(other)
            }
        }
    };
}

impl_binop!(Add, add, plus);
impl_binop!(Sub, sub, minus);
impl_binop!(Mul, mul, multiply);

impl<T: Into<ComplexOrReal>> Div<T> for ExpComplex {
    type Output = Result<ExpComplex, ExpComplexError>;

    fn div(self, other: T) -> Self::Output {
        self.divide(other)
    }
}

impl<T: Into<ComplexOrReal>> Div<T> for &ExpComplex {
    type Output = Result<ExpComplex, ExpComplexError>;

    fn div(self, other: T) -> Self::Output {
        self.divide(other)
    }
}

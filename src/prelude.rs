//! expcomplex prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!
//! ```
//! use expcomplex::prelude::*;
//!
//! let z = ExpComplex::new(1.0, 0.0);
//! let y = calculate_y(&z).unwrap();
//! ```

#[doc(no_inline)]
pub use crate::consts::{DISPLAY_DECIMALS, ZERO_PRECISION};

#[doc(no_inline)]
pub use crate::error::{ExpComplexError, ShellError};

#[doc(no_inline)]
pub use crate::expcomplex::{ComplexOrReal, ExpComplex};

#[doc(no_inline)]
pub use crate::formula::calculate_y;

#[doc(no_inline)]
pub use crate::functions::{ComplexFunction, HyperbolicCosine};

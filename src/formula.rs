use crate::error::ExpComplexError;
use crate::expcomplex::ExpComplex;
use crate::functions::{ComplexFunction, HyperbolicCosine};
use log::debug;

/// Evaluate `y(z) = z/2 + cosh(1 + z)`.
pub fn calculate_y(z: &ExpComplex) -> Result<ExpComplex, ExpComplexError> {
    let cosh = HyperbolicCosine::new();

    let term1 = (z / 2.0)?;
    let term2 = cosh.call(&(1.0 + z));
    debug!("y({}): z/2 = {}, cosh(1 + z) = {}", z, term1, term2);

    Ok(term1 + term2)
}

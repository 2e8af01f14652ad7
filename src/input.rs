use regex::{Regex, RegexBuilder};
use simple_error::{bail, try_with, SimpleError};

// Decimal literal with optional sign, fraction and exponent, or one of the
// special values a float prompt accepts.
const REAL_PATTERN: &str = r"^[+-]?(?:(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:e[+-]?[0-9]+)?|inf(?:inity)?|nan)$";

fn real_regex() -> Result<Regex, SimpleError> {
    Ok(try_with!(
        RegexBuilder::new(REAL_PATTERN).case_insensitive(true).build(),
        "invalid real number pattern"
    ))
}

/// Parse a real number typed by the user. Surrounding whitespace is ignored.
pub fn parse_real(text: &str) -> Result<f64, SimpleError> {
    let val = text.trim();
    if !real_regex()?.is_match(val) {
        bail!("'{}' is not a real number", val);
    }
    match val.parse::<f64>() {
        Ok(num) => Ok(num),
        Err(err) => bail!("'{}' is not a real number: {}", val, err),
    }
}

use crate::consts::DISPLAY_DECIMALS;
use crate::error::ShellError;
use crate::expcomplex::ExpComplex;
use crate::formula::calculate_y;
use crate::input::parse_real;
use log::debug;
use simple_error::SimpleError;
use std::f64::consts::FRAC_PI_4;
use std::io::{self, BufRead, Write};

/// Render a `(real, imaginary)` pair for display.
pub fn format_cartesian((re, im): (f64, f64)) -> String {
    format!("({:.prec$}, {:.prec$})", re, im, prec = DISPLAY_DECIMALS)
}

fn read_real<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64, ShellError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SimpleError::new("unexpected end of input").into());
    }
    Ok(parse_real(&line)?)
}

fn session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), ShellError> {
    let r = read_real(input, output, "Enter the modulus of the complex number (r): ")?;
    let phi = read_real(input, output, "Enter the argument (phi) in radians: ")?;
    debug!("read r = {}, phi = {}", r, phi);

    let z = ExpComplex::new(r, phi);
    writeln!(output, "\nCreated number z: {}", z)?;
    writeln!(output, "Cartesian coordinates: {}", format_cartesian(z.to_cartesian()))?;

    let result = calculate_y(&z)?;
    writeln!(output, "Result of y(z):")?;
    writeln!(output, "y = {}", result)?;
    writeln!(output, "y (cartesian): {}", format_cartesian(result.to_cartesian()))?;

    writeln!(output, "\nArithmetic demonstration:")?;
    let z2 = ExpComplex::new(2.0, FRAC_PI_4);
    writeln!(output, "Second number z2: {}", z2)?;
    writeln!(output, "z + z2 = {}", z + z2)?;
    writeln!(output, "z * z2 = {}", z * z2)?;
    writeln!(output, "z / 2  = {}", (z / 2.0)?)?;
    writeln!(output, "1 + z  = {}", 1.0 + z)?;

    Ok(())
}

/// Run the interactive prompt for `y(z) = z/2 + cosh(1 + z)`.
///
/// Malformed numbers and division by zero are reported on `output`; only
/// I/O failures are returned.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<()> {
    writeln!(output, "y(z) = z/2 + cosh(1 + z)")?;

    match session(&mut input, output) {
        Ok(()) => Ok(()),
        Err(ShellError::InvalidInput(err)) => {
            debug!("rejected input: {}", err);
            writeln!(output, "\nError: enter valid numeric values.")
        }
        Err(ShellError::Arithmetic(err)) => writeln!(output, "\nDivision error: {}", err),
        Err(ShellError::Io(err)) => Err(err),
    }
}

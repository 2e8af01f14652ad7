/// Moduli below this are treated as zero when used as a divisor.
///
/// This is a division guard only; it is not a tolerance for equality.
pub const ZERO_PRECISION: f64 = 1e-8;

/// Number of decimals used when rendering values for display.
pub const DISPLAY_DECIMALS: usize = 4;

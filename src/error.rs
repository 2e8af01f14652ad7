use simple_error::SimpleError;
use std::fmt;
use std::io;

/// Error types for exponential-form arithmetic
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpComplexError {
    DivisionByZero,
}

impl fmt::Display for ExpComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpComplexError::DivisionByZero => write!(f, "Modulus cannot be equal to zero"),
        }
    }
}

impl std::error::Error for ExpComplexError {}

/// Error types reported to the user by the interactive shell
#[derive(Debug)]
pub enum ShellError {
    InvalidInput(SimpleError),
    Arithmetic(ExpComplexError),
    Io(io::Error),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::InvalidInput(err) => write!(f, "Invalid input: {}", err),
            ShellError::Arithmetic(err) => write!(f, "Arithmetic error: {}", err),
            ShellError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::InvalidInput(err) => Some(err),
            ShellError::Arithmetic(err) => Some(err),
            ShellError::Io(err) => Some(err),
        }
    }
}

impl From<SimpleError> for ShellError {
    fn from(err: SimpleError) -> Self {
        ShellError::InvalidInput(err)
    }
}

impl From<ExpComplexError> for ShellError {
    fn from(err: ExpComplexError) -> Self {
        ShellError::Arithmetic(err)
    }
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

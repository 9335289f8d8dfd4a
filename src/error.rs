use std::{ascii, error, fmt, io};

/// Reasons a relation matrix could not be parsed from text. Lines and columns
/// are counted from 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A byte other than `0` or `1` in a row.
    InvalidCharacter { line: usize, column: usize, found: u8 },
    /// A row with a different length than the first row.
    RowLength { line: usize, expected: usize, found: usize },
    /// Rectangular, but not square.
    NotSquare { rows: usize, columns: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidCharacter { line, column, found } => {
                let found = ascii::escape_default(*found);
                write!(f, "invalid character '{}' at line {}, column {}", found, line, column)
            }
            ParseError::RowLength { line, expected, found } => {
                write!(f, "row at line {} has length {}, expected {}", line, found, expected)
            }
            ParseError::NotSquare { rows, columns } => {
                write!(f, "matrix has {} rows but {} columns", rows, columns)
            }
        }
    }
}

impl error::Error for ParseError {}

/// Error when reading or writing a relation matrix file.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

//! The text format of a relation matrix: one row per line, each row a string
//! of `0` and `1` without separators.
//!
//! ```text
//! 0101
//! 0010
//! 1000
//! 0001
//! ```

use std::{
    fmt::{self, Display},
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use log::trace;

use crate::{
    RelationMatrix,
    error::{Error, ParseError},
};

impl RelationMatrix {
    /// Read a matrix from `f`, one row per line. Whitespace around each row is
    /// ignored.
    pub fn parse<T: BufRead>(f: &mut T) -> Result<RelationMatrix, Error> {
        let mut elements: Vec<bool> = Vec::new();
        let mut columns = None;
        let mut rows = 0;
        let mut buf: Vec<u8> = Vec::new();
        loop {
            buf.clear();
            let bytes = f.read_until(b'\n', &mut buf)?;
            if bytes == 0 {
                break;
            }
            rows += 1;
            let row = buf.trim_ascii();
            let line = rows;
            for (i, &found) in row.iter().enumerate() {
                match found {
                    b'0' => elements.push(false),
                    b'1' => elements.push(true),
                    _ => {
                        let column = i + 1;
                        return Err(ParseError::InvalidCharacter { line, column, found }.into());
                    }
                }
            }
            let len = row.len();
            match columns {
                None => columns = Some(len),
                Some(expected) if expected != len => {
                    return Err(ParseError::RowLength { line, expected, found: len }.into());
                }
                Some(_) => {}
            }
        }
        let columns = columns.unwrap_or(0);
        if rows != columns {
            return Err(ParseError::NotSquare { rows, columns }.into());
        }
        Ok(RelationMatrix::from_vec(elements, rows))
    }

    /// Write the matrix to `f` in the same format that
    /// [`RelationMatrix::parse`] reads.
    pub fn write_to<W: Write>(&self, f: &mut W) -> std::io::Result<()> {
        write!(f, "{}", self)
    }
}

impl FromStr for RelationMatrix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match RelationMatrix::parse(&mut s.as_bytes()) {
            Ok(matrix) => Ok(matrix),
            Err(Error::Parse(e)) => Err(e),
            Err(Error::Io(_)) => unreachable!("reading from a string can't fail"),
        }
    }
}

impl Display for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &b in row {
                let v = if b { '1' } else { '0' };
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Read a relation matrix from the file at `path`.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<RelationMatrix, Error> {
    let path = path.as_ref();
    trace!("reading relation from {}", path.display());
    let mut f = BufReader::new(File::open(path)?);
    RelationMatrix::parse(&mut f)
}

/// Write `matrix` to the file at `path`, replacing the file if it already
/// exists.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &RelationMatrix) -> Result<(), Error> {
    let path = path.as_ref();
    trace!("writing relation on {} elements to {}", matrix.dim(), path.display());
    let mut f = BufWriter::new(File::create(path)?);
    matrix.write_to(&mut f)?;
    f.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rows() {
        let m: RelationMatrix = "010\n001\n000\n".parse().unwrap();
        assert_eq!(m.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn parse_crlf_and_spaces() {
        let m: RelationMatrix = " 10\r\n01 \r\n".parse().unwrap();
        assert_eq!(m, RelationMatrix::identity(2));
    }

    #[test]
    fn parse_no_trailing_newline() {
        let m: RelationMatrix = "11\n11".parse().unwrap();
        assert_eq!(m.pairs().count(), 4);
    }

    #[test]
    fn parse_empty() {
        let m: RelationMatrix = "".parse().unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn parse_invalid_character() {
        let e = "01\n02\n".parse::<RelationMatrix>().unwrap_err();
        assert_eq!(e, ParseError::InvalidCharacter { line: 2, column: 2, found: b'2' });
    }

    #[test]
    fn parse_separated() {
        let e = "0,1\n1,0\n".parse::<RelationMatrix>().unwrap_err();
        assert_eq!(e, ParseError::InvalidCharacter { line: 1, column: 2, found: b',' });
    }

    #[test]
    fn parse_non_ascii() {
        let e = RelationMatrix::parse(&mut &b"01\n1\xff\n"[..]).unwrap_err();
        match e {
            Error::Parse(e) => {
                assert_eq!(e, ParseError::InvalidCharacter { line: 2, column: 2, found: 0xff });
                assert_eq!(e.to_string(), "invalid character '\\xff' at line 2, column 2");
            }
            Error::Io(e) => panic!("unexpected I/O error {}", e),
        }
    }

    #[test]
    fn parse_ragged() {
        let e = "010\n01\n000\n".parse::<RelationMatrix>().unwrap_err();
        assert_eq!(e, ParseError::RowLength { line: 2, expected: 3, found: 2 });
    }

    #[test]
    fn parse_blank_line() {
        let e = "01\n\n10\n".parse::<RelationMatrix>().unwrap_err();
        assert_eq!(e, ParseError::RowLength { line: 2, expected: 2, found: 0 });
    }

    #[test]
    fn parse_not_square() {
        let e = "010\n001\n".parse::<RelationMatrix>().unwrap_err();
        assert_eq!(e, ParseError::NotSquare { rows: 2, columns: 3 });
    }

    #[test]
    fn display_rows() {
        let m = RelationMatrix::from_rows(&[[false, true], [true, true]]);
        assert_eq!(m.to_string(), "01\n11\n");
    }

    #[quickcheck]
    fn display_parse(m: RelationMatrix) -> bool {
        m.to_string().parse::<RelationMatrix>() == Ok(m)
    }
}

//! Plain-text sample tables.
//!
//! File layout: optional `#` comment lines, a header `N M` giving the row and
//! column counts, then `N` lines of `M` whitespace-separated numbers.
//!
//! ```text
//! # y = x² on [-2, 2]
//! 5 2
//! -2 4
//! -1 1
//! 0 0
//! 1 1
//! 2 4
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::dynmatrix::DynMatrix;
use crate::traits::FloatScalar;

/// Errors from reading or writing a data file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataFileError {
    /// Underlying I/O failure.
    Io(std::io::ErrorKind),
    /// No `N M` header before the end of input.
    MissingHeader,
    /// The header is not two non-negative integers.
    InvalidHeader { line: usize },
    /// A value could not be parsed as a number.
    NotANumber { line: usize },
    /// A row has the wrong number of values, or the file the wrong number of rows.
    CountMismatch { expected: usize, actual: usize },
}

impl core::fmt::Display for DataFileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataFileError::Io(kind) => write!(f, "i/o error: {kind}"),
            DataFileError::MissingHeader => write!(f, "missing 'rows cols' header"),
            DataFileError::InvalidHeader { line } => {
                write!(f, "line {line}: header must be 'rows cols'")
            }
            DataFileError::NotANumber { line } => {
                write!(f, "line {line}: numerical data expected")
            }
            DataFileError::CountMismatch { expected, actual } => {
                write!(f, "expected {expected} values, found {actual}")
            }
        }
    }
}

impl std::error::Error for DataFileError {}

impl From<std::io::Error> for DataFileError {
    fn from(e: std::io::Error) -> Self {
        DataFileError::Io(e.kind())
    }
}

/// Read a sample table from a file.
pub fn read<T: FloatScalar + FromStr>(path: impl AsRef<Path>) -> Result<DynMatrix<T>, DataFileError> {
    let path = path.as_ref();
    let table = read_from(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), rows = table.nrows(), cols = table.ncols(), "read data file");
    Ok(table)
}

/// Read a sample table from any buffered reader.
pub fn read_from<T: FloatScalar + FromStr, R: BufRead>(reader: R) -> Result<DynMatrix<T>, DataFileError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| match l {
            Ok(s) => {
                let s = s.trim();
                !s.is_empty() && !s.starts_with('#')
            }
            Err(_) => true,
        });

    let (header_line, header) = match lines.next() {
        Some((n, l)) => (n, l?),
        None => return Err(DataFileError::MissingHeader),
    };
    let dims: Vec<usize> = header
        .split_whitespace()
        .map(|t| t.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|_| DataFileError::InvalidHeader { line: header_line })?;
    let &[nrows, ncols] = dims.as_slice() else {
        return Err(DataFileError::InvalidHeader { line: header_line });
    };

    let mut rows = Vec::with_capacity(nrows.saturating_mul(ncols).min(1 << 16));
    let mut seen = 0;
    for (line_no, line) in lines {
        let line = line?;
        let before = rows.len();
        for token in line.split_whitespace() {
            let v = token
                .parse::<T>()
                .map_err(|_| DataFileError::NotANumber { line: line_no })?;
            rows.push(v);
        }
        let count = rows.len() - before;
        if count != ncols {
            return Err(DataFileError::CountMismatch {
                expected: ncols,
                actual: count,
            });
        }
        seen += 1;
    }
    if seen != nrows {
        return Err(DataFileError::CountMismatch {
            expected: nrows,
            actual: seen,
        });
    }

    Ok(DynMatrix::from_rows(nrows, ncols, &rows))
}

/// Parse a sample table held in a string.
pub fn parse<T: FloatScalar + FromStr>(text: &str) -> Result<DynMatrix<T>, DataFileError> {
    read_from(text.as_bytes())
}

/// Write a sample table to a file, creating or truncating it.
pub fn write<T: FloatScalar + core::fmt::Display>(
    path: impl AsRef<Path>,
    table: &DynMatrix<T>,
) -> Result<(), DataFileError> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    write_to(&mut w, table)?;
    w.flush()?;
    debug!(path = %path.display(), rows = table.nrows(), "wrote data file");
    Ok(())
}

/// Write a sample table in the layout accepted by [`read_from`].
pub fn write_to<T: FloatScalar + core::fmt::Display, W: Write>(
    mut w: W,
    table: &DynMatrix<T>,
) -> Result<(), DataFileError> {
    writeln!(w, "{} {}", table.nrows(), table.ncols())?;
    for i in 0..table.nrows() {
        for j in 0..table.ncols() {
            if j > 0 {
                write!(w, " ")?;
            }
            write!(w, "{}", table[(i, j)])?;
        }
        writeln!(w)?;
    }
    Ok(())
}

//! Plain-text matrix serialization.
//!
//! The format is whitespace-separated: `dim1 dim2` followed by the `dim1 · dim2` cell
//! values in row-major order. Complex values use the `a+bi` notation of `num_complex`.
//! There is no header and no recovery: the first token that fails to parse aborts the read.

use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

use num_complex::Complex;

use crate::core::traits::{Matrix, Scalar};
use crate::error::LaError;
use crate::matrix::dense::DenseMatrix;

/// Write every cell of `m`, stored or not, in row-major order.
pub fn write_matrix<W: Write, M: Matrix>(mut out: W, m: &M) -> Result<(), LaError> {
    write!(out, "{} {} ", m.dim1(), m.dim2())?;
    for i in 0..m.dim1() {
        for j in 0..m.dim2() {
            write!(out, "{} ", m.get(i, j)?)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Read a matrix written by [`write_matrix`] into dense storage.
pub fn read_matrix<T, R>(mut input: R) -> Result<DenseMatrix<T>, LaError>
where
    T: Scalar,
    <T as FromStr>::Err: Display,
    R: Read,
{
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let dim1 = parse_dim(tokens.next(), "row count")?;
    let dim2 = parse_dim(tokens.next(), "column count")?;
    let len = dim1
        .checked_mul(dim2)
        .ok_or_else(|| LaError::Format(format!("{dim1}x{dim2} is too large")))?;

    // the header is untrusted; grow past this as values actually arrive
    let mut data = Vec::with_capacity(len.min(1 << 16));
    for k in 0..len {
        let tok = tokens
            .next()
            .ok_or_else(|| LaError::Format(format!("expected {len} values, found {k}")))?;
        let v = tok
            .parse::<T>()
            .map_err(|e| LaError::Format(format!("value {k} (`{tok}`): {e}")))?;
        data.push(v);
    }
    if let Some(extra) = tokens.next() {
        return Err(LaError::Format(format!("unexpected trailing token `{extra}`")));
    }
    DenseMatrix::from_row_major(dim1, dim2, data)
}

pub fn read_real_matrix<R: Read>(input: R) -> Result<DenseMatrix<f64>, LaError> {
    read_matrix(input)
}

pub fn read_complex_matrix<R: Read>(input: R) -> Result<DenseMatrix<Complex<f64>>, LaError> {
    read_matrix(input)
}

fn parse_dim(tok: Option<&str>, what: &str) -> Result<usize, LaError> {
    let tok = tok.ok_or_else(|| LaError::Format(format!("missing {what}")))?;
    tok.parse()
        .map_err(|e| LaError::Format(format!("{what} `{tok}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::band::BandMatrix;

    #[test]
    fn writes_every_cell_row_major() {
        let mut b = BandMatrix::new(2, 3, 0, 1);
        b.set(0, 0, 1.0).unwrap();
        b.set(0, 1, 2.5).unwrap();
        b.set(1, 2, -4.0).unwrap();
        let mut buf = Vec::new();
        write_matrix(&mut buf, &b).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "2 3 1 2.5 0 0 0 -4 ");
    }

    #[test]
    fn malformed_input_is_a_format_error() {
        assert!(matches!(read_real_matrix("2 2 1 2 3".as_bytes()), Err(LaError::Format(_))));
        assert!(matches!(read_real_matrix("2 x".as_bytes()), Err(LaError::Format(_))));
        assert!(matches!(read_real_matrix("1 1 oops".as_bytes()), Err(LaError::Format(_))));
        assert!(matches!(read_real_matrix("1 1 1 2".as_bytes()), Err(LaError::Format(_))));
        assert!(matches!(read_real_matrix("".as_bytes()), Err(LaError::Format(_))));
    }

    #[test]
    fn huge_header_without_values_is_a_format_error() {
        for header in ["4000000000 4000000000 1", "100000000 100000000 1.5 2.5"] {
            assert!(matches!(read_real_matrix(header.as_bytes()), Err(LaError::Format(_))));
        }
        let huge = format!("{} {} 1", usize::MAX, 2);
        assert!(matches!(read_real_matrix(huge.as_bytes()), Err(LaError::Format(_))));
    }
}

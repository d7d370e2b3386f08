//! Conversions between storage layouts.
//!
//! Sparse layouts are built from a dense source. Band conversion first discovers the
//! smallest left/right bandwidth that covers every non-zero, row-profile conversion
//! discovers each row's leftmost and rightmost non-zero, and compressed-row conversion
//! keeps exactly the non-zero cells. Any layout converts back to dense element by element.

use crate::core::traits::{Matrix, Scalar};
use crate::error::LaError;
use crate::matrix::band::BandMatrix;
use crate::matrix::compressed::CsrMatrix;
use crate::matrix::dense::DenseMatrix;
use crate::matrix::profile::RowProfileMatrix;

/// Layouts that can be built from a dense matrix.
pub trait FromDense: Matrix + Sized {
    fn from_dense(src: &DenseMatrix<Self::Scalar>) -> Self;
}

/// Build layout `M` from `src`, e.g. `convert::<CsrMatrix<f64>>(&a)`.
pub fn convert<M: FromDense>(src: &DenseMatrix<M::Scalar>) -> M {
    M::from_dense(src)
}

/// Copy `src` into an already shaped `target`.
///
/// # Errors
/// `DimensionMismatch` if the shapes differ, `InvalidSparseWrite` if `src` has a non-zero
/// where `target` stores nothing.
pub fn convert_into<M: Matrix>(src: &DenseMatrix<M::Scalar>, target: &mut M) -> Result<(), LaError> {
    assign_elementwise(target, src)
}

/// Write every cell of `from` into `to`.
pub fn assign_elementwise<Dst, Src>(to: &mut Dst, from: &Src) -> Result<(), LaError>
where
    Dst: Matrix,
    Src: Matrix<Scalar = Dst::Scalar>,
{
    if to.dim1() != from.dim1() || to.dim2() != from.dim2() {
        return Err(LaError::shape(
            "element-wise assignment",
            (to.dim1(), to.dim2()),
            (from.dim1(), from.dim2()),
        ));
    }
    for i in 0..to.dim1() {
        for j in 0..to.dim2() {
            to.set(i, j, from.get(i, j)?)?;
        }
    }
    Ok(())
}

/// Dense copy of any layout.
pub fn to_dense<M: Matrix>(m: &M) -> Result<DenseMatrix<M::Scalar>, LaError> {
    let mut res = DenseMatrix::zeros(m.dim1(), m.dim2());
    assign_elementwise(&mut res, m)?;
    Ok(res)
}

/// Smallest `(left, right)` bandwidths such that every non-zero `(i, j)` satisfies
/// `i - left <= j <= i + right`. The diagonal always counts as inside the band.
pub fn band_widths<T: Scalar>(m: &DenseMatrix<T>) -> (usize, usize) {
    let (mut left, mut right) = (0, 0);
    for i in 0..m.dim1() {
        let row = m.row(i);
        let diag = i.min(row.len());
        if let Some(j) = row[..diag].iter().position(|v| !v.is_zero()) {
            left = left.max(i - j);
        }
        if i + 1 < row.len() {
            if let Some(p) = row[i + 1..].iter().rposition(|v| !v.is_zero()) {
                right = right.max(p + 1);
            }
        }
    }
    (left, right)
}

/// Leftmost and rightmost non-zero column of `row`, `None` for an all-zero row.
pub fn row_envelope<T: Scalar>(m: &DenseMatrix<T>, row: usize) -> Option<(usize, usize)> {
    let vals = m.row(row);
    let first = vals.iter().position(|v| !v.is_zero())?;
    let last = vals.iter().rposition(|v| !v.is_zero()).unwrap_or(first);
    Some((first, last))
}

impl<T: Scalar> FromDense for DenseMatrix<T> {
    fn from_dense(src: &DenseMatrix<T>) -> Self {
        src.clone()
    }
}

impl<T: Scalar> FromDense for BandMatrix<T> {
    fn from_dense(src: &DenseMatrix<T>) -> Self {
        let (left, right) = band_widths(src);
        log::debug!(
            "band conversion of {}x{}: left bandwidth {left}, right bandwidth {right}",
            src.dim1(),
            src.dim2()
        );
        let mut band = BandMatrix::new(src.dim1(), src.dim2(), left, right);
        for i in 0..src.dim1() {
            let (first, slots) = band.row_slots_mut(i);
            let n = slots.len();
            slots.copy_from_slice(&src.row(i)[first..first + n]);
        }
        band
    }
}

impl<T: Scalar> FromDense for CsrMatrix<T> {
    fn from_dense(src: &DenseMatrix<T>) -> Self {
        let mut row_start = Vec::with_capacity(src.dim1() + 1);
        let mut col_index = Vec::new();
        let mut values = Vec::new();
        for i in 0..src.dim1() {
            row_start.push(values.len());
            for (j, &v) in src.row(i).iter().enumerate() {
                if !v.is_zero() {
                    col_index.push(j);
                    values.push(v);
                }
            }
        }
        row_start.push(values.len());
        log::debug!(
            "compressed-row conversion of {}x{}: {} stored entries",
            src.dim1(),
            src.dim2(),
            values.len()
        );
        CsrMatrix::from_parts_unchecked(src.dim1(), src.dim2(), row_start, col_index, values)
    }
}

impl<T: Scalar> FromDense for RowProfileMatrix<T> {
    fn from_dense(src: &DenseMatrix<T>) -> Self {
        let mut row_start = Vec::with_capacity(src.dim1() + 1);
        let mut left_index = Vec::with_capacity(src.dim1());
        let mut values = Vec::new();
        for i in 0..src.dim1() {
            row_start.push(values.len());
            match row_envelope(src, i) {
                Some((first, last)) => {
                    left_index.push(first);
                    values.extend_from_slice(&src.row(i)[first..=last]);
                }
                None => left_index.push(0),
            }
        }
        row_start.push(values.len());
        log::debug!(
            "row-profile conversion of {}x{}: {} stored entries",
            src.dim1(),
            src.dim2(),
            values.len()
        );
        RowProfileMatrix::from_parts_unchecked(src.dim1(), src.dim2(), row_start, left_index, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_widths_take_global_maximum() {
        // row 0 has nothing off-diagonal, row 2 reaches two columns left, row 1 one column right
        let a = DenseMatrix::from_rows(&[
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 4.0, 0.0],
            [7.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        assert_eq!(band_widths(&a), (2, 1));
    }

    #[test]
    fn diagonal_matrix_has_zero_bandwidth() {
        let a = DenseMatrix::<f64>::identity(4);
        assert_eq!(band_widths(&a), (0, 0));
        let b: BandMatrix<f64> = convert(&a);
        assert_eq!(b.pitch(), 1);
        assert_eq!(to_dense(&b).unwrap(), a);
    }

    #[test]
    fn zero_diagonal_still_counts_as_band() {
        let a = DenseMatrix::from_rows(&[[0.0, 2.0], [3.0, 0.0]]).unwrap();
        let b: BandMatrix<f64> = convert(&a);
        assert_eq!((b.left_bandwidth(), b.right_bandwidth()), (1, 1));
        assert_eq!(b.stored_len(), 4);
    }

    #[test]
    fn envelope_of_rows() {
        let a = DenseMatrix::from_rows(&[[0.0, 1.0, 0.0, 2.0], [0.0, 0.0, 0.0, 0.0]]).unwrap();
        assert_eq!(row_envelope(&a, 0), Some((1, 3)));
        assert_eq!(row_envelope(&a, 1), None);
    }

    #[test]
    fn convert_into_checks_shape() {
        let a = DenseMatrix::<f64>::identity(3);
        let mut small = BandMatrix::new(2, 2, 0, 0);
        assert!(matches!(convert_into(&a, &mut small), Err(LaError::DimensionMismatch(_))));
        let mut narrow = BandMatrix::new(3, 3, 0, 0);
        convert_into(&a, &mut narrow).unwrap();
        assert_eq!(to_dense(&narrow).unwrap(), a);
        let full = DenseMatrix::from_fn(3, 3, |_, _| 1.0);
        assert!(matches!(convert_into(&full, &mut narrow), Err(LaError::InvalidSparseWrite { .. })));
    }
}

//! Forward and back substitution over a factored matrix.
//!
//! `*_solve_in_place` reads the factors through [`Matrix::get`] only and works column by
//! column, so it runs on any layout. `*_solve_rows` walks each row with a non-zero cursor
//! and touches only stored entries.

use num_traits::Zero;

use crate::core::traits::{Matrix, NonZeroRows};
use crate::error::LaError;
use crate::matrix::vector::DenseVector;

fn check<M: Matrix>(a: &M, b: &DenseVector<M::Scalar>) -> Result<usize, LaError> {
    if !a.is_square() || a.dim1() != b.dim() {
        return Err(LaError::shape("triangular solve", (a.dim1(), a.dim2()), (b.dim(), 1)));
    }
    Ok(a.dim1())
}

fn diagonal<M: Matrix>(a: &M, i: usize) -> Result<M::Scalar, LaError> {
    let d = a.get(i, i)?;
    if d.is_zero() {
        return Err(LaError::SingularMatrix { row: i });
    }
    Ok(d)
}

/// Solve `L U x = b` in place, `b` becoming `x`.
pub fn lu_solve_in_place<M: Matrix>(a: &M, b: &mut DenseVector<M::Scalar>) -> Result<(), LaError> {
    let n = check(a, b)?;
    let x = b.as_mut_slice();
    forward_unit(a, x, n)?;
    for i in (0..n).rev() {
        x[i] = x[i] / diagonal(a, i)?;
        for j in 0..i {
            x[j] = x[j] - x[i] * a.get(j, i)?;
        }
    }
    Ok(())
}

/// Solve `L D U x = b` in place, `b` becoming `x`.
pub fn ldu_solve_in_place<M: Matrix>(a: &M, b: &mut DenseVector<M::Scalar>) -> Result<(), LaError> {
    let n = check(a, b)?;
    let x = b.as_mut_slice();
    forward_unit(a, x, n)?;
    for (i, xi) in x.iter_mut().enumerate() {
        *xi = *xi / diagonal(a, i)?;
    }
    for i in (0..n).rev() {
        for j in 0..i {
            x[j] = x[j] - x[i] * a.get(j, i)?;
        }
    }
    Ok(())
}

fn forward_unit<M: Matrix>(a: &M, x: &mut [M::Scalar], n: usize) -> Result<(), LaError> {
    for i in 0..n {
        for j in i + 1..n {
            x[j] = x[j] - x[i] * a.get(j, i)?;
        }
    }
    Ok(())
}

/// Cursor-driven `L U x = b`.
pub fn lu_solve_rows<M: NonZeroRows>(a: &M, b: &mut DenseVector<M::Scalar>) -> Result<(), LaError> {
    let n = check(a, b)?;
    let x = b.as_mut_slice();
    forward_rows(a, x, n)?;
    for i in (0..n).rev() {
        let mut acc = x[i];
        let mut d = M::Scalar::zero();
        for (j, &u) in a.row_begin(i)? {
            if j == i {
                d = u;
            } else if j > i {
                acc = acc - u * x[j];
            }
        }
        if d.is_zero() {
            return Err(LaError::SingularMatrix { row: i });
        }
        x[i] = acc / d;
    }
    Ok(())
}

/// Cursor-driven `L D U x = b`.
pub fn ldu_solve_rows<M: NonZeroRows>(a: &M, b: &mut DenseVector<M::Scalar>) -> Result<(), LaError> {
    let n = check(a, b)?;
    let x = b.as_mut_slice();
    forward_rows(a, x, n)?;
    for (i, xi) in x.iter_mut().enumerate() {
        *xi = *xi / diagonal(a, i)?;
    }
    for i in (0..n).rev() {
        let mut acc = x[i];
        for (j, &u) in a.row_begin(i)?.filter(|&(j, _)| j > i) {
            acc = acc - u * x[j];
        }
        x[i] = acc;
    }
    Ok(())
}

fn forward_rows<M: NonZeroRows>(a: &M, x: &mut [M::Scalar], n: usize) -> Result<(), LaError> {
    for i in 0..n {
        let mut acc = x[i];
        for (j, &l) in a.row_begin(i)?.take_while(|&(j, _)| j < i) {
            acc = acc - l * x[j];
        }
        x[i] = acc;
    }
    Ok(())
}

//! Dense row-major matrix container.
//!
//! This module provides `DenseMatrix`, the plain contiguous store every conversion starts
//! from, together with its element-wise arithmetic and conversions to and from `faer::Mat`.

use std::fmt;
use std::ops::{Index, IndexMut, MulAssign};

use faer::Mat;

use crate::core::cursor::{ColCursor, RowCursor, RowCursorMut};
use crate::core::element::ElementRef;
use crate::core::traits::{Matrix, NonZeroCols, NonZeroRows, Scalar};
use crate::error::LaError;
use crate::matrix::vector::DenseVector;

/// Row-major `dim1 × dim2` matrix with every cell stored.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<T> {
    dim1: usize,
    dim2: usize,
    data: Vec<T>,
}

impl<T: Scalar> DenseMatrix<T> {
    pub fn zeros(dim1: usize, dim2: usize) -> Self {
        Self { dim1, dim2, data: vec![T::zero(); dim1 * dim2] }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn from_fn(dim1: usize, dim2: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(dim1 * dim2);
        for i in 0..dim1 {
            for j in 0..dim2 {
                data.push(f(i, j));
            }
        }
        Self { dim1, dim2, data }
    }

    /// Construct from raw row-major storage.
    pub fn from_row_major(dim1: usize, dim2: usize, data: Vec<T>) -> Result<Self, LaError> {
        if data.len() != dim1 * dim2 {
            return Err(LaError::DimensionMismatch(format!(
                "{dim1}x{dim2} matrix needs {} values, got {}",
                dim1 * dim2,
                data.len()
            )));
        }
        Ok(Self { dim1, dim2, data })
    }

    /// Construct from a slice of equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LaError> {
        let dim1 = rows.len();
        let dim2 = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(dim1 * dim2);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dim2 {
                return Err(LaError::DimensionMismatch(format!(
                    "row {i} has {} columns, expected {dim2}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { dim1, dim2, data })
    }

    pub(crate) fn from_vec(dim1: usize, dim2: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), dim1 * dim2);
        Self { dim1, dim2, data }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub(crate) fn into_data(self) -> Vec<T> {
        self.data
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.dim2..(i + 1) * self.dim2]
    }

    fn check_same_shape(&self, rhs: &Self, what: &str) -> Result<(), LaError> {
        if self.dim1 != rhs.dim1 || self.dim2 != rhs.dim2 {
            return Err(LaError::shape(what, (self.dim1, self.dim2), (rhs.dim1, rhs.dim2)));
        }
        Ok(())
    }

    /// Element-wise `self += rhs`.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<(), LaError> {
        self.check_same_shape(rhs, "matrix addition")?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// Element-wise `self -= rhs`.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<(), LaError> {
        self.check_same_shape(rhs, "matrix subtraction")?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Matrix product `self · rhs`.
    pub fn mat_mul(&self, rhs: &Self) -> Result<Self, LaError> {
        if self.dim2 != rhs.dim1 {
            return Err(LaError::shape("matrix product", (self.dim1, self.dim2), (rhs.dim1, rhs.dim2)));
        }
        let mut res = Self::zeros(self.dim1, rhs.dim2);
        for i in 0..self.dim1 {
            for k in 0..self.dim2 {
                let a = self.data[i * self.dim2 + k];
                for j in 0..rhs.dim2 {
                    let idx = i * rhs.dim2 + j;
                    res.data[idx] = res.data[idx] + a * rhs.data[k * rhs.dim2 + j];
                }
            }
        }
        Ok(res)
    }

    /// Dense product with a column vector, visiting every cell.
    pub fn mat_vec(&self, x: &DenseVector<T>) -> Result<DenseVector<T>, LaError> {
        if self.dim2 != x.dim() {
            return Err(LaError::shape("matrix-vector product", (self.dim1, self.dim2), (x.dim(), 1)));
        }
        let x = x.as_slice();
        let mut y = vec![T::zero(); self.dim1];
        for (i, yi) in y.iter_mut().enumerate() {
            for (j, &a) in self.row(i).iter().enumerate() {
                *yi = *yi + x[j] * a;
            }
        }
        Ok(DenseVector::column(y))
    }

    /// Dense product of a row vector with this matrix, visiting every cell.
    pub fn vec_mat(&self, x: &DenseVector<T>) -> Result<DenseVector<T>, LaError> {
        if self.dim1 != x.dim() {
            return Err(LaError::shape("vector-matrix product", (1, x.dim()), (self.dim1, self.dim2)));
        }
        let x = x.as_slice();
        let mut y = vec![T::zero(); self.dim2];
        for (j, yj) in y.iter_mut().enumerate() {
            for (i, &xi) in x.iter().enumerate() {
                *yj = *yj + xi * self.data[i * self.dim2 + j];
            }
        }
        Ok(DenseVector::row(y))
    }

    /// Copy into a `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.dim1, self.dim2, |i, j| self.data[i * self.dim2 + j])
    }
}

impl<T: Scalar> From<&Mat<T>> for DenseMatrix<T> {
    fn from(m: &Mat<T>) -> Self {
        DenseMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

impl<T: Scalar> MulAssign<T> for DenseMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for v in self.data.iter_mut() {
            *v = *v * rhs;
        }
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.dim1 && j < self.dim2, "index ({i}, {j}) out of bounds");
        &self.data[i * self.dim2 + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.dim1 && j < self.dim2, "index ({i}, {j}) out of bounds");
        &mut self.data[i * self.dim2 + j]
    }
}

impl<T: Scalar> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dim1 {
            for v in self.row(i) {
                write!(f, "{v} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix for DenseMatrix<T> {
    type Scalar = T;

    fn dim1(&self) -> usize {
        self.dim1
    }

    fn dim2(&self) -> usize {
        self.dim2
    }

    fn get(&self, i: usize, j: usize) -> Result<T, LaError> {
        self.check_index(i, j)?;
        Ok(self.data[i * self.dim2 + j])
    }

    fn element(&mut self, i: usize, j: usize) -> Result<ElementRef<'_, T>, LaError> {
        self.check_index(i, j)?;
        Ok(ElementRef::Bound(&mut self.data[i * self.dim2 + j]))
    }

    fn stored_len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Scalar> NonZeroRows for DenseMatrix<T> {
    fn row_begin(&self, row: usize) -> Result<RowCursor<'_, T>, LaError> {
        self.check_row(row)?;
        Ok(RowCursor::span(self.row(row), 0))
    }

    fn row_begin_mut(&mut self, row: usize) -> Result<RowCursorMut<'_, T>, LaError> {
        self.check_row(row)?;
        let w = self.dim2;
        Ok(RowCursorMut::span(&mut self.data[row * w..(row + 1) * w], 0))
    }
}

impl<T: Scalar> NonZeroCols for DenseMatrix<T> {
    fn col_begin(&self, col: usize) -> Result<ColCursor<'_, T>, LaError> {
        self.check_col(col)?;
        Ok(ColCursor::strided(&self.data, col, self.dim2, 0, self.dim1))
    }
}

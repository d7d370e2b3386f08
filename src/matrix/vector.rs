//! Dense vectors as one-row or one-column matrices.

use std::ops::{Index, IndexMut};

use crate::core::traits::{Matrix, Scalar};
use crate::error::LaError;
use crate::matrix::dense::DenseMatrix;

/// Which dimension of the backing matrix is fixed to 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// `dim × 1`
    #[default]
    Column,
    /// `1 × dim`
    Row,
}

/// A `DenseMatrix` with one unit dimension, addressed by a single index.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseVector<T> {
    orientation: Orientation,
    inner: DenseMatrix<T>,
}

impl<T: Scalar> DenseVector<T> {
    pub fn zeros(dim: usize, orientation: Orientation) -> Self {
        Self::with_orientation(vec![T::zero(); dim], orientation)
    }

    pub fn column(values: Vec<T>) -> Self {
        Self::with_orientation(values, Orientation::Column)
    }

    pub fn row(values: Vec<T>) -> Self {
        Self::with_orientation(values, Orientation::Row)
    }

    fn with_orientation(values: Vec<T>, orientation: Orientation) -> Self {
        let n = values.len();
        let inner = match orientation {
            Orientation::Column => DenseMatrix::from_vec(n, 1, values),
            Orientation::Row => DenseMatrix::from_vec(1, n, values),
        };
        Self { orientation, inner }
    }

    pub fn dim(&self) -> usize {
        match self.orientation {
            Orientation::Column => self.inner.dim1(),
            Orientation::Row => self.inner.dim2(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn cell(&self, k: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Column => (k, 0),
            Orientation::Row => (0, k),
        }
    }

    /// Bounds-checked read of component `k`.
    pub fn at(&self, k: usize) -> Result<T, LaError> {
        let (i, j) = self.cell(k);
        self.inner.get(i, j)
    }

    /// Bounds-checked write of component `k`.
    pub fn set_at(&mut self, k: usize, v: T) -> Result<(), LaError> {
        let (i, j) = self.cell(k);
        self.inner.set(i, j, v)
    }

    pub fn as_slice(&self) -> &[T] {
        self.inner.data()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.data_mut()
    }

    pub fn as_matrix(&self) -> &DenseMatrix<T> {
        &self.inner
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_data()
    }

    /// Same components with the other orientation.
    pub fn transposed(self) -> Self {
        let orientation = match self.orientation {
            Orientation::Column => Orientation::Row,
            Orientation::Row => Orientation::Column,
        };
        Self::with_orientation(self.into_vec(), orientation)
    }
}

impl<T: Scalar> From<Vec<T>> for DenseVector<T> {
    fn from(values: Vec<T>) -> Self {
        DenseVector::column(values)
    }
}

impl<T: Scalar> Index<usize> for DenseVector<T> {
    type Output = T;
    fn index(&self, k: usize) -> &T {
        &self.as_slice()[k]
    }
}

impl<T: Scalar> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, k: usize) -> &mut T {
        &mut self.as_mut_slice()[k]
    }
}

//! Core linear-algebra traits for sparsela.
//!
//! Every storage layout implements [`Matrix`]; layouts that can enumerate their stored
//! entries row by row also implement [`NonZeroRows`], and the ones whose storage has a fixed
//! stride down a column implement [`NonZeroCols`]. The factorization and product algorithms
//! are written once against these traits and monomorphized per layout.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_complex::Complex;
use num_traits::Num;

use crate::core::cursor::{ColCursor, RowCursor, RowCursorMut};
use crate::core::element::ElementRef;
use crate::error::LaError;

/// Element type of a matrix: real or complex, closed under `+ - * /`.
pub trait Scalar: Num + Copy + Debug + Display + FromStr + 'static {
    /// `false` for infinities and NaNs (in any component).
    fn is_finite(self) -> bool;
    /// Absolute value (modulus for complex numbers), widened to `f64`.
    fn modulus(self) -> f64;
}

impl Scalar for f64 {
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn modulus(self) -> f64 {
        self.abs()
    }
}

impl Scalar for f32 {
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn modulus(self) -> f64 {
        f64::from(self.abs())
    }
}

impl Scalar for Complex<f64> {
    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
    fn modulus(self) -> f64 {
        self.norm()
    }
}

impl Scalar for Complex<f32> {
    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
    fn modulus(self) -> f64 {
        f64::from(self.norm())
    }
}

/// Element access shared by every storage layout.
pub trait Matrix {
    /// Associated scalar type.
    type Scalar: Scalar;

    /// Number of rows.
    fn dim1(&self) -> usize;
    /// Number of columns.
    fn dim2(&self) -> usize;

    /// Read cell `(i, j)`; cells outside the stored pattern read as zero.
    fn get(&self, i: usize, j: usize) -> Result<Self::Scalar, LaError>;

    /// Read/write handle to cell `(i, j)`.
    fn element(&mut self, i: usize, j: usize) -> Result<ElementRef<'_, Self::Scalar>, LaError>;

    /// Write `v` into cell `(i, j)`.
    ///
    /// Fails with [`LaError::InvalidSparseWrite`] when the cell is not stored and `v` is not zero.
    fn set(&mut self, i: usize, j: usize, v: Self::Scalar) -> Result<(), LaError> {
        self.element(i, j)?.write(v)
    }

    /// Number of explicitly stored entries (stored zeros included).
    fn stored_len(&self) -> usize;

    fn check_index(&self, i: usize, j: usize) -> Result<(), LaError> {
        if i >= self.dim1() {
            return Err(LaError::IndexOutOfRange { index: i, bound: self.dim1() });
        }
        if j >= self.dim2() {
            return Err(LaError::IndexOutOfRange { index: j, bound: self.dim2() });
        }
        Ok(())
    }

    fn is_square(&self) -> bool {
        self.dim1() == self.dim2()
    }
}

/// Row-wise traversal of the stored entries, in strictly increasing column order.
pub trait NonZeroRows: Matrix {
    /// Cursor positioned on the first stored entry of `row`.
    fn row_begin(&self, row: usize) -> Result<RowCursor<'_, Self::Scalar>, LaError>;

    /// Mutable cursor positioned on the first stored entry of `row`.
    fn row_begin_mut(&mut self, row: usize) -> Result<RowCursorMut<'_, Self::Scalar>, LaError>;

    /// Cursor positioned one past the last stored entry of `row`.
    fn row_end(&self, row: usize) -> Result<RowCursor<'_, Self::Scalar>, LaError> {
        let mut cursor = self.row_begin(row)?;
        cursor.seek_end();
        Ok(cursor)
    }

    fn check_row(&self, row: usize) -> Result<(), LaError> {
        if row >= self.dim1() {
            return Err(LaError::IndexOutOfRange { index: row, bound: self.dim1() });
        }
        Ok(())
    }
}

/// Column-wise traversal for layouts with a fixed stride between rows.
pub trait NonZeroCols: Matrix {
    /// Cursor positioned on the first stored entry of `col`.
    fn col_begin(&self, col: usize) -> Result<ColCursor<'_, Self::Scalar>, LaError>;

    /// Cursor positioned one past the last stored entry of `col`.
    fn col_end(&self, col: usize) -> Result<ColCursor<'_, Self::Scalar>, LaError> {
        let mut cursor = self.col_begin(col)?;
        cursor.seek_end();
        Ok(cursor)
    }

    fn check_col(&self, col: usize) -> Result<(), LaError> {
        if col >= self.dim2() {
            return Err(LaError::IndexOutOfRange { index: col, bound: self.dim2() });
        }
        Ok(())
    }
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V) -> Result<V, LaError>;
}

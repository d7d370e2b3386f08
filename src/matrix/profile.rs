//! Row-profile (skyline) storage.
//!
//! Each row keeps one contiguous run of columns `[left_index[i], left_index[i] + len_i)`,
//! where `len_i = row_start[i + 1] - row_start[i]`. Everything inside the run is stored,
//! zeros included; everything outside is an implicit zero.

use crate::core::cursor::{RowCursor, RowCursorMut};
use crate::core::element::ElementRef;
use crate::core::traits::{Matrix, NonZeroRows, Scalar};
use crate::error::LaError;

#[derive(Clone, Debug, PartialEq)]
pub struct RowProfileMatrix<T> {
    dim1: usize,
    dim2: usize,
    row_start: Vec<usize>,
    left_index: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> RowProfileMatrix<T> {
    /// Build from raw row-start, leftmost-column and value arrays.
    ///
    /// # Errors
    /// [`LaError::MalformedLayout`] if a row run leaves the matrix or the arrays disagree in length.
    pub fn from_parts(
        dim1: usize,
        dim2: usize,
        row_start: Vec<usize>,
        left_index: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, LaError> {
        if row_start.len() != dim1 + 1 || left_index.len() != dim1 {
            return Err(LaError::MalformedLayout(format!(
                "expected {} row starts and {dim1} left indices, got {} and {}",
                dim1 + 1,
                row_start.len(),
                left_index.len()
            )));
        }
        if row_start[0] != 0 || row_start[dim1] != values.len() {
            return Err(LaError::MalformedLayout(
                "row_start must run from 0 to the number of stored values".into(),
            ));
        }
        if let Some(i) = row_start.windows(2).position(|w| w[0] > w[1]) {
            return Err(LaError::MalformedLayout(format!("row_start decreases at row {i}")));
        }
        for i in 0..dim1 {
            let len = row_start[i + 1] - row_start[i];
            if len > 0 && left_index[i] + len > dim2 {
                return Err(LaError::MalformedLayout(format!(
                    "row {i} runs past column {dim2}"
                )));
            }
        }
        Ok(Self { dim1, dim2, row_start, left_index, values })
    }

    pub(crate) fn from_parts_unchecked(
        dim1: usize,
        dim2: usize,
        row_start: Vec<usize>,
        left_index: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        debug_assert_eq!(row_start.len(), dim1 + 1);
        debug_assert_eq!(left_index.len(), dim1);
        Self { dim1, dim2, row_start, left_index, values }
    }

    pub fn row_start(&self) -> &[usize] {
        &self.row_start
    }

    pub fn left_index(&self) -> &[usize] {
        &self.left_index
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Inclusive column interval stored for `row`, `None` if the row stores nothing.
    pub fn envelope(&self, row: usize) -> Option<(usize, usize)> {
        if row >= self.dim1 {
            return None;
        }
        let len = self.row_start[row + 1] - self.row_start[row];
        (len > 0).then(|| (self.left_index[row], self.left_index[row] + len - 1))
    }

    fn find(&self, i: usize, j: usize) -> Option<usize> {
        let first = self.left_index[i];
        let len = self.row_start[i + 1] - self.row_start[i];
        (j >= first && j < first + len).then(|| self.row_start[i] + j - first)
    }
}

impl<T: Scalar> Matrix for RowProfileMatrix<T> {
    type Scalar = T;

    fn dim1(&self) -> usize {
        self.dim1
    }

    fn dim2(&self) -> usize {
        self.dim2
    }

    fn get(&self, i: usize, j: usize) -> Result<T, LaError> {
        self.check_index(i, j)?;
        Ok(self.find(i, j).map_or_else(T::zero, |p| self.values[p]))
    }

    fn element(&mut self, i: usize, j: usize) -> Result<ElementRef<'_, T>, LaError> {
        self.check_index(i, j)?;
        Ok(match self.find(i, j) {
            Some(p) => ElementRef::Bound(&mut self.values[p]),
            None => ElementRef::Unbound { row: i, col: j },
        })
    }

    fn stored_len(&self) -> usize {
        self.values.len()
    }
}

impl<T: Scalar> NonZeroRows for RowProfileMatrix<T> {
    fn row_begin(&self, row: usize) -> Result<RowCursor<'_, T>, LaError> {
        self.check_row(row)?;
        let (lo, hi) = (self.row_start[row], self.row_start[row + 1]);
        Ok(RowCursor::span(&self.values[lo..hi], self.left_index[row]))
    }

    fn row_begin_mut(&mut self, row: usize) -> Result<RowCursorMut<'_, T>, LaError> {
        self.check_row(row)?;
        let (lo, hi) = (self.row_start[row], self.row_start[row + 1]);
        Ok(RowCursorMut::span(&mut self.values[lo..hi], self.left_index[row]))
    }
}

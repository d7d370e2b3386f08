//! Compressed sparse row storage.
//!
//! Three parallel arrays: `row_start` (length `dim1 + 1`), `col_index` and `values`
//! (one entry per stored cell). Column indices inside a row are strictly increasing, so
//! element lookup is a binary search within the row. Stored entries may hold zero.

use crate::core::cursor::{RowCursor, RowCursorMut};
use crate::core::element::ElementRef;
use crate::core::traits::{Matrix, NonZeroRows, Scalar};
use crate::error::LaError;

#[derive(Clone, Debug, PartialEq)]
pub struct CsrMatrix<T> {
    dim1: usize,
    dim2: usize,
    row_start: Vec<usize>,
    col_index: Vec<usize>,
    values: Vec<T>,
}

impl<T: Scalar> CsrMatrix<T> {
    /// Build a CSR from raw row-start, column-index and value arrays.
    ///
    /// # Errors
    /// [`LaError::MalformedLayout`] if the arrays break the CSR invariants.
    pub fn from_parts(
        dim1: usize,
        dim2: usize,
        row_start: Vec<usize>,
        col_index: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self, LaError> {
        if row_start.len() != dim1 + 1 {
            return Err(LaError::MalformedLayout(format!(
                "row_start has {} entries, expected {}",
                row_start.len(),
                dim1 + 1
            )));
        }
        if col_index.len() != values.len() {
            return Err(LaError::MalformedLayout(format!(
                "{} column indices for {} values",
                col_index.len(),
                values.len()
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
            let cols = &col_index[row_start[i]..row_start[i + 1]];
            if cols.windows(2).any(|w| w[0] >= w[1]) {
                return Err(LaError::MalformedLayout(format!(
                    "columns of row {i} are not strictly increasing"
                )));
            }
            if cols.last().is_some_and(|&c| c >= dim2) {
                return Err(LaError::MalformedLayout(format!("column out of range in row {i}")));
            }
        }
        Ok(Self { dim1, dim2, row_start, col_index, values })
    }

    pub(crate) fn from_parts_unchecked(
        dim1: usize,
        dim2: usize,
        row_start: Vec<usize>,
        col_index: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        debug_assert_eq!(row_start.len(), dim1 + 1);
        debug_assert_eq!(col_index.len(), values.len());
        Self { dim1, dim2, row_start, col_index, values }
    }

    pub fn row_start(&self) -> &[usize] {
        &self.row_start
    }

    pub fn col_index(&self) -> &[usize] {
        &self.col_index
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    fn find(&self, i: usize, j: usize) -> Option<usize> {
        let (lo, hi) = (self.row_start[i], self.row_start[i + 1]);
        self.col_index[lo..hi].binary_search(&j).ok().map(|p| lo + p)
    }
}

impl<T: Scalar> Matrix for CsrMatrix<T> {
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

impl<T: Scalar> NonZeroRows for CsrMatrix<T> {
    fn row_begin(&self, row: usize) -> Result<RowCursor<'_, T>, LaError> {
        self.check_row(row)?;
        let (lo, hi) = (self.row_start[row], self.row_start[row + 1]);
        Ok(RowCursor::listed(&self.values[lo..hi], &self.col_index[lo..hi]))
    }

    fn row_begin_mut(&mut self, row: usize) -> Result<RowCursorMut<'_, T>, LaError> {
        self.check_row(row)?;
        let (lo, hi) = (self.row_start[row], self.row_start[row + 1]);
        Ok(RowCursorMut::listed(&mut self.values[lo..hi], &self.col_index[lo..hi]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_lookup() {
        // 3×3 identity in CSR: row_start=[0,1,2,3], col_index=[0,1,2], values=[1,1,1]
        let m = CsrMatrix::from_parts(3, 3, vec![0, 1, 2, 3], vec![0, 1, 2], vec![1.0, 1.0, 1.0]).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 1.0);
        assert_eq!(m.get(1, 2).unwrap(), 0.0);
        assert_eq!(m.stored_len(), 3);
    }

    #[test]
    fn simple_pattern() {
        // 2×3 matrix [[1,2,0],[0,3,4]]
        let mut m = CsrMatrix::from_parts(2, 3, vec![0, 2, 4], vec![0, 1, 1, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let row1: Vec<_> = m.row_begin(1).unwrap().map(|(c, v)| (c, *v)).collect();
        assert_eq!(row1, vec![(1, 3.0), (2, 4.0)]);
        m.set(1, 2, 8.0).unwrap();
        assert_eq!(m.values(), &[1.0, 2.0, 3.0, 8.0]);
        assert!(matches!(m.set(1, 0, 1.0), Err(LaError::InvalidSparseWrite { row: 1, col: 0 })));
        m.set(1, 0, 0.0).unwrap();
        assert_eq!(m.stored_len(), 4);
    }

    #[test]
    fn rejects_malformed_parts() {
        let unsorted = CsrMatrix::from_parts(1, 3, vec![0, 2], vec![2, 1], vec![1.0, 2.0]);
        assert!(matches!(unsorted, Err(LaError::MalformedLayout(_))));
        let short = CsrMatrix::<f64>::from_parts(2, 3, vec![0, 0], vec![], vec![]);
        assert!(matches!(short, Err(LaError::MalformedLayout(_))));
        let wide = CsrMatrix::from_parts(1, 2, vec![0, 1], vec![2], vec![1.0]);
        assert!(matches!(wide, Err(LaError::MalformedLayout(_))));
    }
}

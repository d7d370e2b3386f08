//! Band storage.
//!
//! A `dim1 × dim2` matrix with left bandwidth `left` and right bandwidth `right` keeps a
//! dense `dim1 × (left + right + 1)` row-major rectangle. Cell `(i, j)` is stored iff
//! `i - left <= j <= i + right` (and `j < dim2`); it lives at offset `j - (i - left)` of
//! row `i`. Walking down a column therefore moves `pitch - 1` slots per row.

use crate::core::cursor::{ColCursor, RowCursor, RowCursorMut};
use crate::core::element::ElementRef;
use crate::core::traits::{Matrix, NonZeroCols, NonZeroRows, Scalar};
use crate::error::LaError;

#[derive(Clone, Debug, PartialEq)]
pub struct BandMatrix<T> {
    dim1: usize,
    dim2: usize,
    left: usize,
    right: usize,
    data: Vec<T>,
}

impl<T: Scalar> BandMatrix<T> {
    /// Zero-filled band matrix with the given bandwidths.
    ///
    /// `left` is clamped to `dim1 - 1` and `right` to `dim2 - 1`, since wider bands hold no
    /// cells. Panics if the store size overflows `usize`.
    pub fn new(dim1: usize, dim2: usize, left: usize, right: usize) -> Self {
        let left = left.min(dim1.saturating_sub(1));
        let right = right.min(dim2.saturating_sub(1));
        let len = left
            .checked_add(right)
            .and_then(|w| w.checked_add(1))
            .and_then(|pitch| pitch.checked_mul(dim1))
            .unwrap_or_else(|| panic!("band store of {dim1} rows with widths {left}+{right} overflows"));
        Self { dim1, dim2, left, right, data: vec![T::zero(); len] }
    }

    pub fn left_bandwidth(&self) -> usize {
        self.left
    }

    pub fn right_bandwidth(&self) -> usize {
        self.right
    }

    /// Slots per stored row.
    pub fn pitch(&self) -> usize {
        self.left + self.right + 1
    }

    /// Raw diagonal store, `dim1 × pitch` row-major. Slots that fall outside the matrix stay zero.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn slot(&self, i: usize, j: usize) -> Option<usize> {
        if j + self.left < i || j > i + self.right {
            None
        } else {
            Some(i * self.pitch() + j + self.left - i)
        }
    }

    /// Stored columns of row `i` as `first..end`.
    fn row_span(&self, i: usize) -> (usize, usize) {
        let first = i.saturating_sub(self.left).min(self.dim2);
        let end = (i + self.right + 1).min(self.dim2);
        (first, end.max(first))
    }

    /// Stored rows of column `j` as `first..end`.
    fn col_span(&self, j: usize) -> (usize, usize) {
        let first = j.saturating_sub(self.right);
        let end = (j + self.left + 1).min(self.dim1);
        (first, end.max(first))
    }

    fn row_range(&self, i: usize) -> (usize, std::ops::Range<usize>) {
        let (first, end) = self.row_span(i);
        let base = i * self.pitch() + self.left - i;
        (first, base + first..base + end)
    }

    /// First stored column of row `i` and the slots of that row, in column order.
    pub(crate) fn row_slots_mut(&mut self, i: usize) -> (usize, &mut [T]) {
        let (first, range) = self.row_range(i);
        (first, &mut self.data[range])
    }
}

impl<T: Scalar> Matrix for BandMatrix<T> {
    type Scalar = T;

    fn dim1(&self) -> usize {
        self.dim1
    }

    fn dim2(&self) -> usize {
        self.dim2
    }

    fn get(&self, i: usize, j: usize) -> Result<T, LaError> {
        self.check_index(i, j)?;
        Ok(self.slot(i, j).map_or_else(T::zero, |s| self.data[s]))
    }

    fn element(&mut self, i: usize, j: usize) -> Result<ElementRef<'_, T>, LaError> {
        self.check_index(i, j)?;
        Ok(match self.slot(i, j) {
            Some(s) => ElementRef::Bound(&mut self.data[s]),
            None => ElementRef::Unbound { row: i, col: j },
        })
    }

    fn stored_len(&self) -> usize {
        (0..self.dim1)
            .map(|i| {
                let (first, end) = self.row_span(i);
                end - first
            })
            .sum()
    }
}

impl<T: Scalar> NonZeroRows for BandMatrix<T> {
    fn row_begin(&self, row: usize) -> Result<RowCursor<'_, T>, LaError> {
        self.check_row(row)?;
        let (first, range) = self.row_range(row);
        Ok(RowCursor::span(&self.data[range], first))
    }

    fn row_begin_mut(&mut self, row: usize) -> Result<RowCursorMut<'_, T>, LaError> {
        self.check_row(row)?;
        let (first, range) = self.row_range(row);
        Ok(RowCursorMut::span(&mut self.data[range], first))
    }
}

impl<T: Scalar> NonZeroCols for BandMatrix<T> {
    fn col_begin(&self, col: usize) -> Result<ColCursor<'_, T>, LaError> {
        self.check_col(col)?;
        let (first, end) = self.col_span(col);
        if first == end {
            return Ok(ColCursor::strided(&self.data, 0, 0, first, 0));
        }
        let start = first * self.pitch() + col + self.left - first;
        Ok(ColCursor::strided(&self.data, start, self.pitch() - 1, first, end - first))
    }
}

//! Random-access cursors over the stored entries of one row or column.
//!
//! A row cursor walks a contiguous run of values together with their column indices,
//! which are either an explicit index array (compressed rows) or an arithmetic span
//! starting at the first stored column (band and row-profile storage). A column cursor
//! walks row-major storage with a fixed stride.
//!
//! Moves are clamped to `[begin, end]`; `end` is one past the last stored entry.

use std::iter::FusedIterator;
use std::slice::IterMut;

#[derive(Clone, Copy, Debug)]
enum Columns<'a> {
    Span(usize),
    Listed(&'a [usize]),
}

impl Columns<'_> {
    #[inline]
    fn at(&self, pos: usize) -> usize {
        match self {
            Columns::Span(first) => first + pos,
            Columns::Listed(cols) => cols[pos],
        }
    }
}

#[inline]
fn clamp_move(pos: usize, n: isize, len: usize) -> usize {
    if n < 0 {
        pos.saturating_sub(n.unsigned_abs())
    } else {
        pos.saturating_add(n as usize).min(len)
    }
}

/// Read-only cursor over one row.
#[derive(Debug)]
pub struct RowCursor<'a, T> {
    values: &'a [T],
    columns: Columns<'a>,
    pos: usize,
}

impl<T> Clone for RowCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowCursor<'_, T> {}

impl<'a, T> RowCursor<'a, T> {
    pub(crate) fn span(values: &'a [T], first_col: usize) -> Self {
        Self { values, columns: Columns::Span(first_col), pos: 0 }
    }

    pub(crate) fn listed(values: &'a [T], cols: &'a [usize]) -> Self {
        debug_assert_eq!(values.len(), cols.len());
        Self { values, columns: Columns::Listed(cols), pos: 0 }
    }

    /// Number of stored entries in the row.
    pub fn row_len(&self) -> usize {
        self.values.len()
    }

    /// Offset from the first stored entry.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.values.len()
    }

    pub fn value(&self) -> Option<&'a T> {
        self.values.get(self.pos)
    }

    pub fn column_index(&self) -> Option<usize> {
        (!self.is_end()).then(|| self.columns.at(self.pos))
    }

    pub fn advance(&mut self, n: isize) {
        self.pos = clamp_move(self.pos, n, self.values.len());
    }

    pub fn seek_end(&mut self) {
        self.pos = self.values.len();
    }

    /// Signed number of steps from `self` to `other`.
    pub fn distance_to(&self, other: &Self) -> isize {
        other.pos as isize - self.pos as isize
    }
}

impl<T> PartialEq for RowCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.values, other.values) && self.pos == other.pos
    }
}

impl<'a, T> Iterator for RowCursor<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.get(self.pos)?;
        let col = self.columns.at(self.pos);
        self.pos += 1;
        Some((col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.values.len().saturating_sub(self.pos);
        (rest, Some(rest))
    }
}

impl<T> FusedIterator for RowCursor<'_, T> {}

/// Cursor over one row that writes through to the backing store.
#[derive(Debug)]
pub struct RowCursorMut<'a, T> {
    values: &'a mut [T],
    columns: Columns<'a>,
    pos: usize,
}

impl<'a, T> RowCursorMut<'a, T> {
    pub(crate) fn span(values: &'a mut [T], first_col: usize) -> Self {
        Self { values, columns: Columns::Span(first_col), pos: 0 }
    }

    pub(crate) fn listed(values: &'a mut [T], cols: &'a [usize]) -> Self {
        debug_assert_eq!(values.len(), cols.len());
        Self { values, columns: Columns::Listed(cols), pos: 0 }
    }

    pub fn row_len(&self) -> usize {
        self.values.len()
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.values.len()
    }

    pub fn value(&self) -> Option<&T> {
        self.values.get(self.pos)
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.values.get_mut(self.pos)
    }

    pub fn column_index(&self) -> Option<usize> {
        (!self.is_end()).then(|| self.columns.at(self.pos))
    }

    pub fn advance(&mut self, n: isize) {
        self.pos = clamp_move(self.pos, n, self.values.len());
    }

    pub fn seek_end(&mut self) {
        self.pos = self.values.len();
    }

    /// Consume the cursor into an iterator over the entries from the current position on.
    pub fn entries(self) -> EntriesMut<'a, T> {
        let pos = self.pos.min(self.values.len());
        let (_, rest) = self.values.split_at_mut(pos);
        EntriesMut { values: rest.iter_mut(), columns: self.columns, pos }
    }
}

/// Iterator produced by [`RowCursorMut::entries`].
#[derive(Debug)]
pub struct EntriesMut<'a, T> {
    values: IterMut<'a, T>,
    columns: Columns<'a>,
    pos: usize,
}

impl<'a, T> Iterator for EntriesMut<'a, T> {
    type Item = (usize, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.next()?;
        let col = self.columns.at(self.pos);
        self.pos += 1;
        Some((col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

/// Read-only cursor down one column of row-major storage.
#[derive(Debug)]
pub struct ColCursor<'a, T> {
    values: &'a [T],
    start: usize,
    stride: usize,
    first_row: usize,
    len: usize,
    pos: usize,
}

impl<T> Clone for ColCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColCursor<'_, T> {}

impl<'a, T> ColCursor<'a, T> {
    /// `len` entries of `values` starting at `start`, `stride` apart, the first one on `first_row`.
    pub(crate) fn strided(
        values: &'a [T],
        start: usize,
        stride: usize,
        first_row: usize,
        len: usize,
    ) -> Self {
        debug_assert!(len == 0 || start + (len - 1) * stride < values.len());
        Self { values, start, stride, first_row, len, pos: 0 }
    }

    pub fn col_len(&self) -> usize {
        self.len
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.len
    }

    pub fn value(&self) -> Option<&'a T> {
        if self.is_end() {
            return None;
        }
        self.values.get(self.start + self.pos * self.stride)
    }

    pub fn row_index(&self) -> Option<usize> {
        (!self.is_end()).then(|| self.first_row + self.pos)
    }

    pub fn advance(&mut self, n: isize) {
        self.pos = clamp_move(self.pos, n, self.len);
    }

    pub fn seek_end(&mut self) {
        self.pos = self.len;
    }

    pub fn distance_to(&self, other: &Self) -> isize {
        other.pos as isize - self.pos as isize
    }
}

impl<T> PartialEq for ColCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.values, other.values)
            && self.start == other.start
            && self.stride == other.stride
            && self.pos == other.pos
    }
}

impl<'a, T> Iterator for ColCursor<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value()?;
        let row = self.first_row + self.pos;
        self.pos += 1;
        Some((row, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len.saturating_sub(self.pos);
        (rest, Some(rest))
    }
}

impl<T> FusedIterator for ColCursor<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_cursor_walks_both_ways() {
        let vals = [1.0, 2.0, 3.0];
        let begin = RowCursor::span(&vals, 4);
        let mut end = begin;
        end.seek_end();
        assert_eq!(begin.distance_to(&end), 3);
        assert_eq!(end.distance_to(&begin), -3);

        let mut c = begin;
        c.advance(2);
        assert_eq!(c.column_index(), Some(6));
        assert_eq!(c.value(), Some(&3.0));
        c.advance(-1);
        assert_eq!(c.column_index(), Some(5));
        c.advance(10);
        assert!(c.is_end());
        assert_eq!(c, end);
        assert_eq!(c.value(), None);
        c.advance(-10);
        assert_eq!(c, begin);
    }

    #[test]
    fn listed_cursor_iterates_in_column_order() {
        let vals = [7.0, 8.0];
        let cols = [1usize, 5];
        let got: Vec<_> = RowCursor::listed(&vals, &cols).map(|(c, v)| (c, *v)).collect();
        assert_eq!(got, vec![(1, 7.0), (5, 8.0)]);
    }

    #[test]
    fn mutable_entries_write_through() {
        let mut vals = [1.0, 2.0, 3.0];
        let cols = [0usize, 2, 3];
        let mut c = RowCursorMut::listed(&mut vals, &cols);
        c.advance(1);
        for (col, v) in c.entries() {
            *v += col as f64;
        }
        assert_eq!(vals, [1.0, 4.0, 6.0]);
    }

    #[test]
    fn strided_column_cursor() {
        // 3x3 row-major, column 1
        let vals = [0.0, 1.0, 0.0, 0.0, 4.0, 0.0, 0.0, 7.0, 0.0];
        let c = ColCursor::strided(&vals, 1, 3, 0, 3);
        let got: Vec<_> = c.map(|(r, v)| (r, *v)).collect();
        assert_eq!(got, vec![(0, 1.0), (1, 4.0), (2, 7.0)]);
    }
}

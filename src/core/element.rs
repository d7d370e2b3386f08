//! Read/write handle to a single matrix cell.

use crate::core::traits::Scalar;
use crate::error::LaError;

/// Handle returned by [`Matrix::element`](crate::core::traits::Matrix::element).
///
/// `Bound` forwards reads and writes to a stored slot. `Unbound` stands for a cell outside
/// the sparsity pattern: it reads as zero and only accepts zero. The handle borrows the
/// matrix mutably, so it cannot outlive the next structural change.
#[derive(Debug)]
pub enum ElementRef<'a, T> {
    Bound(&'a mut T),
    Unbound { row: usize, col: usize },
}

impl<'a, T: Scalar> ElementRef<'a, T> {
    pub fn is_bound(&self) -> bool {
        matches!(self, ElementRef::Bound(_))
    }

    pub fn read(&self) -> T {
        match self {
            ElementRef::Bound(slot) => **slot,
            ElementRef::Unbound { .. } => T::zero(),
        }
    }

    /// Store `value`; a non-zero value on an unbound cell is rejected and nothing changes.
    pub fn write(&mut self, value: T) -> Result<(), LaError> {
        match self {
            ElementRef::Bound(slot) => {
                **slot = value;
                Ok(())
            }
            ElementRef::Unbound { row, col } => {
                if value.is_zero() {
                    Ok(())
                } else {
                    Err(LaError::InvalidSparseWrite { row: *row, col: *col })
                }
            }
        }
    }

    /// `self -= value`, with the same zero rule as [`write`](Self::write).
    pub fn sub_assign(&mut self, value: T) -> Result<(), LaError> {
        match self {
            ElementRef::Bound(slot) => {
                **slot = **slot - value;
                Ok(())
            }
            ElementRef::Unbound { .. } => self.write(T::zero() - value),
        }
    }

    /// `self /= value`. An unbound cell stays zero.
    pub fn div_assign(&mut self, value: T) {
        if let ElementRef::Bound(slot) = self {
            **slot = **slot / value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_forwards_reads_and_writes() {
        let mut slot = 3.0f64;
        {
            let mut e = ElementRef::Bound(&mut slot);
            assert!(e.is_bound());
            assert_eq!(e.read(), 3.0);
            e.write(5.0).unwrap();
            e.sub_assign(1.0).unwrap();
            e.div_assign(2.0);
        }
        assert_eq!(slot, 2.0);
    }

    #[test]
    fn unbound_accepts_only_zero() {
        let mut e: ElementRef<'_, f64> = ElementRef::Unbound { row: 0, col: 2 };
        assert_eq!(e.read(), 0.0);
        assert!(e.write(0.0).is_ok());
        assert!(e.sub_assign(0.0).is_ok());
        e.div_assign(4.0);
        assert!(matches!(
            e.write(5.0),
            Err(LaError::InvalidSparseWrite { row: 0, col: 2 })
        ));
        assert!(matches!(e.sub_assign(1.0), Err(LaError::InvalidSparseWrite { .. })));
    }
}

//! Runtime choice of storage layout.
//!
//! The algorithms are generic over the layout traits and are monomorphized per layout.
//! `AnyMatrix` covers the case where the layout is only known at runtime (read from a
//! config file or the command line): it wraps one of the four layouts and forwards the
//! element and row-cursor contract to it.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::core::cursor::{RowCursor, RowCursorMut};
use crate::core::element::ElementRef;
use crate::core::products;
use crate::core::traits::{Matrix, NonZeroRows, Scalar};
use crate::error::LaError;
use crate::matrix::band::BandMatrix;
use crate::matrix::compressed::CsrMatrix;
use crate::matrix::convert::convert;
use crate::matrix::dense::DenseMatrix;
use crate::matrix::profile::RowProfileMatrix;
use crate::matrix::vector::DenseVector;

/// Storage layout names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Dense,
    Band,
    CompressedRow,
    RowProfile,
}

bitflags! {
    /// What a layout offers beyond plain element access.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// Row cursors over stored entries.
        const ROW_CURSORS    = 0b0000_0001;
        /// Strided column cursors.
        const COLUMN_CURSORS = 0b0000_0010;
        /// Every cell is stored; no write can be rejected.
        const FULL_PATTERN   = 0b0000_0100;
    }
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 4] =
        [LayoutKind::Dense, LayoutKind::Band, LayoutKind::CompressedRow, LayoutKind::RowProfile];

    pub fn capabilities(self) -> Capabilities {
        match self {
            LayoutKind::Dense => {
                Capabilities::ROW_CURSORS | Capabilities::COLUMN_CURSORS | Capabilities::FULL_PATTERN
            }
            LayoutKind::Band => Capabilities::ROW_CURSORS | Capabilities::COLUMN_CURSORS,
            LayoutKind::CompressedRow | LayoutKind::RowProfile => Capabilities::ROW_CURSORS,
        }
    }
}

impl FromStr for LayoutKind {
    type Err = LaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" => Ok(LayoutKind::Dense),
            "band" => Ok(LayoutKind::Band),
            "csr" | "compressed-row" => Ok(LayoutKind::CompressedRow),
            "profile" | "row-profile" => Ok(LayoutKind::RowProfile),
            other => Err(LaError::Format(format!("unknown layout `{other}`"))),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LayoutKind::Dense => "dense",
            LayoutKind::Band => "band",
            LayoutKind::CompressedRow => "compressed-row",
            LayoutKind::RowProfile => "row-profile",
        })
    }
}

/// One of the four layouts, chosen at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyMatrix<T> {
    Dense(DenseMatrix<T>),
    Band(BandMatrix<T>),
    CompressedRow(CsrMatrix<T>),
    RowProfile(RowProfileMatrix<T>),
}

macro_rules! forward {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            AnyMatrix::Dense($m) => $body,
            AnyMatrix::Band($m) => $body,
            AnyMatrix::CompressedRow($m) => $body,
            AnyMatrix::RowProfile($m) => $body,
        }
    };
}

impl<T: Scalar> AnyMatrix<T> {
    /// Convert `src` into the layout named by `kind`.
    pub fn from_dense(kind: LayoutKind, src: &DenseMatrix<T>) -> Self {
        match kind {
            LayoutKind::Dense => AnyMatrix::Dense(src.clone()),
            LayoutKind::Band => AnyMatrix::Band(convert(src)),
            LayoutKind::CompressedRow => AnyMatrix::CompressedRow(convert(src)),
            LayoutKind::RowProfile => AnyMatrix::RowProfile(convert(src)),
        }
    }

    pub fn kind(&self) -> LayoutKind {
        match self {
            AnyMatrix::Dense(_) => LayoutKind::Dense,
            AnyMatrix::Band(_) => LayoutKind::Band,
            AnyMatrix::CompressedRow(_) => LayoutKind::CompressedRow,
            AnyMatrix::RowProfile(_) => LayoutKind::RowProfile,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.kind().capabilities()
    }

    /// Row-vector product `y = x A`: gathered down columns when the layout has column
    /// cursors, scattered row by row otherwise.
    pub fn vec_mat(&self, x: &DenseVector<T>) -> Result<DenseVector<T>, LaError> {
        if self.capabilities().contains(Capabilities::COLUMN_CURSORS) {
            match self {
                AnyMatrix::Dense(m) => return products::vec_mat_by_columns(x, m),
                AnyMatrix::Band(m) => return products::vec_mat_by_columns(x, m),
                AnyMatrix::CompressedRow(_) | AnyMatrix::RowProfile(_) => {}
            }
        }
        products::vec_mat(x, self)
    }
}

impl<T: Scalar> From<DenseMatrix<T>> for AnyMatrix<T> {
    fn from(m: DenseMatrix<T>) -> Self {
        AnyMatrix::Dense(m)
    }
}

impl<T: Scalar> From<BandMatrix<T>> for AnyMatrix<T> {
    fn from(m: BandMatrix<T>) -> Self {
        AnyMatrix::Band(m)
    }
}

impl<T: Scalar> From<CsrMatrix<T>> for AnyMatrix<T> {
    fn from(m: CsrMatrix<T>) -> Self {
        AnyMatrix::CompressedRow(m)
    }
}

impl<T: Scalar> From<RowProfileMatrix<T>> for AnyMatrix<T> {
    fn from(m: RowProfileMatrix<T>) -> Self {
        AnyMatrix::RowProfile(m)
    }
}

impl<T: Scalar> Matrix for AnyMatrix<T> {
    type Scalar = T;

    fn dim1(&self) -> usize {
        forward!(self, m => m.dim1())
    }

    fn dim2(&self) -> usize {
        forward!(self, m => m.dim2())
    }

    fn get(&self, i: usize, j: usize) -> Result<T, LaError> {
        forward!(self, m => m.get(i, j))
    }

    fn element(&mut self, i: usize, j: usize) -> Result<ElementRef<'_, T>, LaError> {
        forward!(self, m => m.element(i, j))
    }

    fn stored_len(&self) -> usize {
        forward!(self, m => m.stored_len())
    }
}

impl<T: Scalar> NonZeroRows for AnyMatrix<T> {
    fn row_begin(&self, row: usize) -> Result<RowCursor<'_, T>, LaError> {
        forward!(self, m => m.row_begin(row))
    }

    fn row_begin_mut(&mut self, row: usize) -> Result<RowCursorMut<'_, T>, LaError> {
        forward!(self, m => m.row_begin_mut(row))
    }
}

//! Element access, cursors and the products built on them.

pub mod cursor;
pub mod element;
pub mod products;
pub mod traits;

pub use cursor::{ColCursor, EntriesMut, RowCursor, RowCursorMut};
pub use element::ElementRef;
pub use products::{mat_vec, vec_mat, vec_mat_by_columns};
pub use traits::{MatVec, Matrix, NonZeroCols, NonZeroRows, Scalar};

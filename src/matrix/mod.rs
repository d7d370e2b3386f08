//! Matrix module: dense container, vectors and the sparse storage layouts.

pub mod dense;
pub use dense::DenseMatrix;
pub mod vector;
pub use vector::{DenseVector, Orientation};
pub mod band;
pub use band::BandMatrix;
pub mod compressed;
pub use compressed::CsrMatrix;
pub mod profile;
pub use profile::RowProfileMatrix;
pub mod convert;
pub use convert::{FromDense, band_widths, convert, convert_into, row_envelope, to_dense};

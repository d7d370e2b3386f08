//! Runtime layout selection.
//!
//! Modules:
//! - [`layout`]: `LayoutKind` names, `Capabilities` flags and the `AnyMatrix` dispatcher.
//!
//! # Example
//! ```rust
//! use sparsela::context::{AnyMatrix, LayoutKind};
//! use sparsela::matrix::DenseMatrix;
//! use sparsela::core::traits::Matrix;
//!
//! let a = DenseMatrix::from_rows(&[[2.0, 1.0], [0.0, 3.0]]).unwrap();
//! let kind: LayoutKind = "csr".parse().unwrap();
//! let m = AnyMatrix::from_dense(kind, &a);
//! assert_eq!(m.stored_len(), 3);
//! ```

pub mod layout;
pub use layout::{AnyMatrix, Capabilities, LayoutKind};

//! sparsela: interchangeable dense and sparse matrix layouts with generic LU/LDU
//!
//! Band, compressed-row and row-profile storage share one element-access and
//! non-zero-cursor contract with the dense container. Factorizations and products are
//! written once against that contract; on a sparse layout they touch only the stored
//! entries, which brings LU on a banded matrix from cubic down to `Θ(n² · m̄)`.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod io;
pub mod matrix;
pub mod solver;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;

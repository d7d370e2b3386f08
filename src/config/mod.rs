//! Configuration types.

pub mod options;
pub use options::{FactorKind, FactorOptions, Traversal};

//! Factorization engine and direct solvers.

pub mod decomposition;
pub use decomposition::{decompose, ldu_dense, ldu_sparse, lu_dense, lu_sparse};

pub mod substitution;
pub use substitution::{ldu_solve_in_place, ldu_solve_rows, lu_solve_in_place, lu_solve_rows};

pub mod direct_lu;
pub use direct_lu::LuSolver;

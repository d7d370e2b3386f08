//! Direct solver over any storage layout: factor once, solve many right-hand sides.
//!
//! `LuSolver` owns the factored matrix. [`FactorOptions`] picks LU or LDU and whether the
//! elimination walks the row cursors or every cell. Solves go through the cursor-driven
//! substitution, so a banded factor is solved in `Θ(n · bandwidth)`.
//!
//! # Usage
//! ```rust,ignore
//! let mut solver = LuSolver::new();
//! let x = solver.solve(band, &b)?;
//! let y = solver.solve_cached(&c)?;
//! ```

use crate::config::options::{FactorKind, FactorOptions};
use crate::core::traits::NonZeroRows;
use crate::error::LaError;
use crate::matrix::vector::DenseVector;
use crate::solver::decomposition::decompose;
use crate::solver::substitution::{ldu_solve_rows, lu_solve_rows};

/// Direct solver without pivoting.
///
/// Stores the factorization for reuse.
#[derive(Clone, Debug)]
pub struct LuSolver<M> {
    options: FactorOptions,
    /// Cached factors (if computed)
    factor: Option<M>,
}

impl<M: NonZeroRows> LuSolver<M> {
    /// New solver with default options (LU, sparse traversal).
    pub fn new() -> Self {
        Self::with_options(FactorOptions::default())
    }

    pub fn with_options(options: FactorOptions) -> Self {
        LuSolver { options, factor: None }
    }

    pub fn options(&self) -> &FactorOptions {
        &self.options
    }

    /// Factor `a` in place and keep it. A failed factorization leaves no factor behind.
    pub fn factor(&mut self, mut a: M) -> Result<(), LaError> {
        self.factor = None;
        decompose(&mut a, &self.options)?;
        self.factor = Some(a);
        Ok(())
    }

    /// The cached factors, laid out as described in [`crate::solver::decomposition`].
    pub fn factors(&self) -> Option<&M> {
        self.factor.as_ref()
    }

    /// Solve using the cached factorization.
    ///
    /// # Errors
    /// [`LaError::NotFactored`] if called before any factorization has been performed.
    pub fn solve_cached(&self, b: &DenseVector<M::Scalar>) -> Result<DenseVector<M::Scalar>, LaError> {
        let factor = self.factor.as_ref().ok_or(LaError::NotFactored)?;
        let mut x = b.clone();
        match self.options.kind {
            FactorKind::Lu => lu_solve_rows(factor, &mut x)?,
            FactorKind::Ldu => ldu_solve_rows(factor, &mut x)?,
        }
        Ok(x)
    }

    /// Factor `a` (replacing any previous factor) and solve `a x = b`.
    pub fn solve(&mut self, a: M, b: &DenseVector<M::Scalar>) -> Result<DenseVector<M::Scalar>, LaError> {
        self.factor(a)?;
        self.solve_cached(b)
    }
}

impl<M: NonZeroRows> Default for LuSolver<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::Traversal;
    use crate::matrix::band::BandMatrix;
    use crate::matrix::convert::convert;
    use crate::matrix::dense::DenseMatrix;
    use approx::assert_relative_eq;

    #[test]
    fn lu_solver_solves_dense_system() {
        // [[4,1,0],[1,3,2],[0,1,5]] x = [6,13,17], true solution [1,2,3]
        let a = DenseMatrix::from_rows(&[[4.0, 1.0, 0.0], [1.0, 3.0, 2.0], [0.0, 1.0, 5.0]]).unwrap();
        let b = DenseVector::column(vec![6.0, 13.0, 17.0]);
        let expected = [1.0, 2.0, 3.0];
        for kind in [FactorKind::Lu, FactorKind::Ldu] {
            for traversal in [Traversal::Dense, Traversal::Sparse] {
                let mut solver = LuSolver::with_options(FactorOptions::new(kind, traversal));
                let x = solver.solve(a.clone(), &b).unwrap();
                for (xi, ei) in x.as_slice().iter().zip(expected) {
                    assert_relative_eq!(*xi, ei, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn cached_factor_serves_new_right_hand_sides() {
        let a = DenseMatrix::from_fn(5, 5, |i, j| match i.abs_diff(j) {
            0 => 2.0,
            1 => -1.0,
            _ => 0.0,
        });
        let mut solver: LuSolver<BandMatrix<f64>> = LuSolver::new();
        assert!(matches!(solver.solve_cached(&DenseVector::column(vec![0.0; 5])), Err(LaError::NotFactored)));
        solver.factor(convert(&a)).unwrap();
        for x_true in [vec![1.0; 5], vec![0.0, 1.0, 2.0, 3.0, 4.0]] {
            let b = a.mat_vec(&DenseVector::column(x_true.clone())).unwrap();
            let x = solver.solve_cached(&b).unwrap();
            for (xi, ei) in x.as_slice().iter().zip(&x_true) {
                assert_relative_eq!(*xi, *ei, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn singular_input_drops_old_factor() {
        let mut solver = LuSolver::new();
        solver.factor(DenseMatrix::<f64>::identity(2)).unwrap();
        let singular = DenseMatrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert!(matches!(solver.factor(singular), Err(LaError::SingularMatrix { row: 1 })));
        assert!(solver.factors().is_none());
    }
}

//! In-place LU and LDU factorization without pivoting.
//!
//! The factors overwrite the matrix: the strict lower triangle holds the multipliers
//! `l_ik` (unit diagonal implied). For LU the diagonal and upper triangle hold `U`; for
//! LDU the diagonal holds `D` and the strict upper triangle holds the unit-diagonal `U`.
//!
//! The dense variants visit every `(i, j)` pair after each pivot and cost `Θ(n³)`. The
//! sparse variants only update cells the row cursor reports as stored, merging each row
//! against a cached copy of the pivot row. They are exact only when the layout already
//! stores every fill-in position (a band sized by [`band_widths`] does); fill-in falling
//! outside the pattern is dropped.
//!
//! [`band_widths`]: crate::matrix::convert::band_widths

use num_traits::Zero;

use crate::config::options::{FactorKind, FactorOptions, Traversal};
use crate::core::cursor::RowCursorMut;
use crate::core::traits::{Matrix, NonZeroRows, Scalar};
use crate::error::LaError;

fn order<M: Matrix>(m: &M) -> Result<usize, LaError> {
    if !m.is_square() {
        return Err(LaError::shape("factorization needs a square matrix", (m.dim1(), m.dim2()), (m.dim2(), m.dim2())));
    }
    Ok(m.dim1())
}

fn pivot<M: Matrix>(m: &M, k: usize) -> Result<M::Scalar, LaError> {
    let p = m.get(k, k)?;
    if p.is_zero() || !p.is_finite() {
        return Err(LaError::SingularMatrix { row: k });
    }
    Ok(p)
}

/// Dense right-looking LU.
pub fn lu_dense<M: Matrix>(m: &mut M) -> Result<(), LaError> {
    let n = order(m)?;
    log::debug!("dense LU: order {n}");
    for k in 0..n {
        let akk = pivot(m, k)?;
        for i in k + 1..n {
            m.element(i, k)?.div_assign(akk);
        }
        for i in k + 1..n {
            let lik = m.get(i, k)?;
            for j in k + 1..n {
                let v = m.get(i, j)? - lik * m.get(k, j)?;
                m.set(i, j, v)?;
            }
        }
    }
    Ok(())
}

/// Dense right-looking LDU.
pub fn ldu_dense<M: Matrix>(m: &mut M) -> Result<(), LaError> {
    let n = order(m)?;
    log::debug!("dense LDU: order {n}");
    for k in 0..n {
        let dkk = pivot(m, k)?;
        for i in k + 1..n {
            m.element(i, k)?.div_assign(dkk);
            m.element(k, i)?.div_assign(dkk);
        }
        for i in k + 1..n {
            let lik = m.get(i, k)?;
            for j in k + 1..n {
                let v = m.get(i, j)? - lik * dkk * m.get(k, j)?;
                m.set(i, j, v)?;
            }
        }
    }
    Ok(())
}

/// Sparse LU: rows are updated only at their stored columns.
pub fn lu_sparse<M: NonZeroRows>(m: &mut M) -> Result<(), LaError> {
    let n = order(m)?;
    log::debug!("sparse LU: order {n}, {} stored entries", m.stored_len());
    let mut pivot_row = Vec::new();
    for k in 0..n {
        let akk = pivot(m, k)?;
        load_pivot_row(m, k, &mut pivot_row)?;
        for i in k + 1..n {
            let Some(lik) = multiplier(m, i, k, akk)? else {
                continue;
            };
            eliminate(m.row_begin_mut(i)?, k, &pivot_row, lik);
        }
    }
    Ok(())
}

/// Sparse LDU: rows are updated only at their stored columns.
pub fn ldu_sparse<M: NonZeroRows>(m: &mut M) -> Result<(), LaError> {
    let n = order(m)?;
    log::debug!("sparse LDU: order {n}, {} stored entries", m.stored_len());
    let mut pivot_row = Vec::new();
    for k in 0..n {
        let dkk = pivot(m, k)?;
        for (j, u) in m.row_begin_mut(k)?.entries() {
            if j > k {
                *u = *u / dkk;
            }
        }
        load_pivot_row(m, k, &mut pivot_row)?;
        for i in k + 1..n {
            let Some(lik) = multiplier(m, i, k, dkk)? else {
                continue;
            };
            eliminate(m.row_begin_mut(i)?, k, &pivot_row, lik * dkk);
        }
    }
    Ok(())
}

/// Factor `m` in place as selected by `options`.
pub fn decompose<M: NonZeroRows>(m: &mut M, options: &FactorOptions) -> Result<(), LaError> {
    if options.traversal == Traversal::Dense && m.stored_len() < m.dim1() * m.dim2() {
        log::warn!(
            target: "sparsela_perf",
            "dense factorization over a layout storing {} of {} cells",
            m.stored_len(),
            m.dim1() * m.dim2()
        );
    }
    match (options.kind, options.traversal) {
        (FactorKind::Lu, Traversal::Dense) => lu_dense(m),
        (FactorKind::Lu, Traversal::Sparse) => lu_sparse(m),
        (FactorKind::Ldu, Traversal::Dense) => ldu_dense(m),
        (FactorKind::Ldu, Traversal::Sparse) => ldu_sparse(m),
    }
}

/// Entries of row `k` right of the diagonal.
fn load_pivot_row<M: NonZeroRows>(
    m: &M,
    k: usize,
    out: &mut Vec<(usize, M::Scalar)>,
) -> Result<(), LaError> {
    out.clear();
    out.extend(m.row_begin(k)?.filter(|&(j, _)| j > k).map(|(j, &v)| (j, v)));
    Ok(())
}

/// Turn `a_ik` into `l_ik = a_ik / pivot`. `None` when the cell is not stored or is zero.
fn multiplier<M: Matrix>(m: &mut M, i: usize, k: usize, pivot: M::Scalar) -> Result<Option<M::Scalar>, LaError> {
    let mut e = m.element(i, k)?;
    if !e.is_bound() {
        return Ok(None);
    }
    e.div_assign(pivot);
    let l = e.read();
    Ok((!l.is_zero()).then_some(l))
}

/// `a_ij -= scale * u_kj` for every stored `j > k` of the row that the pivot row also stores.
fn eliminate<T: Scalar>(mut row: RowCursorMut<'_, T>, k: usize, pivot_row: &[(usize, T)], scale: T) {
    while row.column_index().is_some_and(|j| j <= k) {
        row.advance(1);
    }
    let mut p = 0;
    for (j, a) in row.entries() {
        while p < pivot_row.len() && pivot_row[p].0 < j {
            p += 1;
        }
        match pivot_row.get(p) {
            Some(&(pj, u)) if pj == j => *a = *a - scale * u,
            Some(_) => {}
            None => break,
        }
    }
}

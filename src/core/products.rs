//! Matrix–vector products driven by the non-zero cursors.
//!
//! Each product touches only the stored entries, so the cost is proportional to
//! `stored_len()` rather than `dim1 · dim2`. Per output component the terms are summed in
//! increasing index order, which matches the dense reference products exactly on real data.

use num_traits::Zero;

use crate::core::traits::{MatVec, NonZeroCols, NonZeroRows, Scalar};
use crate::error::LaError;
use crate::matrix::vector::DenseVector;

/// Column-vector product `y = A x`, `y.dim() == a.dim1()`.
pub fn mat_vec<M: NonZeroRows>(a: &M, x: &DenseVector<M::Scalar>) -> Result<DenseVector<M::Scalar>, LaError> {
    if a.dim2() != x.dim() {
        return Err(LaError::shape("matrix-vector product", (a.dim1(), a.dim2()), (x.dim(), 1)));
    }
    let xs = x.as_slice();
    let mut y = vec![M::Scalar::zero(); a.dim1()];
    for (i, yi) in y.iter_mut().enumerate() {
        for (c, &v) in a.row_begin(i)? {
            *yi = *yi + xs[c] * v;
        }
    }
    Ok(DenseVector::column(y))
}

/// Row-vector product `y = x A` by scattering each stored row, `y.dim() == a.dim2()`.
pub fn vec_mat<M: NonZeroRows>(x: &DenseVector<M::Scalar>, a: &M) -> Result<DenseVector<M::Scalar>, LaError> {
    if x.dim() != a.dim1() {
        return Err(LaError::shape("vector-matrix product", (1, x.dim()), (a.dim1(), a.dim2())));
    }
    let mut y = vec![M::Scalar::zero(); a.dim2()];
    for (r, &xr) in x.as_slice().iter().enumerate() {
        for (c, &v) in a.row_begin(r)? {
            y[c] = y[c] + xr * v;
        }
    }
    Ok(DenseVector::row(y))
}

/// Row-vector product `y = x A` gathered down column cursors.
pub fn vec_mat_by_columns<M: NonZeroCols>(
    x: &DenseVector<M::Scalar>,
    a: &M,
) -> Result<DenseVector<M::Scalar>, LaError> {
    if x.dim() != a.dim1() {
        return Err(LaError::shape("vector-matrix product", (1, x.dim()), (a.dim1(), a.dim2())));
    }
    let xs = x.as_slice();
    let mut y = vec![M::Scalar::zero(); a.dim2()];
    for (c, yc) in y.iter_mut().enumerate() {
        for (r, &v) in a.col_begin(c)? {
            *yc = *yc + xs[r] * v;
        }
    }
    Ok(DenseVector::row(y))
}

impl<T: Scalar, M: NonZeroRows<Scalar = T>> MatVec<DenseVector<T>> for M {
    fn matvec(&self, x: &DenseVector<T>) -> Result<DenseVector<T>, LaError> {
        mat_vec(self, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::band::BandMatrix;
    use crate::matrix::dense::DenseMatrix;
    use crate::core::traits::Matrix;

    #[test]
    fn band_products_match_dense() {
        let mut b = BandMatrix::new(4, 4, 1, 1);
        for i in 0..4 {
            b.set(i, i, 2.0).unwrap();
            if i + 1 < 4 {
                b.set(i, i + 1, -1.0).unwrap();
                b.set(i + 1, i, 3.0).unwrap();
            }
        }
        let d = crate::matrix::convert::to_dense(&b).unwrap();
        let x = DenseVector::column(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(mat_vec(&b, &x).unwrap(), d.mat_vec(&x).unwrap());
        assert_eq!(b.matvec(&x).unwrap(), d.mat_vec(&x).unwrap());

        let xr = x.clone().transposed();
        let expected = d.vec_mat(&xr).unwrap();
        assert_eq!(vec_mat(&xr, &b).unwrap(), expected);
        assert_eq!(vec_mat_by_columns(&xr, &b).unwrap(), expected);
    }

    #[test]
    fn dimension_checks() {
        let a = DenseMatrix::<f64>::zeros(2, 3);
        let x = DenseVector::column(vec![1.0, 2.0]);
        assert!(matches!(mat_vec(&a, &x), Err(LaError::DimensionMismatch(_))));
        let y = DenseVector::row(vec![1.0, 2.0, 3.0]);
        assert!(matches!(vec_mat(&y, &a), Err(LaError::DimensionMismatch(_))));
        assert!(matches!(vec_mat_by_columns(&y, &a), Err(LaError::DimensionMismatch(_))));
    }
}

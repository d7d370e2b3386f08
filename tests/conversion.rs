//! Tests for dense-to-sparse conversion: lossless round trips and exact stored counts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsela::core::traits::Matrix;
use sparsela::error::LaError;
use sparsela::matrix::{
    BandMatrix, CsrMatrix, DenseMatrix, RowProfileMatrix, band_widths, convert, convert_into, to_dense,
};

fn random_sparse(dim1: usize, dim2: usize, density: f64, seed: u64) -> DenseMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    DenseMatrix::from_fn(dim1, dim2, |_, _| {
        if rng.r#gen::<f64>() < density { rng.gen_range(-10.0..10.0) } else { 0.0 }
    })
}

#[test]
fn compressed_row_round_trip_is_exact() {
    for (seed, (d1, d2)) in [(3, 8), (8, 3), (10, 10), (1, 1), (0, 4)].into_iter().enumerate() {
        let a = random_sparse(d1, d2, 0.3, seed as u64);
        let csr: CsrMatrix<f64> = convert(&a);
        let nnz = a.data().iter().filter(|v| **v != 0.0).count();
        assert_eq!(csr.stored_len(), nnz);
        assert_eq!(to_dense(&csr).unwrap(), a);
    }
}

#[test]
fn band_and_profile_round_trips_are_exact() {
    for seed in 0..5 {
        let a = random_sparse(9, 9, 0.25, 100 + seed);
        let band: BandMatrix<f64> = convert(&a);
        let profile: RowProfileMatrix<f64> = convert(&a);
        assert_eq!(to_dense(&band).unwrap(), a);
        assert_eq!(to_dense(&profile).unwrap(), a);
    }
}

#[test]
fn band_stores_exactly_the_discovered_band() {
    // one entry two places right of the diagonal and one entry one place left set the widths
    let mut a = DenseMatrix::<f64>::identity(5);
    a[(1, 3)] = 4.0;
    a[(4, 3)] = -2.0;
    assert_eq!(band_widths(&a), (1, 2));

    let band: BandMatrix<f64> = convert(&a);
    assert_eq!((band.left_bandwidth(), band.right_bandwidth()), (1, 2));
    // row lengths 3, 4, 4, 3, 2
    assert_eq!(band.stored_len(), 16);
    assert_eq!(band.data().len(), 5 * band.pitch());
}

#[test]
fn profile_stores_each_row_envelope() {
    let a = DenseMatrix::from_rows(&[
        [0.0, 1.0, 0.0, 0.0, 2.0],
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [3.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 4.0, 5.0, 0.0],
    ])
    .unwrap();
    let profile: RowProfileMatrix<f64> = convert(&a);
    assert_eq!(profile.stored_len(), 4 + 0 + 1 + 2);
    assert_eq!(profile.envelope(0), Some((1, 4)));
    assert_eq!(profile.envelope(1), None);
    assert_eq!(profile.left_index(), &[1, 0, 0, 2]);
    assert_eq!(profile.row_start(), &[0, 4, 4, 5, 7]);
}

#[test]
fn tall_and_wide_band_conversion() {
    let tall = DenseMatrix::from_rows(&[[1.0, 0.0], [2.0, 3.0], [0.0, 4.0], [5.0, 0.0]]).unwrap();
    assert_eq!(band_widths(&tall), (3, 0));
    let band: BandMatrix<f64> = convert(&tall);
    assert_eq!(to_dense(&band).unwrap(), tall);

    let wide = DenseMatrix::from_rows(&[[1.0, 0.0, 0.0, 7.0], [0.0, 2.0, 0.0, 0.0]]).unwrap();
    assert_eq!(band_widths(&wide), (0, 3));
    let band: BandMatrix<f64> = convert(&wide);
    assert_eq!(to_dense(&band).unwrap(), wide);
}

#[test]
fn tall_matrix_with_narrow_band_converts() {
    // rows 2 and 3 lie entirely below the band
    let tall = DenseMatrix::from_rows(&[[1.0, 0.0], [0.0, 2.0], [0.0, 0.0], [0.0, 0.0]]).unwrap();
    assert_eq!(band_widths(&tall), (0, 0));
    let band: BandMatrix<f64> = convert(&tall);
    assert_eq!(band.stored_len(), 2);
    assert_eq!(to_dense(&band).unwrap(), tall);

    let mut target = BandMatrix::new(4, 2, 0, 0);
    convert_into(&tall, &mut target).unwrap();
    assert_eq!(target, band);

    let lower = DenseMatrix::from_rows(&[[1.0, 0.0], [3.0, 2.0], [0.0, 4.0], [0.0, 0.0], [0.0, 0.0]]).unwrap();
    assert_eq!(band_widths(&lower), (1, 0));
    let band: BandMatrix<f64> = convert(&lower);
    assert_eq!(band.stored_len(), 4);
    assert_eq!(to_dense(&band).unwrap(), lower);
}

#[test]
fn conversion_into_presized_target() {
    let a = random_sparse(4, 4, 0.5, 9);
    let mut wrong = DenseMatrix::<f64>::zeros(4, 5);
    assert!(matches!(convert_into(&a, &mut wrong), Err(LaError::DimensionMismatch(_))));

    let mut full_band = BandMatrix::new(4, 4, 3, 3);
    convert_into(&a, &mut full_band).unwrap();
    assert_eq!(to_dense(&full_band).unwrap(), a);
}

#[test]
fn hand_built_layouts_are_validated() {
    let ok = CsrMatrix::from_parts(2, 3, vec![0, 1, 3], vec![2, 0, 1], vec![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(ok.get(0, 2).unwrap(), 1.0);
    assert_eq!(ok.get(1, 1).unwrap(), 3.0);
    assert_eq!(ok.get(0, 0).unwrap(), 0.0);

    let unsorted = CsrMatrix::from_parts(1, 3, vec![0, 2], vec![2, 1], vec![1.0, 2.0]);
    assert!(matches!(unsorted, Err(LaError::MalformedLayout(_))));
    let bad_end = CsrMatrix::from_parts(1, 3, vec![0, 1], vec![0, 1], vec![1.0, 2.0]);
    assert!(matches!(bad_end, Err(LaError::MalformedLayout(_))));
    let wide_col = CsrMatrix::from_parts(1, 2, vec![0, 1], vec![2], vec![1.0]);
    assert!(matches!(wide_col, Err(LaError::MalformedLayout(_))));
    let decreasing = CsrMatrix::<f64>::from_parts(2, 2, vec![0, 2, 0], vec![], vec![]);
    assert!(matches!(decreasing, Err(LaError::MalformedLayout(_))));

    // stored zeros stay stored
    let mut z = CsrMatrix::from_parts(1, 2, vec![0, 1], vec![1], vec![0.0]).unwrap();
    assert_eq!(z.stored_len(), 1);
    z.set(0, 1, 8.0).unwrap();
    assert_eq!(z.values(), &[8.0]);
}

//! Precision check: solve one random banded system with dense and with band storage and
//! report how far apart the two solutions are.
//!
//! Usage: `cargo run --example band_solve -- [order] [bandwidth] [lu|ldu]`

use rand::Rng;
use sparsela::config::{FactorKind, FactorOptions, Traversal};
use sparsela::core::traits::Matrix;
use sparsela::error::LaError;
use sparsela::matrix::{BandMatrix, DenseMatrix, DenseVector, convert};
use sparsela::solver::LuSolver;

fn main() -> Result<(), LaError> {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let half: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);
    let kind: FactorKind = args.next().as_deref().unwrap_or("lu").parse()?;

    let mut rng = rand::thread_rng();
    let a = DenseMatrix::from_fn(n, n, |i, j| {
        if i == j {
            rng.gen_range(1.0..2.0) + 2.0 * half as f64
        } else if i.abs_diff(j) <= half {
            rng.gen_range(-1.0..1.0)
        } else {
            0.0
        }
    });
    let b = DenseVector::column((0..n).map(|_| rng.r#gen::<f64>()).collect());

    let band: BandMatrix<f64> = convert(&a);
    println!(
        "order {n}, bandwidths {}/{}, {} stored of {} cells",
        band.left_bandwidth(),
        band.right_bandwidth(),
        band.stored_len(),
        n * n
    );

    let x_dense = LuSolver::with_options(FactorOptions::new(kind, Traversal::Dense)).solve(a, &b)?;
    let x_band = LuSolver::with_options(FactorOptions::new(kind, Traversal::Sparse)).solve(band, &b)?;

    let mean_diff = x_dense
        .as_slice()
        .iter()
        .zip(x_band.as_slice())
        .map(|(p, q)| (p - q).abs())
        .sum::<f64>()
        / n.max(1) as f64;
    println!("{kind}: mean |x_dense - x_band| = {mean_diff:e}");
    Ok(())
}

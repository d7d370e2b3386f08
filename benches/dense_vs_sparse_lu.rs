use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use faer::linalg::solvers::SolveCore;
use sparsela::matrix::{BandMatrix, CsrMatrix, DenseMatrix, RowProfileMatrix, convert};
use sparsela::solver::{lu_dense, lu_sparse};

fn banded(n: usize, half: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(n, n, |i, j| {
        if i == j {
            4.0 + half as f64
        } else if i.abs_diff(j) <= half {
            ((i * n + j) as f64).sin()
        } else {
            0.0
        }
    })
}

fn bench_lu_layouts(c: &mut Criterion) {
    let n = 200;
    let a = banded(n, 4);
    let band: BandMatrix<f64> = convert(&a);
    let csr: CsrMatrix<f64> = convert(&a);
    let profile: RowProfileMatrix<f64> = convert(&a);

    c.bench_function("dense LU", |ben| {
        ben.iter_batched(|| a.clone(), |mut m| lu_dense(black_box(&mut m)).unwrap(), BatchSize::LargeInput)
    });

    c.bench_function("band sparse LU", |ben| {
        ben.iter_batched(|| band.clone(), |mut m| lu_sparse(black_box(&mut m)).unwrap(), BatchSize::LargeInput)
    });

    c.bench_function("csr sparse LU", |ben| {
        ben.iter_batched(|| csr.clone(), |mut m| lu_sparse(black_box(&mut m)).unwrap(), BatchSize::LargeInput)
    });

    c.bench_function("profile sparse LU", |ben| {
        ben.iter_batched(|| profile.clone(), |mut m| lu_sparse(black_box(&mut m)).unwrap(), BatchSize::LargeInput)
    });

    let m = a.to_faer();
    let b: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    c.bench_function("faer raw LU", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(m.as_ref());
            let mut y = b.clone();
            let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
            factor.solve_in_place_with_conj(faer::Conj::No, y_mat);
        })
    });
}

criterion_group!(benches, bench_lu_layouts);
criterion_main!(benches);

//! Integration tests for the Gram-Schmidt QR decomposition.

use qr_eig::math::Array2;
use qr_eig::{decompose, LinalgError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random matrix with a boosted diagonal so it stays well conditioned.
fn random_square(rng: &mut StdRng, n: usize) -> Array2<f64> {
    let mut a = Array2::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            a[(i, j)] = rng.gen_range(-1.0..1.0);
        }
        a[(i, i)] += n as f64;
    }
    a
}

fn assert_close(a: &Array2<f64>, b: &Array2<f64>, tol: f64) {
    let diff = a.max_abs_diff(b);
    assert!(diff < tol, "max abs diff {} exceeds {}", diff, tol);
}

// ---------------------------------------------------------------------------
// Factorization properties
// ---------------------------------------------------------------------------

#[test]
fn q_times_r_reconstructs_a() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in 1..=6 {
        let a = random_square(&mut rng, n);
        let qr = decompose(&a).unwrap();
        assert_close(&qr.reconstruct().unwrap(), &a, 1e-9);
    }
}

#[test]
fn q_has_orthonormal_columns() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_square(&mut rng, 5);
    let qr = decompose(&a).unwrap();
    let qtq = qr.q.transpose().matmul(&qr.q).unwrap();
    assert_close(&qtq, &Array2::identity(5), 1e-9);
}

#[test]
fn r_is_upper_triangular() {
    let mut rng = StdRng::seed_from_u64(9);
    let a = random_square(&mut rng, 4);
    let qr = decompose(&a).unwrap();
    for i in 0..4 {
        for j in 0..i {
            assert!(qr.r[(i, j)].abs() < 1e-9, "r[{}, {}] = {}", i, j, qr.r[(i, j)]);
        }
        assert!(qr.r[(i, i)] > 0.0);
    }
}

#[test]
fn redecomposing_reconstruction_is_stable() {
    let mut rng = StdRng::seed_from_u64(17);
    let a = random_square(&mut rng, 4);
    let first = decompose(&a).unwrap();
    let second = decompose(&first.reconstruct().unwrap()).unwrap();

    for j in 0..4 {
        let q1 = first.q.column(j);
        let q2 = second.q.column(j);
        let sign = q1.dot(&q2).signum();
        for (x, y) in q1.iter().zip(q2.iter()) {
            assert!((x - sign * y).abs() < 1e-9);
        }
    }
    assert_close(&first.r, &second.r, 1e-9);
}

#[test]
fn known_3x3_factorization() {
    let a = Array2::from_rows(vec![
        vec![12.0, -51.0, 4.0],
        vec![6.0, 167.0, -68.0],
        vec![-4.0, 24.0, -41.0],
    ])
    .unwrap();
    let qr = decompose(&a).unwrap();
    let expected_r = Array2::from_rows(vec![
        vec![14.0, 21.0, -14.0],
        vec![0.0, 175.0, -70.0],
        vec![0.0, 0.0, 35.0],
    ])
    .unwrap();
    assert_close(&qr.r, &expected_r, 1e-9);
    assert!((qr.q[(0, 0)] - 6.0 / 7.0).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn non_square_is_rejected() {
    let a = Array2::<f64>::zeros(3, 2);
    assert_eq!(
        decompose(&a).unwrap_err(),
        LinalgError::NotSquare { rows: 3, cols: 2 }
    );
}

#[test]
fn dependent_columns_produce_nan() {
    let a = Array2::from_rows(vec![vec![1.0, 2.0], vec![0.0, 0.0]]).unwrap();
    let qr = decompose(&a).unwrap();
    assert!(qr.q.column(1).iter().all(|x| x.is_nan()));
}

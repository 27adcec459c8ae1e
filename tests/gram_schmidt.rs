//! Integration tests for classical Gram-Schmidt orthogonalization.

use qr_eig::math::Array1;
use qr_eig::{orthogonalize, LinalgError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vectors(rng: &mut StdRng, count: usize, dim: usize) -> Vec<Array1<f64>> {
    (0..count)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}

fn assert_pairwise_orthogonal(basis: &[Array1<f64>], tol: f64) {
    for i in 0..basis.len() {
        for j in 0..i {
            let d = basis[i].dot(&basis[j]);
            assert!(d.abs() < tol, "dot(out[{}], out[{}]) = {}", i, j, d);
        }
    }
}

// ---------------------------------------------------------------------------
// Orthogonality and normalization
// ---------------------------------------------------------------------------

#[test]
fn output_length_matches_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let vectors = random_vectors(&mut rng, 3, 5);
    let basis = orthogonalize(&vectors, false).unwrap();
    assert_eq!(basis.len(), vectors.len());
    assert!(basis.iter().all(|v| v.len() == 5));
}

#[test]
fn unnormalized_basis_is_orthogonal() {
    let mut rng = StdRng::seed_from_u64(11);
    let vectors = random_vectors(&mut rng, 4, 4);
    let basis = orthogonalize(&vectors, false).unwrap();
    assert_pairwise_orthogonal(&basis, 1e-9);
    assert_eq!(basis[0], vectors[0]);
}

#[test]
fn normalized_basis_is_orthonormal() {
    let mut rng = StdRng::seed_from_u64(23);
    let vectors = random_vectors(&mut rng, 5, 6);
    let basis = orthogonalize(&vectors, true).unwrap();
    assert_pairwise_orthogonal(&basis, 1e-9);
    for v in &basis {
        assert!((v.norm() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn normalized_and_unnormalized_span_same_directions() {
    let vectors = vec![
        Array1::from_vec(vec![2.0, 0.0, 0.0]),
        Array1::from_vec(vec![1.0, 3.0, 0.0]),
        Array1::from_vec(vec![1.0, 1.0, 4.0]),
    ];
    let plain = orthogonalize(&vectors, false).unwrap();
    let unit = orthogonalize(&vectors, true).unwrap();
    for (p, u) in plain.iter().zip(unit.iter()) {
        let scaled = p.scaled(1.0 / p.norm());
        for (a, b) in scaled.iter().zip(u.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
    assert_eq!(plain[1].to_vec(), vec![0.0, 3.0, 0.0]);
    for (got, want) in plain[2].iter().zip([0.0, 0.0, 4.0].iter()) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn fewer_vectors_than_dimensions() {
    let vectors = vec![
        Array1::from_vec(vec![1.0, 1.0, 1.0, 1.0]),
        Array1::from_vec(vec![1.0, -1.0, 2.0, 0.0]),
    ];
    let basis = orthogonalize(&vectors, true).unwrap();
    assert_pairwise_orthogonal(&basis, 1e-12);
}

// ---------------------------------------------------------------------------
// Degenerate and invalid input
// ---------------------------------------------------------------------------

#[test]
fn dependent_vector_is_zero_without_normalization() {
    let vectors = vec![
        Array1::from_vec(vec![1.0, 2.0]),
        Array1::from_vec(vec![2.0, 4.0]),
    ];
    let basis = orthogonalize(&vectors, false).unwrap();
    assert_eq!(basis[1].to_vec(), vec![0.0, 0.0]);
}

#[test]
fn empty_input_errors() {
    assert_eq!(orthogonalize(&[], false), Err(LinalgError::EmptyInput));
}

#[test]
fn mismatched_dimensions_error() {
    let vectors = vec![
        Array1::from_vec(vec![1.0, 0.0]),
        Array1::from_vec(vec![0.0, 1.0]),
        Array1::from_vec(vec![1.0]),
    ];
    assert!(matches!(
        orthogonalize(&vectors, true),
        Err(LinalgError::DimensionMismatch { index: 2, .. })
    ));
}

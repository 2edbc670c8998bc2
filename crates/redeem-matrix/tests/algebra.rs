//! Integration tests for matrix sums, products, transpose and dot product.

use redeem_matrix::{Matrix, MatrixError};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

// ---------------------------------------------------------------------------
// Addition / subtraction
// ---------------------------------------------------------------------------

#[test]
fn add_then_subtract_reconstructs() {
    let a = m(&[&[1.5, -2.0, 3.25], &[0.1, 0.2, 0.3]]);
    let b = m(&[&[10.0, 0.5, -7.0], &[1e-3, 4.0, 9.9]]);
    let sum = a.add(&b).unwrap();
    let back = sum.subtract(&b).unwrap();
    assert!(back.approx_eq(&a, 1e-12));
}

#[test]
fn subtract_matches_adding_negated_copy() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[0.3, -0.7], &[5.5, 1e-9]]);
    let direct = a.subtract(&b).unwrap();
    let via_add = a.add(&b.scaled(-1.0)).unwrap();
    assert_eq!(direct, via_add);
}

#[test]
fn add_dimension_mismatch() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(3, 2).unwrap();
    match a.add(&b) {
        Err(MatrixError::DimensionMismatch { left, right, .. }) => {
            assert_eq!(left, (2, 3));
            assert_eq!(right, (3, 2));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
    assert!(a.subtract(&b).is_err());
}

#[test]
fn in_place_add_and_subtract() {
    let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[1.0, 1.0], &[1.0, 1.0]]);
    a.add_assign_matrix(&b).unwrap();
    assert_eq!(a.as_slice(), &[2.0, 3.0, 4.0, 5.0]);
    a.subtract_assign_matrix(&b).unwrap();
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    assert!(a.add_assign_matrix(&Matrix::zeros(1, 4).unwrap()).is_err());
}

// ---------------------------------------------------------------------------
// Multiplication
// ---------------------------------------------------------------------------

#[test]
fn multiply_known_product() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let b = m(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]);
    let p = a.multiply(&b).unwrap();
    assert_eq!(p.shape(), (2, 2));
    assert_eq!(p.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
}

#[test]
fn multiply_by_identity_is_noop() {
    let a = m(&[&[1.0, -2.0, 0.5], &[3.0, 4.0, -6.0]]);
    let left = Matrix::identity(2).unwrap().multiply(&a).unwrap();
    let right = a.multiply(&Matrix::identity(3).unwrap()).unwrap();
    assert_eq!(left, a);
    assert_eq!(right, a);
}

#[test]
fn multiply_dimension_mismatch() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(2, 3).unwrap();
    assert!(matches!(
        a.multiply(&b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn multiply_accumulates_in_contraction_order() {
    // ((1e16 + 1) + -1e16) == 0 in f64, whereas a reordered sum would give 1.
    let a = m(&[&[1e16, 1.0, -1e16]]);
    let b = m(&[&[1.0], &[1.0], &[1.0]]);
    let p = a.multiply(&b).unwrap();
    assert_eq!(p[(0, 0)], 0.0);
}

#[test]
fn multiply_in_place_adopts_product_shape() {
    let mut a = m(&[&[1.0, 2.0, 3.0]]);
    let b = m(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]]);
    a.multiply_in_place(&b).unwrap();
    assert_eq!(a.shape(), (1, 2));
    assert_eq!(a.as_slice(), &[4.0, 5.0]);
}

// ---------------------------------------------------------------------------
// Transpose / dot product
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_indices() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = a.transpose();
    assert_eq!(t.shape(), (3, 2));
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(t[(i, j)], a[(j, i)]);
        }
    }
    assert_eq!(t.transpose(), a);
}

#[test]
fn transpose_in_place_changes_shape() {
    let mut a = m(&[&[1.0, 2.0, 3.0]]);
    a.transpose_in_place();
    assert_eq!(a.shape(), (3, 1));
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn dot_product_is_a_times_b_transposed() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
    let b = m(&[&[1.0, 0.0], &[1.0, 1.0]]);
    let d = a.dot_product(&b).unwrap();
    assert_eq!(d, a.multiply(&b.transpose()).unwrap());
    assert_eq!(d.shape(), (3, 2));
    assert_eq!(d.as_slice(), &[1.0, 3.0, 3.0, 7.0, 5.0, 11.0]);
}

#[test]
fn dot_product_requires_matching_columns() {
    let a = Matrix::zeros(2, 3).unwrap();
    let b = Matrix::zeros(3, 2).unwrap();
    assert!(matches!(
        a.dot_product(&b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

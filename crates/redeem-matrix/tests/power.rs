//! Integration tests for integer matrix powers.

use redeem_matrix::{ComputeConfig, DeterminantMethod, Matrix, MatrixError, PowerStrategy};

fn sample() -> Matrix {
    Matrix::from_rows(&[[1.0, 1.0], [1.0, 0.0]]).unwrap()
}

#[test]
fn power_zero_is_identity() {
    let a = sample();
    assert_eq!(a.power(0).unwrap(), Matrix::identity(2).unwrap());
}

#[test]
fn power_one_and_two() {
    let a = sample();
    assert_eq!(a.power(1).unwrap(), a);
    assert_eq!(a.power(2).unwrap(), a.multiply(&a).unwrap());
}

#[test]
fn power_produces_fibonacci_numbers() {
    let p = sample().power(10).unwrap();
    assert_eq!(p.as_slice(), &[89.0, 55.0, 55.0, 34.0]);
}

#[test]
fn negative_power_inverts() {
    let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 1.0]]).unwrap();
    let inv = a.inverse().unwrap();
    assert_eq!(a.power(-1).unwrap(), inv);
    let p = a.power(-3).unwrap();
    let expected = inv.multiply(&inv).unwrap().multiply(&inv).unwrap();
    assert!(p.approx_eq(&expected, 1e-12));
}

#[test]
fn negative_power_of_singular_matrix() {
    let s = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    assert!(matches!(s.power(-2), Err(MatrixError::Singular)));
}

#[test]
fn power_not_square() {
    let a = Matrix::zeros(2, 3).unwrap();
    assert!(matches!(a.power(2), Err(MatrixError::NotSquare { .. })));
    assert!(matches!(a.power(0), Err(MatrixError::NotSquare { .. })));
}

#[test]
fn squaring_strategy_matches_linear() {
    let a = sample();
    let config = ComputeConfig::new(DeterminantMethod::Cofactor, PowerStrategy::Squaring);
    for n in [0, 1, 2, 3, 7, 16, 25] {
        assert_eq!(a.power_with(n, &config).unwrap(), a.power(n).unwrap());
    }
}

#[test]
fn squaring_with_lu_inverse() {
    let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 1.0]]).unwrap();
    let config = ComputeConfig::new(DeterminantMethod::Lu, PowerStrategy::Squaring);
    let p = a.power_with(-4, &config).unwrap();
    assert!(p.approx_eq(&a.power(-4).unwrap(), 1e-9));
}

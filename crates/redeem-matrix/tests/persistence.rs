//! Integration tests for the binary matrix record format.

use std::io::Cursor;

use redeem_matrix::io::{self, binary};
use redeem_matrix::{Matrix, MatrixError};

fn sample() -> Matrix {
    Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn save_then_load_reproduces_matrix() {
    let m = sample();
    let mut buf = Vec::new();
    m.save(&mut buf).unwrap();
    let back = Matrix::load(&mut Cursor::new(buf)).unwrap();
    assert_eq!(back.shape(), (2, 3));
    assert_eq!(back, m);
}

#[test]
fn record_layout_is_stable() {
    let m = Matrix::from_rows(&[[1.5], [-2.0]]).unwrap();
    let bytes = io::to_bytes(&m).unwrap();
    assert_eq!(bytes.len(), 1 + 4 + 4 + 2 * binary::SCALAR_WIDTH + 1);
    assert_eq!(bytes[0], b'M');
    assert_eq!(&bytes[1..5], &2i32.to_le_bytes());
    assert_eq!(&bytes[5..9], &1i32.to_le_bytes());
    assert_eq!(&bytes[9..17], &1.5f64.to_le_bytes());
    assert_eq!(&bytes[17..25], &(-2.0f64).to_le_bytes());
    assert_eq!(*bytes.last().unwrap(), b'E');
}

#[test]
fn several_records_in_one_stream() {
    let a = sample();
    let b = Matrix::identity(3).unwrap();
    let mut buf = Vec::new();
    io::save(&a, &mut buf).unwrap();
    io::save(&b, &mut buf).unwrap();
    let mut reader = Cursor::new(buf);
    assert_eq!(io::load(&mut reader).unwrap(), a);
    assert_eq!(io::load(&mut reader).unwrap(), b);
}

#[test]
fn save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.bin");
    let m = sample();
    io::save_to_path(&m, &path).unwrap();
    assert_eq!(io::load_from_path(&path).unwrap(), m);
}

// ---------------------------------------------------------------------------
// Corrupt input
// ---------------------------------------------------------------------------

#[test]
fn bad_start_marker() {
    let mut bytes = io::to_bytes(&sample()).unwrap();
    bytes[0] = b'X';
    assert!(matches!(
        io::from_bytes(&bytes),
        Err(MatrixError::CorruptFormat(_))
    ));
}

#[test]
fn bad_end_marker() {
    let mut bytes = io::to_bytes(&sample()).unwrap();
    let last = bytes.len() - 1;
    bytes[last] = b'Z';
    assert!(matches!(
        io::from_bytes(&bytes),
        Err(MatrixError::CorruptFormat(_))
    ));
}

#[test]
fn non_positive_dimensions_are_corrupt() {
    let mut bytes = vec![b'M'];
    bytes.extend_from_slice(&(-1i32).to_le_bytes());
    bytes.extend_from_slice(&2i32.to_le_bytes());
    assert!(matches!(
        io::from_bytes(&bytes),
        Err(MatrixError::CorruptFormat(_))
    ));
}

#[test]
fn truncated_streams_report_eof() {
    let bytes = io::to_bytes(&sample()).unwrap();
    for cut in [0, 1, 6, 9, 20, bytes.len() - 1] {
        assert!(
            matches!(
                io::from_bytes(&bytes[..cut]),
                Err(MatrixError::UnexpectedEof)
            ),
            "cut at {} should be UnexpectedEof",
            cut
        );
    }
}

#[test]
fn huge_header_with_no_payload_fails_cleanly() {
    let mut bytes = vec![b'M'];
    bytes.extend_from_slice(&i32::MAX.to_le_bytes());
    bytes.extend_from_slice(&i32::MAX.to_le_bytes());
    assert!(matches!(
        io::from_bytes(&bytes),
        Err(MatrixError::UnexpectedEof)
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        io::load_from_path(dir.path().join("absent.bin")),
        Err(MatrixError::Io(_))
    ));
}

//! Binary matrix records.
//!
//! Layout (all integers and scalars little-endian):
//!
//! ```text
//! u8      b'M'
//! i32     rows
//! i32     cols
//! f64     data[rows * cols]   row-major
//! u8      b'E'
//! ```
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{MatrixError, Result};
use crate::math::{Matrix, Scalar};

pub const START_MARKER: u8 = b'M';
pub const END_MARKER: u8 = b'E';

/// Width in bytes of one persisted scalar.
pub const SCALAR_WIDTH: usize = std::mem::size_of::<Scalar>();

/// Payload elements are read in chunks of this many scalars so a bogus
/// header cannot trigger one huge allocation before any data arrives.
const READ_CHUNK: usize = 4096;

/// Write `m` as a single binary record.
pub fn save<W: Write>(m: &Matrix, writer: &mut W) -> Result<()> {
    let (rows, cols) = m.shape();
    let (rows_i32, cols_i32) = match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => (r, c),
        _ => return Err(MatrixError::InvalidShape { rows, cols }),
    };

    writer.write_all(&[START_MARKER])?;
    writer.write_all(&rows_i32.to_le_bytes())?;
    writer.write_all(&cols_i32.to_le_bytes())?;
    for v in m.as_slice() {
        writer.write_all(&v.to_le_bytes())?;
    }
    writer.write_all(&[END_MARKER])?;
    log::trace!("saved {}x{} matrix record", rows, cols);
    Ok(())
}

/// Read one binary record.
pub fn load<R: Read>(reader: &mut R) -> Result<Matrix> {
    let start = read_u8(reader)?;
    if start != START_MARKER {
        return Err(MatrixError::CorruptFormat(format!(
            "expected start marker {:?}, found {:#04x}",
            START_MARKER as char, start
        )));
    }

    let rows = read_dimension(reader, "rows")?;
    let cols = read_dimension(reader, "cols")?;
    let len = rows.checked_mul(cols).ok_or_else(|| {
        MatrixError::CorruptFormat(format!("shape {}x{} overflows", rows, cols))
    })?;

    let mut data: Vec<Scalar> = Vec::with_capacity(len.min(READ_CHUNK));
    let mut buf = vec![0u8; READ_CHUNK.min(len) * SCALAR_WIDTH];
    while data.len() < len {
        let take = (len - data.len()).min(READ_CHUNK);
        let bytes = &mut buf[..take * SCALAR_WIDTH];
        reader.read_exact(bytes)?;
        data.extend(bytes.chunks_exact(SCALAR_WIDTH).map(|chunk| {
            let mut raw = [0u8; SCALAR_WIDTH];
            raw.copy_from_slice(chunk);
            Scalar::from_le_bytes(raw)
        }));
    }

    let end = read_u8(reader)?;
    if end != END_MARKER {
        return Err(MatrixError::CorruptFormat(format!(
            "expected end marker {:?}, found {:#04x}",
            END_MARKER as char, end
        )));
    }
    log::trace!("loaded {}x{} matrix record", rows, cols);
    Matrix::from_shape_vec((rows, cols), data)
}

pub fn to_bytes(m: &Matrix) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(1 + 8 + m.as_slice().len() * SCALAR_WIDTH + 1);
    save(m, &mut out)?;
    Ok(out)
}

pub fn from_bytes(mut bytes: &[u8]) -> Result<Matrix> {
    load(&mut bytes)
}

pub fn save_to_path<P: AsRef<Path>>(m: &Matrix, path: P) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    save(m, &mut writer)?;
    writer.flush()?;
    Ok(())
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let mut reader = BufReader::new(File::open(path)?);
    load(&mut reader)
}

fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut b = [0u8; 1];
    reader.read_exact(&mut b)?;
    Ok(b[0])
}

fn read_dimension<R: Read>(reader: &mut R, name: &str) -> Result<usize> {
    let mut b = [0u8; 4];
    reader.read_exact(&mut b)?;
    let v = i32::from_le_bytes(b);
    if v <= 0 {
        return Err(MatrixError::CorruptFormat(format!(
            "{} must be positive, found {}",
            name, v
        )));
    }
    Ok(v as usize)
}

impl Matrix {
    /// See [`save`].
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<()> {
        save(self, writer)
    }

    /// See [`load`].
    pub fn load<R: Read>(reader: &mut R) -> Result<Matrix> {
        load(reader)
    }
}

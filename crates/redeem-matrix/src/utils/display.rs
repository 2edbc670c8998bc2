use std::fmt::{self, Write};

use crate::math::Matrix;

/// Render `m` with `decimal_places` digits, eliding the middle of rows and
/// columns beyond `max_rows` / `max_cols` (counted from each end).
pub fn format_matrix(
    m: &Matrix,
    decimal_places: usize,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_matrix(&mut out, m, decimal_places, max_rows, max_cols);
    out
}

fn write_matrix<W: Write>(
    out: &mut W,
    m: &Matrix,
    decimal_places: usize,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
) -> fmt::Result {
    let (rows, cols) = m.shape();
    let row_edge = max_rows.unwrap_or(rows);
    let col_edge = max_cols.unwrap_or(cols);

    let row_indices = elided(rows, row_edge);
    let col_indices = elided(cols, col_edge);

    writeln!(out, "matrix({}x{}, [", rows, cols)?;
    for r in row_indices {
        let Some(r) = r else {
            writeln!(out, "  ...,")?;
            continue;
        };
        write!(out, "  [")?;
        for (pos, c) in col_indices.iter().enumerate() {
            if pos > 0 {
                write!(out, ", ")?;
            }
            match c {
                Some(c) => write!(out, "{:.*}", decimal_places, m[(r, *c)])?,
                None => write!(out, "...")?,
            }
        }
        writeln!(out, "],")?;
    }
    write!(out, "])")
}

/// Indices `0..len`, with the middle replaced by a single `None` when more
/// than `2 * edge` would be shown.
fn elided(len: usize, edge: usize) -> Vec<Option<usize>> {
    if edge * 2 >= len {
        return (0..len).map(Some).collect();
    }
    (0..edge)
        .map(Some)
        .chain(std::iter::once(None))
        .chain((len - edge..len).map(Some))
        .collect()
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(4);
        write_matrix(f, self, decimals, Some(8), Some(8))
    }
}

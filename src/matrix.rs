use ndarray::Array2;

use crate::Error;

/// Builds a dense matrix out of row vectors, rejecting jagged and empty input.
pub fn from_rows<T: Copy>(rows: &[Vec<T>]) -> Result<Array2<T>, Error> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);

    if let Some((row, found)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != n_cols)
    {
        return Err(Error::MalformedMatrix {
            row,
            expected: n_cols,
            found,
        });
    }
    if n_rows == 0 || n_cols == 0 {
        return Err(Error::EmptyMatrix {
            rows: n_rows,
            cols: n_cols,
        });
    }

    Ok(Array2::from_shape_fn((n_rows, n_cols), |(i, j)| rows[i][j]))
}

use std::fmt::{self, Display};

use ndarray::ArrayView2;

/// Bracketed, column-aligned layout:
///
/// ```text
/// [[ 6  6  4]
///  [ 8 19  9]]
/// ```
pub struct Matrix<'a, T>(pub ArrayView2<'a, T>);

impl<'a, T: Display> Display for Matrix<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.0.iter().map(|value| value.to_string()).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);
        let n_cols = self.0.ncols();

        f.write_str("[")?;
        if n_cols == 0 {
            for i in 0..self.0.nrows() {
                if i > 0 {
                    f.write_str("\n ")?;
                }
                f.write_str("[]")?;
            }
            return f.write_str("]");
        }
        for (i, row) in cells.chunks(n_cols).enumerate() {
            if i > 0 {
                f.write_str("\n ")?;
            }
            f.write_str("[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("window size must be at least 1, got {window_size}")]
    InvalidWindowSize { window_size: i64 },

    #[error("window size {window_size} does not fit in a {rows}x{cols} matrix")]
    WindowExceedsMatrix {
        window_size: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {found} elements, expected {expected}")]
    MalformedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix is empty ({rows}x{cols})")]
    EmptyMatrix { rows: usize, cols: usize },
}

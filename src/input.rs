//! Plain-text problem input.
//!
//! The format is line based: a row count, one line of whitespace-separated
//! values per row, then the window size.
//!
//! ```text
//! 2
//! 1 9 2
//! 4 0 3
//! 2
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use ndarray::Array2;
use thiserror::Error;

use crate::{checked_window_size, matrix, render, Element, Error};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: {token:?} is not a valid {expected}")]
    InvalidToken {
        line: usize,
        token: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Invalid(#[from] Error),
}

#[derive(Debug)]
pub struct Problem<T> {
    pub matrix: Array2<T>,
    pub window_size: usize,
}

struct Lines<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// Returns the next line, trimmed, with its 1-based line number.
    fn next(&mut self, expected: &'static str) -> Result<(usize, &str), InputError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(InputError::UnexpectedEof { expected });
        }
        self.line += 1;
        Ok((self.line, self.buf.trim()))
    }
}

fn parse_token<T: FromStr>(
    token: &str,
    line: usize,
    expected: &'static str,
) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidToken {
        line,
        token: token.to_owned(),
        expected,
    })
}

fn prompt<W: Write>(prompts: &mut W, text: &str) -> io::Result<()> {
    prompts.write_all(text.as_bytes())?;
    prompts.flush()
}

/// Reads a matrix and window size from `reader`, writing prompts to `prompts`.
///
/// When `window_size` is given the window size line is not read.
pub fn read_problem<T, R, W>(
    reader: R,
    prompts: &mut W,
    window_size: Option<i64>,
) -> Result<Problem<T>, InputError>
where
    T: Element + FromStr + Display,
    R: BufRead,
    W: Write,
{
    let mut lines = Lines::new(reader);

    prompt(prompts, "Enter no of rows:\n")?;
    let (line, text) = lines.next("row count")?;
    let n_rows: usize = parse_token(text, line, "row count")?;

    // The row count is untrusted, so rows grow as they are read
    let mut rows = Vec::new();
    for i in 0..n_rows {
        prompt(
            prompts,
            &format!("Enter values for row {} separated by spaces: ", i + 1),
        )?;
        let (line, text) = lines.next("matrix row")?;
        let row = text
            .split_whitespace()
            .map(|token| parse_token::<T>(token, line, "matrix element"))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    let matrix = matrix::from_rows(&rows)?;
    writeln!(
        prompts,
        "Matrix entered by the user:\n{}",
        render::Matrix(matrix.view())
    )?;

    let window_size = match window_size {
        Some(window_size) => window_size,
        None => {
            prompt(prompts, "Enter window size:\n")?;
            let (line, text) = lines.next("window size")?;
            parse_token(text, line, "window size")?
        }
    };
    let window_size = checked_window_size(window_size)?;

    Ok(Problem {
        matrix,
        window_size,
    })
}

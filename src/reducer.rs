use std::fmt;

use log::{debug, trace};
use ndarray::prelude::*;

use crate::sliding::SlidingMax;
use crate::{matrix, Element, Error};

/// Strategy used to compute the window maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Rescans every k×k window. O(m·n·k²), no scratch memory.
    Naive,
    /// Row pass followed by a column pass of 1D sliding maxima. O(m·n) for any k.
    #[default]
    MonotonicDeque,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Naive => f.write_str("naive"),
            Algorithm::MonotonicDeque => f.write_str("monotonic deque"),
        }
    }
}

/// Sliding-window maximum with stride 1 and no padding.
///
/// For an `m × n` matrix and window size `k` the result has shape
/// `(m - k + 1, n - k + 1)` and `result[(i, j)]` is the maximum of
/// `matrix.slice(s![i..i + k, j..j + k])`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowMaxReducer {
    algorithm: Algorithm,
}

impl WindowMaxReducer {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn reduce<T: Element>(
        &self,
        matrix: ArrayView2<T>,
        window_size: usize,
    ) -> Result<Array2<T>, Error> {
        validate(matrix.dim(), window_size)?;
        debug!(
            "Pooling {:?} matrix with window {} ({})",
            matrix.dim(),
            window_size,
            self.algorithm
        );
        let result = match self.algorithm {
            Algorithm::Naive => naive(matrix, window_size),
            Algorithm::MonotonicDeque => monotonic_deque(matrix, window_size),
        };
        Ok(result)
    }

    /// Like [`WindowMaxReducer::reduce`], for matrices given as row vectors.
    pub fn reduce_rows<T: Element>(
        &self,
        rows: &[Vec<T>],
        window_size: usize,
    ) -> Result<Array2<T>, Error> {
        if window_size == 0 {
            return Err(Error::InvalidWindowSize { window_size: 0 });
        }
        let matrix = matrix::from_rows(rows)?;
        self.reduce(matrix.view(), window_size)
    }
}

/// Pools `matrix` with the default strategy.
pub fn reduce<T: Element>(matrix: ArrayView2<T>, window_size: usize) -> Result<Array2<T>, Error> {
    WindowMaxReducer::default().reduce(matrix, window_size)
}

/// Converts a window size read from untyped input.
pub fn checked_window_size(window_size: i64) -> Result<usize, Error> {
    if window_size < 1 {
        return Err(Error::InvalidWindowSize { window_size });
    }
    // Saturates on narrow targets; no matrix is that large anyway.
    Ok(usize::try_from(window_size).unwrap_or(usize::MAX))
}

fn validate((rows, cols): (usize, usize), window_size: usize) -> Result<(), Error> {
    if window_size == 0 {
        return Err(Error::InvalidWindowSize { window_size: 0 });
    }
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyMatrix { rows, cols });
    }
    if window_size > rows || window_size > cols {
        return Err(Error::WindowExceedsMatrix {
            window_size,
            rows,
            cols,
        });
    }
    Ok(())
}

fn window_max<T: Element>(window: ArrayView2<T>) -> T {
    let first = window[(0, 0)];
    window.iter().copied().fold(first, T::max_of)
}

fn naive<T: Element>(matrix: ArrayView2<T>, k: usize) -> Array2<T> {
    let (m, n) = matrix.dim();
    Array2::from_shape_fn((m - k + 1, n - k + 1), |(i, j)| {
        window_max(matrix.slice(s![i..i + k, j..j + k]))
    })
}

fn monotonic_deque<T: Element>(matrix: ArrayView2<T>, k: usize) -> Array2<T> {
    let (m, n) = matrix.dim();
    let fill = matrix[(0, 0)];

    // Row pass: m × (n - k + 1)
    let mut row_maxima = Array2::from_elem((m, n - k + 1), fill);
    let mut sliding = SlidingMax::new(k);
    for (row, out) in matrix.rows().into_iter().zip(row_maxima.rows_mut()) {
        sliding.apply_in(row, out);
    }
    trace!("Row pass produced {:?}", row_maxima.dim());

    // Column pass: (m - k + 1) × (n - k + 1)
    let mut result = Array2::from_elem((m - k + 1, n - k + 1), fill);
    for (column, out) in row_maxima.columns().into_iter().zip(result.columns_mut()) {
        sliding.apply_in(column, out);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ALGORITHMS: [Algorithm; 2] = [Algorithm::Naive, Algorithm::MonotonicDeque];

    fn brute_force(matrix: &Array2<i64>, k: usize) -> Vec<Vec<i64>> {
        let (m, n) = matrix.dim();
        (0..=m - k)
            .map(|i| {
                (0..=n - k)
                    .map(|j| {
                        let mut best = i64::MIN;
                        for r in i..i + k {
                            for c in j..j + k {
                                best = best.max(matrix[(r, c)]);
                            }
                        }
                        best
                    })
                    .collect()
            })
            .collect()
    }

    fn random_matrix(rng: &mut StdRng, m: usize, n: usize) -> Array2<i64> {
        Array2::from_shape_fn((m, n), |_| rng.gen_range(-50..50))
    }

    #[test]
    fn test_concrete_2x2() {
        let matrix = arr2(&[[1, 3, 2, 4], [5, 6, 1, 2], [7, 8, 9, 0], [3, 2, 1, 4]]);
        let expected = arr2(&[[6, 6, 4], [8, 9, 9], [8, 9, 9]]);
        for algorithm in ALGORITHMS {
            let reducer = WindowMaxReducer::new(algorithm);
            assert_eq!(reducer.reduce(matrix.view(), 2).unwrap(), expected);
        }
    }

    #[test]
    fn test_window_equals_matrix() {
        let matrix = arr2(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        for algorithm in ALGORITHMS {
            let reducer = WindowMaxReducer::new(algorithm);
            assert_eq!(reducer.reduce(matrix.view(), 3).unwrap(), arr2(&[[9]]));
        }
    }

    #[test]
    fn test_identity_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = random_matrix(&mut rng, 5, 8);
        for algorithm in ALGORITHMS {
            let reducer = WindowMaxReducer::new(algorithm);
            assert_eq!(reducer.reduce(matrix.view(), 1).unwrap(), matrix);
        }
    }

    #[test]
    fn test_against_brute_force() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut rng = StdRng::seed_from_u64(234);
        for _ in 0..40 {
            let m = rng.gen_range(1..=20);
            let n = rng.gen_range(1..=20);
            let matrix = random_matrix(&mut rng, m, n);
            for k in 1..=m.min(n) {
                let expected = brute_force(&matrix, k);
                for algorithm in ALGORITHMS {
                    let result = WindowMaxReducer::new(algorithm)
                        .reduce(matrix.view(), k)
                        .unwrap();
                    assert_eq!(result.dim(), (m - k + 1, n - k + 1));
                    let rows: Vec<_> = result.outer_iter().map(|row| row.to_vec()).collect();
                    assert_eq!(rows, expected);
                }
            }
        }
    }

    #[test]
    fn test_monotonic_in_window_size() {
        let mut rng = StdRng::seed_from_u64(99);
        let matrix = random_matrix(&mut rng, 12, 9);
        let reducer = WindowMaxReducer::default();
        for k in 1..9 {
            let smaller = reducer.reduce(matrix.view(), k).unwrap();
            let larger = reducer.reduce(matrix.view(), k + 1).unwrap();
            for ((i, j), value) in larger.indexed_iter() {
                assert!(*value >= smaller[(i, j)]);
            }
        }
    }

    #[test]
    fn test_non_square_matrix() {
        let matrix = arr2(&[[3, 1, 4, 1, 5, 9], [2, 6, 5, 3, 5, 8]]);
        for algorithm in ALGORITHMS {
            let reducer = WindowMaxReducer::new(algorithm);
            assert_eq!(
                reducer.reduce(matrix.view(), 2).unwrap(),
                arr2(&[[6, 6, 5, 5, 9]])
            );
        }
    }

    #[test]
    fn test_floats() {
        let matrix = arr2(&[[0.5, -1.25, 3.0], [f64::NEG_INFINITY, 2.5, -0.0]]);
        for algorithm in ALGORITHMS {
            let reducer = WindowMaxReducer::new(algorithm);
            assert_eq!(
                reducer.reduce(matrix.view(), 2).unwrap(),
                arr2(&[[2.5, 3.0]])
            );
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let matrix = arr2(&[[5u8, 1], [2, 7]]);
        let copy = matrix.clone();
        reduce(matrix.view(), 2).unwrap();
        assert_eq!(matrix, copy);
    }

    #[test]
    fn test_window_exceeds_matrix() {
        let matrix = arr2(&[[1, 2, 3], [4, 5, 6]]);
        for algorithm in ALGORITHMS {
            let reducer = WindowMaxReducer::new(algorithm);
            assert_eq!(
                reducer.reduce(matrix.view(), 3),
                Err(Error::WindowExceedsMatrix {
                    window_size: 3,
                    rows: 2,
                    cols: 3
                })
            );
            assert_eq!(
                reducer.reduce(matrix.t(), 3),
                Err(Error::WindowExceedsMatrix {
                    window_size: 3,
                    rows: 3,
                    cols: 2
                })
            );
        }
    }

    #[test]
    fn test_invalid_window_size() {
        let matrix = arr2(&[[1, 2], [3, 4]]);
        assert_eq!(
            reduce(matrix.view(), 0),
            Err(Error::InvalidWindowSize { window_size: 0 })
        );
        assert_eq!(
            checked_window_size(-2),
            Err(Error::InvalidWindowSize { window_size: -2 })
        );
        assert_eq!(checked_window_size(2), Ok(2));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = Array2::<i32>::zeros((0, 4));
        assert_eq!(
            reduce(matrix.view(), 1),
            Err(Error::EmptyMatrix { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn test_reduce_rows() {
        let reducer = WindowMaxReducer::new(Algorithm::MonotonicDeque);
        let rows = vec![vec![1, 9, 2], vec![4, 0, 3]];
        assert_eq!(reducer.reduce_rows(&rows, 2).unwrap(), arr2(&[[9, 9]]));

        let jagged = vec![vec![1, 9, 2], vec![4, 0]];
        assert_eq!(
            reducer.reduce_rows(&jagged, 1),
            Err(Error::MalformedMatrix {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            reducer.reduce_rows(&jagged, 0),
            Err(Error::InvalidWindowSize { window_size: 0 })
        );
    }
}

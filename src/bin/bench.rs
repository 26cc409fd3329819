use max_pool::{Algorithm, WindowMaxReducer};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

const SIZES: [usize; 3] = [64, 256, 512];
const WINDOWS: [usize; 4] = [2, 3, 8, 16];

fn main() {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);
    let naive = WindowMaxReducer::new(Algorithm::Naive);
    let deque = WindowMaxReducer::new(Algorithm::MonotonicDeque);

    let start = Instant::now();
    for size in SIZES {
        let matrix: Array2<i32> = Array2::from_shape_fn((size, size), |_| rng.gen());
        for window in WINDOWS {
            let instant = Instant::now();
            let expected = naive.reduce(matrix.view(), window).unwrap();
            let naive_us = instant.elapsed().as_micros();

            let instant = Instant::now();
            let result = deque.reduce(matrix.view(), window).unwrap();
            let deque_us = instant.elapsed().as_micros();

            assert_eq!(expected, result, "strategies disagree for {size}x{size}, k={window}");
            eprintln!("{size}x{size}, k={window}: naive {naive_us} us, deque {deque_us} us");
        }
    }
    let elapsed = start.elapsed().as_secs();
    eprintln!("Benchmarking all took {elapsed} seconds");
}

//! Sliding-window maximum ("max pooling") over 2D matrices.
//!
//! ```
//! use max_pool::{Algorithm, WindowMaxReducer};
//! use ndarray::arr2;
//!
//! let matrix = arr2(&[[1, 3, 2, 4], [5, 6, 1, 2], [7, 8, 9, 0], [3, 2, 1, 4]]);
//! let reducer = WindowMaxReducer::new(Algorithm::MonotonicDeque);
//! let pooled = reducer.reduce(matrix.view(), 2).unwrap();
//! assert_eq!(pooled, arr2(&[[6, 6, 4], [8, 9, 9], [8, 9, 9]]));
//! ```

mod element;
mod error;
pub mod input;
pub mod matrix;
mod reducer;
pub mod render;
mod sliding;

pub use element::Element;
pub use error::Error;
pub use reducer::{checked_window_size, reduce, Algorithm, WindowMaxReducer};

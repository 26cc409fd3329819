use std::cmp::Ordering;
use std::collections::VecDeque;

use ndarray::prelude::*;

use crate::Element;

/// One-dimensional sliding maximum over lanes of a fixed width.
///
/// `candidates` holds lane indices whose values are strictly decreasing from
/// front to back; the front is the maximum of the current window. Each index is
/// pushed and popped at most once, so a lane of length `n` costs O(n).
pub(crate) struct SlidingMax {
    width: usize,
    candidates: VecDeque<usize>, // Reused between lanes
}

impl SlidingMax {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            width,
            candidates: VecDeque::with_capacity(width),
        }
    }

    /// Writes the `lane.len() - width + 1` window maxima of `lane` into `output`.
    pub(crate) fn apply_in<T: Element>(
        &mut self,
        lane: ArrayView1<T>,
        mut output: ArrayViewMut1<T>,
    ) {
        debug_assert!(self.width >= 1 && self.width <= lane.len());
        debug_assert_eq!(output.len(), lane.len() - self.width + 1);

        self.candidates.clear();
        for (idx, value) in lane.iter().enumerate() {
            while let Some(&back) = self.candidates.back() {
                if lane[back].compare(value) == Ordering::Greater {
                    break;
                }
                self.candidates.pop_back();
            }
            self.candidates.push_back(idx);

            while let Some(&front) = self.candidates.front() {
                if front + self.width > idx {
                    break;
                }
                self.candidates.pop_front();
            }

            if idx + 1 >= self.width {
                if let Some(&front) = self.candidates.front() {
                    output[idx + 1 - self.width] = lane[front];
                }
            }
        }
    }
}

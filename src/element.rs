use std::cmp::Ordering;
use std::fmt::Debug;

/// Scalar that can be pooled.
///
/// Integers use their natural order. Floats use the IEEE 754 total order, so a
/// positive NaN wins every window and `-0.0 < 0.0`.
pub trait Element: Copy + Debug {
    fn compare(&self, other: &Self) -> Ordering;

    fn max_of(self, other: Self) -> Self {
        if other.compare(&self) == Ordering::Greater {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_ord_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }
        )*
    };
}

impl_ord_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl_float_element!(f32, f64);

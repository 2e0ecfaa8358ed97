use num_traits::{One, Zero};
use std::ops::Neg;

/// Saturating clamp to the closed range `[low, high]`.
pub use num_traits::clamp;

/// Sign of `value` as -1, 0 or 1.
///
/// Unlike `f32::signum`, zero (of either sign) maps to zero. The codec relies on this to give
/// an exact zero a neutral mantissa code.
pub fn sgn<T>(value: T) -> T
where
    T: Zero + One + Neg<Output = T> + PartialOrd,
{
    if value > T::zero() {
        T::one()
    } else if value < T::zero() {
        T::one().neg()
    } else {
        T::zero()
    }
}

//! Numeric values a window can aggregate, and the running totals they sum into
//!
//! Integers are summed into a checked `i128`, so a window of `u8` or `i64`
//! values never wraps or panics on sums the item type itself could not hold.
//! Floats are summed into an `f64` with Neumaier compensation, which keeps the
//! low-order bits that plain incremental add/subtract loses when a large value
//! enters and later leaves the window.

use num_traits::{CheckedAdd, CheckedSub, Float, ToPrimitive};
use std::fmt::Debug;

/// Incrementally maintained sum of the items held by a window.
pub trait RunningTotal: Default + Copy + Debug + Send + 'static {
    type Item;
    /// Type the sum is reported in
    type Output: Copy + PartialEq + Debug + Send + 'static;

    /// `None` if the result cannot be represented
    fn checked_add(&self, value: Self::Item) -> Option<Self>;
    fn checked_sub(&self, value: Self::Item) -> Option<Self>;
    fn total(&self) -> Self::Output;
    fn to_f64(&self) -> f64;
}

/// Sum of integer items, widened to `i128`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WideSum<T> {
    total: i128,
    _item: std::marker::PhantomData<T>,
}

impl<T> RunningTotal for WideSum<T>
where
    T: ToPrimitive + Copy + Debug + Default + Send + 'static,
{
    type Item = T;
    type Output = i128;

    fn checked_add(&self, value: T) -> Option<Self> {
        let total = CheckedAdd::checked_add(&self.total, &value.to_i128()?)?;
        Some(Self { total, _item: self._item })
    }

    fn checked_sub(&self, value: T) -> Option<Self> {
        let total = CheckedSub::checked_sub(&self.total, &value.to_i128()?)?;
        Some(Self { total, _item: self._item })
    }

    fn total(&self) -> i128 {
        self.total
    }

    fn to_f64(&self) -> f64 {
        self.total as f64
    }
}

/// Neumaier-compensated sum of float items.
///
/// Exact for values whose magnitudes differ by less than the `f64` mantissa
/// can cover twice over; beyond that the result is still only approximate.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CompensatedSum<T> {
    sum: f64,
    compensation: f64,
    _item: std::marker::PhantomData<T>,
}

impl<T> CompensatedSum<T> {
    fn step(&self, value: f64) -> Option<Self> {
        let sum = self.sum + value;
        let lost = if self.sum.abs() >= value.abs() {
            (self.sum - sum) + value
        } else {
            (value - sum) + self.sum
        };
        let compensation = self.compensation + lost;
        if !sum.is_finite() || !compensation.is_finite() {
            return None;
        }
        Some(Self {
            sum,
            compensation,
            _item: self._item,
        })
    }
}

impl<T> RunningTotal for CompensatedSum<T>
where
    T: Float + Debug + Default + Send + 'static,
{
    type Item = T;
    type Output = f64;

    fn checked_add(&self, value: T) -> Option<Self> {
        self.step(value.to_f64()?)
    }

    fn checked_sub(&self, value: T) -> Option<Self> {
        self.step(-value.to_f64()?)
    }

    fn total(&self) -> f64 {
        self.sum + self.compensation
    }

    fn to_f64(&self) -> f64 {
        self.total()
    }
}

/// A numeric item that can be held in a [`SlidingWindow`](crate::SlidingWindow).
///
/// Implemented for every primitive integer and float.
pub trait WindowValue: PartialOrd + Copy + Debug + Send + 'static {
    type Total: RunningTotal<Item = Self>;

    /// False for values a window refuses to hold (NaN and infinities).
    fn is_admissible(&self) -> bool;
}

/// Reported sum type for window items of type `T`
pub type SumOf<T> = <<T as WindowValue>::Total as RunningTotal>::Output;

macro_rules! integer_window_value {
    ($($t:ty),*) => {$(
        impl WindowValue for $t {
            type Total = WideSum<$t>;

            fn is_admissible(&self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! float_window_value {
    ($($t:ty),*) => {$(
        impl WindowValue for $t {
            type Total = CompensatedSum<$t>;

            fn is_admissible(&self) -> bool {
                self.is_finite()
            }
        }
    )*};
}

integer_window_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_window_value!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_floats_are_not_admissible() {
        assert!(!f64::NAN.is_admissible());
        assert!(!f64::INFINITY.is_admissible());
        assert!(!f32::NEG_INFINITY.is_admissible());
        assert!(1.5f64.is_admissible());
        assert!(7i32.is_admissible());
    }

    #[test]
    fn wide_sum_holds_totals_beyond_item_range() {
        let total = WideSum::<u8>::default()
            .checked_add(200)
            .and_then(|s| s.checked_add(100))
            .unwrap();
        assert_eq!(300, total.total());
        assert_eq!(100, total.checked_sub(200).unwrap().total());
    }

    #[test]
    fn wide_sum_reports_i128_overflow() {
        let total = WideSum::<i128>::default().checked_add(i128::MAX).unwrap();
        assert!(total.checked_add(1).is_none());
        assert!(WideSum::<u128>::default().checked_add(u128::MAX).is_none());
    }

    #[test]
    fn compensated_sum_survives_cancellation() {
        let total = CompensatedSum::<f64>::default()
            .checked_add(1e16)
            .and_then(|s| s.checked_add(1.0))
            .and_then(|s| s.checked_add(1.0))
            .and_then(|s| s.checked_sub(1e16))
            .unwrap();
        assert_eq!(2.0, total.total());
    }

    #[test]
    fn compensated_sum_reports_overflow() {
        let total = CompensatedSum::<f64>::default().checked_add(f64::MAX).unwrap();
        assert!(total.checked_add(f64::MAX).is_none());
    }
}

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::{One, Zero};
use std::ops::Add;

/// The capability bundle for values that can drive a stepped range.
///
/// A range value must be cheap to copy, totally orderable within its own
/// domain (`PartialOrd` — floats participate, `NaN` simply compares false
/// everywhere), closed under addition, and able to produce the constants
/// `0` (default start, step sign test) and `1` (default step).
///
/// The blanket impl makes this a pure trait alias: every primitive integer
/// and floating-point type satisfies it automatically, as does any user
/// type implementing the component traits.
///
/// # Examples
///
/// ```rust
/// # use stride::num::value::RangeNum;
///
/// fn midstep<T: RangeNum>(a: T, b: T) -> T {
///     a + b
/// }
///
/// assert_eq!(midstep(2_u8, 3_u8), 5);
/// assert_eq!(midstep(0.25_f64, 0.5_f64), 0.75);
/// ```
pub trait RangeNum: Copy + PartialOrd + Add<Output = Self> + Zero + One {}

impl<T> RangeNum for T where T: Copy + PartialOrd + Add<Output = Self> + Zero + One {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_range_num<T: RangeNum>() {}

    #[test]
    fn test_all_primitive_integers_qualify() {
        assert_range_num::<i8>();
        assert_range_num::<i16>();
        assert_range_num::<i32>();
        assert_range_num::<i64>();
        assert_range_num::<i128>();
        assert_range_num::<isize>();
        assert_range_num::<u8>();
        assert_range_num::<u16>();
        assert_range_num::<u32>();
        assert_range_num::<u64>();
        assert_range_num::<u128>();
        assert_range_num::<usize>();
    }

    #[test]
    fn test_floats_qualify() {
        assert_range_num::<f32>();
        assert_range_num::<f64>();
    }

    #[test]
    fn test_constants_behave() {
        assert_eq!(i32::zero() + i32::one(), 1);
        assert_eq!(f64::zero() + f64::one(), 1.0);
    }
}

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

//! # Stride
//!
//! A start/stop/step range description generic over integer and
//! floating-point types, integrating with Rust's native `for` loop.
//! Python's `range(start, stop, step)` for the Rust iterator ecosystem,
//! without the ceremony of a manual index variable and loop condition.
//!
//! ## Modules
//!
//! - `math`: The `SteppedRange<T>` primitive describing a lazy
//!   `[start, stop)` sequence with an arbitrary signed step, its cursor
//!   type `SteppedRangeIter<T>`, and the `range_to`/`range`/`range_step`
//!   construction functions re-exported at the crate root.
//! - `num`: The `RangeNum` capability trait bounding the value types a
//!   range can walk over, satisfied by every primitive numeric type.
//!
//! ## Semantics
//!
//! Construction performs no validation. A step whose sign disagrees with
//! the start-to-stop direction yields an empty sequence; a zero step yields
//! an unbounded sequence. Both are accepted behavior, not errors, and the
//! termination test is always an ordered comparison against the stop bound,
//! never an equality test, so a step that overshoots the bound still
//! terminates.
//!
//! ## Usage
//!
//! ```rust
//! use stride::{range, range_step, range_to};
//!
//! let squares: Vec<i32> = range_to(5).iter().map(|i| i * i).collect();
//! assert_eq!(squares, vec![0, 1, 4, 9, 16]);
//!
//! let mut sum = 0.0_f64;
//! for x in range_step(1.0, 0.0, -0.25) {
//!     sum += x;
//! }
//! assert_eq!(sum, 2.5);
//!
//! assert_eq!(range(2, 5).iter().collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```

pub mod math;
pub mod num;

pub use crate::math::range::{SteppedRange, SteppedRangeIter, range, range_step, range_to};
pub use crate::num::value::RangeNum;

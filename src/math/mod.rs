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

//! # Math Primitives
//!
//! The stepped-range primitive and its iterator. A stepped range is a lazy
//! `[start, stop)` description with an arbitrary signed step, designed to
//! integrate cleanly with Rust's range and iterator ecosystem.
//!
//! ## Submodules
//!
//! - `range`: The generic `SteppedRange<T>` type with accessors, emptiness
//!   and exact-count queries, iteration support (`Iterator`,
//!   `FusedIterator`, `IntoIterator` by value and by reference), the
//!   direction-aware continuation predicate, and conversions from
//!   `std::ops::Range`. Includes the `range_to`/`range`/`range_step`
//!   construction functions.
//!
//! ## Motivation
//!
//! Counted loops over strides other than one, or in descending direction,
//! are easy to get wrong with a hand-written index and condition. A
//! half-open bound with an ordered (never equality-based) termination test
//! is robust against off-by-one errors and against steps that overshoot
//! the bound.
//!
//! Refer to the `range` module for detailed APIs and examples.

pub mod range;

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

//! # Regina Core
//!
//! Domain-free building blocks shared by the Regina crates. Nothing in here
//! knows about chess boards; it only knows about machine words and about
//! combining partial results.
//!
//! ## Modules
//!
//! - `bits`: the `BitWord` abstraction over the unsigned primitive widths,
//!   `low_mask` for building N-bit domains, and the lowest-bit-first
//!   `SetBits` iterator used to walk candidate masks.
//! - `monoid`: the `Monoid` trait (identity plus destructive, associative
//!   combine) that every partial result in the search engine implements.
//!
//! Refer to each module for detailed APIs and examples.

pub mod bits;
pub mod monoid;

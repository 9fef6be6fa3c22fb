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

//! # Regina Model
//!
//! The data model of the N-queens search: a validated board size, the
//! bitmask search state with its per-row placement history, completed
//! solutions, and the accumulators that collect them.
//!
//! ## Modules
//!
//! - `board`: `BoardSize` (validated N) and `MaskWidth` (the narrowest word
//!   that can hold N bits).
//! - `state`: `SearchState<W>`, candidate generation and child construction.
//! - `solution`: `Solution`, one column per row, with rendering and
//!   validation helpers.
//! - `accumulator`: the `Accumulator` trait and its two implementations,
//!   `SolutionList` (materialized boards) and `SolutionCount` (count only).
//! - `error`: `ModelError` for domain bound violations.

pub mod accumulator;
pub mod board;
pub mod error;
pub mod solution;
pub mod state;

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

//! Regina-Search: fork-join backtracking for N-queens
//!
//! Exhaustive, bitmask-driven enumeration of non-attacking queen placements,
//! executed serially or as a fork-join task tree on a rayon pool.
//!
//! Core flow
//! - Build a root `regina_model::state::SearchState<W>`.
//! - Choose a `coarsening::CoarseningPolicy` (where to stop spawning).
//! - Choose a `strategy::Aggregation` (how child results reach the parent).
//! - Run `engine::SearchEngine::run` with any `Accumulator` and read the
//!   returned `partial::Partial`.
//!
//! Design highlights
//! - States are values: every child task gets its own copy, so the search
//!   path needs neither locks nor atomics.
//! - Results are monoids: solutions and statistics are combined with the
//!   same associative, identity-respecting operation at every join.
//! - The serial core doubles as the coarsened fallback near the leaves.
//!
//! Module map
//! - `coarsening`: spawn/serial decision per node.
//! - `engine`: the fork-join task wrapper.
//! - `partial`: per-branch solutions plus statistics.
//! - `result`: the outcome handed back to drivers.
//! - `serial`: the serial search core.
//! - `stats`: lightweight counters and timing.
//! - `strategy`: explicit-merge and reducer aggregation.

pub mod coarsening;
pub mod engine;
pub mod partial;
pub mod result;
pub mod serial;
pub mod stats;
pub mod strategy;

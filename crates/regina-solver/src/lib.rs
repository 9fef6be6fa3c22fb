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

//! # Regina Solver
//!
//! The driver layer of the Regina N-queens engine. It validates the board
//! size before any work starts, picks the narrowest mask width for it, runs
//! the fork-join engine on a dedicated rayon pool and hands back a
//! `SearchOutcome`.
//!
//! ## Modules
//!
//! - `solver`: `Solver` and `SolverBuilder`.
//! - `error`: `SolverError`, covering domain bound violations and worker
//!   pool construction failures.
//!
//! ## Usage
//!
//! ```rust
//! use regina_solver::solver::SolverBuilder;
//! use regina_search::strategy::Aggregation;
//!
//! let solver = SolverBuilder::new()
//!     .with_threads(2)
//!     .with_aggregation(Aggregation::Reducer)
//!     .build();
//!
//! let outcome = solver.count(8).unwrap();
//! assert_eq!(outcome.count(), 92);
//! assert_eq!(outcome.to_string(), "There are 92 solutions.");
//! ```

pub mod error;
pub mod solver;

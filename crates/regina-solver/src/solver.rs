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

//! # Pool-Backed Solver
//!
//! A high-level driver that turns a board size into a finished
//! `SearchOutcome`. It owns the run configuration (worker count, coarsening
//! cutoff and aggregation strategy) and hides the mask width selection from
//! callers.
//!
//! ## Highlights
//!
//! - Fail fast:
//!   - The board size is validated before a pool is built or a node is
//!     visited. Sizes of 0 or above 128 yield `SolverError::Model`.
//! - Width dispatch:
//!   - The narrowest of `u8`, `u16`, `u32`, `u64` and `u128` holding the
//!     board is chosen, and the engine is monomorphized for it.
//! - Dedicated pool:
//!   - Each solve builds its own `rayon::ThreadPool` and installs the engine
//!     in it, so the configured worker count never leaks into the global
//!     pool. A failed pool build yields `SolverError::ResourceExhaustion`.
//! - Builder pattern:
//!   - `SolverBuilder` to configure threads, cutoff and aggregation.
//!
//! ## Usage
//!
//! ```rust
//! use regina_solver::solver::SolverBuilder;
//!
//! let solver = SolverBuilder::new().with_threads(2).with_cutoff(3).build();
//!
//! let outcome = solver.enumerate(6).unwrap();
//! assert_eq!(outcome.count(), 4);
//! assert!(outcome.solutions().iter().all(|s| s.is_valid()));
//! ```

use crate::error::SolverError;
use regina_core::bits::BitWord;
use regina_model::{
    accumulator::{Accumulator, SolutionCount, SolutionList},
    board::{BoardSize, MaskWidth},
    state::SearchState,
};
use regina_search::{
    coarsening::{CoarseningPolicy, DepthCutoff},
    engine::SearchEngine, partial::Partial, result::SearchOutcome,
    strategy::Aggregation,
};
use tracing::{debug, info};

/// A configured N-queens solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    threads: usize,
    cutoff: Option<usize>,
    aggregation: Aggregation,
}

impl Default for Solver {
    #[inline]
    fn default() -> Self {
        SolverBuilder::new().build()
    }
}

impl Solver {
    /// Returns the configured worker count, `0` meaning the rayon default.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Returns the configured cutoff row, if one was set explicitly.
    #[inline]
    pub fn cutoff(&self) -> Option<usize> {
        self.cutoff
    }

    #[inline]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Returns the coarsening policy used for a board of `size`.
    #[inline]
    pub fn policy_for(&self, size: BoardSize) -> DepthCutoff {
        self.cutoff
            .map_or_else(|| DepthCutoff::for_board(size), DepthCutoff::new)
    }

    /// Counts the solutions of the `n`-queens problem.
    #[inline]
    pub fn count(&self, n: usize) -> Result<SearchOutcome<SolutionCount>, SolverError> {
        self.solve(n)
    }

    /// Enumerates every solution of the `n`-queens problem.
    #[inline]
    pub fn enumerate(&self, n: usize) -> Result<SearchOutcome<SolutionList>, SolverError> {
        self.solve(n)
    }

    /// Solves the `n`-queens problem, collecting completions into `A`.
    pub fn solve<A>(&self, n: usize) -> Result<SearchOutcome<A>, SolverError>
    where
        A: Accumulator,
    {
        let size = BoardSize::new(n)?;
        let width = size.width();
        let pool = self.build_pool()?;
        let engine = SearchEngine::new(self.policy_for(size), self.aggregation);

        info!(
            board = %size,
            width = %width,
            policy = engine.policy().name(),
            cutoff = %engine.policy(),
            aggregation = %self.aggregation,
            threads = pool.current_num_threads(),
            "starting search"
        );

        let start = std::time::Instant::now();
        let partial = pool.install(|| match width {
            MaskWidth::U8 => run::<u8, A>(&engine, size),
            MaskWidth::U16 => run::<u16, A>(&engine, size),
            MaskWidth::U32 => run::<u32, A>(&engine, size),
            MaskWidth::U64 => run::<u64, A>(&engine, size),
            MaskWidth::U128 => run::<u128, A>(&engine, size),
        })?;

        let (solutions, mut statistics) = partial.into_parts();
        statistics.set_total_time(start.elapsed());

        info!(
            board = %size,
            solutions = solutions.len(),
            elapsed = ?statistics.time_total,
            "search finished"
        );
        debug!(
            nodes = statistics.nodes_explored,
            tasks = statistics.tasks_spawned,
            serial_subtrees = statistics.serial_subtrees,
            "search statistics"
        );

        Ok(SearchOutcome::new(
            solutions,
            statistics,
            size,
            width,
            self.aggregation,
        ))
    }

    fn build_pool(&self) -> Result<rayon::ThreadPool, SolverError> {
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|index| format!("regina-worker-{index}"));
        if self.threads > 0 {
            builder = builder.num_threads(self.threads);
        }
        let pool = builder.build()?;
        debug!(
            requested = self.threads,
            threads = pool.current_num_threads(),
            "built worker pool"
        );
        Ok(pool)
    }
}

fn run<W, A>(engine: &SearchEngine<DepthCutoff>, size: BoardSize) -> Result<Partial<A>, SolverError>
where
    W: BitWord,
    A: Accumulator,
{
    let root = SearchState::<W>::root(size)?;
    Ok(engine.run(&root))
}

/// Builder for [`Solver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverBuilder {
    threads: usize,
    cutoff: Option<usize>,
    aggregation: Aggregation,
}

impl SolverBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            threads: 0,
            cutoff: None,
            aggregation: Aggregation::default(),
        }
    }

    /// Sets the worker count. `0` keeps the rayon default.
    #[inline]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Runs every subtree rooted at row `serial_from` or deeper serially.
    #[inline]
    pub fn with_cutoff(mut self, serial_from: usize) -> Self {
        self.cutoff = Some(serial_from);
        self
    }

    #[inline]
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            threads: self.threads,
            cutoff: self.cutoff,
            aggregation: self.aggregation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regina_model::error::ModelError;

    #[test]
    fn test_builder_defaults() {
        let solver = SolverBuilder::new().build();
        assert_eq!(solver.threads(), 0);
        assert_eq!(solver.cutoff(), None);
        assert_eq!(solver.aggregation(), Aggregation::ExplicitMerge);
        assert_eq!(solver, Solver::default());
    }

    #[test]
    fn test_policy_for_defaults_to_board_cutoff() {
        let size = BoardSize::new(8).unwrap();
        let solver = SolverBuilder::new().build();
        assert_eq!(solver.policy_for(size).serial_from(), 6);

        let solver = SolverBuilder::new().with_cutoff(2).build();
        assert_eq!(solver.policy_for(size).serial_from(), 2);
    }

    #[test]
    fn test_count_eight_queens() {
        let solver = SolverBuilder::new().with_threads(2).build();
        let outcome = solver.count(8).unwrap();
        assert_eq!(outcome.count(), 92);
        assert_eq!(outcome.width(), MaskWidth::U8);
        assert_eq!(outcome.board_size().get(), 8);
        assert_eq!(outcome.statistics().solutions_found, 92);
        assert_eq!(outcome.to_string(), "There are 92 solutions.");
    }

    #[test]
    fn test_enumerate_uses_reducer_when_configured() {
        let solver = SolverBuilder::new()
            .with_threads(2)
            .with_aggregation(Aggregation::Reducer)
            .build();
        let outcome = solver.enumerate(6).unwrap();
        assert_eq!(outcome.aggregation(), Aggregation::Reducer);
        assert_eq!(outcome.count(), 4);
        assert!(outcome.solutions().iter().all(|s| s.is_valid()));
    }

    #[test]
    fn test_unsolvable_boards_report_zero() {
        let solver = SolverBuilder::new().with_threads(1).build();
        assert_eq!(solver.count(2).unwrap().count(), 0);
        assert_eq!(solver.count(3).unwrap().count(), 0);
        assert_eq!(solver.count(3).unwrap().to_string(), "There are 0 solutions.");
    }

    #[test]
    fn test_invalid_sizes_fail_before_search() {
        let solver = SolverBuilder::new().build();

        let err = solver.count(0).unwrap_err();
        assert!(matches!(err, SolverError::Model(ModelError::ZeroSize)));

        let err = solver.enumerate(129).unwrap_err();
        assert!(matches!(
            err,
            SolverError::Model(ModelError::DomainBounds { n: 129, max: 128 })
        ));
    }

    #[test]
    fn test_error_chain_names_the_cause_once() {
        let err = SolverBuilder::new().build().count(0).unwrap_err();
        assert_eq!(err.to_string(), "invalid board");

        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("board size must be at least 1"));
    }

    #[test]
    fn test_width_follows_board_size() {
        let solver = SolverBuilder::new().with_threads(1).build();
        assert_eq!(solver.count(9).unwrap().width(), MaskWidth::U16);
        assert_eq!(solver.count(1).unwrap().width(), MaskWidth::U8);
    }
}

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

//! Fork-join search engine
//!
//! `SearchEngine` wraps the serial core in a fork-join task tree. At every
//! node it asks the coarsening policy whether to fork:
//!
//! 1. Complete states are recorded immediately.
//! 2. Below the cutoff the whole subtree goes to `serial::search_serial`.
//! 3. Otherwise the candidate mask is enumerated once into a vector of child
//!    states, one task is launched per child, and the node waits at a join
//!    barrier until all of them have finished.
//! 4. After the barrier the child results are combined into the caller's
//!    partial according to the `Aggregation` strategy.
//!
//! Child states are built from one snapshot of the parent and moved into the
//! tasks by reference to that snapshot, which no task can mutate. Each task
//! writes only to a partial it owns. No locks or atomics are involved; the
//! join barrier is the only synchronization.
//!
//! Tasks run on the current rayon pool. Drivers that want a fixed thread
//! count install the engine into a dedicated pool.

use crate::{
    coarsening::CoarseningPolicy, partial::Partial, serial::search_serial,
    strategy::Aggregation,
};
use rayon::prelude::*;
use regina_core::{bits::BitWord, monoid::Monoid};
use regina_model::{accumulator::Accumulator, state::SearchState};

/// A fork-join search engine parameterized by coarsening policy and
/// aggregation strategy.
#[derive(Debug, Clone)]
pub struct SearchEngine<P> {
    policy: P,
    aggregation: Aggregation,
}

impl<P> SearchEngine<P>
where
    P: CoarseningPolicy,
{
    /// Creates a new engine.
    #[inline]
    pub fn new(policy: P, aggregation: Aggregation) -> Self {
        Self {
            policy,
            aggregation,
        }
    }

    /// Returns the coarsening policy.
    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns the aggregation strategy.
    #[inline]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    /// Enumerates every completion of `root` and returns the collected
    /// partial.
    #[inline]
    pub fn run<W, A>(&self, root: &SearchState<W>) -> Partial<A>
    where
        W: BitWord,
        A: Accumulator,
    {
        let mut partial = Partial::identity();
        self.search(root, &mut partial);
        partial
    }

    /// Enumerates every completion of `state` into `partial`.
    ///
    /// Returns only after every task spawned for this subtree has completed
    /// and its results have been combined into `partial`.
    pub fn search<W, A>(&self, state: &SearchState<W>, partial: &mut Partial<A>)
    where
        W: BitWord,
        A: Accumulator,
    {
        if state.is_complete() {
            partial.visit(state);
            return;
        }

        if !self.policy.should_spawn(state) {
            partial.statistics_mut().on_serial_subtree();
            search_serial(state, partial);
            return;
        }

        partial.visit(state);

        let children: Vec<SearchState<W>> = state
            .candidate_bits()
            .map(|place| state.child(place))
            .collect();
        if children.is_empty() {
            return;
        }
        partial.statistics_mut().on_fork(children.len());

        match self.aggregation {
            Aggregation::ExplicitMerge => self.fork_explicit(&children, partial),
            Aggregation::Reducer => self.fork_reducer(&children, partial),
        }
    }

    /// One private partial per child, merged after the scope joins.
    fn fork_explicit<W, A>(&self, children: &[SearchState<W>], partial: &mut Partial<A>)
    where
        W: BitWord,
        A: Accumulator,
    {
        let mut branches: Vec<Partial<A>> = children.iter().map(|_| Partial::identity()).collect();

        rayon::scope(|scope| {
            for (child, branch) in children.iter().zip(branches.iter_mut()) {
                scope.spawn(move |_| self.search(child, branch));
            }
        });

        for branch in &mut branches {
            partial.combine(branch);
        }
    }

    /// Identity-seeded views folded per rayon split and reduced at joins.
    fn fork_reducer<W, A>(&self, children: &[SearchState<W>], partial: &mut Partial<A>)
    where
        W: BitWord,
        A: Accumulator,
    {
        let mut view: Partial<A> = children
            .par_iter()
            .fold(Partial::identity, |mut view, child| {
                self.search(child, &mut view);
                view
            })
            .reduce(Partial::identity, Partial::combined);

        partial.combine(&mut view);
    }
}

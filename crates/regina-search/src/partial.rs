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

use crate::stats::SearchStatistics;
use regina_core::{bits::BitWord, monoid::Monoid};
use regina_model::{accumulator::Accumulator, state::SearchState};

/// The results of one branch of the search: the solutions it found and the
/// statistics of the nodes it visited.
///
/// A `Partial` is owned by exactly one task at a time. Partials of sibling
/// branches are combined into their parent's after the join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial<A> {
    solutions: A,
    statistics: SearchStatistics,
}

impl<A> Partial<A>
where
    A: Accumulator,
{
    /// Creates an empty partial.
    #[inline]
    pub fn new() -> Self {
        Self {
            solutions: A::identity(),
            statistics: SearchStatistics::new(),
        }
    }

    /// Returns the collected solutions.
    #[inline]
    pub fn solutions(&self) -> &A {
        &self.solutions
    }

    /// Returns the collected statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the collected statistics mutably.
    #[inline]
    pub fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.statistics
    }

    /// Records a visit of `state`, and the solution if the state is complete.
    ///
    /// Returns `true` if `state` was complete.
    #[inline(always)]
    pub fn visit<W>(&mut self, state: &SearchState<W>) -> bool
    where
        W: BitWord,
    {
        self.statistics.on_node_explored();
        self.statistics.on_depth_update(state.rows_placed() as u64);
        if state.is_complete() {
            self.solutions.record(state);
            self.statistics.on_solution_found();
            return true;
        }
        false
    }

    /// Splits the partial into its solutions and statistics.
    #[inline]
    pub fn into_parts(self) -> (A, SearchStatistics) {
        (self.solutions, self.statistics)
    }
}

impl<A> Default for Partial<A>
where
    A: Accumulator,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Monoid for Partial<A>
where
    A: Accumulator,
{
    #[inline]
    fn identity() -> Self {
        Self::new()
    }

    #[inline]
    fn combine(&mut self, other: &mut Self) {
        self.solutions.combine(&mut other.solutions);
        self.statistics.combine(&mut other.statistics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regina_model::{accumulator::SolutionList, board::BoardSize};

    #[test]
    fn test_visit_records_only_complete_states() {
        let size = BoardSize::new(1).unwrap();
        let root = SearchState::<u8>::root(size).unwrap();
        let mut p = Partial::<SolutionList>::new();

        assert!(!p.visit(&root));
        assert!(p.visit(&root.child(1)));

        assert_eq!(p.solutions().len(), 1);
        assert_eq!(p.statistics().nodes_explored, 2);
        assert_eq!(p.statistics().solutions_found, 1);
        assert_eq!(p.statistics().max_depth, 1);
    }

    #[test]
    fn test_combine_merges_both_halves() {
        let size = BoardSize::new(1).unwrap();
        let done = SearchState::<u8>::root(size).unwrap().child(1);
        let mut a = Partial::<SolutionList>::new();
        let mut b = Partial::<SolutionList>::new();
        a.visit(&done);
        b.visit(&done);

        a.combine(&mut b);
        assert_eq!(a.solutions().len(), 2);
        assert_eq!(a.statistics().solutions_found, 2);
        assert_eq!(b, Partial::identity());

        let (solutions, statistics) = a.into_parts();
        assert_eq!(solutions.len(), statistics.solutions_found);
    }
}

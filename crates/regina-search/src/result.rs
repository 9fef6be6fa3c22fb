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

use crate::{stats::SearchStatistics, strategy::Aggregation};
use regina_model::{accumulator::Accumulator, board::BoardSize, board::MaskWidth};

/// The outcome of a completed search.
///
/// The search is exhaustive, so every outcome is final: there is no partial
/// or aborted variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<A> {
    solutions: A,
    statistics: SearchStatistics,
    board_size: BoardSize,
    width: MaskWidth,
    aggregation: Aggregation,
}

impl<A> SearchOutcome<A>
where
    A: Accumulator,
{
    #[inline]
    pub fn new(
        solutions: A,
        statistics: SearchStatistics,
        board_size: BoardSize,
        width: MaskWidth,
        aggregation: Aggregation,
    ) -> Self {
        Self {
            solutions,
            statistics,
            board_size,
            width,
            aggregation,
        }
    }

    /// Returns the number of solutions found.
    #[inline]
    pub fn count(&self) -> u64 {
        self.solutions.len()
    }

    /// Returns the collected solutions.
    #[inline]
    pub fn solutions(&self) -> &A {
        &self.solutions
    }

    /// Consumes the outcome and returns the collected solutions.
    #[inline]
    pub fn into_solutions(self) -> A {
        self.solutions
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the board size that was searched.
    #[inline]
    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    /// Returns the mask width the search ran with.
    #[inline]
    pub fn width(&self) -> MaskWidth {
        self.width
    }

    /// Returns the aggregation strategy the search ran with.
    #[inline]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }
}

impl<A> std::fmt::Display for SearchOutcome<A>
where
    A: Accumulator,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There are {} solutions.", self.count())
    }
}

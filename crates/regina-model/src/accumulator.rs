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

//! Accumulators for discovered solutions.
//!
//! An `Accumulator` is a monoid that can also record a completed search
//! state. The identity is the empty accumulator and `combine` moves the
//! right-hand side into the left-hand side, leaving it empty.
//!
//! - `SolutionList` keeps every board in discovery order. It is backed by a
//!   `LinkedList`, so combining two lists is an O(1) splice regardless of
//!   their lengths.
//! - `SolutionCount` only counts. Use it when the boards themselves are not
//!   needed.

use crate::{solution::Solution, state::SearchState};
use regina_core::{bits::BitWord, monoid::Monoid};
use std::collections::LinkedList;

/// A monoid that collects completed search states.
pub trait Accumulator: Monoid + Send {
    /// Records a completed state.
    fn record<W>(&mut self, state: &SearchState<W>)
    where
        W: BitWord;

    /// Returns the number of recorded solutions.
    fn len(&self) -> u64;

    /// Returns `true` if nothing has been recorded.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered list of solutions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionList {
    solutions: LinkedList<Solution>,
}

impl SolutionList {
    /// Creates an empty `SolutionList`.
    #[inline]
    pub fn new() -> Self {
        Self {
            solutions: LinkedList::new(),
        }
    }

    /// Appends a solution at the end of the list.
    #[inline]
    pub fn push(&mut self, solution: Solution) {
        self.solutions.push_back(solution);
    }

    /// Returns an iterator over the solutions in order.
    #[inline]
    pub fn iter(&self) -> std::collections::linked_list::Iter<'_, Solution> {
        self.solutions.iter()
    }

    /// Consumes the list and returns its solutions in order.
    #[inline]
    pub fn into_vec(self) -> Vec<Solution> {
        self.solutions.into_iter().collect()
    }
}

impl Monoid for SolutionList {
    #[inline]
    fn identity() -> Self {
        Self::new()
    }

    #[inline]
    fn combine(&mut self, other: &mut Self) {
        self.solutions.append(&mut other.solutions);
    }
}

impl Accumulator for SolutionList {
    #[inline]
    fn record<W>(&mut self, state: &SearchState<W>)
    where
        W: BitWord,
    {
        self.push(Solution::from_state(state));
    }

    #[inline]
    fn len(&self) -> u64 {
        self.solutions.len() as u64
    }
}

impl FromIterator<Solution> for SolutionList {
    fn from_iter<I: IntoIterator<Item = Solution>>(iter: I) -> Self {
        Self {
            solutions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SolutionList {
    type Item = Solution;
    type IntoIter = std::collections::linked_list::IntoIter<Solution>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a SolutionList {
    type Item = &'a Solution;
    type IntoIter = std::collections::linked_list::Iter<'a, Solution>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl std::fmt::Display for SolutionList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolutionList(len: {})", self.solutions.len())
    }
}

/// A solution counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolutionCount {
    count: u64,
}

impl SolutionCount {
    /// Creates a counter at zero.
    #[inline]
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Returns the current count.
    #[inline]
    pub fn get(&self) -> u64 {
        self.count
    }
}

impl Monoid for SolutionCount {
    #[inline]
    fn identity() -> Self {
        Self::new()
    }

    #[inline]
    fn combine(&mut self, other: &mut Self) {
        self.count = self.count.saturating_add(std::mem::take(&mut other.count));
    }
}

impl Accumulator for SolutionCount {
    #[inline]
    fn record<W>(&mut self, _state: &SearchState<W>)
    where
        W: BitWord,
    {
        self.count = self.count.saturating_add(1);
    }

    #[inline]
    fn len(&self) -> u64 {
        self.count
    }
}

impl std::fmt::Display for SolutionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count)
    }
}

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

//! Coarsening policies
//!
//! A `CoarseningPolicy` decides, once per node, whether the fork-join
//! wrapper spawns one task per candidate or hands the whole subtree to the
//! serial core. Near the leaves subtrees are tiny and the bookkeeping of a
//! task outweighs the work it carries.
//!
//! Policies must be monotonic in depth: once a node is serial, every node
//! below it is serial too. `DepthCutoff` satisfies this by construction
//! since it only looks at the number of rows already placed.

use regina_core::bits::BitWord;
use regina_model::{board::BoardSize, state::SearchState};

/// Decides between spawning and serial execution at a search node.
pub trait CoarseningPolicy: Sync {
    /// Returns the name of the policy.
    fn name(&self) -> &str;

    /// Returns `true` if the children of `state` should run as tasks.
    fn should_spawn<W>(&self, state: &SearchState<W>) -> bool
    where
        W: BitWord;
}

/// Spawns while fewer than `serial_from` rows are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthCutoff {
    serial_from: usize,
}

impl DepthCutoff {
    /// Creates a cutoff that turns serial once `serial_from` rows are placed.
    #[inline]
    pub fn new(serial_from: usize) -> Self {
        Self { serial_from }
    }

    /// A cutoff that never turns serial.
    #[inline]
    pub fn always_spawn() -> Self {
        Self::new(usize::MAX)
    }

    /// A cutoff that runs the whole search on the serial core.
    #[inline]
    pub fn never_spawn() -> Self {
        Self::new(0)
    }

    /// The default cutoff for a board: serial for the last two rows.
    #[inline]
    pub fn for_board(size: BoardSize) -> Self {
        Self::new(size.get().saturating_sub(2))
    }

    /// Returns the row count at which the search becomes serial.
    #[inline]
    pub fn serial_from(&self) -> usize {
        self.serial_from
    }
}

impl CoarseningPolicy for DepthCutoff {
    fn name(&self) -> &str {
        "DepthCutoff"
    }

    #[inline(always)]
    fn should_spawn<W>(&self, state: &SearchState<W>) -> bool
    where
        W: BitWord,
    {
        state.rows_placed() < self.serial_from
    }
}

impl std::fmt::Display for DepthCutoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.serial_from == usize::MAX {
            write!(f, "DepthCutoff(always spawn)")
        } else {
            write!(f, "DepthCutoff(serial from row {})", self.serial_from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize, columns: &[u8]) -> Vec<SearchState<u16>> {
        let mut state = SearchState::<u16>::root(BoardSize::new(n).unwrap()).unwrap();
        let mut states = vec![state.clone()];
        for &c in columns {
            state = state.child(1 << c);
            states.push(state.clone());
        }
        states
    }

    #[test]
    fn test_name() {
        assert_eq!(DepthCutoff::new(3).name(), "DepthCutoff");
        assert_eq!(DepthCutoff::always_spawn().name(), "DepthCutoff");
    }

    #[test]
    fn test_cutoff_switches_at_threshold() {
        let policy = DepthCutoff::new(2);
        let states = path(8, &[0, 2, 4]);
        let decisions: Vec<bool> = states.iter().map(|s| policy.should_spawn(s)).collect();
        assert_eq!(decisions, vec![true, true, false, false]);
    }

    #[test]
    fn test_cutoff_is_monotonic_along_a_path() {
        let states = path(10, &[0, 2, 5, 7, 9, 1]);
        for cutoff in 0..=10 {
            let policy = DepthCutoff::new(cutoff);
            let decisions: Vec<bool> = states.iter().map(|s| policy.should_spawn(s)).collect();
            if let Some(first_serial) = decisions.iter().position(|&d| !d) {
                assert!(
                    decisions[first_serial..].iter().all(|&d| !d),
                    "cutoff {cutoff} spawned again below a serial node: {decisions:?}"
                );
            }
        }
    }

    #[test]
    fn test_extreme_cutoffs() {
        let states = path(8, &[0, 2, 4, 6]);
        assert!(states.iter().all(|s| DepthCutoff::always_spawn().should_spawn(s)));
        assert!(states.iter().all(|s| !DepthCutoff::never_spawn().should_spawn(s)));
    }

    #[test]
    fn test_for_board_saturates_on_small_boards() {
        assert_eq!(DepthCutoff::for_board(BoardSize::new(8).unwrap()).serial_from(), 6);
        assert_eq!(DepthCutoff::for_board(BoardSize::new(1).unwrap()).serial_from(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DepthCutoff::new(6)), "DepthCutoff(serial from row 6)");
        assert_eq!(format!("{}", DepthCutoff::always_spawn()), "DepthCutoff(always spawn)");
    }
}

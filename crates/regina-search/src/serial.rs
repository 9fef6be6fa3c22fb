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

//! Serial search core
//!
//! Plain recursive enumeration: a complete state is recorded, every other
//! state recurses into each of its candidate children in lowest-bit-first
//! order. Each call places one more row, so the recursion depth is bounded
//! by `N`.
//!
//! This is both the baseline algorithm and the fallback the fork-join
//! wrapper uses below the coarsening cutoff.

use crate::partial::Partial;
use regina_core::bits::BitWord;
use regina_model::{accumulator::Accumulator, state::SearchState};

/// Enumerates every completion of `state` into `partial`.
pub fn search_serial<W, A>(state: &SearchState<W>, partial: &mut Partial<A>)
where
    W: BitWord,
    A: Accumulator,
{
    if partial.visit(state) {
        return;
    }
    for place in state.candidate_bits() {
        search_serial(&state.child(place), partial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regina_model::{
        accumulator::{SolutionCount, SolutionList},
        board::BoardSize,
    };

    const KNOWN_COUNTS: [(usize, u64); 8] = [
        (1, 1),
        (2, 0),
        (3, 0),
        (4, 2),
        (5, 10),
        (6, 4),
        (7, 40),
        (8, 92),
    ];

    fn count<W: BitWord>(n: usize) -> u64 {
        let root = SearchState::<W>::root(BoardSize::new(n).unwrap()).unwrap();
        let mut partial = Partial::<SolutionCount>::new();
        search_serial(&root, &mut partial);
        partial.solutions().get()
    }

    #[test]
    fn test_known_solution_counts() {
        for (n, expected) in KNOWN_COUNTS {
            assert_eq!(count::<u8>(n), expected, "wrong count for N={n}");
        }
    }

    #[test]
    fn test_counts_do_not_depend_on_word_width() {
        for n in 1..=8 {
            let narrow = count::<u8>(n);
            assert_eq!(count::<u16>(n), narrow);
            assert_eq!(count::<u64>(n), narrow);
            assert_eq!(count::<u128>(n), narrow);
        }
        assert_eq!(count::<u16>(10), 724);
    }

    #[test]
    fn test_enumerated_boards_are_valid_and_distinct() {
        let root = SearchState::<u8>::root(BoardSize::new(8).unwrap()).unwrap();
        let mut partial = Partial::<SolutionList>::new();
        search_serial(&root, &mut partial);

        let mut boards: Vec<_> = partial.solutions().iter().cloned().collect();
        assert_eq!(boards.len(), 92);
        assert!(boards.iter().all(|b| b.is_valid() && b.board_size() == 8));
        assert!(boards.iter().all(|b| b.terminal_mask() == 0xFF));

        boards.sort();
        boards.dedup();
        assert_eq!(boards.len(), 92, "duplicate boards enumerated");
    }

    #[test]
    fn test_four_queens_in_discovery_order() {
        let root = SearchState::<u8>::root(BoardSize::new(4).unwrap()).unwrap();
        let mut partial = Partial::<SolutionList>::new();
        search_serial(&root, &mut partial);

        let boards: Vec<Vec<u8>> = partial
            .solutions()
            .iter()
            .map(|s| s.columns().to_vec())
            .collect();
        assert_eq!(boards, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_depth_never_exceeds_board_size() {
        for n in 1..=8 {
            let root = SearchState::<u8>::root(BoardSize::new(n).unwrap()).unwrap();
            let mut partial = Partial::<SolutionCount>::new();
            search_serial(&root, &mut partial);
            assert!(partial.statistics().max_depth <= n as u64);
        }
    }

    #[test]
    fn test_eight_queens_visits_known_node_count() {
        // Root plus every consistent partial placement of 1..=8 rows.
        let root = SearchState::<u8>::root(BoardSize::new(8).unwrap()).unwrap();
        let mut partial = Partial::<SolutionCount>::new();
        search_serial(&root, &mut partial);
        assert_eq!(partial.statistics().nodes_explored, 2057);
        assert_eq!(partial.statistics().max_depth, 8);
    }
}

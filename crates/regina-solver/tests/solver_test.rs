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

use regina_model::{
    accumulator::{Accumulator, SolutionList},
    error::ModelError,
    solution::Solution,
};
use regina_search::strategy::Aggregation;
use regina_solver::{
    error::SolverError,
    solver::{Solver, SolverBuilder},
};
use rustc_hash::FxHashSet;

const KNOWN_COUNTS: [(usize, u64); 10] = [
    (1, 1),
    (2, 0),
    (3, 0),
    (4, 2),
    (5, 10),
    (6, 4),
    (7, 40),
    (8, 92),
    (9, 352),
    (10, 724),
];

fn solver(threads: usize, aggregation: Aggregation) -> Solver {
    SolverBuilder::new()
        .with_threads(threads)
        .with_aggregation(aggregation)
        .build()
}

fn board_set(list: &SolutionList) -> FxHashSet<Solution> {
    list.iter().cloned().collect()
}

#[test]
fn test_known_counts_for_both_strategies() {
    for aggregation in Aggregation::ALL {
        let solver = solver(4, aggregation);
        for (n, expected) in KNOWN_COUNTS {
            let outcome = solver.count(n).unwrap();
            assert_eq!(
                outcome.count(),
                expected,
                "called `Solver::count` with n = {} and {}",
                n,
                aggregation
            );
        }
    }
}

#[test]
fn test_enumerated_boards_are_valid_and_distinct() {
    for aggregation in Aggregation::ALL {
        let outcome = solver(4, aggregation).enumerate(8).unwrap();
        let solutions = outcome.solutions();
        assert_eq!(solutions.len(), 92);
        assert!(solutions.iter().all(Solution::is_valid));
        assert!(solutions.iter().all(|s| s.board_size() == 8));
        assert_eq!(board_set(solutions).len(), 92);
    }
}

#[test]
fn test_strategies_agree_on_the_solution_set() {
    let explicit = solver(3, Aggregation::ExplicitMerge).enumerate(9).unwrap();
    let reducer = solver(3, Aggregation::Reducer).enumerate(9).unwrap();

    assert_eq!(explicit.count(), reducer.count());
    assert_eq!(board_set(explicit.solutions()), board_set(reducer.solutions()));
}

#[test]
fn test_result_is_independent_of_cutoff() {
    let reference = solver(1, Aggregation::ExplicitMerge).enumerate(8).unwrap();
    let reference_set = board_set(reference.solutions());

    for aggregation in Aggregation::ALL {
        for cutoff in 0..=9 {
            let outcome = SolverBuilder::new()
                .with_threads(4)
                .with_cutoff(cutoff)
                .with_aggregation(aggregation)
                .build()
                .enumerate(8)
                .unwrap();
            assert_eq!(
                board_set(outcome.solutions()),
                reference_set,
                "called `Solver::enumerate` with cutoff {} and {}",
                cutoff,
                aggregation
            );
        }
    }
}

#[test]
fn test_result_is_independent_of_thread_count() {
    for threads in [1, 2, 3, 8] {
        let outcome = solver(threads, Aggregation::Reducer).count(9).unwrap();
        assert_eq!(outcome.count(), 352);
    }
}

#[test]
fn test_explicit_merge_is_deterministic() {
    let solver = SolverBuilder::new().with_threads(4).with_cutoff(4).build();
    let first = solver.enumerate(8).unwrap().into_solutions().into_vec();
    for _ in 0..3 {
        let again = solver.enumerate(8).unwrap().into_solutions().into_vec();
        assert_eq!(first, again);
    }
}

#[test]
fn test_statistics_are_consistent() {
    let outcome = SolverBuilder::new()
        .with_threads(2)
        .with_cutoff(3)
        .build()
        .count(8)
        .unwrap();
    let stats = outcome.statistics();
    assert_eq!(stats.solutions_found, 92);
    assert_eq!(stats.nodes_explored, 2057);
    assert_eq!(stats.max_depth, 8);
    assert!(stats.tasks_spawned > 0);
    assert!(stats.serial_subtrees > 0);
}

#[test]
fn test_out_of_domain_sizes_are_rejected() {
    let solver = Solver::default();

    assert!(matches!(
        solver.count(0),
        Err(SolverError::Model(ModelError::ZeroSize))
    ));
    assert!(matches!(
        solver.enumerate(129),
        Err(SolverError::Model(ModelError::DomainBounds { n: 129, .. }))
    ));

    let err = solver.count(200).unwrap_err();
    let cause = std::error::Error::source(&err)
        .map(|s| s.to_string())
        .unwrap_or_default();
    assert!(cause.contains("200"), "unexpected cause: {cause}");
    assert!(!err.to_string().contains("200"), "cause repeated in: {err}");
}

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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use regina_model::{accumulator::SolutionCount, board::BoardSize, state::SearchState};
use regina_search::{
    coarsening::DepthCutoff, engine::SearchEngine, partial::Partial, serial::search_serial,
    strategy::Aggregation,
};
use std::hint::black_box;

const BOARD_SIZE: usize = 11;

fn root() -> SearchState<u16> {
    let size = BoardSize::new(BOARD_SIZE).expect("benchmark board size is valid");
    SearchState::root(size).expect("u16 holds the benchmark board")
}

fn bench_serial(c: &mut Criterion) {
    let root = root();
    c.bench_function("serial_core", |b| {
        b.iter(|| {
            let mut partial = Partial::<SolutionCount>::new();
            search_serial(black_box(&root), &mut partial);
            partial.solutions().get()
        })
    });
}

fn bench_strategies_by_cutoff(c: &mut Criterion) {
    let root = root();
    let mut group = c.benchmark_group("fork_join");

    for aggregation in Aggregation::ALL {
        for cutoff in [1usize, 3, 5, 7, BOARD_SIZE] {
            let engine = SearchEngine::new(DepthCutoff::new(cutoff), aggregation);
            group.bench_with_input(
                BenchmarkId::new(aggregation.as_str(), cutoff),
                &cutoff,
                |b, _cutoff| {
                    b.iter(|| {
                        let partial: Partial<SolutionCount> = engine.run(black_box(&root));
                        partial.solutions().get()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_serial, bench_strategies_by_cutoff);
criterion_main!(benches);

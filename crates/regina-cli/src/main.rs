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

//! # Regina Command Line
//!
//! Counts (and optionally prints) the solutions of the N-queens problem.
//!
//! ```text
//! regina 10 --threads 4 --cutoff 5 --strategy reducer --stats
//! ```
//!
//! The count line goes to stdout, everything else (statistics, logs and
//! errors) to stderr. Any failure exits with status 1.

use anyhow::Context;
use clap::{ArgAction, Parser};
use regina_model::accumulator::Accumulator;
use regina_search::{result::SearchOutcome, strategy::Aggregation};
use regina_solver::solver::{Solver, SolverBuilder};
use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "regina")]
#[command(about = "Parallel N-queens solution counter")]
#[command(version)]
struct Args {
    /// Board size
    #[arg(default_value_t = 8)]
    n: usize,

    /// Worker threads (0 uses one per available core)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,

    /// Row from which subtrees are searched serially (defaults to N - 2)
    #[arg(short, long)]
    cutoff: Option<usize>,

    /// How partial results are combined: explicit or reducer
    #[arg(short, long, default_value_t = Aggregation::ExplicitMerge)]
    strategy: Aggregation,

    /// Print every board before the count
    #[arg(short, long)]
    boards: bool,

    /// Print search statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn solver(&self) -> Solver {
        let builder = SolverBuilder::new()
            .with_threads(self.threads)
            .with_aggregation(self.strategy);
        match self.cutoff {
            Some(cutoff) => builder.with_cutoff(cutoff).build(),
            None => builder.build(),
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

fn finish<A, O, E>(
    out: &mut O,
    diag: &mut E,
    outcome: &SearchOutcome<A>,
    args: &Args,
) -> anyhow::Result<()>
where
    A: Accumulator,
    O: Write,
    E: Write,
{
    writeln!(out, "{outcome}")?;
    out.flush().context("failed to write to stdout")?;

    if args.stats {
        writeln!(diag, "{}", outcome.statistics())?;
    }
    Ok(())
}

fn run<O, E>(args: &Args, out: &mut O, diag: &mut E) -> anyhow::Result<()>
where
    O: Write,
    E: Write,
{
    let solver = args.solver();

    if args.boards {
        let outcome = solver
            .enumerate(args.n)
            .with_context(|| format!("failed to enumerate the {}-queens solutions", args.n))?;
        for board in outcome.solutions() {
            writeln!(out, "{board}\n")?;
        }
        finish(out, diag, &outcome, args)
    } else {
        let outcome = solver
            .count(args.n)
            .with_context(|| format!("failed to count the {}-queens solutions", args.n))?;
        finish(out, diag, &outcome, args)
    }
}

/// Parses `argv`, runs the solve and returns the process exit status.
///
/// Help and version requests go to `out` with status 0. Usage errors and
/// solve failures go to `diag` with status 1.
fn execute<I, T, O, E, F>(argv: I, out: &mut O, diag: &mut E, init: F) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
    F: FnOnce(&Args),
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(err) => {
            let rendered = err.render();
            return if err.use_stderr() {
                let _ = write!(diag, "{rendered}");
                EXIT_FAILURE
            } else {
                let _ = write!(out, "{rendered}");
                let _ = out.flush();
                EXIT_SUCCESS
            };
        }
    };

    init(&args);
    debug!(?args, "parsed arguments");

    match run(&args, out, diag) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            let _ = writeln!(diag, "error: {err:#}");
            EXIT_FAILURE
        }
    }
}

fn main() -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut diag = std::io::stderr().lock();

    let status = execute(std::env::args_os(), &mut out, &mut diag, init_logging);
    ExitCode::from(status)
}

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

//! Aggregation strategies
//!
//! How the partial results of the children of a spawning node reach the
//! parent. Both strategies combine with the same `Monoid::combine`, so they
//! always produce the same final multiset of solutions.
//!
//! - `ExplicitMerge`: every child task owns a private `Partial`, created
//!   before the fork. After the join barrier the parent combines each child
//!   partial into its own, in candidate order.
//! - `Reducer`: the children run as a rayon fold/reduce. Each fold chain
//!   works on a view seeded from the identity, and views are combined at
//!   rayon's join points. The reduced view is combined into the parent once
//!   the reduction returns.

use std::str::FromStr;

/// Strategy for combining child results at a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aggregation {
    /// Private per-child accumulators, merged after the join.
    #[default]
    ExplicitMerge,
    /// Identity-seeded views combined by a parallel reduction.
    Reducer,
}

impl Aggregation {
    /// All strategies, in declaration order.
    pub const ALL: [Aggregation; 2] = [Aggregation::ExplicitMerge, Aggregation::Reducer];

    /// Returns the short name used on the command line.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregation::ExplicitMerge => "explicit",
            Aggregation::Reducer => "reducer",
        }
    }
}

impl std::fmt::Display for Aggregation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error returned when parsing an unknown aggregation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown aggregation strategy '{0}' (expected 'explicit' or 'reducer')")]
pub struct ParseAggregationError(pub String);

impl FromStr for Aggregation {
    type Err = ParseAggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explicit" | "explicit-merge" | "merge" => Ok(Aggregation::ExplicitMerge),
            "reducer" | "monoid" => Ok(Aggregation::Reducer),
            _ => Err(ParseAggregationError(s.to_owned())),
        }
    }
}

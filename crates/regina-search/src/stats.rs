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

use regina_core::monoid::Monoid;
use std::time::Duration;

/// Statistics collected during a search.
///
/// Statistics form a monoid: counters add, `max_depth` and `time_total`
/// take the maximum. Each task keeps its own copy and the copies are
/// combined at joins together with the solutions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Total nodes visited, serial and parallel.
    pub nodes_explored: u64,
    /// Total completed boards.
    pub solutions_found: u64,
    /// Total child tasks created by spawning nodes.
    pub tasks_spawned: u64,
    /// Nodes that forked into child tasks.
    pub spawning_nodes: u64,
    /// Subtrees handed to the serial core by the coarsening policy.
    pub serial_subtrees: u64,
    /// The deepest level reached (rows placed).
    pub max_depth: u64,
    /// Total wall-clock time of the search.
    pub time_total: Duration,
}

impl SearchStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    /// Records a node that forked into `count` child tasks.
    #[inline]
    pub fn on_fork(&mut self, count: usize) {
        self.spawning_nodes = self.spawning_nodes.saturating_add(1);
        self.tasks_spawned = self.tasks_spawned.saturating_add(count as u64);
    }

    #[inline]
    pub fn on_serial_subtree(&mut self) {
        self.serial_subtrees = self.serial_subtrees.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl Monoid for SearchStatistics {
    #[inline]
    fn identity() -> Self {
        Self::default()
    }

    #[inline]
    fn combine(&mut self, other: &mut Self) {
        let other = std::mem::take(other);
        self.nodes_explored = self.nodes_explored.saturating_add(other.nodes_explored);
        self.solutions_found = self.solutions_found.saturating_add(other.solutions_found);
        self.tasks_spawned = self.tasks_spawned.saturating_add(other.tasks_spawned);
        self.spawning_nodes = self.spawning_nodes.saturating_add(other.spawning_nodes);
        self.serial_subtrees = self.serial_subtrees.saturating_add(other.serial_subtrees);
        self.max_depth = self.max_depth.max(other.max_depth);
        self.time_total = self.time_total.max(other.time_total);
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Regina Search Statistics:")?;
        writeln!(f, "  Nodes explored:       {}", self.nodes_explored)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Spawning nodes:       {}", self.spawning_nodes)?;
        writeln!(f, "  Tasks spawned:        {}", self.tasks_spawned)?;
        writeln!(f, "  Serial subtrees:      {}", self.serial_subtrees)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

use crate::grid::Grid;
use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod bfs;
pub mod dfs;

pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;

/// Which traversal the solver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Queue-based breadth-first search. Finds a path with the fewest edges.
    Bfs,
    /// Stack-based depth-first search with East, South, West, North priority.
    Dfs,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bfs => write!(f, "BFS"),
            Self::Dfs => write!(f, "DFS"),
        }
    }
}

/// Everything a traversal learned about the maze.
///
/// Indexed by cell. Created fresh for each solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraversalResult {
    /// Strategy that produced this result.
    pub strategy: Strategy,
    /// Ordinal at which each cell was finalized, `None` if never finalized.
    pub visit_order: Vec<Option<usize>>,
    /// Cell each cell was first reached from. `None` for the entry and for
    /// cells the traversal never reached.
    pub predecessor: Vec<Option<usize>>,
    /// Whether the exit was reached.
    pub reached_exit: bool,
    /// Number of cells finalized, including the exit when reached.
    pub steps_taken: usize,
}

impl TraversalResult {
    pub(crate) fn new(strategy: Strategy, cell_count: usize) -> Self {
        Self {
            strategy,
            visit_order: vec![None; cell_count],
            predecessor: vec![None; cell_count],
            reached_exit: false,
            steps_taken: 0,
        }
    }

    // Records the moment `cell` is finalized.
    pub(crate) fn finalize(&mut self, cell: usize) {
        self.visit_order[cell] = Some(self.steps_taken);
        self.steps_taken += 1;
    }
}

/// A search over the open edges of a grid from its entry to its exit.
pub trait Traversal {
    /// Runs the search. Must not depend on any state left by earlier runs.
    #[must_use]
    fn traverse(&self, grid: &Grid) -> TraversalResult;
}

/// Dispatches a solve to the traversal selected by [`Strategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    /// Searches `grid` from entry to exit.
    ///
    /// Solving never changes the grid, so repeated solves with the same
    /// strategy give identical results.
    pub fn solve(grid: &Grid, strategy: Strategy) -> TraversalResult {
        let result = match strategy {
            Strategy::Bfs => BreadthFirst.traverse(grid),
            Strategy::Dfs => DepthFirst.traverse(grid),
        };
        if result.reached_exit {
            info!(
                "{} reached the exit after {} steps",
                strategy, result.steps_taken
            );
        } else {
            warn!(
                "{} could not reach the exit ({} cells explored)",
                strategy, result.steps_taken
            );
        }
        result
    }
}

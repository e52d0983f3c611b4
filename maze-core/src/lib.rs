//! Core library for perfect maze generation and solving.
//! Defines the grid storage, the randomized carving algorithm and the
//! breadth-first / depth-first traversals that recover the entry-to-exit path.

use thiserror::Error;

/// Randomized depth-first carving ("recursive backtracker").
pub mod generator;
/// Square grid of cells with east/south wall bits and neighbour geometry.
pub mod grid;
/// Walks predecessor links back from the exit to materialize a path.
pub mod path;
/// Traversal strategies and the solver entry point.
pub mod solver;

// Re-export core public items

/// Carves a perfect maze into a grid.
pub use crate::generator::Generator;
/// Compass direction used to address neighbours and walls.
pub use crate::grid::Direction;
/// The maze grid itself.
pub use crate::grid::Grid;
/// Per-cell traversal state.
pub use crate::grid::VisitState;
/// Ordered entry-to-exit cell sequence.
pub use crate::path::Path;
/// Rebuilds the path found by a traversal.
pub use crate::path::reconstruct_path;
/// Traversal output: visit order, predecessors, outcome.
pub use crate::solver::TraversalResult;
/// Solver entry point.
pub use crate::solver::Solver;
/// Choice of traversal (BFS or DFS).
pub use crate::solver::Strategy;

/// Errors raised by the maze core.
///
/// An unreachable exit is not an error: it is reported through
/// [`TraversalResult::reached_exit`] and an empty [`Path`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The requested grid shape cannot be built.
    #[error("Invalid maze dimensions: {0}")]
    InvalidDimensions(String),
    /// Explicit wall data does not match the grid's cell count.
    #[error("Wall data has {actual} entries, expected {expected}")]
    WallDataMismatch {
        /// Number of cells in the grid.
        expected: usize,
        /// Length of the supplied wall vector.
        actual: usize,
    },
    /// Following predecessor links from the exit did not lead back to the entry.
    /// Contains the cell at which the walk gave up.
    #[error("Predecessor chain broken at cell {0}")]
    BrokenPredecessorChain(usize),
    /// A predecessor link points outside the grid.
    #[error("Predecessor of cell {0} is out of range")]
    PredecessorOutOfRange(usize),
}

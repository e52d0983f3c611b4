use crate::solver::TraversalResult;
use crate::MazeError;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered cells from entry to exit, inclusive. Empty when no solution exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path(Vec<usize>);

impl Path {
    /// The cells in walking order.
    pub fn cells(&self) -> &[usize] {
        &self.0
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the exit was not reached.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges walked, one less than the cell count.
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Whether `cell` lies on the path.
    pub fn contains(&self, cell: usize) -> bool {
        self.0.contains(&cell)
    }

    /// Iterates over the cells in walking order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }
}

impl From<Path> for Vec<usize> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Rebuilds the entry-to-exit path discovered by a traversal.
///
/// Follows `predecessor` links backwards from `exit` until `entry` is reached,
/// then reverses them. Returns an empty [`Path`] when the traversal did not
/// reach the exit.
///
/// # Errors
///
/// A chain that does not arrive at `entry` within `cell_count` steps, or that
/// points outside the grid, means the traversal itself is broken and is
/// reported as [`MazeError::BrokenPredecessorChain`] or
/// [`MazeError::PredecessorOutOfRange`].
pub fn reconstruct_path(
    result: &TraversalResult,
    entry: usize,
    exit: usize,
) -> Result<Path, MazeError> {
    if !result.reached_exit {
        return Ok(Path::default());
    }

    let cell_count = result.predecessor.len();
    if exit >= cell_count {
        return Err(MazeError::PredecessorOutOfRange(exit));
    }

    let mut cells = vec![exit];
    let mut current = exit;
    while current != entry {
        if cells.len() > cell_count {
            return Err(MazeError::BrokenPredecessorChain(current));
        }
        current = match result.predecessor[current] {
            Some(parent) if parent < cell_count => parent,
            Some(_) => return Err(MazeError::PredecessorOutOfRange(current)),
            None => return Err(MazeError::BrokenPredecessorChain(current)),
        };
        cells.push(current);
    }
    cells.reverse();

    debug!(
        "{} path from {} to {} has {} cells",
        result.strategy,
        entry,
        exit,
        cells.len()
    );
    Ok(Path(cells))
}

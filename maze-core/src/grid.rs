use crate::MazeError;
use bitvec::prelude::*;
use log::{debug, warn};
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four moves available from a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Towards `cell + 1`.
    East,
    /// Towards `cell + side_length`.
    South,
    /// Towards `cell - 1`.
    West,
    /// Towards `cell - side_length`.
    North,
}

impl Direction {
    /// All directions in the fixed priority order East, South, West, North.
    pub const ALL: [Self; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// The direction pointing back the way we came.
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::North => Self::South,
        }
    }
}

/// Traversal bookkeeping for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisitState {
    /// Not yet seen by the current run.
    #[default]
    Unvisited,
    /// Discovered (queued or about to be pushed) but not finalized.
    Touched,
    /// Finalized by the current run.
    Explored,
}

// Which of the two per-cell bit vectors stores an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wall {
    East,
    South,
}

/// A square maze of `side_length * side_length` cells numbered row-major.
///
/// Every edge is stored exactly once, on the lower-indexed of its two cells,
/// as either that cell's east or south wall. A set bit means the wall is open.
/// Bits that would describe an edge leaving the grid (east of the rightmost
/// column, south of the bottom row) are never set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    side_length: usize,
    cell_count: usize,
    pub(crate) east_wall: BitVec,
    pub(crate) south_wall: BitVec,
    pub(crate) visit_state: Vec<VisitState>,
}

impl Grid {
    /// Creates an all-walled grid with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `side_length` is zero or the cell count overflows `usize`.
    pub fn new(side_length: usize) -> Self {
        assert!(side_length > 0, "Grid side length must be at least 1");
        let cell_count = side_length
            .checked_mul(side_length)
            .unwrap_or_else(|| panic!("Grid side length {side_length} overflows the cell count"));

        debug!(
            "Allocating {}x{} grid ({} cells)",
            side_length, side_length, cell_count
        );
        Self {
            side_length,
            cell_count,
            east_wall: bitvec![0; cell_count],
            south_wall: bitvec![0; cell_count],
            visit_state: vec![VisitState::Unvisited; cell_count],
        }
    }

    /// Builds a grid from explicit wall data, `true` meaning open.
    ///
    /// Bits describing edges that would leave the grid are ignored.
    pub fn from_walls(side_length: usize, east: &[bool], south: &[bool]) -> Result<Self, MazeError> {
        if side_length == 0 {
            return Err(MazeError::InvalidDimensions(
                "side length must be at least 1".to_string(),
            ));
        }
        let cell_count = side_length.checked_mul(side_length).ok_or_else(|| {
            MazeError::InvalidDimensions(format!("side length {side_length} is too large"))
        })?;
        for walls in [east, south] {
            if walls.len() != cell_count {
                return Err(MazeError::WallDataMismatch {
                    expected: cell_count,
                    actual: walls.len(),
                });
            }
        }

        let mut grid = Self::new(side_length);
        for cell in 0..cell_count {
            if east[cell] {
                grid.set_open(cell, Direction::East);
            }
            if south[cell] {
                grid.set_open(cell, Direction::South);
            }
        }
        Ok(grid)
    }

    /// Number of rows (and columns).
    pub const fn side_length(&self) -> usize {
        self.side_length
    }

    /// Total number of cells, `side_length²`.
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// The entry cell, always 0.
    pub const fn entry(&self) -> usize {
        0
    }

    /// The exit cell, always the last one.
    pub const fn exit(&self) -> usize {
        self.cell_count - 1
    }

    /// Returns the cell reached by moving one step in `direction`,
    /// or `None` if that move would leave the grid.
    pub const fn neighbor(&self, cell: usize, direction: Direction) -> Option<usize> {
        if cell >= self.cell_count {
            return None;
        }
        let n = self.side_length;
        match direction {
            Direction::East if (cell + 1) % n != 0 => Some(cell + 1),
            Direction::South if cell + n < self.cell_count => Some(cell + n),
            Direction::West if cell % n != 0 => Some(cell - 1),
            Direction::North if cell >= n => Some(cell - n),
            _ => None,
        }
    }

    /// Whether the wall between `cell` and its neighbour in `direction` is open.
    /// Always `false` for moves that leave the grid.
    pub fn is_open(&self, cell: usize, direction: Direction) -> bool {
        match self.edge_slot(cell, direction) {
            Some((Wall::East, owner)) => self.east_wall[owner],
            Some((Wall::South, owner)) => self.south_wall[owner],
            None => false,
        }
    }

    /// Opens the wall between `cell` and its neighbour in `direction`.
    pub fn set_open(&mut self, cell: usize, direction: Direction) {
        self.set_wall(cell, direction, true);
    }

    /// Closes every wall, returning the grid to its freshly allocated layout.
    pub fn close_all(&mut self) {
        self.east_wall.fill(false);
        self.south_wall.fill(false);
    }

    /// Knocks down each in-bounds wall with probability 1/2.
    ///
    /// The result is generally not a perfect maze: it may contain cycles and
    /// regions cut off from the entry.
    pub fn randomise<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in 0..self.cell_count {
            for direction in [Direction::East, Direction::South] {
                if self.neighbor(cell, direction).is_some() {
                    let open = rng.gen_bool(0.5);
                    self.set_wall(cell, direction, open);
                }
            }
        }
        debug!(
            "Randomised walls: {} open edges in {} cells",
            self.open_edge_count(),
            self.cell_count
        );
    }

    /// Walls off the exit from its west and north neighbours so no path can
    /// reach it. Used to exercise the unreachable outcome.
    pub fn render_unsolvable(&mut self) {
        if self.cell_count < 2 {
            warn!("A 1x1 grid cannot be made unsolvable: entry and exit coincide");
            return;
        }
        let exit = self.exit();
        self.set_wall(exit, Direction::West, false);
        self.set_wall(exit, Direction::North, false);
    }

    /// Number of open edges inside the grid.
    pub fn open_edge_count(&self) -> usize {
        (0..self.cell_count)
            .map(|cell| {
                usize::from(self.is_open(cell, Direction::East))
                    + usize::from(self.is_open(cell, Direction::South))
            })
            .sum()
    }

    /// Visit state left behind by the last generator run.
    pub fn visit_state(&self, cell: usize) -> Option<VisitState> {
        self.visit_state.get(cell).copied()
    }

    pub(crate) fn reset_visits(&mut self) {
        self.visit_state.fill(VisitState::Unvisited);
    }

    fn set_wall(&mut self, cell: usize, direction: Direction, open: bool) {
        match self.edge_slot(cell, direction) {
            Some((Wall::East, owner)) => self.east_wall.set(owner, open),
            Some((Wall::South, owner)) => self.south_wall.set(owner, open),
            None => warn!(
                "Ignoring wall update for cell {} towards {:?}: edge leaves the grid",
                cell, direction
            ),
        }
    }

    // Maps an edge to the cell and bit vector that store it.
    fn edge_slot(&self, cell: usize, direction: Direction) -> Option<(Wall, usize)> {
        let neighbor = self.neighbor(cell, direction)?;
        match direction {
            Direction::East => Some((Wall::East, cell)),
            Direction::South => Some((Wall::South, cell)),
            Direction::West | Direction::North => self.edge_slot(neighbor, direction.opposite()),
        }
    }
}

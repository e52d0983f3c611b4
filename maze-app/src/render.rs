//! Text rendering of a maze with one label character per cell.

use colored::Colorize;
use maze_core::{Direction, Grid, Path, TraversalResult};

/// Label drawn on cells that lie on the solution path.
pub const PATH_MARKER: char = '#';

/// Draws a grid as ASCII boxes.
///
/// The entry gap is cut into the top edge above cell 0 and the exit gap into
/// the bottom edge below the last cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    /// Creates a renderer. `color` paints path markers green.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Renders the walls with no labels.
    pub fn plain(&self, grid: &Grid) -> String {
        self.render(grid, &vec![' '; grid.cell_count()])
    }

    /// Renders the walls with the last digit of each cell's visit order.
    pub fn visit_order(&self, grid: &Grid, result: &TraversalResult) -> String {
        self.render(grid, &order_labels(result))
    }

    /// Renders the walls with the path cells marked.
    pub fn solution(&self, grid: &Grid, path: &Path) -> String {
        self.render(grid, &path_labels(grid.cell_count(), path))
    }

    /// Renders the walls with an arbitrary label per cell.
    /// Missing labels are drawn blank.
    pub fn render(&self, grid: &Grid, labels: &[char]) -> String {
        let side = grid.side_length();
        let mut output = String::with_capacity(grid.cell_count() * 10);
        let label = |cell: usize| self.label(labels.get(cell).copied().unwrap_or(' '));

        // Top edge, open above the entry
        output.push_str("+   ");
        for _ in 1..side {
            output.push_str("+---");
        }
        output.push_str("+\n");

        for row in 0..side {
            output.push('|');
            for col in 0..side {
                let cell = row * side + col;
                output.push(' ');
                output.push_str(&label(cell));
                output.push(' ');
                if col + 1 == side {
                    output.push_str("|\n");
                } else if grid.is_open(cell, Direction::East) {
                    output.push(' ');
                } else {
                    output.push('|');
                }
            }

            if row + 1 == side {
                break;
            }

            output.push('+');
            for col in 0..side {
                if grid.is_open(row * side + col, Direction::South) {
                    output.push_str("   +");
                } else {
                    output.push_str("---+");
                }
            }
            output.push('\n');
        }

        // Bottom edge, open below the exit
        for _ in 1..side {
            output.push_str("+---");
        }
        output.push_str("+   +\n");
        output
    }

    fn label(&self, c: char) -> String {
        if self.color && c == PATH_MARKER {
            c.to_string().green().bold().to_string()
        } else {
            c.to_string()
        }
    }
}

/// One digit per finalized cell (`order % 10`), blank elsewhere.
pub fn order_labels(result: &TraversalResult) -> Vec<char> {
    result
        .visit_order
        .iter()
        .map(|order| {
            order
                .and_then(|k| char::from_digit((k % 10) as u32, 10))
                .unwrap_or(' ')
        })
        .collect()
}

/// [`PATH_MARKER`] on every path cell, blank elsewhere.
pub fn path_labels(cell_count: usize, path: &Path) -> Vec<char> {
    let mut labels = vec![' '; cell_count];
    for &cell in path {
        if let Some(slot) = labels.get_mut(cell) {
            *slot = PATH_MARKER;
        }
    }
    labels
}

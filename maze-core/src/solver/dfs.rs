use super::{Strategy, Traversal, TraversalResult};
use crate::grid::{Direction, Grid, VisitState};
use log::{debug, trace};

/// Stack-based depth-first search.
///
/// From the cell on top of the stack it always takes the first open,
/// unvisited neighbour in East, South, West, North order, and pops when none
/// is left. The result is fully determined by the maze.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl DepthFirst {
    fn next_step(grid: &Grid, state: &[VisitState], current: usize) -> Option<usize> {
        Direction::ALL.iter().find_map(|&direction| {
            grid.neighbor(current, direction).filter(|&next| {
                state[next] == VisitState::Unvisited && grid.is_open(current, direction)
            })
        })
    }
}

impl Traversal for DepthFirst {
    fn traverse(&self, grid: &Grid) -> TraversalResult {
        let cell_count = grid.cell_count();
        let exit = grid.exit();
        let mut result = TraversalResult::new(Strategy::Dfs, cell_count);
        let mut state = vec![VisitState::Unvisited; cell_count];
        let mut stack = Vec::with_capacity(cell_count);

        let entry = grid.entry();
        state[entry] = VisitState::Explored;
        result.finalize(entry);
        stack.push(entry);

        while let Some(&current) = stack.last() {
            if current == exit {
                result.reached_exit = true;
                break;
            }

            match Self::next_step(grid, &state, current) {
                Some(next) => {
                    // Discovery and finalization coincide for a depth-first step.
                    result.predecessor[next] = Some(current);
                    state[next] = VisitState::Explored;
                    result.finalize(next);
                    stack.push(next);
                }
                None => {
                    trace!("DFS dead end at {}, backtracking", current);
                    stack.pop();
                }
            }
        }

        if !result.reached_exit {
            debug!("DFS stack emptied before reaching cell {}", exit);
        }
        result
    }
}

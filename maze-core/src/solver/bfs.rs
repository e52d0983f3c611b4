use super::{Strategy, Traversal, TraversalResult};
use crate::grid::{Direction, Grid, VisitState};
use log::{debug, error};
use std::collections::VecDeque;

/// Queue-based breadth-first search.
///
/// Cells are finalized in order of their edge distance from the entry, so
/// the predecessor links describe a shortest path to every finalized cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Traversal for BreadthFirst {
    fn traverse(&self, grid: &Grid) -> TraversalResult {
        let cell_count = grid.cell_count();
        let exit = grid.exit();
        let mut result = TraversalResult::new(Strategy::Bfs, cell_count);
        let mut state = vec![VisitState::Unvisited; cell_count];
        let mut queue = VecDeque::with_capacity(cell_count);

        let entry = grid.entry();
        state[entry] = VisitState::Touched;
        queue.push_back(entry);

        while let Some(current) = queue.pop_front() {
            if result.steps_taken >= cell_count {
                error!(
                    "BFS finalized more cells than the grid holds ({}), aborting",
                    cell_count
                );
                break;
            }

            result.finalize(current);
            state[current] = VisitState::Explored;
            if current == exit {
                result.reached_exit = true;
                break;
            }

            for direction in Direction::ALL {
                let Some(next) = grid.neighbor(current, direction) else {
                    continue;
                };
                if state[next] == VisitState::Unvisited && grid.is_open(current, direction) {
                    state[next] = VisitState::Touched;
                    result.predecessor[next] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        if !result.reached_exit {
            debug!("BFS queue drained before reaching cell {}", exit);
        }
        result
    }
}

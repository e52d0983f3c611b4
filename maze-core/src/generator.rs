use crate::grid::{Direction, Grid, VisitState};
use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

/// Randomized depth-first maze carver.
///
/// Starting from the entry, it repeatedly steps into a random unvisited
/// neighbour, opening the wall between the two, and backtracks along an
/// explicit stack whenever the current cell has no unvisited neighbours.
/// Only edges of the depth-first tree are opened, so the result is a spanning
/// tree of the grid: every cell is reachable and there are no cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    /// Carves a perfect maze into `grid`.
    ///
    /// All walls are closed first, so any previous layout is discarded.
    /// The output depends only on the grid size and the sequence drawn from `rng`.
    pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
        let start_time = Instant::now();
        let cell_count = grid.cell_count();
        info!("Carving {0}x{0} maze...", grid.side_length());

        grid.close_all();
        grid.reset_visits();

        let entry = grid.entry();
        let mut stack = Vec::with_capacity(cell_count);
        stack.push(entry);
        grid.visit_state[entry] = VisitState::Explored;
        let mut visited_count = 1;
        let mut backtracks = 0usize;
        let mut candidates: Vec<(Direction, usize)> = Vec::with_capacity(4);

        // The stack only drains once every cell has been visited.
        while visited_count < cell_count {
            let Some(&current) = stack.last() else {
                break;
            };

            candidates.clear();
            candidates.extend(Direction::ALL.iter().filter_map(|&direction| {
                grid.neighbor(current, direction)
                    .filter(|&next| grid.visit_state[next] == VisitState::Unvisited)
                    .map(|next| (direction, next))
            }));

            match candidates.choose(rng) {
                Some(&(direction, next)) => {
                    trace!("Carving {:?} from {} into {}", direction, current, next);
                    grid.set_open(current, direction);
                    grid.visit_state[next] = VisitState::Explored;
                    stack.push(next);
                    visited_count += 1;
                }
                None => {
                    trace!("Dead end at {}, backtracking", current);
                    stack.pop();
                    backtracks += 1;
                }
            }
        }

        debug!(
            "Carved {} edges with {} backtracks",
            grid.open_edge_count(),
            backtracks
        );
        info!("Maze carved in {:?}", start_time.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_carve_marks_every_cell_explored() {
        let mut grid = Grid::new(6);
        let mut rng = StdRng::seed_from_u64(7);
        Generator::carve(&mut grid, &mut rng);
        assert!(grid
            .visit_state
            .iter()
            .all(|&state| state == VisitState::Explored));
    }

    #[test]
    fn test_single_cell_carves_nothing() {
        let mut grid = Grid::new(1);
        let mut rng = StdRng::seed_from_u64(0);
        Generator::carve(&mut grid, &mut rng);
        assert_eq!(grid.open_edge_count(), 0);
        assert_eq!(grid.visit_state(0), Some(VisitState::Explored));
    }

    #[test]
    fn test_carve_discards_previous_layout() {
        let mut grid = Grid::new(5);
        let mut rng = StdRng::seed_from_u64(3);
        grid.randomise(&mut rng);
        Generator::carve(&mut grid, &mut rng);
        assert_eq!(grid.open_edge_count(), grid.cell_count() - 1);
    }
}

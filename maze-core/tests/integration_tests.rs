// maze-core/tests/integration_tests.rs
use maze_core::{reconstruct_path, Direction, Generator, Grid, Solver, Strategy};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

// Helper to carve a maze with a fixed seed
fn carved_grid(side_length: usize, seed: u64) -> Grid {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut grid = Grid::new(side_length);
    let mut rng = StdRng::seed_from_u64(seed);
    Generator::carve(&mut grid, &mut rng);
    grid
}

// Flood fill over open edges, returning edge distances from `start`
fn distances_from(grid: &Grid, start: usize) -> Vec<Option<usize>> {
    let mut distance = vec![None; grid.cell_count()];
    let mut queue = VecDeque::from([start]);
    distance[start] = Some(0);
    while let Some(cell) = queue.pop_front() {
        let here = distance[cell].unwrap();
        for direction in Direction::ALL {
            if let Some(next) = grid.neighbor(cell, direction) {
                if grid.is_open(cell, direction) && distance[next].is_none() {
                    distance[next] = Some(here + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    distance
}

// Checks that consecutive path cells are joined by open walls
fn is_walkable(grid: &Grid, cells: &[usize]) -> bool {
    cells.windows(2).all(|pair| {
        Direction::ALL.iter().any(|&direction| {
            grid.neighbor(pair[0], direction) == Some(pair[1]) && grid.is_open(pair[0], direction)
        })
    })
}

#[test]
fn test_single_cell_maze() {
    let grid = carved_grid(1, 42);
    assert_eq!(grid.cell_count(), 1);
    assert_eq!(grid.open_edge_count(), 0);

    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let result = Solver::solve(&grid, strategy);
        assert!(result.reached_exit);
        let path = reconstruct_path(&result, grid.entry(), grid.exit()).unwrap();
        assert_eq!(path.cells(), &[0]);
    }
}

#[test]
fn test_fully_open_two_by_two() {
    let east = [true, false, false, false];
    let south = [true, true, false, false];
    let grid = Grid::from_walls(2, &east, &south).unwrap();

    let result = Solver::solve(&grid, Strategy::Bfs);
    assert!(result.reached_exit);
    assert!(matches!(result.predecessor[3], Some(1) | Some(2)));

    let path = reconstruct_path(&result, 0, 3).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.cells()[0], 0);
    assert!(matches!(path.cells()[1], 1 | 2));
    assert_eq!(path.cells()[2], 3);
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let first = carved_grid(5, 2024);
    let second = carved_grid(5, 2024);
    assert_eq!(first, second);

    // Every seed carves the same number of tree edges
    let other = carved_grid(5, 2025);
    assert_eq!(other.open_edge_count(), first.open_edge_count());
}

#[test]
fn test_unsolvable_maze_reports_no_path() {
    let mut grid = carved_grid(10, 99);
    grid.render_unsolvable();

    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let result = Solver::solve(&grid, strategy);
        assert!(!result.reached_exit, "{strategy} should not reach the exit");
        assert_eq!(result.visit_order[grid.exit()], None);
        let path = reconstruct_path(&result, grid.entry(), grid.exit()).unwrap();
        assert!(path.is_empty());
    }
}

#[test]
fn test_solving_twice_is_identical() {
    let grid = carved_grid(8, 1);
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let first = Solver::solve(&grid, strategy);
        let second = Solver::solve(&grid, strategy);
        assert_eq!(first.visit_order, second.visit_order);
        assert_eq!(first.predecessor, second.predecessor);
        assert_eq!(
            reconstruct_path(&first, 0, grid.exit()).unwrap(),
            reconstruct_path(&second, 0, grid.exit()).unwrap()
        );
    }
}

#[test]
fn test_visit_order_is_a_prefix_permutation() {
    let grid = carved_grid(7, 17);
    for strategy in [Strategy::Bfs, Strategy::Dfs] {
        let result = Solver::solve(&grid, strategy);
        let mut orders: Vec<usize> = result.visit_order.iter().flatten().copied().collect();
        orders.sort_unstable();
        assert_eq!(orders, (0..result.steps_taken).collect::<Vec<_>>());
        assert_eq!(result.visit_order[grid.exit()], Some(result.steps_taken - 1));
    }
}

proptest! {
    #[test]
    fn prop_carve_produces_spanning_tree(side_length in 1usize..16, seed in any::<u64>()) {
        let grid = carved_grid(side_length, seed);
        prop_assert_eq!(grid.open_edge_count(), grid.cell_count() - 1);
        let distance = distances_from(&grid, grid.entry());
        prop_assert!(distance.iter().all(Option::is_some));
    }

    #[test]
    fn prop_both_strategies_find_the_tree_path(side_length in 1usize..16, seed in any::<u64>()) {
        let grid = carved_grid(side_length, seed);
        let tree_distance = distances_from(&grid, grid.entry())[grid.exit()].unwrap();

        let bfs = Solver::solve(&grid, Strategy::Bfs);
        let dfs = Solver::solve(&grid, Strategy::Dfs);
        prop_assert!(bfs.reached_exit);
        prop_assert!(dfs.reached_exit);

        let bfs_path = reconstruct_path(&bfs, grid.entry(), grid.exit()).unwrap();
        let dfs_path = reconstruct_path(&dfs, grid.entry(), grid.exit()).unwrap();
        prop_assert_eq!(bfs_path.edge_count(), tree_distance);
        prop_assert!(dfs_path.edge_count() >= tree_distance);
        prop_assert!(is_walkable(&grid, bfs_path.cells()));
        prop_assert!(is_walkable(&grid, dfs_path.cells()));
    }

    #[test]
    fn prop_bfs_is_shortest_on_random_walls(side_length in 2usize..12, seed in any::<u64>()) {
        let mut grid = Grid::new(side_length);
        let mut rng = StdRng::seed_from_u64(seed);
        grid.randomise(&mut rng);
        let distance = distances_from(&grid, grid.entry())[grid.exit()];

        let bfs = Solver::solve(&grid, Strategy::Bfs);
        let dfs = Solver::solve(&grid, Strategy::Dfs);
        prop_assert_eq!(bfs.reached_exit, distance.is_some());
        prop_assert_eq!(dfs.reached_exit, distance.is_some());

        let bfs_path = reconstruct_path(&bfs, grid.entry(), grid.exit()).unwrap();
        let dfs_path = reconstruct_path(&dfs, grid.entry(), grid.exit()).unwrap();
        if let Some(shortest) = distance {
            prop_assert_eq!(bfs_path.edge_count(), shortest);
            prop_assert!(dfs_path.edge_count() >= shortest);
            prop_assert!(is_walkable(&grid, dfs_path.cells()));
        } else {
            prop_assert!(bfs_path.is_empty());
            prop_assert!(dfs_path.is_empty());
        }
    }
}

use maze_core::{Direction, Grid, MazeError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_grid_new() {
    let grid = Grid::new(4);
    assert_eq!(grid.side_length(), 4);
    assert_eq!(grid.cell_count(), 16);
    assert_eq!(grid.entry(), 0);
    assert_eq!(grid.exit(), 15);
    // Freshly allocated grids are fully walled
    assert_eq!(grid.open_edge_count(), 0);
}

#[test]
#[should_panic(expected = "at least 1")]
fn test_grid_new_zero_side_panics() {
    let _ = Grid::new(0);
}

#[test]
fn test_neighbor_interior() {
    let grid = Grid::new(3);
    assert_eq!(grid.neighbor(4, Direction::East), Some(5));
    assert_eq!(grid.neighbor(4, Direction::South), Some(7));
    assert_eq!(grid.neighbor(4, Direction::West), Some(3));
    assert_eq!(grid.neighbor(4, Direction::North), Some(1));
}

#[test]
fn test_neighbor_boundaries() {
    let grid = Grid::new(3);
    // Rightmost column
    assert_eq!(grid.neighbor(2, Direction::East), None);
    assert_eq!(grid.neighbor(5, Direction::East), None);
    // Bottom row
    assert_eq!(grid.neighbor(7, Direction::South), None);
    // Leftmost column
    assert_eq!(grid.neighbor(3, Direction::West), None);
    // Top row
    assert_eq!(grid.neighbor(1, Direction::North), None);
    // Off the grid entirely
    assert_eq!(grid.neighbor(9, Direction::West), None);
}

#[test]
fn test_single_cell_has_no_neighbors() {
    let grid = Grid::new(1);
    for direction in Direction::ALL {
        assert_eq!(grid.neighbor(0, direction), None);
        assert!(!grid.is_open(0, direction));
    }
}

#[test]
fn test_set_open_is_visible_from_both_sides() {
    let mut grid = Grid::new(3);
    grid.set_open(4, Direction::West);
    assert!(grid.is_open(4, Direction::West));
    assert!(grid.is_open(3, Direction::East));

    grid.set_open(4, Direction::North);
    assert!(grid.is_open(1, Direction::South));
    assert!(!grid.is_open(4, Direction::South));
    assert_eq!(grid.open_edge_count(), 2);
}

#[test]
fn test_from_walls_ignores_boundary_bits() {
    // east_wall[1] and east_wall[3] sit on the rightmost column, south_wall[2..] on the bottom row
    let east = [true, true, false, true];
    let south = [true, true, true, true];
    let grid = Grid::from_walls(2, &east, &south).unwrap();
    assert_eq!(grid.open_edge_count(), 3);
    assert!(!grid.is_open(1, Direction::East));
    assert!(!grid.is_open(2, Direction::South));
}

#[test]
fn test_from_walls_rejects_bad_input() {
    assert!(matches!(
        Grid::from_walls(0, &[], &[]),
        Err(MazeError::InvalidDimensions(_))
    ));
    assert_eq!(
        Grid::from_walls(2, &[false; 3], &[false; 4]),
        Err(MazeError::WallDataMismatch {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn test_close_all() {
    let mut grid = Grid::new(4);
    let mut rng = StdRng::seed_from_u64(11);
    grid.randomise(&mut rng);
    grid.close_all();
    assert_eq!(grid, Grid::new(4));
}

#[test]
fn test_randomise_stays_inside_grid() {
    let mut grid = Grid::new(6);
    let mut rng = StdRng::seed_from_u64(5);
    grid.randomise(&mut rng);
    let max_edges = 2 * 6 * 5;
    assert!(grid.open_edge_count() <= max_edges);
    for cell in (5..36).step_by(6) {
        assert!(!grid.is_open(cell, Direction::East));
    }
    for cell in 30..36 {
        assert!(!grid.is_open(cell, Direction::South));
    }
}

#[test]
fn test_render_unsolvable_closes_exit() {
    let east = [true, true, true, true];
    let south = [true, true, true, true];
    let mut grid = Grid::from_walls(2, &east, &south).unwrap();
    grid.render_unsolvable();
    assert!(!grid.is_open(3, Direction::West));
    assert!(!grid.is_open(3, Direction::North));
    // Other edges are untouched
    assert!(grid.is_open(0, Direction::East));
    assert!(grid.is_open(0, Direction::South));
}

#[test]
fn test_render_unsolvable_single_cell_is_noop() {
    let mut grid = Grid::new(1);
    grid.render_unsolvable();
    assert_eq!(grid, Grid::new(1));
}

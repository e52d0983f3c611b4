//! Handles the core execution logic for standard and benchmark modes.

use crate::{
    benchmark,
    config::{GeneratorKind, Settings},
    error::AppError,
    render::TextRenderer,
};
use log::{info, warn};
use maze_core::{reconstruct_path, Generator, Grid, Solver, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

/// What one strategy achieved on the run's maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Strategy that was run.
    pub strategy: Strategy,
    /// Whether the exit was reached.
    pub reached_exit: bool,
    /// Cells finalized, printed as moves.
    pub steps_taken: usize,
    /// Cells on the reconstructed path, 0 when unsolved.
    pub path_length: usize,
}

/// Summary of a standard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Side length of the maze.
    pub side_length: usize,
    /// Seed the maze was carved with.
    pub seed: u64,
    /// Open edges after carving and any unsolvable step.
    pub open_edges: usize,
    /// One entry per strategy, in the order they ran.
    pub outcomes: Vec<SolveOutcome>,
}

/// Builds the maze the settings ask for.
pub fn build_maze(settings: &Settings, side_length: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(side_length);
    match settings.generator {
        GeneratorKind::Backtracker => Generator::carve(&mut grid, &mut rng),
        GeneratorKind::Random => {
            info!("Knocking down walls at random; the result may not be a perfect maze");
            grid.randomise(&mut rng);
        }
    }
    grid
}

/// Carves, renders and solves a single maze, writing the drawings to `out`.
pub fn run_standard_mode<W: Write>(
    settings: &Settings,
    side_length: usize,
    seed: u64,
    out: &mut W,
) -> Result<RunReport, AppError> {
    let renderer = TextRenderer::new(settings.color);

    if settings.show_plain {
        writeln!(out, "Plain grid.")?;
        writeln!(out, "{}", renderer.plain(&Grid::new(side_length)))?;
    }

    let mut grid = build_maze(settings, side_length, seed);
    writeln!(out, "Maze generated.")?;
    writeln!(out, "{}", renderer.plain(&grid))?;

    if settings.unsolvable {
        writeln!(out, "Making maze unsolvable.")?;
        grid.render_unsolvable();
    }

    let mut outcomes = Vec::new();
    for strategy in settings.solve_mode.strategies() {
        writeln!(out, "Solving using {}.", strategy)?;
        let result = Solver::solve(&grid, strategy);
        writeln!(out, "{}", renderer.visit_order(&grid, &result))?;

        let path = reconstruct_path(&result, grid.entry(), grid.exit())?;
        if result.reached_exit {
            writeln!(out, "{}", renderer.solution(&grid, &path))?;
        } else {
            writeln!(out, "Couldn't find a solution.\n")?;
        }

        outcomes.push(SolveOutcome {
            strategy,
            reached_exit: result.reached_exit,
            steps_taken: result.steps_taken,
            path_length: path.len(),
        });
    }

    for outcome in &outcomes {
        if outcome.reached_exit {
            writeln!(out, "{} moves: {}", outcome.strategy, outcome.steps_taken)?;
        } else {
            writeln!(out, "{} moves: no solution", outcome.strategy)?;
        }
    }
    out.flush()?;

    Ok(RunReport {
        side_length,
        seed,
        open_edges: grid.open_edge_count(),
        outcomes,
    })
}

/// Generates `runs` mazes in parallel and reports the averages.
pub fn run_benchmark_mode(
    settings: &Settings,
    runs: usize,
    side_length: usize,
    seed: u64,
) -> Result<benchmark::BenchmarkSummary, AppError> {
    if runs == 0 {
        warn!("Benchmark runs is 0, no benchmarks will be executed.");
    }

    let results = benchmark::run_benchmarks(
        runs,
        side_length,
        seed,
        settings.generator,
        settings.unsolvable,
    )?;
    let summary = benchmark::summarize(&results);
    benchmark::report_summary(&summary);

    if let Some(csv_path) = &settings.benchmark_csv_output {
        info!("Writing benchmark results to {:?}", csv_path);
        benchmark::write_results_to_csv(&results, csv_path)?;
    }
    Ok(summary)
}

//! Batch generation and solving for comparing the two traversal strategies.

use crate::config::GeneratorKind;
use crate::error::AppError;
use maze_core::{reconstruct_path, Generator, Grid, Solver, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

/// Outcome of carving and solving a single maze.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BenchmarkResult {
    /// Index of the run within the batch.
    pub run: usize,
    /// Seed used for this run's generator.
    pub seed: u64,
    /// Side length of the maze.
    pub side_length: usize,
    /// Cells finalized by the breadth-first solver.
    pub bfs_steps: usize,
    /// Cells finalized by the depth-first solver.
    pub dfs_steps: usize,
    /// Whether breadth-first search reached the exit.
    pub bfs_reached_exit: bool,
    /// Whether depth-first search reached the exit.
    pub dfs_reached_exit: bool,
    /// Cells on the breadth-first path, 0 when unsolved.
    pub path_length: usize,
    /// Wall-clock time spent carving.
    pub carve_time_ms: f64,
    /// Wall-clock time spent running both solvers.
    pub solve_time_ms: f64,
}

/// Aggregate over a batch of runs.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSummary {
    /// Runs in the batch.
    pub runs: usize,
    /// Runs whose exit was reachable.
    pub solved_runs: usize,
    /// Mean breadth-first steps over solved runs.
    pub mean_bfs_steps: Option<f64>,
    /// Mean depth-first steps over solved runs.
    pub mean_dfs_steps: Option<f64>,
    /// Mean path length over solved runs.
    pub mean_path_length: Option<f64>,
    /// Median carve time over all runs.
    pub median_carve_time_ms: Option<f64>,
    /// Median solve time over all runs.
    pub median_solve_time_ms: Option<f64>,
}

/// Carves and solves one maze with its own seeded generator.
pub fn run_single_benchmark(
    run: usize,
    side_length: usize,
    seed: u64,
    generator: GeneratorKind,
    unsolvable: bool,
) -> Result<BenchmarkResult, AppError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(side_length);

    let carve_start = Instant::now();
    match generator {
        GeneratorKind::Backtracker => Generator::carve(&mut grid, &mut rng),
        GeneratorKind::Random => grid.randomise(&mut rng),
    }
    let carve_time_ms = carve_start.elapsed().as_secs_f64() * 1000.0;
    if unsolvable {
        grid.render_unsolvable();
    }

    let solve_start = Instant::now();
    let bfs = Solver::solve(&grid, Strategy::Bfs);
    let dfs = Solver::solve(&grid, Strategy::Dfs);
    let solve_time_ms = solve_start.elapsed().as_secs_f64() * 1000.0;
    let path = reconstruct_path(&bfs, grid.entry(), grid.exit())?;

    Ok(BenchmarkResult {
        run,
        seed,
        side_length,
        bfs_steps: bfs.steps_taken,
        dfs_steps: dfs.steps_taken,
        bfs_reached_exit: bfs.reached_exit,
        dfs_reached_exit: dfs.reached_exit,
        path_length: path.len(),
        carve_time_ms,
        solve_time_ms,
    })
}

/// Runs `runs` independent mazes in parallel. Run `i` uses seed `base_seed + i`.
pub fn run_benchmarks(
    runs: usize,
    side_length: usize,
    base_seed: u64,
    generator: GeneratorKind,
    unsolvable: bool,
) -> Result<Vec<BenchmarkResult>, AppError> {
    log::info!(
        "Benchmarking {} runs of {}x{} mazes (base seed {})",
        runs,
        side_length,
        side_length,
        base_seed
    );
    let mut results = (0..runs)
        .into_par_iter()
        .map(|run| {
            let seed = base_seed.wrapping_add(run as u64);
            run_single_benchmark(run, side_length, seed, generator, unsolvable)
        })
        .collect::<Result<Vec<_>, _>>()?;
    results.sort_by_key(|result| result.run);
    Ok(results)
}

// --- Statistics Helper Functions ---
fn calculate_mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

fn calculate_median(data: &mut [f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = data.len() / 2;
    if data.len() % 2 == 0 {
        Some((data[mid - 1] + data[mid]) / 2.0)
    } else {
        Some(data[mid])
    }
}
// --- End Statistics Helper Functions ---

/// Summarizes a batch. Step and path means cover solved runs only.
pub fn summarize(results: &[BenchmarkResult]) -> BenchmarkSummary {
    let solved: Vec<&BenchmarkResult> = results.iter().filter(|r| r.bfs_reached_exit).collect();
    let collect = |f: fn(&BenchmarkResult) -> f64| solved.iter().map(|r| f(r)).collect::<Vec<_>>();

    let mut carve_times: Vec<f64> = results.iter().map(|r| r.carve_time_ms).collect();
    let mut solve_times: Vec<f64> = results.iter().map(|r| r.solve_time_ms).collect();

    BenchmarkSummary {
        runs: results.len(),
        solved_runs: solved.len(),
        mean_bfs_steps: calculate_mean(&collect(|r| r.bfs_steps as f64)),
        mean_dfs_steps: calculate_mean(&collect(|r| r.dfs_steps as f64)),
        mean_path_length: calculate_mean(&collect(|r| r.path_length as f64)),
        median_carve_time_ms: calculate_median(&mut carve_times),
        median_solve_time_ms: calculate_median(&mut solve_times),
    }
}

/// Logs a human readable summary.
pub fn report_summary(summary: &BenchmarkSummary) {
    let fmt = |value: Option<f64>| value.map_or_else(|| "N/A".to_string(), |v| format!("{:.2}", v));
    log::info!("--- Benchmark Summary ---");
    log::info!("Runs: {} ({} solved)", summary.runs, summary.solved_runs);
    log::info!("Mean BFS moves: {}", fmt(summary.mean_bfs_steps));
    log::info!("Mean DFS moves: {}", fmt(summary.mean_dfs_steps));
    log::info!("Mean path length: {}", fmt(summary.mean_path_length));
    log::info!("Median carve time (ms): {}", fmt(summary.median_carve_time_ms));
    log::info!("Median solve time (ms): {}", fmt(summary.median_solve_time_ms));
}

/// Writes one CSV row per run.
pub fn write_results_to_csv(results: &[BenchmarkResult], path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);
    for result in results {
        wtr.serialize(result)?;
    }
    wtr.flush()?;
    Ok(())
}

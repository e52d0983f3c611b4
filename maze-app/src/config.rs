use crate::error::AppError;
use clap::{Parser, ValueEnum};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use maze_core::Strategy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix for environment variables read into [`FileSettings`].
pub const ENV_PREFIX: &str = "MAZE_FORGE_";

/// Which solvers to run after carving.
#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SolveMode {
    /// Depth-first, then breadth-first.
    #[default]
    Both,
    /// Breadth-first only.
    Bfs,
    /// Depth-first only.
    Dfs,
}

impl SolveMode {
    /// Strategies to run, in reporting order.
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            Self::Both => vec![Strategy::Dfs, Strategy::Bfs],
            Self::Bfs => vec![Strategy::Bfs],
            Self::Dfs => vec![Strategy::Dfs],
        }
    }
}

/// How walls are knocked down.
#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// Randomized depth-first carving. Always a perfect maze.
    #[default]
    Backtracker,
    /// Each wall opened with probability 1/2. May have cycles or no solution.
    Random,
}

/// Log level applied to every module unless `RUST_LOG` says otherwise.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlobalLogLevel {
    /// Every carving step and backtrack.
    Trace,
    /// Per-run detail such as path lengths and allocation sizes.
    Debug,
    /// Run progress and results.
    #[default]
    Info,
    /// Only recoverable problems.
    Warn,
    /// Only failures.
    Error,
}

/// Command line of the maze-forge binary.
#[derive(Parser, Debug)]
#[command(author, version, about = "Carve a perfect maze and solve it", long_about = None)]
pub struct AppConfig {
    /// Side length of the square maze (1-100). Prompted on stdin when absent.
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Seed for the random number generator. Drawn at random when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which solver(s) to run.
    #[arg(long, value_enum)]
    pub strategy: Option<SolveMode>,

    /// Wall generation algorithm.
    #[arg(long, value_enum)]
    pub generator: Option<GeneratorKind>,

    /// Wall off the exit before solving.
    #[arg(long, default_value_t = false)]
    pub unsolvable: bool,

    /// Disable colored path markers.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Skip printing the empty grid before carving.
    #[arg(long, default_value_t = false)]
    pub hide_plain: bool,

    /// Use the default size instead of prompting when no size is configured.
    #[arg(long, default_value_t = false)]
    pub no_prompt: bool,

    /// Optional TOML settings file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Global log level.
    #[arg(long, value_enum, env = "MAZE_FORGE_LOG_LEVEL", default_value_t = GlobalLogLevel::Info)]
    pub log_level: GlobalLogLevel,

    /// Generate and solve this many mazes in parallel and report statistics.
    #[arg(long, value_name = "RUNS")]
    pub benchmark_runs: Option<usize>,

    /// Optional: Path to save per-run benchmark results as a CSV file.
    /// Only used if benchmark_runs is also set.
    #[arg(long, value_name = "CSV_FILE")]
    pub benchmark_csv_output: Option<PathBuf>,
}

/// Values read from the settings file and `MAZE_FORGE_*` environment variables.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct FileSettings {
    /// Side length of the maze.
    pub size: Option<usize>,
    /// Generator seed.
    pub seed: Option<u64>,
    /// Which solver(s) to run.
    pub strategy: Option<SolveMode>,
    /// Wall generation algorithm.
    pub generator: Option<GeneratorKind>,
    /// Wall off the exit before solving.
    pub unsolvable: Option<bool>,
    /// Color the path markers.
    pub color: Option<bool>,
    /// Print the empty grid before carving.
    pub show_plain: Option<bool>,
    /// Number of benchmark runs.
    pub benchmark_runs: Option<usize>,
}

/// Loads [`FileSettings`], layering environment variables over the TOML file.
pub fn load_file_settings(path: Option<&Path>) -> Result<FileSettings, AppError> {
    let mut figment = Figment::new();
    if let Some(path) = path {
        if !path.is_file() {
            return Err(AppError::Config(format!(
                "Settings file {:?} does not exist",
                path
            )));
        }
        log::debug!("Reading settings from {:?}", path);
        figment = figment.merge(Toml::file(path));
    }
    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Effective run settings. Command line flags win over file/env values,
/// which win over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Configured side length. `None` means prompt or use the default.
    pub size: Option<usize>,
    /// Configured seed. `None` means draw one at random.
    pub seed: Option<u64>,
    /// Which solver(s) to run.
    pub solve_mode: SolveMode,
    /// Wall generation algorithm.
    pub generator: GeneratorKind,
    /// Wall off the exit before solving.
    pub unsolvable: bool,
    /// Color the path markers.
    pub color: bool,
    /// Print the empty grid before carving.
    pub show_plain: bool,
    /// Switches to benchmark mode when set.
    pub benchmark_runs: Option<usize>,
    /// Where to write per-run benchmark rows, if anywhere.
    pub benchmark_csv_output: Option<PathBuf>,
}

impl Settings {
    /// Merges command line flags over file and environment values.
    pub fn resolve(cli: &AppConfig, file: FileSettings) -> Self {
        Self {
            size: cli.size.or(file.size),
            seed: cli.seed.or(file.seed),
            solve_mode: cli.strategy.or(file.strategy).unwrap_or_default(),
            generator: cli.generator.or(file.generator).unwrap_or_default(),
            unsolvable: cli.unsolvable || file.unsolvable.unwrap_or(false),
            color: !cli.no_color && file.color.unwrap_or(true),
            show_plain: !cli.hide_plain && file.show_plain.unwrap_or(true),
            benchmark_runs: cli.benchmark_runs.or(file.benchmark_runs),
            benchmark_csv_output: cli.benchmark_csv_output.clone(),
        }
    }
}

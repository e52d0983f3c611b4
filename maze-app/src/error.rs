use maze_core::MazeError;
use thiserror::Error;

/// Errors surfaced by the maze-forge application.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid maze size: {0}")]
    InvalidSize(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Maze Core Error: {0}")]
    MazeCore(#[from] MazeError),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

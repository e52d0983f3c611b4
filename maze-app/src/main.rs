//! # Maze Forge (Binary)
//!
//! Main executable entry point.

fn main() -> anyhow::Result<()> {
    maze_app::main()
}

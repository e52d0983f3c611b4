// Main entry point that forwards to the maze-forge binary
fn main() {
    // Exit with the same code as the app
    std::process::exit(match maze_app::main() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    });
}

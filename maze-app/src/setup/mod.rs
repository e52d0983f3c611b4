//! Setup module for the Maze Forge application.
//!
//! Runs the standard and benchmark execution modes.

pub mod execution;

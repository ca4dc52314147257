//! Command-line input: positional argument parsing and the headless command.

pub mod args;
pub mod commands;
pub mod startup;

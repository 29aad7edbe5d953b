//! Command-line interface
//!
//! Argument definitions and output formatting.

pub mod args;
pub mod output;

pub use args::{Cli, Commands, OutputFormat};

//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod print;

pub use print::{render, run_print};

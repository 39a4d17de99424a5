//! printtool - join command-line arguments into one printed line
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and output
//! - [`commands`]: Command handlers
//! - [`config`]: Output defaults
//! - [`domain`]: Domain types
//! - [`error`]: Error types
//! - [`services`]: Formatting logic

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use error::{AppError, Result};

//! Business logic services

pub mod formatter;

pub use formatter::Formatter;

//! Domain models for printtool

pub mod arguments;

pub use arguments::ArgumentList;

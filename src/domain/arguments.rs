//! Argument list domain type
//!
//! The ordered, immutable sequence of strings handed to the program at startup.

use std::fmt;

/// Ordered sequence of opaque input strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList(Vec<String>);

impl ArgumentList {
    /// Create a new argument list
    pub fn new(args: Vec<String>) -> Self {
        Self(args)
    }

    /// Number of arguments
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no arguments were supplied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arguments in their original order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for ArgumentList {
    fn from(args: Vec<String>) -> Self {
        Self::new(args)
    }
}

impl<S: Into<String>> FromIterator<S> for ArgumentList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} argument(s)", self.len())
    }
}

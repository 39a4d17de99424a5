//! Output formatting utilities
//!
//! Renders the labelled print line and writes it to standard output.

use std::fmt;
use std::io::{self, Write};

use crate::config::OutputConfig;

/// A single labelled output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintLine {
    pub label: String,
    pub body: String,
}

impl PrintLine {
    /// Create a print line labelled per output configuration
    pub fn with_config(body: impl Into<String>, config: &OutputConfig) -> Self {
        Self {
            label: config.label.clone(),
            body: body.into(),
        }
    }
}

impl fmt::Display for PrintLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.body)
    }
}

/// Write a line followed by a newline, then flush
pub fn write_line<W: Write>(writer: &mut W, line: &PrintLine) -> io::Result<()> {
    writeln!(writer, "{}", line)?;
    writer.flush()
}

/// Write a line to standard output
pub fn print_output(line: &PrintLine) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_line(&mut handle, line)
}

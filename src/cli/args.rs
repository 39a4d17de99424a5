//! CLI argument definitions using clap derive
//!
//! Every command-line argument is collected as a positional string.

use std::ffi::OsString;

use clap::Parser;

use crate::domain::ArgumentList;

/// End-of-options marker placed ahead of the user's arguments
const ESCAPE: &str = "--";

/// Join arguments into a comma-separated line and print it
#[derive(Parser, Debug)]
#[command(name = "printtool")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(allow_hyphen_values = true)]
pub struct Cli {
    /// Values to print, in order
    #[arg(
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse a full argv, keeping every argument after the program name as data
    ///
    /// A marker is inserted after the program name so clap never consumes a
    /// user-supplied `--`.
    pub fn try_parse_positionals<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(escape_argv(argv))
    }

    /// Take the collected positional values as an argument list
    ///
    /// Values that are not valid UTF-8 are decoded lossily.
    pub fn argument_list(&self) -> ArgumentList {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

fn escape_argv<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv = argv.into_iter().map(Into::into);
    let mut escaped = Vec::new();
    escaped.extend(argv.next());
    escaped.push(OsString::from(ESCAPE));
    escaped.extend(argv);
    escaped
}

//! Print command implementation
//!
//! Formats the collected arguments and prints the labelled line.

use crate::cli::output::{print_output, PrintLine};
use crate::cli::Cli;
use crate::config::Config;
use crate::domain::ArgumentList;
use crate::error::Result;
use crate::services::Formatter;

/// Build the output line for an argument list
pub fn render(args: &ArgumentList, config: &Config) -> PrintLine {
    let formatter = Formatter::from_config(&config.output);
    PrintLine::with_config(formatter.format(args), &config.output)
}

/// Execute the print command
pub fn run_print(cli: &Cli, config: &Config) -> Result<()> {
    let args = cli.argument_list();
    log::debug!("Printing {}", args);

    let line = render(&args, config);
    print_output(&line)?;

    Ok(())
}

//! printtool - prints its arguments as a comma-separated line

use printtool::cli::Cli;
use printtool::commands::run_print;
use printtool::config::Config;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::try_parse_positionals(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let config = Config::default();

    if let Err(e) = run_print(&cli, &config) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

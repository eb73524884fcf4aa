//! file-tool - Entry Point

use std::process;

use clap::Parser;
use log::{LevelFilter, debug};

use file_tool::cli::Cli;
use file_tool::config::ToolConfig;
use file_tool::error::handlers::handle_error;
use file_tool::utils::logging::setup_logging;

const ABORT_EXIT_CODE: i32 = 1;
const CONFIG_EXIT_CODE: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let config = match ToolConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: invalid configuration: {e}");
            process::exit(CONFIG_EXIT_CODE);
        }
    };

    // Already checked by ToolConfig::load
    setup_logging(config.level_filter().unwrap_or(LevelFilter::Warn));
    debug!("Running {:?} with {:?}", cli.cmd, config);

    match cli.cmd.execute() {
        Ok(message) => {
            if !(cli.quiet || config.quiet) {
                println!("{message}");
            }
        }
        Err(e) => {
            eprintln!("{}", handle_error(&e));
            process::exit(ABORT_EXIT_CODE);
        }
    }
}

//! prompt-kit - prompt library tooling
//!
//! Command line entry point: validates the prompt tree by default, and can show a
//! single prompt or turn a notification hook payload into its message.

use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, ValidateArgs};

/// Log to stderr; `RUST_LOG` takes precedence over the `--verbose` level
fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        None => commands::validate::run(cli.root, ValidateArgs::default()),
        Some(Commands::Validate(args)) => commands::validate::run(cli.root, args),
        Some(Commands::Show(args)) => commands::show::run(cli.root, args),
        Some(Commands::HookMessage) => commands::hook_message::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

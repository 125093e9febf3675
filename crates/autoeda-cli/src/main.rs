//! AutoEDA CLI - exploratory data analysis from the command line.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            format,
            config,
            raw,
        } => commands::analyze::run(file, output, format, config, raw, cli.verbose),

        Commands::Types { file } => commands::types::run(file, cli.verbose),

        Commands::Missing { file, threshold } => {
            commands::missing::run(file, threshold, cli.verbose)
        }

        Commands::Summary { file, csv } => commands::summary::run(file, csv, cli.verbose),

        Commands::Insights { file, config, json } => {
            commands::insights::run(file, config, json, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "autoeda=debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{features, init_config, score};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Score(args) => score::run(&cli, args),
        Commands::Features(args) => features::run(&cli, args),
        Commands::InitConfig(args) => init_config::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }

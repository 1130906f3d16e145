#![warn(clippy::all)]

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use gameoflife::simulation::{self, Summary};
use gameoflife::{Cli, Params};

fn run(cli: &Cli) -> Result<Summary, Box<dyn std::error::Error>> {
    // the binary has no embedding program, so `custom` streams are never available
    let mut params = Params::from_cli(cli, None, None)?;
    let summary = simulation::run(&mut params, &mut std::io::stdout().lock())?;
    Ok(summary)
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(Summary {
            extinct_at: Some(i),
            ..
        }) => println!("\nall cells died at generation {}", i),
        Ok(_) => {}
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

//! Command-line front end: print JSON values by size, index, or property.

#![expect(clippy::print_stdout, reason = "command-line output")]

use {
    anyhow::Result,
    clap::Parser as _,
    feat::{count::Count as _, enumerate, enumerate::Enumerate as _, flat},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, prelude::*},
};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Logs go to stderr so that stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let json = feat_json::json();

    match cli.command {
        Commands::All { size } => {
            let mut count = 0_usize;
            for value in enumerate::all(&*json, size) {
                println!("{}", serde_json::to_string(&value?)?);
                count += 1;
            }
            info!(size, count, "enumerated every value");
        }
        Commands::Card { size } => {
            println!("{}", json.card(size));
        }
        Commands::Index { size, index } => {
            let value = json.index(size, index)?;
            println!("{}", serde_json::to_string(&value)?);
        }
        Commands::Ix { index } => {
            let value = flat::ix_within(&*json, index, cli.max_size)?;
            println!("{}", serde_json::to_string(&value)?);
        }
        Commands::Witness { depth } => {
            let value = feat::witness(&*json, cli.max_size, |value| {
                feat_json::depth(value) >= depth
            })?;
            info!(depth, "found a witness");
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}
